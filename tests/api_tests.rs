//! API integration tests
//!
//! These run against a live server. Run with: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};
use std::time::{SystemTime, UNIX_EPOCH};

const BASE_URL: &str = "http://localhost:5000/api/v1";

/// Unique suffix so repeated runs do not collide on unique columns
fn unique_suffix() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos()
}

/// Register a fresh user and return (token, email, password)
async fn register_user(client: &Client, role: &str) -> (String, String, String) {
    let suffix = unique_suffix();
    let email = format!("user{}@example.com", suffix);
    let password = "s3cret-password".to_string();

    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({
            "firstname": "Test",
            "lastname": "User",
            "email": email,
            "phone": format!("+33{}", suffix % 1_000_000_000),
            "password": password,
            "role": role
        }))
        .send()
        .await
        .expect("Failed to send register request");

    assert_eq!(response.status(), 201, "registration should succeed");
    let body: Value = response.json().await.expect("Failed to parse response");
    let token = body["token"].as_str().expect("No token in response").to_string();
    (token, email, password)
}

/// Create a datacenter and return its id
async fn create_datacenter(client: &Client, token: &str) -> String {
    let response = client
        .post(format!("{}/datacenters", BASE_URL))
        .bearer_auth(token)
        .json(&json!({"name": "DC-Test", "location": "Lyon"}))
        .send()
        .await
        .expect("Failed to create datacenter");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.unwrap();
    body["id"].as_str().unwrap().to_string()
}

/// Create a category in a datacenter and return its id
async fn create_category(client: &Client, token: &str, datacenter_id: &str) -> String {
    let response = client
        .post(format!("{}/categories", BASE_URL))
        .bearer_auth(token)
        .json(&json!({"name": "Servers", "datacenter_id": datacenter_id}))
        .send()
        .await
        .expect("Failed to create category");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.unwrap();
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_register_duplicate_email_is_conflict() {
    let client = Client::new();
    let (_, email, _) = register_user(&client, "user").await;

    // Same email, different case, different phone
    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({
            "firstname": "Other",
            "lastname": "User",
            "email": email.to_uppercase(),
            "phone": format!("+49{}", unique_suffix() % 1_000_000_000),
            "password": "another-secret",
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Conflict");
    assert!(body["message"].as_str().unwrap().contains("Email"));
}

#[tokio::test]
#[ignore]
async fn test_login_errors_do_not_reveal_accounts() {
    let client = Client::new();
    let (_, email, _) = register_user(&client, "user").await;

    let wrong_password = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({"email": email, "password": "wrong-password"}))
        .send()
        .await
        .expect("Failed to send request");

    let unknown_email = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({"email": "nobody@example.com", "password": "whatever"}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(wrong_password.status(), 401);
    assert_eq!(unknown_email.status(), 401);

    let a: Value = wrong_password.json().await.unwrap();
    let b: Value = unknown_email.json().await.unwrap();
    assert_eq!(a["message"], b["message"]);
}

#[tokio::test]
#[ignore]
async fn test_admin_gate() {
    let client = Client::new();
    let (user_token, _, _) = register_user(&client, "user").await;
    let (admin_token, _, _) = register_user(&client, "admin").await;

    // No token at all
    let response = client
        .get(format!("{}/users", BASE_URL))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 401);

    // Authenticated non-admin
    let response = client
        .get(format!("{}/users", BASE_URL))
        .bearer_auth(&user_token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 403);

    // Admin
    let response = client
        .get(format!("{}/users", BASE_URL))
        .bearer_auth(&admin_token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
#[ignore]
async fn test_equipment_type_fields_roundtrip_and_normalization() {
    let client = Client::new();
    let (token, _, _) = register_user(&client, "admin").await;
    let datacenter_id = create_datacenter(&client, &token).await;
    let category_id = create_category(&client, &token, &datacenter_id).await;

    let response = client
        .post(format!("{}/equipment-types", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Rack Server",
            "datacenter_id": datacenter_id,
            "category_id": category_id,
            "fields": [
                {"name": "Serial Number", "type": "text", "label": "Serial number"},
                {"name": "u_height", "type": "number", "label": "Height (U)"},
                {"name": "Installed On", "type": "date", "label": "Installed on"},
                {"name": "contact", "type": "email", "label": "Support contact"}
            ]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let created: Value = response.json().await.unwrap();
    let id = created["id"].as_str().unwrap();

    // Read back: same order, normalized names
    let response = client
        .get(format!("{}/equipment-types/{}", BASE_URL, id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let fetched: Value = response.json().await.unwrap();
    let names: Vec<&str> = fetched["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["serial_number", "u_height", "installed_on", "contact"]);
    assert_eq!(fetched["fields"][0]["type"], "text");
    assert_eq!(fetched["fields"][1]["type"], "number");
}

#[tokio::test]
#[ignore]
async fn test_equipment_type_rejects_unknown_field_type() {
    let client = Client::new();
    let (token, _, _) = register_user(&client, "admin").await;
    let datacenter_id = create_datacenter(&client, &token).await;
    let category_id = create_category(&client, &token, &datacenter_id).await;

    let response = client
        .post(format!("{}/equipment-types", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Bad Type",
            "datacenter_id": datacenter_id,
            "category_id": category_id,
            "fields": [{"name": "flag", "type": "boolean", "label": "Flag"}]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_category_delete_cascades_to_equipment_types() {
    let client = Client::new();
    let (token, _, _) = register_user(&client, "admin").await;
    let datacenter_id = create_datacenter(&client, &token).await;
    let category_id = create_category(&client, &token, &datacenter_id).await;

    for name in ["Switch", "Router"] {
        let response = client
            .post(format!("{}/equipment-types", BASE_URL))
            .bearer_auth(&token)
            .json(&json!({
                "name": name,
                "datacenter_id": datacenter_id,
                "category_id": category_id,
                "fields": []
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 201);
    }

    let response = client
        .delete(format!("{}/categories/{}", BASE_URL, category_id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    // No types left for the category
    let response = client
        .get(format!("{}/equipment-types/category/{}", BASE_URL, category_id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let types: Value = response.json().await.unwrap();
    assert_eq!(types.as_array().unwrap().len(), 0);

    // Category itself gone
    let response = client
        .get(format!("{}/categories/{}", BASE_URL, category_id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_equipment_data_update_is_full_replace() {
    let client = Client::new();
    let (token, _, _) = register_user(&client, "admin").await;
    let datacenter_id = create_datacenter(&client, &token).await;
    let category_id = create_category(&client, &token, &datacenter_id).await;

    let response = client
        .post(format!("{}/equipment-types", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Storage Array",
            "datacenter_id": datacenter_id,
            "category_id": category_id,
            "fields": [{"name": "foo", "type": "text", "label": "Foo"}]
        }))
        .send()
        .await
        .unwrap();
    let type_id = response.json::<Value>().await.unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = client
        .post(format!("{}/equipments", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "datacenter_id": datacenter_id,
            "type_id": type_id,
            "data": {"foo": "old", "baz": "qux"}
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let equipment_id = response.json::<Value>().await.unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = client
        .put(format!("{}/equipments/{}", BASE_URL, equipment_id))
        .bearer_auth(&token)
        .json(&json!({"data": {"foo": "bar"}}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["data"], json!({"foo": "bar"}));

    // The expanded type is returned alongside the data
    assert_eq!(updated["type"]["name"], "Storage Array");
}

#[tokio::test]
#[ignore]
async fn test_malformed_id_is_bad_request() {
    let client = Client::new();
    let (token, _, _) = register_user(&client, "user").await;

    for path in ["datacenters/abc", "equipments/abc", "categories/abc", "users/abc"] {
        let response = client
            .get(format!("{}/{}", BASE_URL, path))
            .bearer_auth(&token)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400, "expected 400 for {}", path);
    }
}

#[tokio::test]
#[ignore]
async fn test_profile_password_change_requires_current_password() {
    let client = Client::new();
    let (token, email, password) = register_user(&client, "user").await;

    // Missing current password
    let response = client
        .put(format!("{}/auth/profile", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({"new_password": "brand-new-secret"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    // With current password
    let response = client
        .put(format!("{}/auth/profile", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "current_password": password,
            "new_password": "brand-new-secret"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    // Old password no longer works, new one does
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({"email": email, "password": password}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 401);

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({"email": email, "password": "brand-new-secret"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
#[ignore]
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_network_equipment_lifecycle() {
    let client = Client::new();
    let (token, _, _) = register_user(&client, "admin").await;

    let response = client
        .post(format!("{}/network-equipment-types", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "name": format!("Core Switch {}", unique_suffix()),
            "fields": [
                {"name": "Port Count", "type": "number", "label": "Ports"},
                {"name": "firmware", "type": "text", "label": "Firmware"}
            ]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let created_type: Value = response.json().await.unwrap();
    let type_id = created_type["id"].as_str().unwrap().to_string();
    assert_eq!(created_type["fields"][0]["name"], "port_count");

    let response = client
        .post(format!("{}/network-equipments", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "type_id": type_id,
            "custom_fields": {"foo": "old", "baz": "qux"}
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let equipment_id = response.json::<Value>().await.unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    // Full replace, not merge
    let response = client
        .put(format!("{}/network-equipments/{}", BASE_URL, equipment_id))
        .bearer_auth(&token)
        .json(&json!({"custom_fields": {"foo": "bar"}}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["custom_fields"], json!({"foo": "bar"}));
    assert_eq!(updated["type"]["id"].as_str().unwrap(), type_id);

    // The query filter only returns instances of this type
    let response = client
        .get(format!("{}/network-equipments?type_id={}", BASE_URL, type_id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let listed: Value = response.json().await.unwrap();
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"].as_str().unwrap(), equipment_id);

    // A referenced type cannot be deleted
    let response = client
        .delete(format!("{}/network-equipment-types/{}", BASE_URL, type_id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 409);

    // Remove the instance, then the type goes away
    let response = client
        .delete(format!("{}/network-equipments/{}", BASE_URL, equipment_id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);

    let response = client
        .delete(format!("{}/network-equipment-types/{}", BASE_URL, type_id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/network-equipment-types/{}", BASE_URL, type_id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}
