//! API handlers for Rackline REST endpoints

pub mod auth;
pub mod categories;
pub mod datacenters;
pub mod equipment;
pub mod equipment_types;
pub mod health;
pub mod network;
pub mod openapi;
pub mod users;

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Request},
    http::{header::AUTHORIZATION, request::Parts},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{error::AppError, models::user::UserClaims, AppState};

/// JSON body extractor that reports deserialization failures through the
/// API error taxonomy.
///
/// axum's stock extractor rejects malformed bodies with 422 and its own
/// error shape; every handler uses this wrapper so a missing field or an
/// unknown field-type tag comes back as a 400 ValidationError instead.
pub struct Json<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Json<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        Ok(Json(value))
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Extractor for authenticated user from JWT token
pub struct AuthenticatedUser(pub UserClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // Get the Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))?;

        // Check for Bearer token
        if !auth_header.starts_with("Bearer ") {
            return Err(AppError::Authentication(
                "Invalid authorization header format".to_string(),
            ));
        }

        let token = &auth_header[7..];

        // Validate JWT token using the secret from configuration
        let claims = UserClaims::from_token(token, &state.config.auth.jwt_secret)
            .map_err(|_| AppError::Authentication("Invalid or expired token".to_string()))?;

        Ok(AuthenticatedUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, routing::post, Router};
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::models::equipment_type::CreateEquipmentType;

    async fn create_type(Json(_data): Json<CreateEquipmentType>) -> StatusCode {
        StatusCode::CREATED
    }

    fn app() -> Router {
        Router::new().route("/types", post(create_type))
    }

    fn json_request(body: String) -> axum::http::Request<Body> {
        axum::http::Request::builder()
            .method("POST")
            .uri("/types")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_unknown_field_type_tag_is_bad_request() {
        let body = format!(
            r#"{{"name":"Bad","datacenter_id":"{}","category_id":"{}",
                "fields":[{{"name":"flag","type":"boolean","label":"Flag"}}]}}"#,
            Uuid::new_v4(),
            Uuid::new_v4()
        );
        let response = app().oneshot(json_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_required_field_is_bad_request() {
        let response = app()
            .oneshot(json_request(r#"{"name":"No refs"}"#.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_well_formed_body_is_accepted() {
        let body = format!(
            r#"{{"name":"Server","datacenter_id":"{}","category_id":"{}","fields":[]}}"#,
            Uuid::new_v4(),
            Uuid::new_v4()
        );
        let response = app().oneshot(json_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
