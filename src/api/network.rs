//! Network equipment type and equipment endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::network::{
        CreateNetworkEquipment, CreateNetworkEquipmentType, NetworkEquipment,
        NetworkEquipmentQuery, NetworkEquipmentType, NetworkEquipmentWithType,
        UpdateNetworkEquipment, UpdateNetworkEquipmentType,
    },
};

use super::{AuthenticatedUser, Json};

// --- Types ---

/// List all network equipment types
#[utoipa::path(
    get,
    path = "/network-equipment-types",
    tag = "network",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Network equipment type list", body = Vec<NetworkEquipmentType>)
    )
)]
pub async fn list_network_equipment_types(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<NetworkEquipmentType>>> {
    let types = state.services.network.types_list().await?;
    Ok(Json(types))
}

/// Get network equipment type by ID
#[utoipa::path(
    get,
    path = "/network-equipment-types/{id}",
    tag = "network",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Network equipment type ID")),
    responses(
        (status = 200, description = "Network equipment type details", body = NetworkEquipmentType),
        (status = 404, description = "Network equipment type not found")
    )
)]
pub async fn get_network_equipment_type(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<NetworkEquipmentType>> {
    let equipment_type = state.services.network.types_get(id).await?;
    Ok(Json(equipment_type))
}

/// Create a network equipment type
#[utoipa::path(
    post,
    path = "/network-equipment-types",
    tag = "network",
    security(("bearer_auth" = [])),
    request_body = CreateNetworkEquipmentType,
    responses(
        (status = 201, description = "Network equipment type created", body = NetworkEquipmentType),
        (status = 400, description = "Invalid name or field definitions")
    )
)]
pub async fn create_network_equipment_type(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(data): Json<CreateNetworkEquipmentType>,
) -> AppResult<(StatusCode, Json<NetworkEquipmentType>)> {
    let equipment_type = state.services.network.types_create(data).await?;
    Ok((StatusCode::CREATED, Json(equipment_type)))
}

/// Update a network equipment type
#[utoipa::path(
    put,
    path = "/network-equipment-types/{id}",
    tag = "network",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Network equipment type ID")),
    request_body = UpdateNetworkEquipmentType,
    responses(
        (status = 200, description = "Network equipment type updated", body = NetworkEquipmentType),
        (status = 404, description = "Network equipment type not found")
    )
)]
pub async fn update_network_equipment_type(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateNetworkEquipmentType>,
) -> AppResult<Json<NetworkEquipmentType>> {
    let equipment_type = state.services.network.types_update(id, data).await?;
    Ok(Json(equipment_type))
}

/// Delete a network equipment type
#[utoipa::path(
    delete,
    path = "/network-equipment-types/{id}",
    tag = "network",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Network equipment type ID")),
    responses(
        (status = 204, description = "Network equipment type deleted"),
        (status = 404, description = "Network equipment type not found"),
        (status = 409, description = "Type still referenced by equipment")
    )
)]
pub async fn delete_network_equipment_type(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.network.types_delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Equipment ---

/// List network equipment, optionally filtered by type
#[utoipa::path(
    get,
    path = "/network-equipments",
    tag = "network",
    security(("bearer_auth" = [])),
    params(NetworkEquipmentQuery),
    responses(
        (status = 200, description = "Network equipment list", body = Vec<NetworkEquipmentWithType>)
    )
)]
pub async fn list_network_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<NetworkEquipmentQuery>,
) -> AppResult<Json<Vec<NetworkEquipmentWithType>>> {
    let equipment = state.services.network.equipment_list(query.type_id).await?;
    Ok(Json(equipment))
}

/// List network equipment of a type
#[utoipa::path(
    get,
    path = "/network-equipments/type/{type_id}",
    tag = "network",
    security(("bearer_auth" = [])),
    params(("type_id" = Uuid, Path, description = "Network equipment type ID")),
    responses(
        (status = 200, description = "Network equipment list", body = Vec<NetworkEquipmentWithType>)
    )
)]
pub async fn list_network_equipment_by_type(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(type_id): Path<Uuid>,
) -> AppResult<Json<Vec<NetworkEquipmentWithType>>> {
    let equipment = state.services.network.equipment_list(Some(type_id)).await?;
    Ok(Json(equipment))
}

/// Get network equipment by ID, type expanded
#[utoipa::path(
    get,
    path = "/network-equipments/{id}",
    tag = "network",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Network equipment ID")),
    responses(
        (status = 200, description = "Network equipment details", body = NetworkEquipmentWithType),
        (status = 404, description = "Network equipment not found")
    )
)]
pub async fn get_network_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<NetworkEquipmentWithType>> {
    let equipment = state.services.network.equipment_get(id).await?;
    Ok(Json(equipment))
}

/// Create a network equipment instance
#[utoipa::path(
    post,
    path = "/network-equipments",
    tag = "network",
    security(("bearer_auth" = [])),
    request_body = CreateNetworkEquipment,
    responses(
        (status = 201, description = "Network equipment created", body = NetworkEquipment),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_network_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(data): Json<CreateNetworkEquipment>,
) -> AppResult<(StatusCode, Json<NetworkEquipment>)> {
    let equipment = state.services.network.equipment_create(data).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Update a network equipment instance. Provided custom fields replace
/// the stored map wholesale.
#[utoipa::path(
    put,
    path = "/network-equipments/{id}",
    tag = "network",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Network equipment ID")),
    request_body = UpdateNetworkEquipment,
    responses(
        (status = 200, description = "Network equipment updated", body = NetworkEquipmentWithType),
        (status = 404, description = "Network equipment not found")
    )
)]
pub async fn update_network_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateNetworkEquipment>,
) -> AppResult<Json<NetworkEquipmentWithType>> {
    let equipment = state.services.network.equipment_update(id, data).await?;
    Ok(Json(equipment))
}

/// Delete a network equipment instance
#[utoipa::path(
    delete,
    path = "/network-equipments/{id}",
    tag = "network",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Network equipment ID")),
    responses(
        (status = 204, description = "Network equipment deleted"),
        (status = 404, description = "Network equipment not found")
    )
)]
pub async fn delete_network_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.network.equipment_delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
