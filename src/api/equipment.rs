//! Equipment endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::equipment::{CreateEquipment, Equipment, EquipmentWithType, UpdateEquipment},
};

use super::{AuthenticatedUser, Json};

/// List equipment in a datacenter, types expanded
#[utoipa::path(
    get,
    path = "/equipments/datacenter/{datacenter_id}",
    tag = "equipments",
    security(("bearer_auth" = [])),
    params(("datacenter_id" = Uuid, Path, description = "Datacenter ID")),
    responses(
        (status = 200, description = "Equipment list", body = Vec<EquipmentWithType>)
    )
)]
pub async fn list_equipment_by_datacenter(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(datacenter_id): Path<Uuid>,
) -> AppResult<Json<Vec<EquipmentWithType>>> {
    let equipment = state
        .services
        .inventory
        .equipment_list_by_datacenter(datacenter_id)
        .await?;
    Ok(Json(equipment))
}

/// List equipment of a type, types expanded
#[utoipa::path(
    get,
    path = "/equipments/type/{type_id}",
    tag = "equipments",
    security(("bearer_auth" = [])),
    params(("type_id" = Uuid, Path, description = "Equipment type ID")),
    responses(
        (status = 200, description = "Equipment list", body = Vec<EquipmentWithType>)
    )
)]
pub async fn list_equipment_by_type(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(type_id): Path<Uuid>,
) -> AppResult<Json<Vec<EquipmentWithType>>> {
    let equipment = state.services.inventory.equipment_list_by_type(type_id).await?;
    Ok(Json(equipment))
}

/// List equipment of a type within a datacenter
#[utoipa::path(
    get,
    path = "/equipments/datacenter/{datacenter_id}/type/{type_id}",
    tag = "equipments",
    security(("bearer_auth" = [])),
    params(
        ("datacenter_id" = Uuid, Path, description = "Datacenter ID"),
        ("type_id" = Uuid, Path, description = "Equipment type ID")
    ),
    responses(
        (status = 200, description = "Equipment list", body = Vec<EquipmentWithType>)
    )
)]
pub async fn list_equipment_by_datacenter_and_type(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path((datacenter_id, type_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<Vec<EquipmentWithType>>> {
    let equipment = state
        .services
        .inventory
        .equipment_list_by_datacenter_and_type(datacenter_id, type_id)
        .await?;
    Ok(Json(equipment))
}

/// Get equipment by ID, type expanded
#[utoipa::path(
    get,
    path = "/equipments/{id}",
    tag = "equipments",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment details", body = EquipmentWithType),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<EquipmentWithType>> {
    let equipment = state.services.inventory.equipment_get(id).await?;
    Ok(Json(equipment))
}

/// Create an equipment instance. The data map is accepted as-is.
#[utoipa::path(
    post,
    path = "/equipments",
    tag = "equipments",
    security(("bearer_auth" = [])),
    request_body = CreateEquipment,
    responses(
        (status = 201, description = "Equipment created", body = Equipment),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(data): Json<CreateEquipment>,
) -> AppResult<(StatusCode, Json<Equipment>)> {
    let equipment = state.services.inventory.equipment_create(data).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Update an equipment instance. A provided data map replaces the stored
/// one wholesale.
#[utoipa::path(
    put,
    path = "/equipments/{id}",
    tag = "equipments",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Equipment ID")),
    request_body = UpdateEquipment,
    responses(
        (status = 200, description = "Equipment updated", body = EquipmentWithType),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn update_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateEquipment>,
) -> AppResult<Json<EquipmentWithType>> {
    let equipment = state.services.inventory.equipment_update(id, data).await?;
    Ok(Json(equipment))
}

/// Delete an equipment instance
#[utoipa::path(
    delete,
    path = "/equipments/{id}",
    tag = "equipments",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Equipment ID")),
    responses(
        (status = 204, description = "Equipment deleted"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn delete_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.inventory.equipment_delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
