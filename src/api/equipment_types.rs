//! Equipment type endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::equipment_type::{CreateEquipmentType, EquipmentType, UpdateEquipmentType},
};

use super::{AuthenticatedUser, Json};

/// List equipment types of a category
#[utoipa::path(
    get,
    path = "/equipment-types/category/{category_id}",
    tag = "equipment-types",
    security(("bearer_auth" = [])),
    params(("category_id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Equipment type list", body = Vec<EquipmentType>)
    )
)]
pub async fn list_equipment_types_by_category(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(category_id): Path<Uuid>,
) -> AppResult<Json<Vec<EquipmentType>>> {
    let types = state
        .services
        .inventory
        .equipment_types_list_by_category(category_id)
        .await?;
    Ok(Json(types))
}

/// Get equipment type by ID
#[utoipa::path(
    get,
    path = "/equipment-types/{id}",
    tag = "equipment-types",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Equipment type ID")),
    responses(
        (status = 200, description = "Equipment type details", body = EquipmentType),
        (status = 404, description = "Equipment type not found")
    )
)]
pub async fn get_equipment_type(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<EquipmentType>> {
    let equipment_type = state.services.inventory.equipment_types_get(id).await?;
    Ok(Json(equipment_type))
}

/// Create an equipment type with its field definitions
#[utoipa::path(
    post,
    path = "/equipment-types",
    tag = "equipment-types",
    security(("bearer_auth" = [])),
    request_body = CreateEquipmentType,
    responses(
        (status = 201, description = "Equipment type created", body = EquipmentType),
        (status = 400, description = "Invalid name or field definitions")
    )
)]
pub async fn create_equipment_type(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(data): Json<CreateEquipmentType>,
) -> AppResult<(StatusCode, Json<EquipmentType>)> {
    let equipment_type = state.services.inventory.equipment_types_create(data).await?;
    Ok((StatusCode::CREATED, Json(equipment_type)))
}

/// Update an equipment type's name and/or field definitions
#[utoipa::path(
    put,
    path = "/equipment-types/{id}",
    tag = "equipment-types",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Equipment type ID")),
    request_body = UpdateEquipmentType,
    responses(
        (status = 200, description = "Equipment type updated", body = EquipmentType),
        (status = 400, description = "Invalid field definitions"),
        (status = 404, description = "Equipment type not found")
    )
)]
pub async fn update_equipment_type(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateEquipmentType>,
) -> AppResult<Json<EquipmentType>> {
    let equipment_type = state
        .services
        .inventory
        .equipment_types_update(id, data)
        .await?;
    Ok(Json(equipment_type))
}

/// Delete an equipment type
#[utoipa::path(
    delete,
    path = "/equipment-types/{id}",
    tag = "equipment-types",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Equipment type ID")),
    responses(
        (status = 204, description = "Equipment type deleted"),
        (status = 404, description = "Equipment type not found"),
        (status = 409, description = "Equipment type still referenced by equipment")
    )
)]
pub async fn delete_equipment_type(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.inventory.equipment_types_delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
