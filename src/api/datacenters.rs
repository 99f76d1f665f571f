//! Datacenter endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::datacenter::{CreateDatacenter, Datacenter, UpdateDatacenter},
};

use super::{AuthenticatedUser, Json};

/// Response for a datacenter delete, echoing the removed record
#[derive(Serialize, ToSchema)]
pub struct DeletedDatacenter {
    pub message: String,
    pub datacenter: Datacenter,
}

/// List all datacenters
#[utoipa::path(
    get,
    path = "/datacenters",
    tag = "datacenters",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Datacenter list", body = Vec<Datacenter>)
    )
)]
pub async fn list_datacenters(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Datacenter>>> {
    let datacenters = state.services.inventory.datacenters_list().await?;
    Ok(Json(datacenters))
}

/// Get datacenter by ID
#[utoipa::path(
    get,
    path = "/datacenters/{id}",
    tag = "datacenters",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Datacenter ID")),
    responses(
        (status = 200, description = "Datacenter details", body = Datacenter),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "Datacenter not found")
    )
)]
pub async fn get_datacenter(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Datacenter>> {
    let datacenter = state.services.inventory.datacenters_get(id).await?;
    Ok(Json(datacenter))
}

/// Create a datacenter
#[utoipa::path(
    post,
    path = "/datacenters",
    tag = "datacenters",
    security(("bearer_auth" = [])),
    request_body = CreateDatacenter,
    responses(
        (status = 201, description = "Datacenter created", body = Datacenter),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_datacenter(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(data): Json<CreateDatacenter>,
) -> AppResult<(StatusCode, Json<Datacenter>)> {
    let datacenter = state.services.inventory.datacenters_create(data).await?;
    Ok((StatusCode::CREATED, Json(datacenter)))
}

/// Update a datacenter
#[utoipa::path(
    put,
    path = "/datacenters/{id}",
    tag = "datacenters",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Datacenter ID")),
    request_body = UpdateDatacenter,
    responses(
        (status = 200, description = "Datacenter updated", body = Datacenter),
        (status = 404, description = "Datacenter not found")
    )
)]
pub async fn update_datacenter(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateDatacenter>,
) -> AppResult<Json<Datacenter>> {
    let datacenter = state.services.inventory.datacenters_update(id, data).await?;
    Ok(Json(datacenter))
}

/// Delete a datacenter
#[utoipa::path(
    delete,
    path = "/datacenters/{id}",
    tag = "datacenters",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Datacenter ID")),
    responses(
        (status = 200, description = "Datacenter deleted", body = DeletedDatacenter),
        (status = 404, description = "Datacenter not found"),
        (status = 409, description = "Datacenter is not empty")
    )
)]
pub async fn delete_datacenter(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DeletedDatacenter>> {
    let datacenter = state.services.inventory.datacenters_delete(id).await?;
    Ok(Json(DeletedDatacenter {
        message: "Datacenter deleted".to_string(),
        datacenter,
    }))
}
