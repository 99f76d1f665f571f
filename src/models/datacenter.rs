//! Datacenter model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Datacenter record, root of the inventory hierarchy
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Datacenter {
    pub id: Uuid,
    pub name: String,
    pub location: String,
}

/// Create datacenter request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateDatacenter {
    pub name: String,
    pub location: String,
}

/// Update datacenter request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateDatacenter {
    pub name: Option<String>,
    pub location: Option<String>,
}
