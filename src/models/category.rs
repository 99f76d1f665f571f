//! Category model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Category record, belongs to exactly one datacenter
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub datacenter_id: Uuid,
}

/// Create category request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategory {
    pub name: String,
    pub datacenter_id: Uuid,
}

/// Update category request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCategory {
    pub name: String,
}

/// Response for a category delete, echoing the removed record
#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedCategory {
    pub message: String,
    pub deleted_category: Category,
}
