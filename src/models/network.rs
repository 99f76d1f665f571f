//! Network equipment models
//!
//! The network domain reuses the field-definition shape of the datacenter
//! domain but is flat: no datacenter or category scoping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::equipment::DataMap;
use super::equipment_type::FieldDef;

/// Network equipment type record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct NetworkEquipmentType {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    #[sqlx(json)]
    pub fields: Vec<FieldDef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create network equipment type request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateNetworkEquipmentType {
    pub name: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

/// Update network equipment type request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateNetworkEquipmentType {
    pub name: Option<String>,
    pub fields: Option<Vec<FieldDef>>,
}

/// Network equipment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct NetworkEquipment {
    pub id: Uuid,
    pub type_id: Uuid,
    #[sqlx(json)]
    #[schema(value_type = Object)]
    pub custom_fields: DataMap,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Internal row structure for queries joining the owning type
#[derive(Debug, Clone, FromRow)]
pub struct NetworkEquipmentRow {
    id: Uuid,
    type_id: Uuid,
    #[sqlx(json)]
    custom_fields: DataMap,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    type_name: String,
    type_image_url: String,
    #[sqlx(json)]
    type_fields: Vec<FieldDef>,
    type_created_at: DateTime<Utc>,
    type_updated_at: DateTime<Utc>,
}

impl From<NetworkEquipmentRow> for NetworkEquipmentWithType {
    fn from(row: NetworkEquipmentRow) -> Self {
        NetworkEquipmentWithType {
            id: row.id,
            custom_fields: row.custom_fields,
            created_at: row.created_at,
            updated_at: row.updated_at,
            equipment_type: NetworkEquipmentType {
                id: row.type_id,
                name: row.type_name,
                image_url: row.type_image_url,
                fields: row.type_fields,
                created_at: row.type_created_at,
                updated_at: row.type_updated_at,
            },
        }
    }
}

/// Network equipment with its type resolved for display
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NetworkEquipmentWithType {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub equipment_type: NetworkEquipmentType,
    #[schema(value_type = Object)]
    pub custom_fields: DataMap,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create network equipment request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateNetworkEquipment {
    pub type_id: Uuid,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub custom_fields: DataMap,
}

/// Update network equipment request
///
/// `custom_fields`, when present, replaces the stored map wholesale.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateNetworkEquipment {
    pub type_id: Option<Uuid>,
    #[schema(value_type = Object)]
    pub custom_fields: Option<DataMap>,
}

/// Query parameters for the network equipment list
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct NetworkEquipmentQuery {
    pub type_id: Option<Uuid>,
}
