//! Equipment instance model
//!
//! Equipment rows carry a free-form `data` map keyed by the owning type's
//! field names. Keys are not checked against the type's field list at
//! write time; the mapping is deliberately permissive.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::equipment_type::{EquipmentType, FieldDef};

/// Ordered free-form data mapping
pub type DataMap = IndexMap<String, Value>;

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: Uuid,
    pub datacenter_id: Uuid,
    pub type_id: Uuid,
    #[sqlx(json)]
    #[schema(value_type = Object)]
    pub data: DataMap,
    pub created_at: DateTime<Utc>,
}

/// Internal row structure for queries joining the owning type
#[derive(Debug, Clone, FromRow)]
pub struct EquipmentRow {
    id: Uuid,
    datacenter_id: Uuid,
    type_id: Uuid,
    #[sqlx(json)]
    data: DataMap,
    created_at: DateTime<Utc>,
    type_name: String,
    type_datacenter_id: Uuid,
    type_category_id: Uuid,
    type_image_url: String,
    #[sqlx(json)]
    type_fields: Vec<FieldDef>,
}

impl From<EquipmentRow> for EquipmentWithType {
    fn from(row: EquipmentRow) -> Self {
        EquipmentWithType {
            id: row.id,
            datacenter_id: row.datacenter_id,
            data: row.data,
            created_at: row.created_at,
            equipment_type: EquipmentType {
                id: row.type_id,
                name: row.type_name,
                datacenter_id: row.type_datacenter_id,
                category_id: row.type_category_id,
                image_url: row.type_image_url,
                fields: row.type_fields,
            },
        }
    }
}

/// Equipment with its type reference resolved for display
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EquipmentWithType {
    pub id: Uuid,
    pub datacenter_id: Uuid,
    #[serde(rename = "type")]
    pub equipment_type: EquipmentType,
    #[schema(value_type = Object)]
    pub data: DataMap,
    pub created_at: DateTime<Utc>,
}

/// Create equipment request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEquipment {
    pub datacenter_id: Uuid,
    pub type_id: Uuid,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub data: DataMap,
}

/// Update equipment request
///
/// `data`, when present, replaces the stored map wholesale.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEquipment {
    pub datacenter_id: Option<Uuid>,
    pub type_id: Option<Uuid>,
    #[schema(value_type = Object)]
    pub data: Option<DataMap>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expanded_type_keeps_its_own_datacenter() {
        let equipment_dc = Uuid::new_v4();
        let type_dc = Uuid::new_v4();
        let row = EquipmentRow {
            id: Uuid::new_v4(),
            datacenter_id: equipment_dc,
            type_id: Uuid::new_v4(),
            data: DataMap::new(),
            created_at: Utc::now(),
            type_name: "Rack Server".to_string(),
            type_datacenter_id: type_dc,
            type_category_id: Uuid::new_v4(),
            type_image_url: "/default-equipment.png".to_string(),
            type_fields: vec![],
        };

        let expanded = EquipmentWithType::from(row);
        assert_eq!(expanded.datacenter_id, equipment_dc);
        assert_eq!(expanded.equipment_type.datacenter_id, type_dc);
    }
}
