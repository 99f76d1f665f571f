//! Equipment type model and user-defined field schemas
//!
//! An equipment type declares an ordered list of field definitions.
//! Equipment instances store free-form values keyed by those field names,
//! so the name is normalized to a safe mapping key before storage.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Closed set of field data types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Date,
    Email,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Email => "email",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(FieldType::Text),
            "number" => Ok(FieldType::Number),
            "date" => Ok(FieldType::Date),
            "email" => Ok(FieldType::Email),
            _ => Err(format!("Invalid field type: {}", s)),
        }
    }
}

/// A named, typed, labeled slot declared on an equipment type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldDef {
    /// Internal key, used to index equipment data maps
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Display string
    pub label: String,
}

/// Normalize a field name to a safe mapping key: lowercase, whitespace
/// collapsed to underscores.
pub fn normalize_field_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Validate and normalize a field definition list in place.
///
/// The whole list is rejected if any entry has an empty name or label;
/// unknown type tags are already rejected at deserialization.
pub fn validate_fields(fields: &mut [FieldDef]) -> AppResult<()> {
    for field in fields.iter_mut() {
        let name = normalize_field_name(&field.name);
        if name.is_empty() {
            return Err(AppError::Validation("Field name must not be empty".to_string()));
        }
        if field.label.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "Field '{}' must have a label",
                name
            )));
        }
        field.name = name;
    }
    Ok(())
}

/// Equipment type record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EquipmentType {
    pub id: Uuid,
    pub name: String,
    pub datacenter_id: Uuid,
    pub category_id: Uuid,
    pub image_url: String,
    #[sqlx(json)]
    pub fields: Vec<FieldDef>,
}

/// Create equipment type request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEquipmentType {
    pub name: String,
    pub datacenter_id: Uuid,
    pub category_id: Uuid,
    pub image_url: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

/// Update equipment type request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEquipmentType {
    pub name: Option<String>,
    pub fields: Option<Vec<FieldDef>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_field_name() {
        assert_eq!(normalize_field_name("Serial Number"), "serial_number");
        assert_eq!(normalize_field_name("  IP   Address  "), "ip_address");
        assert_eq!(normalize_field_name("vendor"), "vendor");
        assert_eq!(normalize_field_name("RAM"), "ram");
        assert_eq!(normalize_field_name("   "), "");
    }

    #[test]
    fn test_validate_fields_normalizes_names() {
        let mut fields = vec![FieldDef {
            name: "Serial Number".to_string(),
            field_type: FieldType::Text,
            label: "Serial number".to_string(),
        }];
        validate_fields(&mut fields).unwrap();
        assert_eq!(fields[0].name, "serial_number");
    }

    #[test]
    fn test_validate_fields_rejects_empty_name() {
        let mut fields = vec![FieldDef {
            name: "  ".to_string(),
            field_type: FieldType::Text,
            label: "Blank".to_string(),
        }];
        assert!(validate_fields(&mut fields).is_err());
    }

    #[test]
    fn test_validate_fields_rejects_empty_label() {
        let mut fields = vec![
            FieldDef {
                name: "vendor".to_string(),
                field_type: FieldType::Text,
                label: "Vendor".to_string(),
            },
            FieldDef {
                name: "warranty".to_string(),
                field_type: FieldType::Date,
                label: "".to_string(),
            },
        ];
        // no partial acceptance
        assert!(validate_fields(&mut fields).is_err());
    }

    #[test]
    fn test_field_type_closed_set() {
        assert_eq!("text".parse::<FieldType>().unwrap(), FieldType::Text);
        assert_eq!("EMAIL".parse::<FieldType>().unwrap(), FieldType::Email);
        assert!("boolean".parse::<FieldType>().is_err());

        // unknown tags are rejected at deserialization too
        let bad: Result<FieldDef, _> =
            serde_json::from_str(r#"{"name":"x","type":"blob","label":"X"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_field_def_serde_roundtrip_preserves_order() {
        let json = r#"[
            {"name":"vendor","type":"text","label":"Vendor"},
            {"name":"u_height","type":"number","label":"Height (U)"},
            {"name":"installed","type":"date","label":"Installed on"},
            {"name":"contact","type":"email","label":"Support contact"}
        ]"#;
        let fields: Vec<FieldDef> = serde_json::from_str(json).unwrap();
        let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["vendor", "u_height", "installed", "contact"]);

        let back = serde_json::to_string(&fields).unwrap();
        let again: Vec<FieldDef> = serde_json::from_str(&back).unwrap();
        assert_eq!(fields, again);
    }
}
