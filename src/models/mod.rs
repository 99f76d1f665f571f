//! Data models for Rackline

pub mod category;
pub mod datacenter;
pub mod equipment;
pub mod equipment_type;
pub mod network;
pub mod user;

// Re-export commonly used types
pub use category::Category;
pub use datacenter::Datacenter;
pub use equipment::{Equipment, EquipmentWithType};
pub use equipment_type::{EquipmentType, FieldDef, FieldType};
pub use network::{NetworkEquipment, NetworkEquipmentType};
pub use user::{Role, User};
