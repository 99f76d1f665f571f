//! Datacenter inventory service: datacenters, categories, equipment types
//! and equipment instances.

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::category::{Category, CreateCategory, UpdateCategory},
    models::datacenter::{CreateDatacenter, Datacenter, UpdateDatacenter},
    models::equipment::{CreateEquipment, Equipment, EquipmentWithType, UpdateEquipment},
    models::equipment_type::{
        validate_fields, CreateEquipmentType, EquipmentType, UpdateEquipmentType,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct InventoryService {
    repository: Repository,
}

impl InventoryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // --- Datacenters ---

    pub async fn datacenters_list(&self) -> AppResult<Vec<Datacenter>> {
        self.repository.datacenters.list().await
    }

    pub async fn datacenters_get(&self, id: Uuid) -> AppResult<Datacenter> {
        self.repository.datacenters.get_by_id(id).await
    }

    pub async fn datacenters_create(&self, data: CreateDatacenter) -> AppResult<Datacenter> {
        if data.name.trim().is_empty() || data.location.trim().is_empty() {
            return Err(AppError::Validation(
                "Name and location are required".to_string(),
            ));
        }
        self.repository.datacenters.create(&data).await
    }

    pub async fn datacenters_update(&self, id: Uuid, data: UpdateDatacenter) -> AppResult<Datacenter> {
        self.repository.datacenters.update(id, &data).await
    }

    pub async fn datacenters_delete(&self, id: Uuid) -> AppResult<Datacenter> {
        self.repository.datacenters.delete(id).await
    }

    // --- Categories ---

    pub async fn categories_list_by_datacenter(&self, datacenter_id: Uuid) -> AppResult<Vec<Category>> {
        self.repository.categories.list_by_datacenter(datacenter_id).await
    }

    pub async fn categories_get(&self, id: Uuid) -> AppResult<Category> {
        self.repository.categories.get_by_id(id).await
    }

    pub async fn categories_create(&self, data: CreateCategory) -> AppResult<Category> {
        if data.name.trim().is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }
        self.repository.categories.create(&data).await
    }

    pub async fn categories_update(&self, id: Uuid, data: UpdateCategory) -> AppResult<Category> {
        if data.name.trim().is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }
        self.repository.categories.update(id, &data.name).await
    }

    /// Delete a category and, atomically, every equipment type in it
    pub async fn categories_delete(&self, id: Uuid) -> AppResult<Category> {
        self.repository.categories.delete_cascade(id).await
    }

    // --- Equipment types ---

    pub async fn equipment_types_list_by_category(
        &self,
        category_id: Uuid,
    ) -> AppResult<Vec<EquipmentType>> {
        self.repository.equipment_types.list_by_category(category_id).await
    }

    pub async fn equipment_types_get(&self, id: Uuid) -> AppResult<EquipmentType> {
        self.repository.equipment_types.get_by_id(id).await
    }

    pub async fn equipment_types_create(&self, mut data: CreateEquipmentType) -> AppResult<EquipmentType> {
        if data.name.trim().is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }
        validate_fields(&mut data.fields)?;
        self.repository
            .equipment_types
            .create(
                &data.name,
                data.datacenter_id,
                data.category_id,
                data.image_url.as_deref(),
                &data.fields,
            )
            .await
    }

    pub async fn equipment_types_update(
        &self,
        id: Uuid,
        mut data: UpdateEquipmentType,
    ) -> AppResult<EquipmentType> {
        if let Some(ref mut fields) = data.fields {
            validate_fields(fields)?;
        }
        self.repository
            .equipment_types
            .update(id, data.name.as_deref(), data.fields.as_deref())
            .await
    }

    pub async fn equipment_types_delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.equipment_types.delete(id).await
    }

    // --- Equipment ---

    pub async fn equipment_list_by_datacenter(&self, datacenter_id: Uuid) -> AppResult<Vec<EquipmentWithType>> {
        self.repository.equipment.list_by_datacenter(datacenter_id).await
    }

    pub async fn equipment_list_by_type(&self, type_id: Uuid) -> AppResult<Vec<EquipmentWithType>> {
        self.repository.equipment.list_by_type(type_id).await
    }

    pub async fn equipment_list_by_datacenter_and_type(
        &self,
        datacenter_id: Uuid,
        type_id: Uuid,
    ) -> AppResult<Vec<EquipmentWithType>> {
        self.repository
            .equipment
            .list_by_datacenter_and_type(datacenter_id, type_id)
            .await
    }

    pub async fn equipment_get(&self, id: Uuid) -> AppResult<EquipmentWithType> {
        self.repository.equipment.get_by_id(id).await
    }

    /// Create an equipment instance. The data map is accepted as-is; keys
    /// are not validated against the owning type's field list.
    pub async fn equipment_create(&self, data: CreateEquipment) -> AppResult<Equipment> {
        self.repository.equipment.create(&data).await
    }

    pub async fn equipment_update(&self, id: Uuid, data: UpdateEquipment) -> AppResult<EquipmentWithType> {
        self.repository.equipment.update(id, &data).await
    }

    pub async fn equipment_delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.equipment.delete(id).await
    }
}
