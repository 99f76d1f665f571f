//! Network equipment service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::equipment_type::validate_fields,
    models::network::{
        CreateNetworkEquipment, CreateNetworkEquipmentType, NetworkEquipment,
        NetworkEquipmentType, NetworkEquipmentWithType, UpdateNetworkEquipment,
        UpdateNetworkEquipmentType,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct NetworkService {
    repository: Repository,
}

impl NetworkService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn types_list(&self) -> AppResult<Vec<NetworkEquipmentType>> {
        self.repository.network.types_list().await
    }

    pub async fn types_get(&self, id: Uuid) -> AppResult<NetworkEquipmentType> {
        self.repository.network.types_get_by_id(id).await
    }

    pub async fn types_create(
        &self,
        mut data: CreateNetworkEquipmentType,
    ) -> AppResult<NetworkEquipmentType> {
        if data.name.trim().is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }
        validate_fields(&mut data.fields)?;
        self.repository
            .network
            .types_create(&data.name, data.image_url.as_deref(), &data.fields)
            .await
    }

    pub async fn types_update(
        &self,
        id: Uuid,
        mut data: UpdateNetworkEquipmentType,
    ) -> AppResult<NetworkEquipmentType> {
        if let Some(ref mut fields) = data.fields {
            validate_fields(fields)?;
        }
        self.repository
            .network
            .types_update(id, data.name.as_deref(), data.fields.as_deref())
            .await
    }

    pub async fn types_delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.network.types_delete(id).await
    }

    pub async fn equipment_list(&self, type_id: Option<Uuid>) -> AppResult<Vec<NetworkEquipmentWithType>> {
        self.repository.network.equipment_list(type_id).await
    }

    pub async fn equipment_get(&self, id: Uuid) -> AppResult<NetworkEquipmentWithType> {
        self.repository.network.equipment_get_by_id(id).await
    }

    pub async fn equipment_create(&self, data: CreateNetworkEquipment) -> AppResult<NetworkEquipment> {
        self.repository.network.equipment_create(&data).await
    }

    pub async fn equipment_update(
        &self,
        id: Uuid,
        data: UpdateNetworkEquipment,
    ) -> AppResult<NetworkEquipmentWithType> {
        self.repository.network.equipment_update(id, &data).await
    }

    pub async fn equipment_delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.network.equipment_delete(id).await
    }
}
