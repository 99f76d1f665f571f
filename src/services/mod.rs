//! Business logic services

pub mod inventory;
pub mod network;
pub mod users;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub inventory: inventory::InventoryService,
    pub network: network::NetworkService,
    pub users: users::UsersService,
    /// Kept for operational endpoints that talk to the store directly
    pub repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            inventory: inventory::InventoryService::new(repository.clone()),
            network: network::NetworkService::new(repository.clone()),
            users: users::UsersService::new(repository.clone(), auth_config),
            repository,
        }
    }
}
