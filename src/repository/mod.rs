//! Repository layer for database operations

pub mod categories;
pub mod datacenters;
pub mod equipment;
pub mod equipment_types;
pub mod network;
pub mod users;

use sqlx::{Pool, Postgres};

use crate::error::{AppError, AppResult};

/// Translate a foreign-key violation into a Conflict with a domain message.
/// Any other failure passes through as a Database error.
pub(crate) fn fk_violation_to_conflict(err: sqlx::Error, message: &str) -> AppError {
    if let sqlx::Error::Database(ref db) = err {
        if db.code().as_deref() == Some("23503") {
            return AppError::Conflict(message.to_string());
        }
    }
    AppError::Database(err)
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub datacenters: datacenters::DatacentersRepository,
    pub categories: categories::CategoriesRepository,
    pub equipment_types: equipment_types::EquipmentTypesRepository,
    pub equipment: equipment::EquipmentRepository,
    pub network: network::NetworkRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            datacenters: datacenters::DatacentersRepository::new(pool.clone()),
            categories: categories::CategoriesRepository::new(pool.clone()),
            equipment_types: equipment_types::EquipmentTypesRepository::new(pool.clone()),
            equipment: equipment::EquipmentRepository::new(pool.clone()),
            network: network::NetworkRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            pool,
        }
    }

    /// Round-trip the database to verify connectivity
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
