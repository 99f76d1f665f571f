//! Datacenters repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::datacenter::{CreateDatacenter, Datacenter, UpdateDatacenter},
};

#[derive(Clone)]
pub struct DatacentersRepository {
    pool: Pool<Postgres>,
}

impl DatacentersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all datacenters
    pub async fn list(&self) -> AppResult<Vec<Datacenter>> {
        let rows = sqlx::query_as::<_, Datacenter>("SELECT * FROM datacenters ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get datacenter by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Datacenter> {
        sqlx::query_as::<_, Datacenter>("SELECT * FROM datacenters WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Datacenter {} not found", id)))
    }

    /// Create a datacenter
    pub async fn create(&self, data: &CreateDatacenter) -> AppResult<Datacenter> {
        let row = sqlx::query_as::<_, Datacenter>(
            "INSERT INTO datacenters (name, location) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.location)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a datacenter (only the provided fields change)
    pub async fn update(&self, id: Uuid, data: &UpdateDatacenter) -> AppResult<Datacenter> {
        sqlx::query_as::<_, Datacenter>(
            r#"
            UPDATE datacenters
            SET name = COALESCE($2, name),
                location = COALESCE($3, location)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.location)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Datacenter {} not found", id)))
    }

    /// Delete a datacenter, returning the removed record.
    ///
    /// Deletion is refused while categories or equipment still reference
    /// the datacenter.
    pub async fn delete(&self, id: Uuid) -> AppResult<Datacenter> {
        sqlx::query_as::<_, Datacenter>("DELETE FROM datacenters WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                super::fk_violation_to_conflict(e, "Datacenter is not empty")
            })?
            .ok_or_else(|| AppError::NotFound(format!("Datacenter {} not found", id)))
    }
}
