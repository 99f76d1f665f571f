//! Categories repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::category::{Category, CreateCategory},
};

#[derive(Clone)]
pub struct CategoriesRepository {
    pool: Pool<Postgres>,
}

impl CategoriesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all categories belonging to a datacenter
    pub async fn list_by_datacenter(&self, datacenter_id: Uuid) -> AppResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, Category>(
            "SELECT * FROM categories WHERE datacenter_id = $1 ORDER BY name",
        )
        .bind(datacenter_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get category by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Category> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    /// Create a category
    pub async fn create(&self, data: &CreateCategory) -> AppResult<Category> {
        let row = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name, datacenter_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.datacenter_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| super::fk_violation_to_conflict(e, "Unknown datacenter"))?;
        Ok(row)
    }

    /// Rename a category
    pub async fn update(&self, id: Uuid, name: &str) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            "UPDATE categories SET name = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    /// Delete a category together with every equipment type referencing it.
    ///
    /// Both deletes run in one transaction so a failure leaves no orphaned
    /// or half-removed state behind.
    pub async fn delete_cascade(&self, id: Uuid) -> AppResult<Category> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM equipment_types WHERE category_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                super::fk_violation_to_conflict(
                    e,
                    "Category has equipment types still referenced by equipment",
                )
            })?;

        let category =
            sqlx::query_as::<_, Category>("DELETE FROM categories WHERE id = $1 RETURNING *")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(category) = category else {
            tx.rollback().await?;
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        };

        tx.commit().await?;
        Ok(category)
    }
}
