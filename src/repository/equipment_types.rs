//! Equipment types repository for database operations

use sqlx::{types::Json, Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::equipment_type::{EquipmentType, FieldDef},
};

#[derive(Clone)]
pub struct EquipmentTypesRepository {
    pool: Pool<Postgres>,
}

impl EquipmentTypesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List equipment types in a category
    pub async fn list_by_category(&self, category_id: Uuid) -> AppResult<Vec<EquipmentType>> {
        let rows = sqlx::query_as::<_, EquipmentType>(
            "SELECT * FROM equipment_types WHERE category_id = $1 ORDER BY name",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get equipment type by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<EquipmentType> {
        sqlx::query_as::<_, EquipmentType>("SELECT * FROM equipment_types WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment type {} not found", id)))
    }

    /// Create an equipment type with its field definitions
    pub async fn create(
        &self,
        name: &str,
        datacenter_id: Uuid,
        category_id: Uuid,
        image_url: Option<&str>,
        fields: &[FieldDef],
    ) -> AppResult<EquipmentType> {
        let row = sqlx::query_as::<_, EquipmentType>(
            r#"
            INSERT INTO equipment_types (name, datacenter_id, category_id, image_url, fields)
            VALUES ($1, $2, $3, COALESCE($4, '/default-equipment.png'), $5)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(datacenter_id)
        .bind(category_id)
        .bind(image_url)
        .bind(Json(fields))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| super::fk_violation_to_conflict(e, "Unknown datacenter or category"))?;
        Ok(row)
    }

    /// Update name and/or field definitions of an equipment type
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        fields: Option<&[FieldDef]>,
    ) -> AppResult<EquipmentType> {
        sqlx::query_as::<_, EquipmentType>(
            r#"
            UPDATE equipment_types
            SET name = COALESCE($2, name),
                fields = COALESCE($3, fields)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(fields.map(Json))
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Equipment type {} not found", id)))
    }

    /// Delete an equipment type.
    ///
    /// Deletion is refused while equipment instances still reference the
    /// type, instead of leaving orphaned instances behind.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment_types WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                super::fk_violation_to_conflict(
                    e,
                    "Equipment type is still referenced by equipment",
                )
            })?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Equipment type {} not found", id)));
        }
        Ok(())
    }
}
