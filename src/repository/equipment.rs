//! Equipment repository for database operations
//!
//! List and get queries join the owning equipment type so callers receive
//! the type expanded for display.

use sqlx::{types::Json, Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::equipment::{
        CreateEquipment, Equipment, EquipmentRow, EquipmentWithType, UpdateEquipment,
    },
};

const SELECT_WITH_TYPE: &str = r#"
    SELECT e.id, e.datacenter_id, e.type_id, e.data, e.created_at,
           t.name AS type_name, t.datacenter_id AS type_datacenter_id,
           t.category_id AS type_category_id,
           t.image_url AS type_image_url, t.fields AS type_fields
    FROM equipment e
    JOIN equipment_types t ON e.type_id = t.id
"#;

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List equipment in a datacenter
    pub async fn list_by_datacenter(&self, datacenter_id: Uuid) -> AppResult<Vec<EquipmentWithType>> {
        let query = format!("{} WHERE e.datacenter_id = $1 ORDER BY e.created_at", SELECT_WITH_TYPE);
        let rows = sqlx::query_as::<_, EquipmentRow>(&query)
            .bind(datacenter_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(EquipmentWithType::from).collect())
    }

    /// List equipment of a given type
    pub async fn list_by_type(&self, type_id: Uuid) -> AppResult<Vec<EquipmentWithType>> {
        let query = format!("{} WHERE e.type_id = $1 ORDER BY e.created_at", SELECT_WITH_TYPE);
        let rows = sqlx::query_as::<_, EquipmentRow>(&query)
            .bind(type_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(EquipmentWithType::from).collect())
    }

    /// List equipment of a given type within a datacenter
    pub async fn list_by_datacenter_and_type(
        &self,
        datacenter_id: Uuid,
        type_id: Uuid,
    ) -> AppResult<Vec<EquipmentWithType>> {
        let query = format!(
            "{} WHERE e.datacenter_id = $1 AND e.type_id = $2 ORDER BY e.created_at",
            SELECT_WITH_TYPE
        );
        let rows = sqlx::query_as::<_, EquipmentRow>(&query)
            .bind(datacenter_id)
            .bind(type_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(EquipmentWithType::from).collect())
    }

    /// Get equipment by ID with its type expanded
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<EquipmentWithType> {
        let query = format!("{} WHERE e.id = $1", SELECT_WITH_TYPE);
        sqlx::query_as::<_, EquipmentRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(EquipmentWithType::from)
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Create an equipment instance. The data map is stored as-is; keys
    /// are not checked against the type's field list.
    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        let row = sqlx::query_as::<_, Equipment>(
            r#"
            INSERT INTO equipment (datacenter_id, type_id, data)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(data.datacenter_id)
        .bind(data.type_id)
        .bind(Json(&data.data))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| super::fk_violation_to_conflict(e, "Unknown datacenter or equipment type"))?;
        Ok(row)
    }

    /// Update an equipment instance. Scalar references are patched if
    /// provided; the data map, when present, replaces the stored one.
    pub async fn update(&self, id: Uuid, data: &UpdateEquipment) -> AppResult<EquipmentWithType> {
        let updated = sqlx::query_scalar::<_, Uuid>(
            r#"
            UPDATE equipment
            SET datacenter_id = COALESCE($2, datacenter_id),
                type_id = COALESCE($3, type_id),
                data = COALESCE($4, data)
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(data.datacenter_id)
        .bind(data.type_id)
        .bind(data.data.as_ref().map(Json))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| super::fk_violation_to_conflict(e, "Unknown datacenter or equipment type"))?;

        match updated {
            Some(id) => self.get_by_id(id).await,
            None => Err(AppError::NotFound(format!("Equipment {} not found", id))),
        }
    }

    /// Delete an equipment instance
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        Ok(())
    }
}
