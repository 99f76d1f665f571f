//! Network equipment repository for database operations

use sqlx::{types::Json, Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::equipment_type::FieldDef,
    models::network::{
        CreateNetworkEquipment, NetworkEquipment, NetworkEquipmentRow, NetworkEquipmentType,
        NetworkEquipmentWithType, UpdateNetworkEquipment,
    },
};

const SELECT_WITH_TYPE: &str = r#"
    SELECT e.id, e.type_id, e.custom_fields, e.created_at, e.updated_at,
           t.name AS type_name, t.image_url AS type_image_url, t.fields AS type_fields,
           t.created_at AS type_created_at, t.updated_at AS type_updated_at
    FROM network_equipment e
    JOIN network_equipment_types t ON e.type_id = t.id
"#;

#[derive(Clone)]
pub struct NetworkRepository {
    pool: Pool<Postgres>,
}

impl NetworkRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    // --- Types ---

    /// List all network equipment types
    pub async fn types_list(&self) -> AppResult<Vec<NetworkEquipmentType>> {
        let rows = sqlx::query_as::<_, NetworkEquipmentType>(
            "SELECT * FROM network_equipment_types ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get network equipment type by ID
    pub async fn types_get_by_id(&self, id: Uuid) -> AppResult<NetworkEquipmentType> {
        sqlx::query_as::<_, NetworkEquipmentType>(
            "SELECT * FROM network_equipment_types WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Network equipment type {} not found", id)))
    }

    /// Create a network equipment type
    pub async fn types_create(
        &self,
        name: &str,
        image_url: Option<&str>,
        fields: &[FieldDef],
    ) -> AppResult<NetworkEquipmentType> {
        let row = sqlx::query_as::<_, NetworkEquipmentType>(
            r#"
            INSERT INTO network_equipment_types (name, image_url, fields)
            VALUES ($1, COALESCE($2, '/default-network-equipment.png'), $3)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(image_url)
        .bind(Json(fields))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update name and/or field definitions of a network equipment type
    pub async fn types_update(
        &self,
        id: Uuid,
        name: Option<&str>,
        fields: Option<&[FieldDef]>,
    ) -> AppResult<NetworkEquipmentType> {
        sqlx::query_as::<_, NetworkEquipmentType>(
            r#"
            UPDATE network_equipment_types
            SET name = COALESCE($2, name),
                fields = COALESCE($3, fields),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(fields.map(Json))
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Network equipment type {} not found", id)))
    }

    /// Delete a network equipment type.
    ///
    /// Deletion is refused while equipment still references the type.
    pub async fn types_delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM network_equipment_types WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                super::fk_violation_to_conflict(
                    e,
                    "Network equipment type is still referenced by equipment",
                )
            })?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Network equipment type {} not found",
                id
            )));
        }
        Ok(())
    }

    // --- Equipment ---

    /// List network equipment, optionally filtered by type
    pub async fn equipment_list(
        &self,
        type_id: Option<Uuid>,
    ) -> AppResult<Vec<NetworkEquipmentWithType>> {
        let rows = match type_id {
            Some(type_id) => {
                let query = format!("{} WHERE e.type_id = $1 ORDER BY e.created_at", SELECT_WITH_TYPE);
                sqlx::query_as::<_, NetworkEquipmentRow>(&query)
                    .bind(type_id)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let query = format!("{} ORDER BY e.created_at", SELECT_WITH_TYPE);
                sqlx::query_as::<_, NetworkEquipmentRow>(&query)
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(rows.into_iter().map(NetworkEquipmentWithType::from).collect())
    }

    /// Get network equipment by ID with its type expanded
    pub async fn equipment_get_by_id(&self, id: Uuid) -> AppResult<NetworkEquipmentWithType> {
        let query = format!("{} WHERE e.id = $1", SELECT_WITH_TYPE);
        sqlx::query_as::<_, NetworkEquipmentRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(NetworkEquipmentWithType::from)
            .ok_or_else(|| AppError::NotFound(format!("Network equipment {} not found", id)))
    }

    /// Create a network equipment instance
    pub async fn equipment_create(&self, data: &CreateNetworkEquipment) -> AppResult<NetworkEquipment> {
        let row = sqlx::query_as::<_, NetworkEquipment>(
            r#"
            INSERT INTO network_equipment (type_id, custom_fields)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(data.type_id)
        .bind(Json(&data.custom_fields))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| super::fk_violation_to_conflict(e, "Unknown network equipment type"))?;
        Ok(row)
    }

    /// Update a network equipment instance. The custom fields map, when
    /// present, replaces the stored one.
    pub async fn equipment_update(
        &self,
        id: Uuid,
        data: &UpdateNetworkEquipment,
    ) -> AppResult<NetworkEquipmentWithType> {
        let updated = sqlx::query_scalar::<_, Uuid>(
            r#"
            UPDATE network_equipment
            SET type_id = COALESCE($2, type_id),
                custom_fields = COALESCE($3, custom_fields),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(data.type_id)
        .bind(data.custom_fields.as_ref().map(Json))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| super::fk_violation_to_conflict(e, "Unknown network equipment type"))?;

        match updated {
            Some(id) => self.equipment_get_by_id(id).await,
            None => Err(AppError::NotFound(format!("Network equipment {} not found", id))),
        }
    }

    /// Delete a network equipment instance
    pub async fn equipment_delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM network_equipment WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Network equipment {} not found", id)));
        }
        Ok(())
    }
}
