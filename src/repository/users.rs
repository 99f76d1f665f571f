//! Users repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::user::{Role, User},
};

/// Translate a unique violation on the users table into a field-specific
/// Conflict (email vs phone). Anything else stays a Database error.
fn unique_violation_to_conflict(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db) = err {
        if db.code().as_deref() == Some("23505") {
            return match db.constraint() {
                Some("users_email_key") => {
                    AppError::Conflict("Email address already in use".to_string())
                }
                Some("users_phone_key") => {
                    AppError::Conflict("Phone number already in use".to_string())
                }
                _ => AppError::Conflict("Duplicate value".to_string()),
            };
        }
    }
    AppError::Database(err)
}

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all users
    pub async fn list(&self) -> AppResult<Vec<User>> {
        let rows = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY lastname, firstname")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<User> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Get user by email, case-insensitively
    pub async fn get_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    /// Create a user. The password must already be hashed.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        firstname: &str,
        lastname: &str,
        email: &str,
        phone: &str,
        address: Option<&str>,
        password_hash: &str,
        role: Role,
    ) -> AppResult<User> {
        let row = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (firstname, lastname, email, phone, address, password, role)
            VALUES ($1, $2, LOWER($3), $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(firstname)
        .bind(lastname)
        .bind(email)
        .bind(phone)
        .bind(address)
        .bind(password_hash)
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(unique_violation_to_conflict)?;
        Ok(row)
    }

    /// Update a user; only the provided fields change. The password, when
    /// given, must already be hashed.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        firstname: Option<&str>,
        lastname: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
        address: Option<&str>,
        password_hash: Option<&str>,
        role: Option<Role>,
    ) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET firstname = COALESCE($2, firstname),
                lastname = COALESCE($3, lastname),
                email = COALESCE(LOWER($4), email),
                phone = COALESCE($5, phone),
                address = COALESCE($6, address),
                password = COALESCE($7, password),
                role = COALESCE($8, role),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(firstname)
        .bind(lastname)
        .bind(email)
        .bind(phone)
        .bind(address)
        .bind(password_hash)
        .bind(role)
        .fetch_optional(&self.pool)
        .await
        .map_err(unique_violation_to_conflict)?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Delete a user
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }
        Ok(())
    }
}
