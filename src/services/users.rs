//! Authentication and user management service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::{
        CreateUser, RegisterRequest, Role, UpdateProfile, UpdateUser, User, UserClaims,
    },
    repository::Repository,
};

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored Argon2 hash
pub fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
    config: AuthConfig,
}

impl UsersService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Authenticate user by email and return a JWT token.
    ///
    /// Unknown email and wrong password produce the identical generic
    /// error so the response does not reveal which accounts exist.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<(String, User)> {
        let generic = || AppError::Authentication("Invalid email or password".to_string());

        let user = self
            .repository
            .users
            .get_by_email(email)
            .await?
            .ok_or_else(generic)?;

        if !verify_password(&user.password, password)? {
            return Err(generic());
        }

        let token = self.issue_token(&user)?;
        Ok((token, user))
    }

    /// Register a new user and log them in
    pub async fn register(&self, request: RegisterRequest) -> AppResult<(String, User)> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let password_hash = hash_password(&request.password)?;
        let user = self
            .repository
            .users
            .create(
                &request.firstname,
                &request.lastname,
                &request.email,
                &request.phone,
                request.address.as_deref(),
                &password_hash,
                request.role.unwrap_or(Role::User),
            )
            .await?;

        let token = self.issue_token(&user)?;
        Ok((token, user))
    }

    /// Issue a signed bearer token for a user
    pub fn issue_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let exp = now + (self.config.jwt_expiration_hours as i64 * 3600);

        let claims = UserClaims {
            sub: user.email.clone(),
            user_id: user.id,
            role: user.role,
            exp,
            iat: now,
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<User> {
        self.repository.users.get_by_id(id).await
    }

    /// List all users
    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.repository.users.list().await
    }

    /// Create a new user (admin operation)
    pub async fn create_user(&self, user: CreateUser) -> AppResult<User> {
        user.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let password_hash = hash_password(&user.password)?;
        self.repository
            .users
            .create(
                &user.firstname,
                &user.lastname,
                &user.email,
                &user.phone,
                user.address.as_deref(),
                &password_hash,
                user.role.unwrap_or(Role::User),
            )
            .await
    }

    /// Update an existing user (admin operation)
    pub async fn update_user(&self, id: Uuid, user: UpdateUser) -> AppResult<User> {
        user.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let password_hash = match user.password {
            Some(ref password) => Some(hash_password(password)?),
            None => None,
        };

        self.repository
            .users
            .update(
                id,
                user.firstname.as_deref(),
                user.lastname.as_deref(),
                user.email.as_deref(),
                user.phone.as_deref(),
                user.address.as_deref(),
                password_hash.as_deref(),
                user.role,
            )
            .await
    }

    /// Delete a user
    pub async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        self.repository.users.delete(id).await
    }

    /// Update a user's own profile. A password change requires the
    /// current password to verify.
    pub async fn update_profile(&self, user_id: Uuid, profile: UpdateProfile) -> AppResult<User> {
        profile
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let user = self.repository.users.get_by_id(user_id).await?;

        let password_hash = match profile.new_password {
            Some(ref new_password) => {
                let current = profile.current_password.as_ref().ok_or_else(|| {
                    AppError::Validation(
                        "Current password required to change password".to_string(),
                    )
                })?;
                if !verify_password(&user.password, current)? {
                    return Err(AppError::Validation(
                        "Current password is incorrect".to_string(),
                    ));
                }
                Some(hash_password(new_password)?)
            }
            None => None,
        };

        self.repository
            .users
            .update(
                user_id,
                profile.firstname.as_deref(),
                profile.lastname.as_deref(),
                profile.email.as_deref(),
                profile.phone.as_deref(),
                profile.address.as_deref(),
                password_hash.as_deref(),
                None,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_password() {
        let hash = hash_password("hunter2secret").unwrap();
        assert_ne!(hash, "hunter2secret");
        assert!(verify_password(&hash, "hunter2secret").unwrap());
        assert!(!verify_password(&hash, "wrong").unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("same-password").unwrap();
        let b = hash_password("same-password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(verify_password("not-a-phc-string", "anything").is_err());
    }
}
