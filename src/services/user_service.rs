use crate::models::{AppUser, Role, ServiceError};
use crate::repositories::UserRepository;
use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use std::sync::Arc;

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AppUser, ServiceError> {
        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                ServiceError::AuthenticationError("Invalid credentials".to_string())
            })?;

        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|e| ServiceError::InternalError(format!("Corrupt password hash: {}", e)))?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| ServiceError::AuthenticationError("Invalid credentials".to_string()))?;

        Ok(user)
    }

    pub async fn add_user(
        &self,
        username: String,
        name: String,
        password: String,
        role: Role,
    ) -> Result<AppUser, ServiceError> {
        if username.trim().is_empty() || name.trim().is_empty() {
            return Err(ServiceError::ValidationError(
                "Username and name are required".to_string(),
            ));
        }
        if password.len() < 4 {
            return Err(ServiceError::ValidationError(
                "Password must be at least 4 characters long".to_string(),
            ));
        }

        if self.repository.find_by_username(&username).await?.is_some() {
            return Err(ServiceError::ValidationError(format!(
                "User {} already exists",
                username
            )));
        }

        let password_hash = hash_password(&password)?;
        let user = self
            .repository
            .insert(&username, &name, &password_hash, role)
            .await?;

        tracing::info!("Added user {} with role {}", user.username, user.role);

        Ok(user)
    }
}

pub fn hash_password(password: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ServiceError::InternalError(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}
