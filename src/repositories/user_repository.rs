use crate::models::{AppUser, Role, ServiceError};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<AppUser>, ServiceError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<AppUser>, ServiceError>;
    async fn insert(
        &self,
        username: &str,
        name: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<AppUser, ServiceError>;
}

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<AppUser>, ServiceError> {
        let user = sqlx::query_as::<_, AppUser>(
            "SELECT id, username, name, password_hash, role, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<AppUser>, ServiceError> {
        let user = sqlx::query_as::<_, AppUser>(
            "SELECT id, username, name, password_hash, role, created_at FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert(
        &self,
        username: &str,
        name: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<AppUser, ServiceError> {
        let created_at = Utc::now();
        let result = sqlx::query(
            "INSERT INTO users (username, name, password_hash, role, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(username)
        .bind(name)
        .bind(password_hash)
        .bind(role)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(AppUser {
            id: result.last_insert_rowid(),
            username: username.to_string(),
            name: name.to_string(),
            password_hash: password_hash.to_string(),
            role,
            created_at,
        })
    }
}
