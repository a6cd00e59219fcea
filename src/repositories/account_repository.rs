use crate::models::{ServiceError, Side, SteamAccount};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<SteamAccount>, ServiceError>;
    async fn find_by_steam_id(&self, steam_id: &str)
        -> Result<Option<SteamAccount>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<SteamAccount>, ServiceError>;
    async fn find_by_side(&self, side: Side) -> Result<Vec<SteamAccount>, ServiceError>;
    async fn insert(&self, steam_id: &str, side: Side) -> Result<SteamAccount, ServiceError>;
    async fn delete(&self, id: i64) -> Result<(), ServiceError>;
}

pub struct SqliteAccountRepository {
    pool: SqlitePool,
}

impl SqliteAccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for SqliteAccountRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<SteamAccount>, ServiceError> {
        let account = sqlx::query_as::<_, SteamAccount>(
            "SELECT id, steam_id, side, created_at FROM steam_accounts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn find_by_steam_id(
        &self,
        steam_id: &str,
    ) -> Result<Option<SteamAccount>, ServiceError> {
        let account = sqlx::query_as::<_, SteamAccount>(
            "SELECT id, steam_id, side, created_at FROM steam_accounts WHERE steam_id = ?",
        )
        .bind(steam_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn find_all(&self) -> Result<Vec<SteamAccount>, ServiceError> {
        let accounts = sqlx::query_as::<_, SteamAccount>(
            "SELECT id, steam_id, side, created_at FROM steam_accounts ORDER BY steam_id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(accounts)
    }

    async fn find_by_side(&self, side: Side) -> Result<Vec<SteamAccount>, ServiceError> {
        let accounts = sqlx::query_as::<_, SteamAccount>(
            "SELECT id, steam_id, side, created_at FROM steam_accounts WHERE side = ? ORDER BY steam_id",
        )
        .bind(side)
        .fetch_all(&self.pool)
        .await?;

        Ok(accounts)
    }

    async fn insert(&self, steam_id: &str, side: Side) -> Result<SteamAccount, ServiceError> {
        let created_at = Utc::now();
        let result =
            sqlx::query("INSERT INTO steam_accounts (steam_id, side, created_at) VALUES (?, ?, ?)")
                .bind(steam_id)
                .bind(side)
                .bind(created_at)
                .execute(&self.pool)
                .await?;

        Ok(SteamAccount {
            id: result.last_insert_rowid(),
            steam_id: steam_id.to_string(),
            side,
            created_at,
        })
    }

    async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        sqlx::query("DELETE FROM steam_accounts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
