use crate::models::{NewPass, NewSession, PassSession, ServiceError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// One fetched session row joined with the recording user's display name,
/// the input shape of the daily aggregation.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SessionWithUser {
    pub user_id: i64,
    pub user_name: String,
    pub stars_start: i64,
    pub stars_end: i64,
    pub stars_earned: i64,
    pub purchased_pass: bool,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Inserts the backing Pass and the Session in one transaction; a
    /// failure on either insert leaves no orphaned row.
    async fn create_with_pass(
        &self,
        pass: &NewPass,
        session: &NewSession,
    ) -> Result<PassSession, ServiceError>;

    /// `stars_end` of the most recently created session for the account.
    async fn last_stars_end(&self, steam_account_id: i64) -> Result<Option<i64>, ServiceError>;

    /// All sessions created in `[start, end)`, oldest first.
    async fn find_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<SessionWithUser>, ServiceError>;
}

pub struct SqliteSessionRepository {
    pool: SqlitePool,
}

impl SqliteSessionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for SqliteSessionRepository {
    async fn create_with_pass(
        &self,
        pass: &NewPass,
        session: &NewSession,
    ) -> Result<PassSession, ServiceError> {
        let created_at = Utc::now();
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "INSERT INTO passes (name, description, start_date, end_date, current_stars, total_stars, user_id, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&pass.name)
        .bind(&pass.description)
        .bind(pass.start_date)
        .bind(pass.end_date)
        .bind(pass.current_stars)
        .bind(pass.total_stars)
        .bind(pass.user_id)
        .bind(created_at)
        .execute(&mut *tx)
        .await?;
        let pass_id = result.last_insert_rowid();

        let result = sqlx::query(
            "INSERT INTO pass_sessions (pass_id, steam_account_id, user_id, stars_start, stars_end, stars_earned, purchased_pass, start_date, complete_date, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(pass_id)
        .bind(session.steam_account_id)
        .bind(session.user_id)
        .bind(session.stars_start)
        .bind(session.stars_end)
        .bind(session.stars_earned)
        .bind(session.purchased_pass)
        .bind(session.start_date)
        .bind(session.complete_date)
        .bind(created_at)
        .execute(&mut *tx)
        .await?;
        let session_id = result.last_insert_rowid();

        tx.commit().await?;

        Ok(PassSession {
            id: session_id,
            pass_id,
            steam_account_id: session.steam_account_id,
            user_id: session.user_id,
            stars_start: session.stars_start,
            stars_end: session.stars_end,
            stars_earned: session.stars_earned,
            purchased_pass: session.purchased_pass,
            start_date: session.start_date,
            complete_date: session.complete_date,
            created_at,
        })
    }

    async fn last_stars_end(&self, steam_account_id: i64) -> Result<Option<i64>, ServiceError> {
        let stars_end = sqlx::query_scalar::<_, i64>(
            "SELECT stars_end FROM pass_sessions WHERE steam_account_id = ?
             ORDER BY created_at DESC, id DESC LIMIT 1",
        )
        .bind(steam_account_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(stars_end)
    }

    async fn find_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<SessionWithUser>, ServiceError> {
        let sessions = sqlx::query_as::<_, SessionWithUser>(
            "SELECT s.user_id, u.name AS user_name, s.stars_start, s.stars_end, s.stars_earned, s.purchased_pass, s.created_at
             FROM pass_sessions s
             JOIN users u ON u.id = s.user_id
             WHERE s.created_at >= ? AND s.created_at < ?
             ORDER BY s.created_at ASC, s.id ASC",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(sessions)
    }
}
