use crate::models::{NewPass, NewSession, PassSession, ServiceError, SessionInput, StarsOutcome};
use crate::repositories::{AccountRepository, SessionRepository};
use std::sync::Arc;

pub struct SessionService {
    account_repository: Arc<dyn AccountRepository>,
    session_repository: Arc<dyn SessionRepository>,
}

impl SessionService {
    pub fn new(
        account_repository: Arc<dyn AccountRepository>,
        session_repository: Arc<dyn SessionRepository>,
    ) -> Self {
        Self {
            account_repository,
            session_repository,
        }
    }

    /// Records one stars session for the account named in `input`, creating
    /// its backing Pass in the same transaction. `stars_earned` is derived
    /// here and never taken from the caller.
    pub async fn record_session(
        &self,
        user_id: i64,
        input: SessionInput,
    ) -> Result<PassSession, ServiceError> {
        let account = self
            .account_repository
            .find_by_steam_id(&input.steam_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Steam account not found".to_string()))?;

        let outcome = StarsOutcome::derive(input.stars_start, input.stars_end, input.purchased_pass);

        let pass = NewPass {
            name: format!("Pass for {}", account.steam_id),
            description: format!("Pass session for {}", account.steam_id),
            start_date: input.start_date,
            end_date: input.complete_date,
            current_stars: input.stars_start,
            total_stars: outcome.total_stars,
            user_id,
        };
        let session = NewSession {
            steam_account_id: account.id,
            user_id,
            stars_start: input.stars_start,
            stars_end: outcome.stars_end,
            stars_earned: outcome.stars_earned,
            purchased_pass: input.purchased_pass,
            start_date: input.start_date,
            complete_date: input.complete_date,
        };

        let created = self
            .session_repository
            .create_with_pass(&pass, &session)
            .await?;

        tracing::info!(
            "Recorded session for {}: {} -> {} ({} stars earned{})",
            account.steam_id,
            created.stars_start,
            created.stars_end,
            created.stars_earned,
            if created.purchased_pass {
                ", pass purchased"
            } else {
                ""
            }
        );

        Ok(created)
    }

    /// `stars_end` of the account's most recent session, 0 when none exists;
    /// used to pre-fill the next session's starting value.
    pub async fn last_known_stars(&self, steam_id: &str) -> Result<i64, ServiceError> {
        let account = self
            .account_repository
            .find_by_steam_id(steam_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Steam account not found".to_string()))?;

        let stars = self
            .session_repository
            .last_stars_end(account.id)
            .await?
            .unwrap_or(0);

        Ok(stars)
    }
}
