use crate::models::{ServiceError, Side, SteamAccount};
use crate::repositories::AccountRepository;
use std::sync::Arc;

pub struct AccountService {
    repository: Arc<dyn AccountRepository>,
}

impl AccountService {
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_accounts(&self, side: Option<Side>) -> Result<Vec<SteamAccount>, ServiceError> {
        match side {
            Some(side) => self.repository.find_by_side(side).await,
            None => self.repository.find_all().await,
        }
    }

    pub async fn create_account(
        &self,
        steam_id: String,
        side: Side,
    ) -> Result<SteamAccount, ServiceError> {
        if steam_id.trim().is_empty() {
            return Err(ServiceError::ValidationError(
                "Steam ID and side are required".to_string(),
            ));
        }

        if self.repository.find_by_steam_id(&steam_id).await?.is_some() {
            return Err(ServiceError::ValidationError(format!(
                "Steam account {} already exists",
                steam_id
            )));
        }

        let account = self.repository.insert(&steam_id, side).await?;
        tracing::info!("Created steam account {} on side {}", account.steam_id, account.side);

        Ok(account)
    }

    pub async fn delete_account(&self, id: i64) -> Result<String, ServiceError> {
        let account = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Steam account not found".to_string()))?;

        self.repository.delete(id).await?;
        tracing::info!("Deleted steam account {}", account.steam_id);

        Ok(format!("Steam account {} deleted successfully", account.steam_id))
    }
}
