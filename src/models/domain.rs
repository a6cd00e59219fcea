use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stars on a battle pass run from 0 to 40; buying the pass resets the bar,
/// so a purchase session always spans a full 40 stars.
pub const PASS_STAR_SPAN: i64 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum Side {
    Ct,
    T,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Ct => write!(f, "CT"),
            Side::T => write!(f, "T"),
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct SteamAccount {
    pub id: i64,
    pub steam_id: String,
    pub side: Side,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct Pass {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub current_stars: i64,
    pub total_stars: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct PassSession {
    pub id: i64,
    pub pass_id: i64,
    pub steam_account_id: i64,
    pub user_id: i64,
    pub stars_start: i64,
    pub stars_end: i64,
    pub stars_earned: i64,
    pub purchased_pass: bool,
    pub start_date: DateTime<Utc>,
    pub complete_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Derived star accounting for one session, computed server-side and never
/// trusted from client input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarsOutcome {
    pub stars_end: i64,
    pub stars_earned: i64,
    /// Total star count recorded on the backing Pass.
    pub total_stars: i64,
}

impl StarsOutcome {
    /// Applies the derivation rules: a mid-session pass purchase normalizes
    /// the end value to `stars_start + 40` and always earns the full 40;
    /// otherwise the earned count is the raw delta.
    pub fn derive(stars_start: i64, stars_end: i64, purchased_pass: bool) -> Self {
        if purchased_pass {
            Self {
                stars_end: stars_start + PASS_STAR_SPAN,
                stars_earned: PASS_STAR_SPAN,
                total_stars: stars_start + PASS_STAR_SPAN,
            }
        } else {
            Self {
                stars_end,
                stars_earned: stars_end - stars_start,
                total_stars: stars_end,
            }
        }
    }
}

/// Fields for a Pass row about to be inserted.
#[derive(Debug, Clone)]
pub struct NewPass {
    pub name: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub current_stars: i64,
    pub total_stars: i64,
    pub user_id: i64,
}

/// Fields for a Session row about to be inserted, alongside its Pass.
#[derive(Debug, Clone)]
pub struct NewSession {
    pub steam_account_id: i64,
    pub user_id: i64,
    pub stars_start: i64,
    pub stars_end: i64,
    pub stars_earned: i64,
    pub purchased_pass: bool,
    pub start_date: DateTime<Utc>,
    pub complete_date: DateTime<Utc>,
}

/// Validated input for recording one session, before star derivation.
#[derive(Debug, Clone)]
pub struct SessionInput {
    pub steam_id: String,
    pub start_date: DateTime<Utc>,
    pub complete_date: DateTime<Utc>,
    pub stars_start: i64,
    pub stars_end: i64,
    pub purchased_pass: bool,
}

impl SessionInput {
    pub fn new(
        steam_id: String,
        start_date: DateTime<Utc>,
        complete_date: DateTime<Utc>,
        stars_start: i64,
        stars_end: i64,
        purchased_pass: bool,
    ) -> Result<Self, String> {
        if steam_id.trim().is_empty() {
            return Err("Steam ID, start date, and end date are required".to_string());
        }

        for (label, stars) in [("Stars start", stars_start), ("Stars end", stars_end)] {
            if !(0..=PASS_STAR_SPAN).contains(&stars) {
                return Err(format!(
                    "{} must be between 0 and {}, got {}",
                    label, PASS_STAR_SPAN, stars
                ));
            }
        }

        Ok(Self {
            steam_id,
            start_date,
            complete_date,
            stars_start,
            stars_end,
            purchased_pass,
        })
    }
}
