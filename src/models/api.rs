use crate::models::domain::{PassSession, Side, SteamAccount};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// REQUEST TYPES
// =============================================================================

#[derive(Deserialize, ToSchema)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct AddUserForm {
    pub username: String,
    pub name: String,
    pub password: String,
    #[serde(default)]
    pub admin: bool,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateAccountForm {
    pub steam_id: String,
    pub side: Side,
}

#[derive(Deserialize, ToSchema)]
pub struct RecordSessionForm {
    pub steam_id: String,
    pub start_date: String,
    pub end_date: String,
    pub stars_start: i64,
    pub stars_end: i64,
    #[serde(default)]
    pub purchased_pass: bool,
}

#[derive(Deserialize, ToSchema)]
pub struct AccountFilterQuery {
    pub side: Option<Side>,
}

// =============================================================================
// RESPONSE TYPES
// =============================================================================

// Common response types
#[derive(Serialize, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

// Authentication responses
#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub expires_in: u64, // seconds
    pub name: String,
    pub role: String,
}

// Account responses
#[derive(Serialize, ToSchema)]
pub struct AccountsResponse {
    pub success: bool,
    pub accounts: Vec<SteamAccount>,
}

#[derive(Serialize, ToSchema)]
pub struct LastStarsResponse {
    pub success: bool,
    pub steam_id: String,
    pub stars: i64,
}

// Session responses
#[derive(Serialize, ToSchema)]
pub struct SessionResponse {
    pub success: bool,
    pub session: PassSession,
}

// Daily report responses
#[derive(Serialize, ToSchema)]
pub struct SessionDetail {
    pub stars_start: i64,
    pub stars_end: i64,
    pub stars_earned: i64,
    pub created_at: DateTime<Utc>,
    pub purchased_pass: bool,
}

#[derive(Serialize, ToSchema)]
pub struct UserReportData {
    pub id: i64,
    pub name: String,
    pub session_count: i64,
    pub total_stars_earned: i64,
    pub sessions: Vec<SessionDetail>,
}

#[derive(Serialize, ToSchema)]
pub struct DailyReportResponse {
    pub success: bool,
    pub date: String,
    pub count: i64,
    pub users: Vec<UserReportData>,
}
