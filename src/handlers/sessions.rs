use actix_web::{web, HttpResponse, Result};
use chrono::{DateTime, Utc};
use utoipa;

use crate::auth::JwtManager;
use crate::middleware::auth::authenticate_request;
use crate::models::{
    ErrorResponse, RecordSessionForm, ServiceError, SessionInput, SessionResponse,
};
use crate::services::SessionService;

fn parse_rfc3339(value: &str, label: &str) -> Result<DateTime<Utc>, ServiceError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| ServiceError::ValidationError(format!("{} must be an RFC 3339 timestamp", label)))
}

#[utoipa::path(
    post,
    path = "/api/sessions",
    request_body = RecordSessionForm,
    responses(
        (status = 200, description = "Session recorded", body = SessionResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Account not found", body = ErrorResponse)
    )
)]
pub async fn record_session_api(
    session_service: web::Data<SessionService>,
    form: web::Json<RecordSessionForm>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    // Authentication comes before any persistence attempt
    let user = authenticate_request(&req, &jwt_manager)?;

    if form.steam_id.is_empty() || form.start_date.is_empty() || form.end_date.is_empty() {
        return Err(ServiceError::ValidationError(
            "Steam ID, start date, and end date are required".to_string(),
        ));
    }

    let start_date = parse_rfc3339(&form.start_date, "Start date")?;
    let end_date = parse_rfc3339(&form.end_date, "End date")?;

    // Domain object enforces the 0-40 star bounds
    let input = SessionInput::new(
        form.steam_id.clone(),
        start_date,
        end_date,
        form.stars_start,
        form.stars_end,
        form.purchased_pass,
    )
    .map_err(ServiceError::ValidationError)?;

    let session = session_service.record_session(user.id, input).await?;

    Ok(HttpResponse::Ok().json(SessionResponse {
        success: true,
        session,
    }))
}
