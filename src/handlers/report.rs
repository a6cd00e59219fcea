use actix_web::{web, HttpResponse, Result};
use chrono::NaiveDate;
use utoipa;

use crate::auth::JwtManager;
use crate::middleware::auth::require_admin;
use crate::models::{DailyReportResponse, ErrorResponse, ServiceError};
use crate::services::ReportService;

#[utoipa::path(
    get,
    path = "/api/report/{date}",
    params(
        ("date" = String, Path, description = "Calendar day in YYYY-MM-DD format")
    ),
    responses(
        (status = 200, description = "Daily session report", body = DailyReportResponse),
        (status = 400, description = "Invalid date", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse)
    )
)]
pub async fn daily_report_api(
    report_service: web::Data<ReportService>,
    path: web::Path<String>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;

    let date = NaiveDate::parse_from_str(&path.into_inner(), "%Y-%m-%d")
        .map_err(|_| ServiceError::ValidationError("Date must be in YYYY-MM-DD format".to_string()))?;

    let report = report_service.daily_report(date).await?;

    Ok(HttpResponse::Ok().json(DailyReportResponse {
        success: true,
        date: report.date.to_string(),
        count: report.count,
        users: report.users,
    }))
}
