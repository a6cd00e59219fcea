use actix_web::{web, HttpResponse, Result};
use serde_json;
use utoipa;

use crate::auth::JwtManager;
use crate::middleware::auth::{authenticate_request, require_admin};
use crate::models::{
    AccountFilterQuery, AccountsResponse, CreateAccountForm, ErrorResponse, LastStarsResponse,
    ServiceError, Side,
};
use crate::services::{AccountService, SessionService};

#[utoipa::path(
    get,
    path = "/api/accounts",
    params(
        ("side" = Option<Side>, Query, description = "Filter accounts by team side (CT or T)")
    ),
    responses(
        (status = 200, description = "Accounts retrieved", body = AccountsResponse),
        (status = 500, description = "Failed to fetch accounts", body = ErrorResponse)
    ),
    security()
)]
pub async fn list_accounts(
    account_service: web::Data<AccountService>,
    query: web::Query<AccountFilterQuery>,
) -> Result<HttpResponse, ServiceError> {
    let accounts = account_service.list_accounts(query.side).await?;

    Ok(HttpResponse::Ok().json(AccountsResponse {
        success: true,
        accounts,
    }))
}

#[utoipa::path(
    post,
    path = "/api/accounts",
    request_body = CreateAccountForm,
    responses(
        (status = 200, description = "Account created"),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse)
    )
)]
pub async fn create_account_api(
    account_service: web::Data<AccountService>,
    form: web::Json<CreateAccountForm>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;

    let account = account_service
        .create_account(form.steam_id.clone(), form.side)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "account": account
    })))
}

#[utoipa::path(
    post,
    path = "/api/accounts/delete/{id}",
    params(
        ("id" = i64, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Account deleted"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
        (status = 404, description = "Account not found", body = ErrorResponse)
    )
)]
pub async fn delete_account(
    account_service: web::Data<AccountService>,
    path: web::Path<i64>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;

    let account_id = path.into_inner();
    let message = account_service.delete_account(account_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": message
    })))
}

#[utoipa::path(
    get,
    path = "/api/accounts/{steam_id}/last-stars",
    params(
        ("steam_id" = String, Path, description = "Account external identifier")
    ),
    responses(
        (status = 200, description = "Last known stars retrieved", body = LastStarsResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Account not found", body = ErrorResponse)
    )
)]
pub async fn get_last_stars(
    session_service: web::Data<SessionService>,
    path: web::Path<String>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    authenticate_request(&req, &jwt_manager)?;

    let steam_id = path.into_inner();
    let stars = session_service.last_known_stars(&steam_id).await?;

    Ok(HttpResponse::Ok().json(LastStarsResponse {
        success: true,
        steam_id,
        stars,
    }))
}
