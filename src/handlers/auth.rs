use actix_web::{web, HttpResponse, Result};
use utoipa;

use crate::auth::{JwtManager, TOKEN_LIFETIME_SECS};
use crate::models::{ApiResponse, ErrorResponse, LoginForm, LoginResponse, ServiceError};
use crate::services::UserService;

#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginForm,
    responses(
        (status = 200, description = "Login successful - JWT token returned in response body", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    ),
    security()
)]
pub async fn login_api(
    user_service: web::Data<UserService>,
    form: web::Json<LoginForm>,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    let user = user_service
        .authenticate(&form.username, &form.password)
        .await?;

    let token = jwt_manager
        .generate_token(user.id, user.role)
        .map_err(|_| ServiceError::InternalError("Failed to generate token".to_string()))?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        token,
        expires_in: TOKEN_LIFETIME_SECS,
        name: user.name,
        role: user.role.to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/logout",
    responses(
        (status = 200, description = "Logout successful", body = ApiResponse)
    ),
    security()
)]
pub async fn logout_api() -> Result<HttpResponse, ServiceError> {
    // With JWT, logout is handled client-side by discarding the token
    Ok(HttpResponse::Ok().json(ApiResponse {
        success: true,
        message: "Logout successful - discard your token".to_string(),
    }))
}
