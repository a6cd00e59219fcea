use actix_web::{web, HttpResponse, Result};
use serde_json;
use utoipa;

use crate::auth::JwtManager;
use crate::middleware::auth::require_admin;
use crate::models::{AddUserForm, ErrorResponse, Role, ServiceError};
use crate::services::UserService;

#[utoipa::path(
    post,
    path = "/api/users/add",
    request_body = AddUserForm,
    responses(
        (status = 200, description = "User added successfully"),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse)
    )
)]
pub async fn add_user_api(
    user_service: web::Data<UserService>,
    form: web::Json<AddUserForm>,
    req: actix_web::HttpRequest,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    require_admin(&req, &jwt_manager)?;

    let role = if form.admin { Role::Admin } else { Role::User };
    let user = user_service
        .add_user(
            form.username.clone(),
            form.name.clone(),
            form.password.clone(),
            role,
        )
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": format!("User {} added successfully", user.username),
        "id": user.id
    })))
}
