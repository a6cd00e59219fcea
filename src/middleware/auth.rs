use crate::auth::{verify_jwt, JwtManager};
use crate::models::{AuthenticatedUser, ServiceError};

/// Resolves the calling identity (id + role) from the request, once per
/// protected operation.
pub fn authenticate_request(
    req: &actix_web::HttpRequest,
    jwt_manager: &JwtManager,
) -> Result<AuthenticatedUser, ServiceError> {
    verify_jwt(req, jwt_manager)
        .map_err(|_| ServiceError::AuthenticationError("Not authenticated".to_string()))
}

/// Like `authenticate_request`, but additionally requires the ADMIN role.
/// Not-logged-in and not-an-admin surface as distinct errors (401 vs 403).
pub fn require_admin(
    req: &actix_web::HttpRequest,
    jwt_manager: &JwtManager,
) -> Result<AuthenticatedUser, ServiceError> {
    let user = authenticate_request(req, jwt_manager)?;
    if !user.is_admin() {
        return Err(ServiceError::Forbidden(
            "Admin access required".to_string(),
        ));
    }
    Ok(user)
}
