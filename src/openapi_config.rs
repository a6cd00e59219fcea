use std::collections::BTreeMap;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::auth::login_api,
        crate::handlers::auth::logout_api,
        crate::handlers::accounts::list_accounts,
        crate::handlers::accounts::create_account_api,
        crate::handlers::accounts::delete_account,
        crate::handlers::accounts::get_last_stars,
        crate::handlers::sessions::record_session_api,
        crate::handlers::report::daily_report_api,
        crate::handlers::users::add_user_api,
    ),
    components(schemas(
        models::LoginForm,
        models::AddUserForm,
        models::CreateAccountForm,
        models::RecordSessionForm,
        models::ApiResponse,
        models::ErrorResponse,
        models::LoginResponse,
        models::AccountsResponse,
        models::LastStarsResponse,
        models::SessionResponse,
        models::SessionDetail,
        models::UserReportData,
        models::DailyReportResponse,
        models::Side,
        models::SteamAccount,
        models::Pass,
        models::PassSession,
    ))
)]
pub struct ApiDoc;

pub fn configure_openapi(mut openapi: utoipa::openapi::OpenApi) -> utoipa::openapi::OpenApi {
    // Bearer token security scheme (HTTP Bearer type, not ApiKey)
    let mut security_schemes = BTreeMap::new();
    security_schemes.insert(
        "bearer_auth".to_string(),
        SecurityScheme::Http(
            HttpBuilder::new()
                .scheme(HttpAuthScheme::Bearer)
                .bearer_format("JWT")
                .description(Some("JWT token authorization"))
                .build(),
        ),
    );

    if let Some(components) = openapi.components.as_mut() {
        components.security_schemes = security_schemes;
    }

    // Global security requirement (endpoints with security() opt out)
    openapi.security = Some(vec![utoipa::openapi::security::SecurityRequirement::new(
        "bearer_auth",
        Vec::<String>::new(),
    )]);

    openapi
}
