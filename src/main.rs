use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use sqlx::SqlitePool;
use std::sync::Arc;
use utoipa::OpenApi;

use starpass_backend::auth::JwtManager;
use starpass_backend::config::AppConfig;
use starpass_backend::handlers;
use starpass_backend::openapi_config::{configure_openapi, ApiDoc};
use starpass_backend::repositories::{
    SqliteAccountRepository, SqliteSessionRepository, SqliteUserRepository,
};
use starpass_backend::services::{
    hash_password, AccountService, ReportService, SessionService, UserService,
};

/// Local development defaults: an admin login and the shared account set,
/// created only when the corresponding tables are empty.
async fn seed_defaults(pool: &SqlitePool, admin_password: &str) -> anyhow::Result<()> {
    let user_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    if user_count == 0 {
        let password_hash = hash_password(admin_password)?;
        sqlx::query(
            "INSERT INTO users (username, name, password_hash, role, created_at) VALUES (?, ?, ?, 'ADMIN', ?)",
        )
        .bind("admin")
        .bind("Admin")
        .bind(password_hash)
        .bind(chrono::Utc::now())
        .execute(pool)
        .await?;
        tracing::info!("Seeded default admin user");
    }

    let account_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM steam_accounts")
        .fetch_one(pool)
        .await?;
    if account_count == 0 {
        let accounts = [
            ("ponce", "CT"),
            ("nashax", "CT"),
            ("niyah", "CT"),
            ("money tree", "T"),
            ("intelek", "T"),
        ];
        for (steam_id, side) in accounts {
            sqlx::query("INSERT INTO steam_accounts (steam_id, side, created_at) VALUES (?, ?, ?)")
                .bind(steam_id)
                .bind(side)
                .bind(chrono::Utc::now())
                .execute(pool)
                .await?;
        }
        tracing::info!("Seeded default steam accounts");
    }

    Ok(())
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .init();

    let config = AppConfig::from_env();

    let pool = SqlitePool::connect(&config.database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    seed_defaults(&pool, &config.admin_password).await?;

    // Initialize repositories
    let account_repository = Arc::new(SqliteAccountRepository::new(pool.clone()));
    let session_repository = Arc::new(SqliteSessionRepository::new(pool.clone()));
    let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));

    // Initialize services with dependency injection
    let account_service = web::Data::new(AccountService::new(account_repository.clone()));
    let session_service = web::Data::new(SessionService::new(
        account_repository,
        session_repository.clone(),
    ));
    let report_service = web::Data::new(ReportService::new(session_repository));
    let user_service = web::Data::new(UserService::new(user_repository));

    let jwt_manager = web::Data::new(JwtManager::new(&config.jwt_secret));

    tracing::info!("Starpass server listening on http://{}", config.bind_address);
    tracing::info!(
        "API documentation: http://{}/swagger-ui/",
        config.bind_address
    );

    // Configure OpenAPI spec with Bearer auth (once, outside the closure)
    let openapi_spec = configure_openapi(ApiDoc::openapi());

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(jwt_manager.clone())
            .app_data(account_service.clone())
            .app_data(session_service.clone())
            .app_data(report_service.clone())
            .app_data(user_service.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .supports_credentials(),
            )
            .wrap(Logger::default())
            .service(
                utoipa_swagger_ui::SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi_spec.clone()),
            )
            .route("/api/login", web::post().to(handlers::login_api))
            .route("/api/logout", web::post().to(handlers::logout_api))
            .route("/api/accounts", web::get().to(handlers::list_accounts))
            .route("/api/accounts", web::post().to(handlers::create_account_api))
            .route(
                "/api/accounts/delete/{id}",
                web::post().to(handlers::delete_account),
            )
            .route(
                "/api/accounts/{steam_id}/last-stars",
                web::get().to(handlers::get_last_stars),
            )
            .route("/api/sessions", web::post().to(handlers::record_session_api))
            .route("/api/report/{date}", web::get().to(handlers::daily_report_api))
            .route("/api/users/add", web::post().to(handlers::add_user_api))
    })
    .bind(config.bind_address)?
    .run()
    .await?;

    Ok(())
}
