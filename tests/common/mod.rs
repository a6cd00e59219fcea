use actix_web::{test, web, App};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::sync::Arc;
use tempfile::TempDir;

use starpass_backend::{
    auth::JwtManager,
    handlers,
    repositories::{
        account_repository::SqliteAccountRepository, session_repository::SqliteSessionRepository,
        user_repository::SqliteUserRepository,
    },
    services::{
        account_service::AccountService, report_service::ReportService,
        session_service::SessionService, user_service::hash_password, user_service::UserService,
    },
};

pub struct TestApp {
    pub pool: SqlitePool,
    pub jwt_manager: JwtManager,
    #[allow(dead_code)]
    pub temp_dir: TempDir,
}

impl TestApp {
    async fn seed_users(pool: &SqlitePool) {
        // admin/admin plus a plain recorder/recorder login
        for (username, name, password, role) in [
            ("admin", "Admin", "admin", "ADMIN"),
            ("recorder", "Recorder One", "recorder", "USER"),
        ] {
            let password_hash = hash_password(password).unwrap();
            sqlx::query(
                "INSERT INTO users (username, name, password_hash, role, created_at) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(username)
            .bind(name)
            .bind(password_hash)
            .bind(role)
            .bind(chrono::Utc::now())
            .execute(pool)
            .await
            .expect("Failed to seed user");
        }
    }

    async fn seed_accounts(pool: &SqlitePool) {
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
                .await
                .expect("Failed to seed steam account");
        }
    }

    pub async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let database_url = format!("sqlite://{}?mode=rwc", db_path.display());

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(&database_url)
            .await
            .expect("Failed to create database pool");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        Self::seed_users(&pool).await;
        Self::seed_accounts(&pool).await;

        let jwt_manager = JwtManager::new("test_secret_key");

        Self {
            pool,
            jwt_manager,
            temp_dir,
        }
    }

    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let account_repository = Arc::new(SqliteAccountRepository::new(self.pool.clone()));
        let session_repository = Arc::new(SqliteSessionRepository::new(self.pool.clone()));
        let user_repository = Arc::new(SqliteUserRepository::new(self.pool.clone()));

        let account_service = web::Data::new(AccountService::new(account_repository.clone()));
        let session_service = web::Data::new(SessionService::new(
            account_repository,
            session_repository.clone(),
        ));
        let report_service = web::Data::new(ReportService::new(session_repository));
        let user_service = web::Data::new(UserService::new(user_repository));
        let jwt_manager = web::Data::new(self.jwt_manager.clone());

        App::new()
            .app_data(account_service)
            .app_data(session_service)
            .app_data(report_service)
            .app_data(user_service)
            .app_data(jwt_manager)
            .app_data(web::Data::new(self.pool.clone()))
            .route("/api/login", web::post().to(handlers::auth::login_api))
            .route("/api/logout", web::post().to(handlers::auth::logout_api))
            .route(
                "/api/accounts",
                web::get().to(handlers::accounts::list_accounts),
            )
            .route(
                "/api/accounts",
                web::post().to(handlers::accounts::create_account_api),
            )
            .route(
                "/api/accounts/delete/{id}",
                web::post().to(handlers::accounts::delete_account),
            )
            .route(
                "/api/accounts/{steam_id}/last-stars",
                web::get().to(handlers::accounts::get_last_stars),
            )
            .route(
                "/api/sessions",
                web::post().to(handlers::sessions::record_session_api),
            )
            .route(
                "/api/report/{date}",
                web::get().to(handlers::report::daily_report_api),
            )
            .route(
                "/api/users/add",
                web::post().to(handlers::users::add_user_api),
            )
    }

    pub async fn login(&self, username: &str, password: &str) -> String {
        let app = test::init_service(self.create_app()).await;

        let login_req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(serde_json::json!({
                "username": username,
                "password": password
            }))
            .to_request();

        let resp = test::call_service(&app, login_req).await;
        let body: serde_json::Value = test::read_body_json(resp).await;

        body["token"].as_str().unwrap().to_string()
    }

    pub async fn login_as_admin(&self) -> String {
        self.login("admin", "admin").await
    }

    pub async fn login_as_recorder(&self) -> String {
        self.login("recorder", "recorder").await
    }
}

/// Request body for recording a session against `steam_id`, spanning the
/// usual eight-day pass window.
#[allow(dead_code)]
pub fn session_body(
    steam_id: &str,
    stars_start: i64,
    stars_end: i64,
    purchased_pass: bool,
) -> serde_json::Value {
    let start = chrono::Utc::now();
    let end = start + chrono::Duration::days(8);
    serde_json::json!({
        "steam_id": steam_id,
        "start_date": start.to_rfc3339(),
        "end_date": end.to_rfc3339(),
        "stars_start": stars_start,
        "stars_end": stars_end,
        "purchased_pass": purchased_pass
    })
}
