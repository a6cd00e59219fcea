use actix_web::{http::StatusCode, test};
use serde_json::json;

mod common;
use common::TestApp;

#[actix_web::test]
async fn test_login_success() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({
            "username": "admin",
            "password": "admin"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert!(body["token"].is_string());
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["role"], "ADMIN");
    assert_eq!(body["name"], "Admin");
}

#[actix_web::test]
async fn test_login_invalid_credentials() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({
            "username": "admin",
            "password": "wrong_password"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn test_login_unknown_user() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({
            "username": "nobody",
            "password": "password"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_logout() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post().uri("/api/logout").to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
}

#[actix_web::test]
async fn test_add_user_requires_admin() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let token = test_app.login_as_recorder().await;

    let req = test::TestRequest::post()
        .uri("/api/users/add")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({
            "username": "newbie",
            "name": "New User",
            "password": "secret"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_admin_adds_user_who_can_log_in() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let token = test_app.login_as_admin().await;

    let req = test::TestRequest::post()
        .uri("/api/users/add")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({
            "username": "newbie",
            "name": "New User",
            "password": "secret"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let new_token = test_app.login("newbie", "secret").await;
    assert!(!new_token.is_empty());
}

#[actix_web::test]
async fn test_add_duplicate_user_rejected() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let token = test_app.login_as_admin().await;

    let req = test::TestRequest::post()
        .uri("/api/users/add")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({
            "username": "recorder",
            "name": "Duplicate",
            "password": "secret"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("already exists"));
}
