//! 认证接口集成测试
//!
//! - POST /api/auth/register, /login, /refresh, /logout
//! - GET /api/auth/me, /verify-token
//! - /api/auth/admin/*
//! - /api/protected

#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{Value, json};
use tutorhub::models::users::entities::{UserRole, UserStatus};

use common::{TEST_PASSWORD, bearer, create_admin, create_tutor, create_user};

#[actix_web::test]
async fn test_register_defaults_to_student() {
    let ctx = common::setup().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "name": "  New Learner ",
            "email": "Learner@Example.COM",
            "password": TEST_PASSWORD
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["code"], 0);
    let user = &body["data"]["user"];
    assert_eq!(user["name"], "New Learner");
    assert_eq!(user["email"], "learner@example.com");
    assert_eq!(user["role"], "Student");
    assert_eq!(user["status"], "Active");
    assert!(user.get("passwordHash").is_none());
}

#[actix_web::test]
async fn test_register_rejects_admin_role_and_duplicates() {
    let ctx = common::setup().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "name": "Sneaky",
            "email": "sneaky@example.com",
            "password": TEST_PASSWORD,
            "role": "admin"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let payload = json!({
        "name": "Tutor One",
        "email": "tutor1@example.com",
        "password": TEST_PASSWORD,
        "role": "tutor"
    });
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], 3004);
}

#[actix_web::test]
async fn test_register_validates_input() {
    let ctx = common::setup().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({"name": "Weak", "email": "weak@example.com", "password": "short"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({"name": "Bad", "email": "not-an-email", "password": TEST_PASSWORD}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // 请求体格式错误
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1001);
}

#[actix_web::test]
async fn test_login_sets_cookies_and_me_works() {
    let ctx = common::setup().await;
    let admin = create_admin(&ctx).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"email": "ADA@example.com", "password": TEST_PASSWORD}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cookies: Vec<_> = resp.response().cookies().map(|c| c.into_owned()).collect();
    let access = cookies
        .iter()
        .find(|c| c.name() == "access_token")
        .expect("access cookie")
        .clone();
    assert!(cookies.iter().any(|c| c.name() == "refresh_token"));
    assert_eq!(access.http_only(), Some(true));

    let body: Value = test::read_body_json(resp).await;
    assert!(body["data"]["accessToken"].as_str().is_some());
    assert_eq!(body["data"]["expiresIn"], 15 * 60);
    assert_eq!(body["data"]["user"]["id"], admin.id);
    assert!(body["data"]["user"]["lastLogin"].is_string());

    // cookie 即可完成认证
    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .cookie(access)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["user"]["email"], "ada@example.com");
}

#[actix_web::test]
async fn test_login_failures() {
    let ctx = common::setup().await;
    create_user(
        &ctx,
        "Idle User",
        "idle@example.com",
        UserRole::Student,
        UserStatus::Inactive,
    )
    .await;
    create_tutor(&ctx).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"email": "tom@example.com", "password": "WrongPass123"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"email": "nobody@example.com", "password": TEST_PASSWORD}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"email": "idle@example.com", "password": TEST_PASSWORD}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 2004);
}

#[actix_web::test]
async fn test_admin_login_only_for_admins() {
    let ctx = common::setup().await;
    create_admin(&ctx).await;
    create_tutor(&ctx).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/auth/admin/login")
        .set_json(json!({"email": "tom@example.com", "password": TEST_PASSWORD}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::post()
        .uri("/api/auth/admin/login")
        .set_json(json!({"email": "ada@example.com", "password": TEST_PASSWORD}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_admin_register_requires_admin() {
    let ctx = common::setup().await;
    let admin = create_admin(&ctx).await;
    let tutor = create_tutor(&ctx).await;
    let app = init_app!(ctx);

    let payload = json!({
        "name": "Second Admin",
        "email": "second@example.com",
        "password": TEST_PASSWORD
    });

    let req = test::TestRequest::post()
        .uri("/api/auth/admin/register")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/auth/admin/register")
        .insert_header(bearer(&tutor))
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::post()
        .uri("/api/auth/admin/register")
        .insert_header(bearer(&admin))
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["user"]["role"], "Admin");
}

#[actix_web::test]
async fn test_refresh_and_logout() {
    let ctx = common::setup().await;
    create_tutor(&ctx).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/auth/refresh")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"email": "tom@example.com", "password": TEST_PASSWORD, "rememberMe": true}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let refresh = resp
        .response()
        .cookies()
        .find(|c| c.name() == "refresh_token")
        .map(|c| c.into_owned())
        .expect("refresh cookie");

    let req = test::TestRequest::post()
        .uri("/api/auth/refresh")
        .cookie(refresh)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.response().cookies().any(|c| c.name() == "access_token"));
    let body: Value = test::read_body_json(resp).await;
    assert!(body["data"]["accessToken"].as_str().is_some());

    let req = test::TestRequest::post().uri("/api/auth/logout").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cleared: Vec<_> = resp.response().cookies().map(|c| c.into_owned()).collect();
    assert_eq!(cleared.len(), 2);
    assert!(cleared.iter().all(|c| c.value().is_empty()));
}

#[actix_web::test]
async fn test_protected_route_requires_token() {
    let ctx = common::setup().await;
    let admin = create_admin(&ctx).await;
    let tutor = create_tutor(&ctx).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get().uri("/api/protected").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/api/auth/verify-token")
        .insert_header(bearer(&tutor))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/protected")
        .insert_header(bearer(&tutor))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/api/protected/admin")
        .insert_header(bearer(&tutor))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::get()
        .uri("/api/protected/admin")
        .insert_header(bearer(&admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["user"]["role"], "Admin");
}

#[actix_web::test]
async fn test_invalid_token_rejected() {
    let ctx = common::setup().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(("Authorization", "Bearer not-a-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 2001);
}
