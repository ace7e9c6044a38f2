//! 个人设置与系统接口集成测试

#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{Value, json};

use common::{bearer, create_tutor};

#[actix_web::test]
async fn test_settings_defaults() {
    let ctx = common::setup().await;
    let tutor = create_tutor(&ctx).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get().uri("/api/settings").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let req = test::TestRequest::get()
        .uri("/api/settings")
        .insert_header(bearer(&tutor))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let settings = &body["data"]["settings"];
    assert_eq!(settings["profile"]["displayName"], "Tom Tutor");
    assert_eq!(settings["preferences"]["theme"], "system");
    assert_eq!(settings["preferences"]["itemsPerPage"], 10);
    assert_eq!(settings["notifications"]["email"], true);
    assert_eq!(settings["security"]["twoFactorEnabled"], false);
    assert!(settings["updatedAt"].is_null());
}

#[actix_web::test]
async fn test_update_settings_persists_section() {
    let ctx = common::setup().await;
    let tutor = create_tutor(&ctx).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::put()
        .uri("/api/settings")
        .insert_header(bearer(&tutor))
        .set_json(json!({
            "preferences": { "theme": "dark", "itemsPerPage": 25 },
            "security": { "twoFactorEnabled": true },
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["settings"]["preferences"]["theme"], "dark");

    let req = test::TestRequest::get()
        .uri("/api/settings")
        .insert_header(bearer(&tutor))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let settings = &body["data"]["settings"];
    assert_eq!(settings["preferences"]["theme"], "dark");
    assert_eq!(settings["preferences"]["itemsPerPage"], 25);
    // 未提交的分区保持默认
    assert_eq!(settings["profile"]["timezone"], "UTC");
    assert_eq!(settings["security"]["twoFactorEnabled"], false);
    assert!(settings["updatedAt"].is_string());
}

#[actix_web::test]
async fn test_update_settings_validation() {
    let ctx = common::setup().await;
    let tutor = create_tutor(&ctx).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::put()
        .uri("/api/settings")
        .insert_header(bearer(&tutor))
        .set_json(json!({ "preferences": { "itemsPerPage": 4 } }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 7001);

    let req = test::TestRequest::put()
        .uri("/api/settings")
        .insert_header(bearer(&tutor))
        .set_json(json!({ "profile": { "bio": "x".repeat(501) } }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 7001);
}

#[actix_web::test]
async fn test_health_is_public() {
    let ctx = common::setup().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["data"]["uptimeSeconds"].as_i64().expect("uptime") >= 0);
}

#[actix_web::test]
async fn test_missing_upload_returns_not_found() {
    let ctx = common::setup().await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/uploads/avatars/does-not-exist.png")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 8001);
}
