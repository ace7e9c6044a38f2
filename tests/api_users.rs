//! 用户管理接口集成测试（仅管理员）

#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{Value, json};
use tutorhub::models::users::entities::{UserRole, UserStatus};

use common::{TEST_PASSWORD, bearer, create_admin, create_student_user, create_user};

#[actix_web::test]
async fn test_users_require_admin() {
    let ctx = common::setup().await;
    let student = create_student_user(&ctx).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get().uri("/api/users").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/api/users")
        .insert_header(bearer(&student))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 2003);
}

#[actix_web::test]
async fn test_list_filter_search_and_paginate() {
    let ctx = common::setup().await;
    let admin = create_admin(&ctx).await;
    for i in 0..5 {
        create_user(
            &ctx,
            &format!("Tutor {i}"),
            &format!("tutor{i}@example.com"),
            UserRole::Tutor,
            if i % 2 == 0 {
                UserStatus::Active
            } else {
                UserStatus::Trial
            },
        )
        .await;
    }
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/users?role=tutor&perPage=2&page=3&sortBy=name&order=asc")
        .insert_header(bearer(&admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let items = body["data"]["items"].as_array().expect("items");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Tutor 4");
    assert_eq!(body["data"]["pagination"]["total"], 5);
    assert_eq!(body["data"]["pagination"]["totalPages"], 3);
    assert_eq!(body["data"]["pagination"]["pageSize"], 2);

    let req = test::TestRequest::get()
        .uri("/api/users?status=Trial")
        .insert_header(bearer(&admin))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let items = body["data"]["items"].as_array().expect("items");
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|u| u["status"] == "Trial"));

    let req = test::TestRequest::get()
        .uri("/api/users?search=TUTOR3")
        .insert_header(bearer(&admin))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["pagination"]["total"], 1);

    // LIKE 通配符按字面匹配
    let req = test::TestRequest::get()
        .uri("/api/users?search=%25")
        .insert_header(bearer(&admin))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["pagination"]["total"], 0);

    // 页码超出范围返回空列表
    let req = test::TestRequest::get()
        .uri("/api/users?page=50")
        .insert_header(bearer(&admin))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert!(body["data"]["items"].as_array().expect("items").is_empty());

    let req = test::TestRequest::get()
        .uri("/api/users?sortBy=password")
        .insert_header(bearer(&admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_user_stats() {
    let ctx = common::setup().await;
    let admin = create_admin(&ctx).await;
    create_student_user(&ctx).await;
    create_user(
        &ctx,
        "Trial Tutor",
        "trial@example.com",
        UserRole::Tutor,
        UserStatus::Trial,
    )
    .await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/users/stats")
        .insert_header(bearer(&admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let stats = &body["data"];
    assert_eq!(stats["total"], 3);
    assert_eq!(stats["byRole"]["admin"], 1);
    assert_eq!(stats["byRole"]["student"], 1);
    assert_eq!(stats["byRole"]["tutor"], 1);
    assert_eq!(stats["byStatus"]["active"], 2);
    assert_eq!(stats["byStatus"]["trial"], 1);
    assert_eq!(stats["byStatus"]["inactive"], 0);
}

#[actix_web::test]
async fn test_create_update_and_delete_user() {
    let ctx = common::setup().await;
    let admin = create_admin(&ctx).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/users")
        .insert_header(bearer(&admin))
        .set_json(json!({
            "name": "Fresh Tutor",
            "email": "fresh@example.com",
            "password": TEST_PASSWORD,
            "role": "Tutor",
            "status": "trial"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let id = body["data"]["user"]["id"].as_i64().expect("id");
    assert_eq!(body["data"]["user"]["status"], "Trial");

    let req = test::TestRequest::put()
        .uri(&format!("/api/users/{id}"))
        .insert_header(bearer(&admin))
        .set_json(json!({"name": "Renamed Tutor"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["user"]["name"], "Renamed Tutor");
    assert_eq!(body["data"]["user"]["email"], "fresh@example.com");

    // 邮箱冲突
    let req = test::TestRequest::put()
        .uri(&format!("/api/users/{id}"))
        .insert_header(bearer(&admin))
        .set_json(json!({"email": "ada@example.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/users/{id}"))
        .insert_header(bearer(&admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("data").is_none());

    let req = test::TestRequest::get()
        .uri(&format!("/api/users/{id}"))
        .insert_header(bearer(&admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/users/{id}"))
        .insert_header(bearer(&admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_admin_cannot_remove_or_toggle_self() {
    let ctx = common::setup().await;
    let admin = create_admin(&ctx).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/users/{}", admin.id))
        .insert_header(bearer(&admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::patch()
        .uri(&format!("/api/users/{}/toggle-status", admin.id))
        .insert_header(bearer(&admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::put()
        .uri(&format!("/api/users/{}", admin.id))
        .insert_header(bearer(&admin))
        .set_json(json!({"role": "Student"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_toggle_status_persists_and_blocks_cached_session() {
    let ctx = common::setup().await;
    let admin = create_admin(&ctx).await;
    let student = create_student_user(&ctx).await;
    let app = init_app!(ctx);

    // 先访问一次，让用户进入认证缓存
    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(bearer(&student))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::patch()
        .uri(&format!("/api/users/{}/toggle-status", student.id))
        .insert_header(bearer(&admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["user"]["status"], "Inactive");

    let req = test::TestRequest::get()
        .uri(&format!("/api/users/{}", student.id))
        .insert_header(bearer(&admin))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["user"]["status"], "Inactive");

    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(bearer(&student))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::patch()
        .uri(&format!("/api/users/{}/toggle-status", student.id))
        .insert_header(bearer(&admin))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["user"]["status"], "Active");
}

#[actix_web::test]
async fn test_invalid_path_id() {
    let ctx = common::setup().await;
    let admin = create_admin(&ctx).await;
    let app = init_app!(ctx);

    for uri in ["/api/users/abc", "/api/users/0", "/api/users/-3"] {
        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(bearer(&admin))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[actix_web::test]
async fn test_delete_user_removes_settings() {
    let ctx = common::setup().await;
    let admin = create_admin(&ctx).await;
    let tutor = create_user(
        &ctx,
        "Tom Tutor",
        "tom@example.com",
        UserRole::Tutor,
        UserStatus::Active,
    )
    .await;
    let app = init_app!(ctx);

    let req = test::TestRequest::put()
        .uri("/api/settings")
        .insert_header(bearer(&tutor))
        .set_json(json!({ "preferences": { "theme": "dark" } }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    assert!(
        ctx.storage
            .get_user_settings(tutor.id)
            .await
            .expect("load settings")
            .is_some()
    );

    let req = test::TestRequest::delete()
        .uri(&format!("/api/users/{}", tutor.id))
        .insert_header(bearer(&admin))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    // 设置随用户级联删除
    assert!(
        ctx.storage
            .get_user_settings(tutor.id)
            .await
            .expect("load settings")
            .is_none()
    );
}

#[actix_web::test]
async fn test_oversized_page_is_empty() {
    let ctx = common::setup().await;
    let admin = create_admin(&ctx).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/users?page=9223372036854775807&perPage=100")
        .insert_header(bearer(&admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["data"]["items"].as_array().expect("items").is_empty());
    assert_eq!(body["data"]["pagination"]["total"], 1);
}
