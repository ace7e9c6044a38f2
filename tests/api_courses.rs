//! 课程管理接口集成测试

#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{Value, json};

use common::{bearer, create_admin, create_student_user, create_tutor};

fn course_body(title: &str, category: &str, price: f64) -> Value {
    json!({
        "title": title,
        "category": category,
        "tutorName": "Tom Tutor",
        "price": price,
    })
}

#[actix_web::test]
async fn test_create_course_defaults_to_draft() {
    let ctx = common::setup().await;
    let tutor = create_tutor(&ctx).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/courses")
        .insert_header(bearer(&tutor))
        .set_json(course_body("Algebra I", "Math", 49.5))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let course = &body["data"]["course"];
    assert_eq!(course["title"], "Algebra I");
    assert_eq!(course["tutorName"], "Tom Tutor");
    assert_eq!(course["status"], "Draft");
    assert_eq!(course["price"], 49.5);
}

#[actix_web::test]
async fn test_course_validation() {
    let ctx = common::setup().await;
    let tutor = create_tutor(&ctx).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/courses")
        .insert_header(bearer(&tutor))
        .set_json(course_body("Physics", "Science", -1.0))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 5002);

    let req = test::TestRequest::post()
        .uri("/api/courses")
        .insert_header(bearer(&tutor))
        .set_json(course_body("   ", "Science", 10.0))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 5002);
}

#[actix_web::test]
async fn test_toggle_course_status() {
    let ctx = common::setup().await;
    let admin = create_admin(&ctx).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/courses")
        .insert_header(bearer(&admin))
        .set_json(course_body("Chemistry", "Science", 30.0))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = body["data"]["course"]["id"].as_i64().expect("id");

    let req = test::TestRequest::patch()
        .uri(&format!("/api/courses/{id}/toggle-status"))
        .insert_header(bearer(&admin))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["course"]["status"], "Published");

    let req = test::TestRequest::patch()
        .uri(&format!("/api/courses/{id}/toggle-status"))
        .insert_header(bearer(&admin))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["course"]["status"], "Draft");

    // 已归档课程切换后为 Published
    let req = test::TestRequest::put()
        .uri(&format!("/api/courses/{id}"))
        .insert_header(bearer(&admin))
        .set_json(json!({ "status": "Archived" }))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["course"]["status"], "Archived");

    let req = test::TestRequest::patch()
        .uri(&format!("/api/courses/{id}/toggle-status"))
        .insert_header(bearer(&admin))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["course"]["status"], "Published");
}

#[actix_web::test]
async fn test_course_stats_and_filters() {
    let ctx = common::setup().await;
    let tutor = create_tutor(&ctx).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/courses/stats")
        .insert_header(bearer(&tutor))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["total"], 0);
    assert_eq!(body["data"]["averagePrice"], 0.0);

    for (title, category, price, status) in [
        ("Geometry", "Math", 10.0, "Published"),
        ("Calculus", "Math", 30.0, "Draft"),
        ("Biology", "Science", 20.0, "Archived"),
    ] {
        let mut body = course_body(title, category, price);
        body["status"] = json!(status);
        let req = test::TestRequest::post()
            .uri("/api/courses")
            .insert_header(bearer(&tutor))
            .set_json(body)
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED
        );
    }

    let req = test::TestRequest::get()
        .uri("/api/courses/stats")
        .insert_header(bearer(&tutor))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["total"], 3);
    assert_eq!(body["data"]["published"], 1);
    assert_eq!(body["data"]["draft"], 1);
    assert_eq!(body["data"]["archived"], 1);
    assert_eq!(body["data"]["averagePrice"], 20.0);

    let req = test::TestRequest::get()
        .uri("/api/courses?category=Math&sortBy=price&order=desc")
        .insert_header(bearer(&tutor))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let items = body["data"]["items"].as_array().expect("items");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "Calculus");
    assert_eq!(items[1]["title"], "Geometry");

    let req = test::TestRequest::get()
        .uri("/api/courses?search=bio")
        .insert_header(bearer(&tutor))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["pagination"]["total"], 1);
    assert_eq!(body["data"]["items"][0]["title"], "Biology");
}

#[actix_web::test]
async fn test_student_cannot_manage_courses() {
    let ctx = common::setup().await;
    let student = create_student_user(&ctx).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/courses")
        .insert_header(bearer(&student))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/courses")
        .insert_header(bearer(&student))
        .set_json(course_body("Hacking", "Misc", 0.0))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 2003);
}

#[actix_web::test]
async fn test_delete_course() {
    let ctx = common::setup().await;
    let tutor = create_tutor(&ctx).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/courses")
        .insert_header(bearer(&tutor))
        .set_json(course_body("History", "Humanities", 15.0))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = body["data"]["course"]["id"].as_i64().expect("id");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/courses/{id}"))
        .insert_header(bearer(&tutor))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/courses/{id}"))
        .insert_header(bearer(&tutor))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 5001);
}
