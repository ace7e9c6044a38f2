//! 评价管理接口集成测试

#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{Value, json};

use common::{bearer, create_admin, create_student_user};

fn review_body(reviewer: &str, rating: i32) -> Value {
    json!({
        "reviewerName": reviewer,
        "role": "Student",
        "rating": rating,
        "reviewText": "Clear explanations and patient pacing.",
        "courseTitle": "Algebra I",
    })
}

#[actix_web::test]
async fn test_student_submits_pending_review() {
    let ctx = common::setup().await;
    let student = create_student_user(&ctx).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/reviews")
        .insert_header(bearer(&student))
        .set_json(review_body("Sam Student", 4))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let review = &body["data"]["review"];
    assert_eq!(review["status"], "Pending");
    assert_eq!(review["rating"], 4);
    assert_eq!(review["courseTitle"], "Algebra I");
    assert!(review["date"].is_string());
}

#[actix_web::test]
async fn test_review_validation() {
    let ctx = common::setup().await;
    let student = create_student_user(&ctx).await;
    let app = init_app!(ctx);

    for rating in [0, 6] {
        let req = test::TestRequest::post()
            .uri("/api/reviews")
            .insert_header(bearer(&student))
            .set_json(review_body("Sam Student", rating))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 6002);
    }

    let mut body = review_body("Sam Student", 3);
    body["reviewText"] = json!("");
    let req = test::TestRequest::post()
        .uri("/api/reviews")
        .insert_header(bearer(&student))
        .set_json(body)
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );
}

#[actix_web::test]
async fn test_moderation_is_admin_only() {
    let ctx = common::setup().await;
    let admin = create_admin(&ctx).await;
    let student = create_student_user(&ctx).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/reviews")
        .insert_header(bearer(&student))
        .set_json(review_body("Sam Student", 2))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = body["data"]["review"]["id"].as_i64().expect("id");

    let req = test::TestRequest::put()
        .uri(&format!("/api/reviews/{id}"))
        .insert_header(bearer(&student))
        .set_json(json!({ "rating": 5 }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::FORBIDDEN
    );

    let req = test::TestRequest::patch()
        .uri(&format!("/api/reviews/{id}/status"))
        .insert_header(bearer(&student))
        .set_json(json!({ "status": "Published" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::FORBIDDEN
    );

    let req = test::TestRequest::patch()
        .uri(&format!("/api/reviews/{id}/status"))
        .insert_header(bearer(&admin))
        .set_json(json!({ "status": "Flagged" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["review"]["status"], "Flagged");

    let req = test::TestRequest::patch()
        .uri(&format!("/api/reviews/{id}/status"))
        .insert_header(bearer(&admin))
        .set_json(json!({ "status": "Deleted" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    let req = test::TestRequest::delete()
        .uri(&format!("/api/reviews/{id}"))
        .insert_header(bearer(&admin))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/reviews/{id}"))
        .insert_header(bearer(&student))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 6001);
}

#[actix_web::test]
async fn test_review_stats_and_rating_filter() {
    let ctx = common::setup().await;
    let admin = create_admin(&ctx).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/reviews/stats")
        .insert_header(bearer(&admin))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["total"], 0);
    assert_eq!(body["data"]["averageRating"], 0.0);
    assert_eq!(body["data"]["ratingDistribution"]["5"], 0);

    for (reviewer, rating) in [("Ann", 5), ("Ben", 5), ("Cy", 2)] {
        let req = test::TestRequest::post()
            .uri("/api/reviews")
            .insert_header(bearer(&admin))
            .set_json(review_body(reviewer, rating))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED
        );
    }

    let req = test::TestRequest::get()
        .uri("/api/reviews/stats")
        .insert_header(bearer(&admin))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let stats = &body["data"];
    assert_eq!(stats["total"], 3);
    assert_eq!(stats["pending"], 3);
    assert_eq!(stats["published"], 0);
    assert_eq!(stats["averageRating"], 4.0);
    assert_eq!(stats["ratingDistribution"]["5"], 2);
    assert_eq!(stats["ratingDistribution"]["2"], 1);
    assert_eq!(stats["ratingDistribution"]["1"], 0);

    let req = test::TestRequest::get()
        .uri("/api/reviews?rating=5&sortBy=reviewerName&order=asc")
        .insert_header(bearer(&admin))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let items = body["data"]["items"].as_array().expect("items");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["reviewerName"], "Ann");
    assert_eq!(items[1]["reviewerName"], "Ben");
}

#[actix_web::test]
async fn test_review_search() {
    let ctx = common::setup().await;
    let student = create_student_user(&ctx).await;
    let app = init_app!(ctx);

    let mut body = review_body("Zoë Hart", 5);
    body["courseTitle"] = json!("Organic Chemistry");
    let req = test::TestRequest::post()
        .uri("/api/reviews")
        .insert_header(bearer(&student))
        .set_json(body)
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let req = test::TestRequest::post()
        .uri("/api/reviews")
        .insert_header(bearer(&student))
        .set_json(review_body("Max Weber", 3))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    for keyword in ["chemistry", "ZO%C3%8B", "hart"] {
        let req = test::TestRequest::get()
            .uri(&format!("/api/reviews?search={keyword}"))
            .insert_header(bearer(&student))
            .to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(body["data"]["pagination"]["total"], 1, "search {keyword}");
        assert_eq!(body["data"]["items"][0]["reviewerName"], "Zoë Hart");
    }

    // 评价正文同样参与匹配
    let req = test::TestRequest::get()
        .uri("/api/reviews?search=PATIENT")
        .insert_header(bearer(&student))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["pagination"]["total"], 2);
}
