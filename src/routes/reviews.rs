use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, guard, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::reviews::requests::{
    CreateReviewRequest, ReviewListParams, UpdateReviewRequest, UpdateReviewStatusRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ReviewService;
use crate::utils::SafeIDI64;

static REVIEW_SERVICE: Lazy<ReviewService> = Lazy::new(ReviewService::new_lazy);

pub async fn list_reviews(
    req: HttpRequest,
    query: web::Query<ReviewListParams>,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE.list_reviews(query.into_inner(), &req).await
}

pub async fn get_review_stats(req: HttpRequest) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE.get_review_stats(&req).await
}

pub async fn create_review(
    req: HttpRequest,
    review_data: web::Json<CreateReviewRequest>,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE
        .create_review(review_data.into_inner(), &req)
        .await
}

pub async fn get_review(req: HttpRequest, review_id: SafeIDI64) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE.get_review(review_id.0, &req).await
}

pub async fn update_review(
    req: HttpRequest,
    review_id: SafeIDI64,
    update_data: web::Json<UpdateReviewRequest>,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE
        .update_review(review_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_review(req: HttpRequest, review_id: SafeIDI64) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE.delete_review(review_id.0, &req).await
}

pub async fn set_review_status(
    req: HttpRequest,
    review_id: SafeIDI64,
    body: web::Json<UpdateReviewStatusRequest>,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE
        .set_review_status(review_id.0, body.into_inner().status, &req)
        .await
}

// 配置路由
pub fn configure_review_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/reviews")
            .wrap(middlewares::RequireJWT)
            // 查看与提交评价对所有登录用户开放
            .service(
                web::scope("")
                    .guard(guard::Any(guard::Get()).or(guard::Post()))
                    .route("", web::get().to(list_reviews))
                    .route("", web::post().to(create_review))
                    .route("/stats", web::get().to(get_review_stats))
                    .route("/{id}", web::get().to(get_review)),
            )
            // 审核与编辑仅限管理员
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("/{id}", web::put().to(update_review))
                    .route("/{id}", web::delete().to(delete_review))
                    .route("/{id}/status", web::patch().to(set_review_status)),
            ),
    );
}
