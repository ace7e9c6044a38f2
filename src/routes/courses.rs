use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, guard, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::courses::requests::{
    CourseListParams, CreateCourseRequest, UpdateCourseRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::CourseService;
use crate::utils::SafeIDI64;

static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

pub async fn list_courses(
    req: HttpRequest,
    query: web::Query<CourseListParams>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(query.into_inner(), &req).await
}

pub async fn get_course_stats(req: HttpRequest) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course_stats(&req).await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_course(course_data.into_inner(), &req)
        .await
}

pub async fn get_course(req: HttpRequest, course_id: SafeIDI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(course_id.0, &req).await
}

pub async fn update_course(
    req: HttpRequest,
    course_id: SafeIDI64,
    update_data: web::Json<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course(course_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_course(req: HttpRequest, course_id: SafeIDI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(course_id.0, &req).await
}

pub async fn toggle_course_status(
    req: HttpRequest,
    course_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.toggle_course_status(course_id.0, &req).await
}

// 配置路由
pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/courses")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .guard(guard::Get())
                    .route("", web::get().to(list_courses))
                    .route("/stats", web::get().to(get_course_stats))
                    .route("/{id}", web::get().to(get_course)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("", web::post().to(create_course))
                    .route("/{id}", web::put().to(update_course))
                    .route("/{id}", web::delete().to(delete_course))
                    .route("/{id}/toggle-status", web::patch().to(toggle_course_status)),
            ),
    );
}
