use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::{HealthService, UploadService};

static HEALTH_SERVICE: Lazy<HealthService> = Lazy::new(HealthService::new_lazy);
static UPLOAD_SERVICE: Lazy<UploadService> = Lazy::new(UploadService::new_lazy);

pub async fn health(req: HttpRequest) -> ActixResult<HttpResponse> {
    HEALTH_SERVICE.health(&req).await
}

pub async fn serve_upload(path: web::Path<String>) -> ActixResult<HttpResponse> {
    UPLOAD_SERVICE.serve(&path.into_inner()).await
}

// 配置路由
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/health", web::get().to(health))
        .route("/uploads/{path:.*}", web::get().to(serve_upload));
}
