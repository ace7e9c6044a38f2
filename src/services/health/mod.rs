use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use crate::config::AppConfig;
use crate::models::system::responses::HealthResponse;
use crate::models::{ApiResponse, AppStartTime};

pub struct HealthService;

impl HealthService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub async fn health(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let config = AppConfig::get();
        let now = chrono::Utc::now();
        let started_at = request
            .app_data::<web::Data<AppStartTime>>()
            .map(|t| t.start_datetime)
            .unwrap_or(now);

        let response = HealthResponse {
            status: "ok".to_string(),
            system_name: config.app.system_name.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: config.app.environment.clone(),
            started_at,
            uptime_seconds: (now - started_at).num_seconds().max(0),
        };

        Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Service is healthy")))
    }
}
