use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::requests::{AdminRegisterRequest, LoginRequest, RegisterRequest};
use crate::models::users::entities::UserRole;
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn login(
    req: HttpRequest,
    user_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login(user_data.into_inner(), &req).await
}

pub async fn admin_login(
    req: HttpRequest,
    user_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.admin_login(user_data.into_inner(), &req).await
}

pub async fn refresh_token(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.refresh_token(&request).await
}

pub async fn register(
    req: HttpRequest,
    user_data: web::Json<RegisterRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.register(user_data.into_inner(), &req).await
}

pub async fn admin_register(
    req: HttpRequest,
    user_data: web::Json<AdminRegisterRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .admin_register(user_data.into_inner(), &req)
        .await
}

pub async fn logout(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.logout(&request).await
}

pub async fn verify_token(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.verify_token(&request).await
}

pub async fn get_user(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.get_user(&request).await
}

pub async fn protected(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.protected(&request, false).await
}

pub async fn protected_admin(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.protected(&request, true).await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            // 管理员入口需先于空前缀作用域注册
            .service(
                web::scope("/admin")
                    .route("/login", web::post().to(admin_login))
                    .service(
                        web::scope("")
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                            .wrap(middlewares::RequireJWT)
                            .route("/register", web::post().to(admin_register)),
                    ),
            )
            .route("/login", web::post().to(login))
            .route("/register", web::post().to(register))
            .route("/refresh", web::post().to(refresh_token))
            .route("/logout", web::post().to(logout))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireJWT)
                    .route("/verify-token", web::get().to(verify_token))
                    .route("/me", web::get().to(get_user)),
            ),
    );
}

pub fn configure_protected_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/protected")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(protected))
            .route("/", web::get().to(protected))
            .service(
                web::scope("/admin")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("", web::get().to(protected_admin)),
            ),
    );
}
