/*!
 * 角色准入中间件
 *
 * 需挂在 RequireJWT 之内（actix 中后 `.wrap()` 的先执行），
 * 从请求扩展取出已认证用户，角色不在允许列表内时返回 403。
 *
 * ```rust,ignore
 * web::scope("/api/users")
 *     .wrap(RequireRole::new_any(UserRole::admin_roles()))
 *     .wrap(RequireJWT)
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::{debug, info};

use crate::models::{
    ErrorCode,
    users::entities::{User, UserRole},
};

use super::create_error_response;

#[derive(Clone)]
pub struct RequireRole {
    allowed: Rc<[UserRole]>,
}

impl RequireRole {
    /// 允许列表中任一角色访问
    pub fn new_any(roles: &[&UserRole]) -> Self {
        Self {
            allowed: roles.iter().map(|r| **r).collect(),
        }
    }

    fn permits(&self, role: UserRole) -> bool {
        self.allowed.contains(&role)
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            guard: self.clone(),
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    guard: RequireRole,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let guard = self.guard.clone();

        Box::pin(async move {
            let caller = req
                .extensions()
                .get::<User>()
                .map(|user| (user.id, user.role));

            let Some((user_id, role)) = caller else {
                debug!("No authenticated user on {}; RequireJWT must run first", req.path());
                return Ok(req.into_response(
                    create_error_response(
                        StatusCode::UNAUTHORIZED,
                        ErrorCode::Unauthorized,
                        "Authentication required",
                    )
                    .map_into_right_body(),
                ));
            };

            if guard.permits(role) {
                return Ok(srv.call(req).await?.map_into_left_body());
            }

            info!(
                "User {} ({}) denied {} {}; allowed roles: {:?}",
                user_id,
                role,
                req.method(),
                req.path(),
                guard.allowed
            );
            Ok(req.into_response(
                create_error_response(
                    StatusCode::FORBIDDEN,
                    ErrorCode::Forbidden,
                    "Access denied: insufficient role",
                )
                .map_into_right_body(),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_guard() {
        let guard = RequireRole::new_any(UserRole::staff_roles());
        assert!(guard.permits(UserRole::Admin));
        assert!(guard.permits(UserRole::Tutor));
        assert!(!guard.permits(UserRole::Student));
    }

    #[test]
    fn test_admin_guard() {
        let guard = RequireRole::new_any(UserRole::admin_roles());
        assert!(guard.permits(UserRole::Admin));
        assert!(!guard.permits(UserRole::Tutor));
    }
}
