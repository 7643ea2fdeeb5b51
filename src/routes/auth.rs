use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::auth::requests::{LoginRequest, SignupRequest};
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn login(
    req: HttpRequest,
    login_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login(&req, login_data.into_inner()).await
}

pub async fn signup(
    req: HttpRequest,
    signup_data: web::Json<SignupRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.signup(&req, signup_data.into_inner()).await
}

// 配置路由
// 不能注册为 "/api" scope，否则会截获其余 /api 路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/login", web::post().to(login))
        .route("/api/signup", web::post().to(signup));
}
