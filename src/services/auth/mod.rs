pub mod login;
pub mod signup;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::auth::requests::{LoginRequest, SignupRequest};
use crate::storage::Storage;

pub struct AuthService {
    storage: Option<Arc<dyn Storage>>,
}

impl AuthService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 教师注册
    pub async fn signup(
        &self,
        request: &HttpRequest,
        signup_request: SignupRequest,
    ) -> ActixResult<HttpResponse> {
        signup::handle_signup(self, signup_request, request).await
    }

    // 教师登录，不签发令牌，客户端自行保存返回的教师对象
    pub async fn login(
        &self,
        request: &HttpRequest,
        login_request: LoginRequest,
    ) -> ActixResult<HttpResponse> {
        login::handle_login(self, login_request, request).await
    }
}
