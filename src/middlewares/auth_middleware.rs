//! 세션 토큰 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 세션 토큰을 검증하고 사용자 정보를 추출합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 세션 토큰 인증 미들웨어
///
/// 유효한 `Bearer` 토큰이 없으면 401로 요청을 거부합니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthMiddleware;

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
