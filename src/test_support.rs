//! 단위 테스트 공용 도우미
//!
//! MongoDB와 Google 없이 서비스/핸들러를 실행하기 위한 구성 요소를 제공합니다.

use std::collections::HashMap;
use std::sync::Arc;
use actix_web::{web, App, HttpServer};
use async_trait::async_trait;
use crate::{
    domain::models::oauth::GoogleIdentity,
    errors::{AppError, AppResult},
    repositories::users::UserStore,
    routes::configure_all_routes,
    services::{
        auth::{GoogleAuthService, IdTokenVerifier, TokenService},
        users::UserService,
    },
};

pub const TEST_JWT_SECRET: &str = "test-jwt-secret";

/// bcrypt 최소 cost
pub const TEST_BCRYPT_COST: u32 = 4;

/// 등록된 토큰 문자열만 통과시키는 ID 토큰 검증기
#[derive(Default)]
pub struct StubVerifier {
    identities: HashMap<String, GoogleIdentity>,
}

impl StubVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identity(mut self, token: &str, uid: &str, email: &str, name: Option<&str>) -> Self {
        self.identities.insert(
            token.to_string(),
            GoogleIdentity {
                uid: uid.to_string(),
                email: email.to_string(),
                name: name.map(str::to_string),
            },
        );
        self
    }
}

#[async_trait]
impl IdTokenVerifier for StubVerifier {
    async fn verify(&self, id_token: &str) -> AppResult<GoogleIdentity> {
        self.identities
            .get(id_token)
            .cloned()
            .ok_or_else(|| AppError::AuthenticationError("unknown test token".to_string()))
    }
}

pub fn test_token_service() -> Arc<TokenService> {
    Arc::new(TokenService::new(TEST_JWT_SECRET, 7))
}

pub fn user_service(user_repo: Arc<dyn UserStore>) -> UserService {
    UserService::with_bcrypt_cost(user_repo, test_token_service(), TEST_BCRYPT_COST)
}

pub fn google_auth_service(user_repo: Arc<dyn UserStore>, verifier: StubVerifier) -> GoogleAuthService {
    GoogleAuthService::new(user_repo, test_token_service(), Arc::new(verifier))
}

/// 임의 포트에 실제 HTTP 서버를 띄우고 API 기본 주소를 반환합니다.
///
/// actix 런타임 안에서 호출해야 합니다.
pub fn spawn_test_server(user_repo: Arc<dyn UserStore>, verifier: StubVerifier) -> std::io::Result<String> {
    let user_service = web::Data::new(user_service(user_repo.clone()));
    let google_auth_service = web::Data::new(google_auth_service(user_repo, verifier));
    let token_service = web::Data::from(test_token_service());

    let server = HttpServer::new(move || {
        App::new()
            .app_data(user_service.clone())
            .app_data(google_auth_service.clone())
            .app_data(token_service.clone())
            .configure(configure_all_routes)
    })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))?;

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    Ok(format!("http://{}/api", addr))
}
