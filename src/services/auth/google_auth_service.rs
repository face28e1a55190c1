//! # Google 로그인 서비스
//!
//! Firebase ID 토큰을 검증하고, 검증된 Google 신원에 해당하는 사용자를 찾거나
//! 새로 등록한 뒤 세션 토큰을 발급합니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! Client ──idToken──▶ GoogleAuthService ──▶ IdTokenVerifier (Firebase JWKS)
//!                          │
//!                          ├─ 검증 실패 ──▶ 401 "Invalid Google token" (저장소 변경 없음)
//!                          │
//!                          ├─ google 사용자 존재 ──▶ 세션 토큰 발급
//!                          └─ 없음 ──▶ 사용자 생성 ──▶ 세션 토큰 발급
//! ```
//!
//! 같은 이메일의 로컬 계정이 이미 있으면 사용자를 만들지 않고
//! 401 `"Invalid Google token"`으로 실패합니다.

use std::sync::Arc;
use log::{info, warn};
use crate::{
    config::AuthProvider,
    domain::{
        dto::users::response::AuthResponse,
        entities::users::{normalize_email, User},
    },
    errors::{AppError, AppResult},
    repositories::users::UserStore,
};
use super::{IdTokenVerifier, TokenService};

/// Google 토큰 검증 실패 시 클라이언트에게 전달되는 메시지
pub const INVALID_GOOGLE_TOKEN: &str = "Invalid Google token";

/// Google(Firebase) 로그인 서비스
#[derive(Clone)]
pub struct GoogleAuthService {
    user_repo: Arc<dyn UserStore>,
    token_service: Arc<TokenService>,
    verifier: Arc<dyn IdTokenVerifier>,
}

impl GoogleAuthService {
    pub fn new(
        user_repo: Arc<dyn UserStore>,
        token_service: Arc<TokenService>,
        verifier: Arc<dyn IdTokenVerifier>,
    ) -> Self {
        Self { user_repo, token_service, verifier }
    }

    /// Firebase ID 토큰으로 로그인합니다.
    ///
    /// 같은 이메일로 여러 번 호출해도 사용자는 한 명만 생성됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - ID 토큰 검증 실패, 또는 같은 이메일의 로컬 계정 존재
    /// * `AppError::DatabaseError` - 저장소 오류
    pub async fn authenticate(&self, id_token: &str) -> AppResult<AuthResponse> {
        let identity = self.verifier.verify(id_token).await.map_err(|e| {
            warn!("⚠️ Google ID 토큰 검증 실패: {}", e);
            AppError::AuthenticationError(INVALID_GOOGLE_TOKEN.to_string())
        })?;

        let email = normalize_email(&identity.email);

        let user = match self.find_google_user(&email).await? {
            Some(user) => user,
            None => {
                let user = User::new_google(identity.name.as_deref(), &email, identity.uid);
                self.register(user).await?
            }
        };

        info!("✅ Google 로그인: {}", user.email);

        let token = self.token_service.generate_token(&user)?;
        Ok(AuthResponse::new(&user, token))
    }

    async fn find_google_user(&self, email: &str) -> AppResult<Option<User>> {
        self.user_repo
            .find_by_email_and_provider(email, AuthProvider::Google)
            .await
    }

    /// 새 Google 사용자를 저장합니다.
    ///
    /// 동시 요청으로 같은 Google 사용자가 먼저 저장된 경우 그 사용자를 반환합니다.
    /// 이메일을 로컬 계정이 차지하고 있으면 토큰 거부와 같은 에러를 반환합니다.
    async fn register(&self, user: User) -> AppResult<User> {
        let email = user.email.clone();

        match self.user_repo.create(user).await {
            Ok(created) => {
                info!("🆕 Google 사용자 등록: {}", created.email);
                Ok(created)
            }
            Err(AppError::ConflictError(_)) => self
                .find_google_user(&email)
                .await?
                .ok_or_else(|| {
                    warn!("⚠️ Google 로그인 거부 (로컬 계정 이메일): {}", email);
                    AppError::AuthenticationError(INVALID_GOOGLE_TOKEN.to_string())
                }),
            Err(e) => Err(e),
        }
    }
}
