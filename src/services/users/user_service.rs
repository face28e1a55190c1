//! # 사용자 관리 서비스 구현
//!
//! 로컬(이메일/패스워드) 계정의 회원가입과 로그인, 현재 사용자 조회를 구현합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                     UserService                      │
//! │                                                      │
//! │  signup        → 중복 확인 → 검증 → 해싱 → 저장       │
//! │  signin        → local 사용자 조회 → bcrypt 검증      │
//! │  current_user  → ID 조회 → 공개 프로필 변환           │
//! └──────────────────────────────────────────────────────┘
//!                           │
//!                           ▼
//! ┌──────────────────────────────────────────────────────┐
//! │            UserStore (MongoDB / InMemory)            │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## 보안 설계 원칙
//!
//! - **bcrypt 해싱**: 환경별 cost ([`PasswordConfig::bcrypt_cost`])
//! - **균일한 실패 응답**: 사용자 부재와 비밀번호 불일치 모두 `"Invalid credentials"`
//! - **민감 정보 제거**: 응답 DTO에 비밀번호 해시를 포함하지 않음
//! - **로그**: 이메일과 소요 시간만 기록하며 비밀번호는 기록하지 않음

use std::sync::Arc;
use bcrypt::{hash, verify};
use validator::Validate;
use crate::{
    config::{AuthProvider, PasswordConfig},
    domain::{
        dto::users::{
            request::{SigninRequest, SignupRequest},
            response::{AuthResponse, UserProfileResponse},
        },
        entities::users::{normalize_email, User},
    },
    errors::{AppError, AppResult},
    repositories::users::{UserStore, USER_EXISTS_MESSAGE},
    services::auth::TokenService,
};

/// 로컬 계정 관리 서비스
#[derive(Clone)]
pub struct UserService {
    user_repo: Arc<dyn UserStore>,
    token_service: Arc<TokenService>,
    bcrypt_cost: u32,
}

impl UserService {
    /// 환경 설정의 bcrypt cost로 서비스를 생성합니다.
    pub fn new(user_repo: Arc<dyn UserStore>, token_service: Arc<TokenService>) -> Self {
        Self::with_bcrypt_cost(user_repo, token_service, PasswordConfig::bcrypt_cost())
    }

    pub fn with_bcrypt_cost(
        user_repo: Arc<dyn UserStore>,
        token_service: Arc<TokenService>,
        bcrypt_cost: u32,
    ) -> Self {
        Self { user_repo, token_service, bcrypt_cost }
    }

    /// 로컬 회원가입
    ///
    /// 이메일 중복 확인이 입력 검증보다 먼저 수행되므로, 등록된 이메일은
    /// 비밀번호와 무관하게 항상 `ConflictError`로 실패합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 프로바이더와 무관하게 이메일이 이미 등록된 경우
    /// * `AppError::ValidationError` - 이름, 이메일 형식, 비밀번호 길이 검증 실패
    /// * `AppError::InternalError` - 비밀번호 해싱 또는 토큰 생성 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let response = user_service.signup(SignupRequest {
    ///     name: "Alice".to_string(),
    ///     email: "a@x.com".to_string(),
    ///     password: "secret1".to_string(),
    /// }).await?;
    /// ```
    pub async fn signup(&self, request: SignupRequest) -> AppResult<AuthResponse> {
        let start_time = std::time::Instant::now();
        let email = normalize_email(&request.email);

        if self.user_repo.find_by_email(&email).await?.is_some() {
            log::info!("회원가입 거부 (이메일 중복): {}", email);
            return Err(AppError::ConflictError(USER_EXISTS_MESSAGE.to_string()));
        }

        request.validate()?;

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, self.bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        // 사전 확인 이후의 동시 가입은 저장소의 유니크 제약이 ConflictError로 거부
        let user = self.user_repo
            .create(User::new_local(&request.name, &email, password_hash))
            .await?;

        let token = self.token_service.generate_token(&user)?;

        log::info!("✅ 회원가입 완료: {} ({:?})", user.email, start_time.elapsed());

        Ok(AuthResponse::new(&user, token))
    }

    /// 로컬 로그인
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidCredentials` - 로컬 사용자가 없거나 비밀번호가 틀린 경우
    pub async fn signin(&self, request: SigninRequest) -> AppResult<AuthResponse> {
        let email = normalize_email(&request.email);

        let user = self.user_repo
            .find_by_email_and_provider(&email, AuthProvider::Local)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let password_hash = user.password_hash().ok_or_else(|| {
            AppError::InternalError("비밀번호 해시가 없습니다".to_string())
        })?;

        let verify_start = std::time::Instant::now();
        let is_valid = verify(&request.password, password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            log::info!("로그인 실패: {}", email);
            return Err(AppError::InvalidCredentials);
        }

        let token = self.token_service.generate_token(&user)?;

        log::info!("✅ 로그인 성공: {}", user.email);

        Ok(AuthResponse::new(&user, token))
    }

    /// 세션 토큰의 사용자 ID로 공개 프로필 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 토큰은 유효하지만 사용자가 존재하지 않는 경우
    pub async fn current_user(&self, user_id: &str) -> AppResult<UserProfileResponse> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .map(UserProfileResponse::from)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::users::InMemoryUserRepository;
    use crate::test_support::{test_token_service, user_service};

    fn signup_request(name: &str, email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn signin_request(email: &str, password: &str) -> SigninRequest {
        SigninRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_signup_then_signin_round_trip() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = user_service(repo.clone());

        let signed_up = service
            .signup(signup_request("Alice", "a@x.com", "secret1"))
            .await
            .unwrap();
        assert_eq!(signed_up.name, "Alice");
        assert_eq!(signed_up.email, "a@x.com");
        assert!(!signed_up.token.is_empty());

        let signed_in = service
            .signin(signin_request("a@x.com", "secret1"))
            .await
            .unwrap();
        assert_eq!(signed_in.id, signed_up.id);

        let wrong = service.signin(signin_request("a@x.com", "wrong")).await;
        assert!(matches!(wrong, Err(AppError::InvalidCredentials)));
    }

    #[actix_web::test]
    async fn test_password_is_stored_hashed() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = user_service(repo.clone());

        service.signup(signup_request("Alice", "a@x.com", "secret1")).await.unwrap();

        let stored = repo.find_by_email("a@x.com").await.unwrap().unwrap();
        let password_hash = stored.password_hash().unwrap();
        assert_ne!(password_hash, "secret1");
        assert!(bcrypt::verify("secret1", password_hash).unwrap());
    }

    #[actix_web::test]
    async fn test_duplicate_signup_conflicts_regardless_of_password() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = user_service(repo.clone());

        service.signup(signup_request("Alice", "a@x.com", "secret1")).await.unwrap();

        // 검증에 실패할 비밀번호라도 중복이 먼저 보고됨
        for password in ["secret1", "another-password", "abc", ""] {
            match service.signup(signup_request("Alice 2", "a@x.com", password)).await {
                Err(AppError::ConflictError(msg)) => assert_eq!(msg, "User already exists"),
                other => panic!("Expected ConflictError, got {:?}", other.map(|r| r.id)),
            }
        }
        assert_eq!(repo.len(), 1);
    }

    #[actix_web::test]
    async fn test_signup_validates_new_accounts() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = user_service(repo.clone());

        match service.signup(signup_request("Alice", "a@x.com", "abc")).await {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, "Password must be at least 6 characters"),
            other => panic!("Expected ValidationError, got {:?}", other.map(|r| r.id)),
        }

        let blank_name = service.signup(signup_request("  ", "a@x.com", "secret1")).await;
        assert!(matches!(blank_name, Err(AppError::ValidationError(_))));
        assert!(repo.is_empty());
    }

    #[actix_web::test]
    async fn test_signup_conflicts_with_google_account() {
        let repo = Arc::new(InMemoryUserRepository::new());
        repo.create(User::new_google(Some("Bob"), "b@gmail.com", "uid".to_string()))
            .await
            .unwrap();

        let result = user_service(repo)
            .signup(signup_request("Bob", "b@gmail.com", "secret1"))
            .await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_signin_ignores_google_accounts() {
        let repo = Arc::new(InMemoryUserRepository::new());
        repo.create(User::new_google(Some("Bob"), "b@gmail.com", "uid".to_string()))
            .await
            .unwrap();

        let result = user_service(repo).signin(signin_request("b@gmail.com", "anything")).await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[actix_web::test]
    async fn test_unknown_email_and_wrong_password_fail_identically() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = user_service(repo);
        service.signup(signup_request("Alice", "a@x.com", "secret1")).await.unwrap();

        let unknown = service.signin(signin_request("nobody@x.com", "secret1")).await.unwrap_err();
        let wrong = service.signin(signin_request("a@x.com", "secret2")).await.unwrap_err();

        assert_eq!(unknown.to_string(), wrong.to_string());
    }

    #[actix_web::test]
    async fn test_signin_normalizes_email() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = user_service(repo);
        service.signup(signup_request("Alice", "a@x.com", "secret1")).await.unwrap();

        assert!(service.signin(signin_request("  A@X.com ", "secret1")).await.is_ok());
    }

    #[actix_web::test]
    async fn test_current_user_profile() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = user_service(repo);
        let signed_up = service.signup(signup_request("Alice", "a@x.com", "secret1")).await.unwrap();

        let claims = test_token_service().verify_token(&signed_up.token).unwrap();
        let profile = service.current_user(&claims.sub).await.unwrap();

        assert_eq!(profile.id, signed_up.id);
        assert_eq!(profile.provider, AuthProvider::Local);

        let missing = service.current_user(&mongodb::bson::oid::ObjectId::new().to_hex()).await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }
}
