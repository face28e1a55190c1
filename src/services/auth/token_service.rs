//! JWT 세션 토큰 관리 서비스 구현
//!
//! 로그인/회원가입에 성공한 사용자에게 발급하는 세션 토큰의 생성과 검증을 담당합니다.
//! 토큰은 HS256으로 서명되며 `{sub, iat, exp}` 클레임만 담습니다.
//! 리프레시 토큰과 폐기 목록은 없으며, 유효성은 서명과 만료 시간으로만 판단합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use crate::{
    config::JwtConfig,
    domain::entities::users::User,
    domain::models::token::TokenClaims,
    errors::AppError,
};

/// JWT 세션 토큰 관리 서비스
///
/// 서명 키는 생성 시점에 한 번 만들어 재사용합니다.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// 서명 비밀키와 유효 기간(일)으로 서비스를 생성합니다.
    pub fn new(secret: &str, ttl_days: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::days(ttl_days),
        }
    }

    /// `JWT_SECRET` / `JWT_EXPIRATION_DAYS` 환경 변수로 서비스를 생성합니다.
    pub fn from_env() -> Self {
        Self::new(&JwtConfig::secret(), JwtConfig::expiration_days())
    }

    /// 사용자를 위한 세션 토큰 생성
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 저장되지 않아 ID가 없는 사용자 또는 서명 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = token_service.generate_token(&user)?;
    /// ```
    pub fn generate_token(&self, user: &User) -> Result<String, AppError> {
        let user_id = user.id_string().ok_or_else(|| {
            AppError::InternalError("사용자 ID가 없습니다".to_string())
        })?;

        self.generate_token_for(&user_id)
    }

    /// 사용자 ID로 세션 토큰 생성
    pub fn generate_token_for(&self, user_id: &str) -> Result<String, AppError> {
        let now = Utc::now();

        let claims = TokenClaims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 세션 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 만료, 잘못된 형식, 서명 불일치
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    log::debug!("만료된 세션 토큰");
                    AppError::AuthenticationError("Not authorized, token expired".to_string())
                }
                _ => {
                    log::debug!("세션 토큰 검증 실패: {}", e);
                    AppError::AuthenticationError("Not authorized, token failed".to_string())
                }
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = token_service.extract_bearer_token("Bearer eyJhbGciOi...")?;
    /// let claims = token_service.verify_token(token)?;
    /// ```
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError("Not authorized, no token".to_string())),
        }
    }
}
