//! # Authentication Configuration Module
//!
//! 세션 토큰(JWT)과 외부 인증 프로바이더(Firebase) 관련 설정을 관리하는 모듈입니다.
//!
//! ## 지원하는 인증 방식
//!
//! 1. **로컬 인증**: 이메일/패스워드 기반 전통적인 인증
//! 2. **Google 로그인**: Firebase Authentication이 발급한 ID 토큰 검증
//! 3. **세션 토큰**: HS256 서명 JWT (기본 7일 유효)
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_DAYS="7"
//! export FIREBASE_SERVICE_ACCOUNT_PATH="./serviceAccountKey.json"
//! ```

use std::env;
use serde::{Deserialize, Serialize};

/// Google 공개키 JWKS 엔드포인트 (Firebase ID 토큰 서명 검증용)
pub const FIREBASE_JWKS_URI: &str =
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";

/// Firebase ID 토큰 발급자 접두어 (`<prefix><project_id>`)
pub const FIREBASE_ISSUER_PREFIX: &str = "https://securetoken.google.com/";

pub struct JwtConfig;

impl JwtConfig {
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    pub fn expiration_days() -> i64 {
        env::var("JWT_EXPIRATION_DAYS")
            .unwrap_or_else(|_| "7".to_string())
            .parse()
            .unwrap_or(7)
    }
}

pub struct FirebaseConfig;

impl FirebaseConfig {
    /// 서비스 계정 키 파일 경로
    ///
    /// `FIREBASE_SERVICE_ACCOUNT_PATH` → `GOOGLE_APPLICATION_CREDENTIALS` →
    /// `serviceAccountKey.json` 순서로 결정합니다.
    pub fn service_account_path() -> String {
        env::var("FIREBASE_SERVICE_ACCOUNT_PATH")
            .or_else(|_| env::var("GOOGLE_APPLICATION_CREDENTIALS"))
            .unwrap_or_else(|_| "serviceAccountKey.json".to_string())
    }

    pub fn jwks_uri() -> String {
        env::var("FIREBASE_JWKS_URI").unwrap_or_else(|_| FIREBASE_JWKS_URI.to_string())
    }
}

/// 인증 프로바이더
///
/// 저장소에는 소문자 문자열(`"local"`, `"google"`)로 기록됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// 이메일/패스워드 로컬 계정
    Local,

    /// Firebase를 통한 Google 계정
    Google,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "local",
            AuthProvider::Google => "google",
        }
    }
}
