//! # Firebase ID 토큰 모델
//!
//! Firebase Authentication이 발급한 ID 토큰의 페이로드와,
//! 서명/클레임 검증을 통과한 뒤 서비스 계층에서 사용하는 신원 정보를 정의합니다.
//!
//! ## ID 토큰 클레임 예시
//!
//! ```json
//! {
//!   "iss": "https://securetoken.google.com/my-project",
//!   "aud": "my-project",
//!   "sub": "kPzH3...firebase-uid",
//!   "iat": 1718000000,
//!   "exp": 1718003600,
//!   "email": "bob@gmail.com",
//!   "name": "Bob"
//! }
//! ```

use serde::Deserialize;

/// Firebase ID 토큰 페이로드
///
/// `aud`/`iss`/`exp`는 `jsonwebtoken::Validation`이 검사하고,
/// 나머지 규칙(`sub`, `iat`)은 검증기에서 직접 확인합니다.
#[derive(Debug, Clone, Deserialize)]
pub struct FirebaseIdClaims {
    /// Firebase UID
    pub sub: String,
    pub aud: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// 검증된 Google 신원 정보
#[derive(Debug, Clone, PartialEq)]
pub struct GoogleIdentity {
    /// Firebase UID (`sub`)
    pub uid: String,
    pub email: String,
    pub name: Option<String>,
}

impl GoogleIdentity {
    /// 검증된 클레임에서 신원 정보를 추출합니다.
    ///
    /// 이메일 클레임이 없는 토큰(전화번호 로그인 등)은 `None`을 반환합니다.
    pub fn from_claims(claims: FirebaseIdClaims) -> Option<Self> {
        let email = claims.email.filter(|email| !email.trim().is_empty())?;

        Some(Self {
            uid: claims.sub,
            email,
            name: claims.name,
        })
    }
}
