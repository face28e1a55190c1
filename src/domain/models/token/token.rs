//! 세션 토큰 클레임
use serde::{Deserialize, Serialize};

/// 세션 토큰(JWT)의 클레임 구조체
///
/// 개인정보 보호를 위해 사용자 ID와 시간 정보만 담습니다.
///
/// - `sub`: 사용자 ID (ObjectId hex)
/// - `iat`: 발급 시간 (Unix timestamp)
/// - `exp`: 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}
