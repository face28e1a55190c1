use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;
use crate::domain::entities::users::User;

/// 인증 성공 응답 DTO
///
/// signup / signin / google 세 엔드포인트가 공통으로 반환하는 형태입니다.
///
/// ```json
/// { "_id": "65f0c0...", "name": "Alice", "email": "a@x.com", "token": "eyJ..." }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    /// 세션 토큰 (HS256 JWT)
    pub token: String,
}

impl AuthResponse {
    pub fn new(user: &User, token: String) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            name: user.name.clone(),
            email: user.email.clone(),
            token,
        }
    }
}

/// 현재 사용자 프로필 응답 DTO (`GET /api/auth/me`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub provider: AuthProvider,
}

impl From<User> for UserProfileResponse {
    fn from(user: User) -> Self {
        let provider = user.provider();
        let User { id, name, email, .. } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            provider,
        }
    }
}
