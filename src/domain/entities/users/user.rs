//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 로컬 계정과 Google 계정을 하나의 [`User`] 타입으로 표현하되,
//! 프로바이더별 자격 증명은 [`Credential`] 합 타입으로 분리하여
//! "프로바이더에 따라 필수 필드가 달라지는" 조건부 검증을 타입으로 대체합니다.
//!
//! ## 저장 형태 (MongoDB `users` 컬렉션)
//!
//! ```json
//! { "_id": ObjectId, "name": "Alice", "email": "a@x.com",
//!   "provider": "local", "password_hash": "$2b$...",
//!   "created_at": ISODate, "updated_at": ISODate }
//!
//! { "_id": ObjectId, "name": "Bob", "email": "b@gmail.com",
//!   "provider": "google", "google_id": "firebase-uid",
//!   "created_at": ISODate, "updated_at": ISODate }
//! ```

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;

/// Google 계정에 이름 정보가 없을 때 사용하는 표시 이름
pub const DEFAULT_GOOGLE_NAME: &str = "Google User";

/// 로컬 계정 비밀번호 최소 길이 (해싱 전 원문 기준)
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// 프로바이더별 자격 증명
///
/// `provider` 필드를 태그로 사용하여 사용자 문서에 평탄화(flatten)되어 저장됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum Credential {
    /// 이메일/패스워드 계정: bcrypt 해시 보관
    Local { password_hash: String },
    /// Google 계정: Firebase UID 보관
    Google { google_id: String },
}

impl Credential {
    pub fn provider(&self) -> AuthProvider {
        match self {
            Credential::Local { .. } => AuthProvider::Local,
            Credential::Google { .. } => AuthProvider::Google,
        }
    }
}

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 표시 이름
    pub name: String,
    /// 사용자 이메일 (unique, 소문자 정규화)
    pub email: String,
    /// 프로바이더별 자격 증명
    #[serde(flatten)]
    pub credential: Credential,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 로컬 사용자 생성 (이메일/패스워드)
    pub fn new_local(name: &str, email: &str, password_hash: String) -> Self {
        Self::new(name.trim().to_string(), email, Credential::Local { password_hash })
    }

    /// 새 Google 사용자 생성
    ///
    /// 이름이 없거나 공백뿐이면 [`DEFAULT_GOOGLE_NAME`]을 사용합니다.
    pub fn new_google(name: Option<&str>, email: &str, google_id: String) -> Self {
        let name = name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_GOOGLE_NAME)
            .to_string();

        Self::new(name, email, Credential::Google { google_id })
    }

    fn new(name: String, email: &str, credential: Credential) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            email: normalize_email(email),
            credential,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn provider(&self) -> AuthProvider {
        self.credential.provider()
    }

    /// 로컬 계정의 비밀번호 해시 (Google 계정은 `None`)
    pub fn password_hash(&self) -> Option<&str> {
        match &self.credential {
            Credential::Local { password_hash } => Some(password_hash),
            Credential::Google { .. } => None,
        }
    }

    /// Google 계정의 Firebase UID (로컬 계정은 `None`)
    pub fn google_id(&self) -> Option<&str> {
        match &self.credential {
            Credential::Google { google_id } => Some(google_id),
            Credential::Local { .. } => None,
        }
    }
}

/// 이메일 정규화 (앞뒤 공백 제거 + 소문자 변환)
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_new_local_normalizes_email_and_name() {
        let user = User::new_local("  Alice ", "  Alice@X.com ", "hash".to_string());

        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "alice@x.com");
        assert_eq!(user.provider(), AuthProvider::Local);
        assert_eq!(user.password_hash(), Some("hash"));
        assert_eq!(user.google_id(), None);
    }

    #[test]
    fn test_new_google_defaults_name() {
        let unnamed = User::new_google(None, "b@gmail.com", "uid-1".to_string());
        let blank = User::new_google(Some("   "), "b@gmail.com", "uid-1".to_string());
        let named = User::new_google(Some("Bob"), "b@gmail.com", "uid-1".to_string());

        assert_eq!(unnamed.name, DEFAULT_GOOGLE_NAME);
        assert_eq!(blank.name, DEFAULT_GOOGLE_NAME);
        assert_eq!(named.name, "Bob");
        assert_eq!(named.google_id(), Some("uid-1"));
        assert_eq!(named.password_hash(), None);
    }

    #[test]
    fn test_credential_is_flattened_into_document() {
        let user = User::new_local("Alice", "a@x.com", "hash".to_string());
        let document = bson::to_document(&user).unwrap();

        assert_eq!(document.get_str("provider").unwrap(), "local");
        assert_eq!(document.get_str("password_hash").unwrap(), "hash");
        assert!(document.get("google_id").is_none());
        assert!(document.get("_id").is_none());

        let google = User::new_google(Some("Bob"), "b@gmail.com", "uid-1".to_string());
        let document = bson::to_document(&google).unwrap();

        assert_eq!(document.get_str("provider").unwrap(), "google");
        assert_eq!(document.get_str("google_id").unwrap(), "uid-1");
        assert!(document.get("password_hash").is_none());
    }

    #[test]
    fn test_document_reads_back_into_variant() {
        let mut user = User::new_google(Some("Bob"), "b@gmail.com", "uid-1".to_string());
        user.id = Some(ObjectId::new());

        let document = bson::to_document(&user).unwrap();
        let restored: User = bson::from_document(document).unwrap();

        assert_eq!(restored.id, user.id);
        assert_eq!(restored.credential, Credential::Google { google_id: "uid-1".to_string() });
    }
}
