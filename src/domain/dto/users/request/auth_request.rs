//! 인증 요청관련 DTO
//!
//! 인증을 요청하는 사용자들의 요청 정보를 매핑합니다.
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::domain::entities::users::normalize_email;

/// 로컬 회원가입 요청 구조체
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(custom(function = "validate_not_blank", message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

impl SignupRequest {
    /// 이메일을 정규화(공백 제거 + 소문자)한 요청을 반환합니다.
    pub fn normalized(self) -> Self {
        Self {
            email: normalize_email(&self.email),
            ..self
        }
    }
}

/// 로컬 로그인 요청 구조체
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SigninRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Google(Firebase) 로그인 요청 구조체
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GoogleAuthRequest {
    #[serde(rename = "idToken")]
    #[validate(length(min = 1, message = "idToken is required"))]
    pub id_token: String,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(name: &str, email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_signup_request_validation() {
        assert_eq!(crate::domain::entities::users::MIN_PASSWORD_LENGTH, 6);

        assert!(signup("Alice", "a@x.com", "secret1").validate().is_ok());

        // 비밀번호는 6자 이상
        assert!(signup("Alice", "a@x.com", "12345").validate().is_err());
        assert!(signup("Alice", "a@x.com", "123456").validate().is_ok());

        // 이름 공백 불가
        assert!(signup("   ", "a@x.com", "secret1").validate().is_err());

        // 이메일 형식
        assert!(signup("Alice", "not-an-email", "secret1").validate().is_err());
    }

    #[test]
    fn test_signup_request_normalizes_email() {
        let request = signup("Alice", "  Alice@X.COM ", "secret1").normalized();

        assert_eq!(request.email, "alice@x.com");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_google_request_uses_camel_case_field() {
        let request: GoogleAuthRequest = serde_json::from_str(r#"{"idToken": "abc"}"#).unwrap();
        assert_eq!(request.id_token, "abc");
        assert!(request.validate().is_ok());

        let empty: GoogleAuthRequest = serde_json::from_str(r#"{"idToken": ""}"#).unwrap();
        assert!(empty.validate().is_err());
    }
}
