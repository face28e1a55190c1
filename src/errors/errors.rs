//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 인증 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 모든 에러 응답은 `{"message": "..."}` 형태의 JSON 본문으로 전달되며,
//! 클라이언트는 이 `message` 필드를 그대로 알림으로 표시합니다.
//!
//! ## 상태 코드 매핑
//!
//! | 변형 | 상태 코드 |
//! |------|-----------|
//! | `ValidationError` | 400 |
//! | `ConflictError` | 400 |
//! | `InvalidCredentials` | 400 |
//! | `AuthenticationError` | 401 |
//! | `NotFound` | 404 |
//! | 그 외 | 500 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn signup(&self, request: SignupRequest) -> Result<AuthResponse, AppError> {
//!     if self.user_repo.find_by_email(&request.email).await?.is_some() {
//!         return Err(AppError::ConflictError("User already exists".to_string()));
//!     }
//!     // ...
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 인증 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 이메일 중복 에러 (400 Bad Request)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 로컬 로그인 실패 (400 Bad Request)
    ///
    /// 사용자 부재와 비밀번호 불일치를 구분하지 않는 단일 메시지를 사용합니다.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 외부 서비스 에러 (500 Internal Server Error)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 전달할 메시지를 반환합니다.
    ///
    /// 4xx 에러는 접두어 없이 원본 메시지를 그대로 전달하고,
    /// 5xx 에러는 `Display` 구현 결과(원본 에러 메시지 포함)를 전달합니다.
    pub fn client_message(&self) -> String {
        match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg) => msg.clone(),
            AppError::InvalidCredentials => "Invalid credentials".to_string(),
            _ => self.to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::ConflictError(_)
            | AppError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "message": self.client_message()
            }))
    }
}

/// `validator` 검증 실패를 400 응답으로 변환
///
/// 필드별 메시지 중 첫 번째 것을 사용합니다 (필드 이름 순).
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let message = fields
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| format!("Invalid {}", field))
                })
            })
            .next()
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::ValidationError(message)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::MessageBody;

    fn body_json(error: &AppError) -> serde_json::Value {
        let bytes = error.error_response().into_body().try_into_bytes().unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_conflict_error_is_bad_request() {
        let error = AppError::ConflictError("User already exists".to_string());

        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(&error)["message"], "User already exists");
    }

    #[test]
    fn test_invalid_credentials_response() {
        let error = AppError::InvalidCredentials;

        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(&error)["message"], "Invalid credentials");
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid Google token".to_string());

        assert_eq!(error.error_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(&error)["message"], "Invalid Google token");
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found".to_string());

        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_error_carries_raw_message() {
        let error = AppError::DatabaseError("connection reset".to_string());

        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(&error)["message"], "Database error: connection reset");
    }

    #[test]
    fn test_validation_errors_conversion() {
        let mut errors = validator::ValidationErrors::new();
        let mut error = validator::ValidationError::new("length");
        error.message = Some("Password must be at least 6 characters".into());
        errors.add("password", error);

        let app_error = AppError::from(errors);

        assert_eq!(app_error.error_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(&app_error)["message"], "Password must be at least 6 characters");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.with_context(|| "Additional context".to_string());

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
