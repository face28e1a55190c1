//! 클라이언트 에러 타입

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// 서버에 연결할 수 없거나 응답을 읽지 못한 경우
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// 서버가 2xx 이외의 상태 코드로 응답한 경우
    ///
    /// `message`는 응답 본문의 `message` 필드입니다.
    #[error("server returned {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Api { status: u16, message: Option<String> },

    /// 토큰 파일 입출력 실패
    #[error("token store error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not signed in")]
    NotAuthenticated,

    #[error("no data directory available; set AUTH_CLIENT_HOME")]
    NoDataDir,
}

impl ClientError {
    /// 서버가 세션 토큰을 거부했거나 사용자가 사라진 경우
    pub fn is_session_rejected(&self) -> bool {
        matches!(self, ClientError::Api { status: 401 | 404, .. })
    }

    /// 알림에 표시할 메시지
    ///
    /// 서버 메시지가 없으면 `fallback`을 사용합니다.
    pub fn notice_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Api { message: Some(message), .. } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_message_prefers_server_message() {
        let error = ClientError::Api { status: 400, message: Some("User already exists".to_string()) };
        assert_eq!(error.notice_message("Error during signup"), "User already exists");

        let silent = ClientError::Api { status: 500, message: None };
        assert_eq!(silent.notice_message("Error during signup"), "Error during signup");
    }

    #[test]
    fn test_session_rejection() {
        assert!(ClientError::Api { status: 401, message: None }.is_session_rejected());
        assert!(ClientError::Api { status: 404, message: None }.is_session_rejected());
        assert!(!ClientError::Api { status: 500, message: None }.is_session_rejected());
        assert!(!ClientError::NotAuthenticated.is_session_rejected());
    }
}
