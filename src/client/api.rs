//! 인증 서비스 HTTP 클라이언트
//!
//! 서버와 같은 요청/응답 DTO를 사용합니다. 2xx가 아닌 응답은 본문의
//! `message` 필드를 담은 [`ClientError::Api`]로 변환됩니다.

use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::json;
use crate::domain::dto::users::{
    request::{SigninRequest, SignupRequest},
    response::{AuthResponse, UserProfileResponse},
};
use super::ClientError;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url`은 `/api`까지 포함한 주소입니다. (예: `http://localhost:5000/api`)
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http: Client::new(), base_url }
    }

    /// `AUTH_API_URL` 환경 변수 또는 기본 주소를 사용합니다.
    pub fn from_env() -> Self {
        Self::new(std::env::var("AUTH_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ClientError> {
        self.send(self.http.post(self.url("/auth/signup")).json(request)).await
    }

    pub async fn signin(&self, request: &SigninRequest) -> Result<AuthResponse, ClientError> {
        self.send(self.http.post(self.url("/auth/signin")).json(request)).await
    }

    /// Firebase ID 토큰으로 로그인
    pub async fn google(&self, id_token: &str) -> Result<AuthResponse, ClientError> {
        let body = json!({ "idToken": id_token });
        self.send(self.http.post(self.url("/auth/google")).json(&body)).await
    }

    pub async fn me(&self, token: &str) -> Result<UserProfileResponse, ClientError> {
        self.send(self.http.get(self.url("/auth/me")).bearer_auth(token)).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        log::debug!("{} {}", response.status(), response.url());
        read_response(response).await
    }
}

async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .map(|body| body.message);

    Err(ClientError::Api { status: status.as_u16(), message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_trimmed() {
        let client = ApiClient::new("http://localhost:5000/api/");
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(client.url("/auth/me"), "http://localhost:5000/api/auth/me");
    }
}
