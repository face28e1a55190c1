//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 실행 환경, 비밀번호 해싱, CORS 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수에서 현재 실행 환경을 결정합니다.
    ///
    /// 값이 없거나 알 수 없는 값이면 `Production`으로 간주합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 비밀번호 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4..=15 범위의 값이면 그대로 사용하고,
    /// 그렇지 않으면 실행 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        if let Some(cost) = env::var("BCRYPT_COST")
            .ok()
            .and_then(|value| Self::parse_cost(&value))
        {
            return cost;
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    pub fn parse_cost(value: &str) -> Option<u32> {
        value
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|cost| (4..=15).contains(cost))
    }

    /// 환경별 기본 bcrypt cost
    ///
    /// 개발/테스트 환경은 빠른 응답을 위해 최소값을 사용합니다.
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development | Environment::Test => 4,
            Environment::Staging | Environment::Production => 10,
        }
    }
}

/// HTTP 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .unwrap_or(5000)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// 연결 문자열 (`MONGODB_URI`, 없으면 `MONGO_URI`)
    pub fn uri() -> String {
        env::var("MONGODB_URI")
            .or_else(|_| env::var("MONGO_URI"))
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "auth_service".to_string())
    }
}

/// CORS 허용 Origin 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 허용할 Origin 목록을 반환합니다.
    ///
    /// 빈 목록이면 모든 Origin을 허용합니다.
    pub fn allowed_origins() -> Vec<String> {
        env::var("CORS_ALLOWED_ORIGINS")
            .map(|value| Self::parse_origins(&value))
            .unwrap_or_default()
    }

    pub fn parse_origins(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}
