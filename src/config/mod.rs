//! # Configuration Module
//!
//! 인증 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 관심사별 구조체로 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, CORS 관련 설정
//! - [`auth_config`] - JWT, Firebase, 인증 프로바이더 관련 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="5000"
//!
//! # 데이터베이스
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="auth_service"
//!
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_DAYS="7"
//!
//! # Firebase 서비스 계정 키 파일
//! export FIREBASE_SERVICE_ACCOUNT_PATH="./serviceAccountKey.json"
//!
//! # 선택 사항
//! export ENVIRONMENT="production"   # development, test, staging, production
//! export BCRYPT_COST="10"           # 4-15 범위
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,http://localhost:5173"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
