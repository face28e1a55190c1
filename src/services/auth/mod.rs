//! 인증 및 보안 서비스 모듈
//!
//! 세션 토큰 관리와 Google(Firebase) 로그인을 담당하는 서비스들을 제공합니다.
//!
//! # Features
//!
//! - HS256 세션 토큰 생성 및 검증
//! - Firebase ID 토큰 검증 (RS256, Google 공개키)
//! - Google 계정 자동 등록 및 로그인
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{GoogleAuthService, TokenService};
//!
//! let token = token_service.generate_token(&user)?;
//! let response = google_auth_service.authenticate(&id_token).await?;
//! ```

pub mod token_service;
pub mod firebase_verifier;
pub mod google_auth_service;

pub use token_service::*;
pub use firebase_verifier::*;
pub use google_auth_service::*;
