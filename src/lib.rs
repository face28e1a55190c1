//! 인증 서비스 백엔드
//!
//! 로컬 계정(이메일/비밀번호) 회원가입과 로그인, Firebase를 통한 Google 로그인,
//! 그리고 JWT 세션 토큰 발급과 검증을 제공하는 인증 서비스입니다.
//! 같은 크레이트에 서비스를 사용하는 터미널 클라이언트([`client`])가 포함됩니다.
//!
//! # Features
//!
//! - **로컬 계정**: bcrypt 해싱, 이메일 중복 방지
//! - **Google 로그인**: Firebase ID 토큰 검증 (JWKS 캐시)
//! - **세션 토큰**: HS256 JWT, 7일 만료
//! - **MongoDB**: 사용자 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증 / 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (UserStore)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! 서비스는 시작 시 한 번 생성되어 `Arc` 핸들로 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use auth_service::services::{auth::TokenService, users::UserService};
//!
//! let token_service = Arc::new(TokenService::from_env());
//! let user_service = UserService::new(user_repo, token_service);
//!
//! let response = user_service.signin(request).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
pub mod client;

#[cfg(test)]
mod test_support;
