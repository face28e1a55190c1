//! # Domain Models
//!
//! 영속화되지 않는 내부 도메인 모델 모듈입니다.
//!
//! - [`auth`] - 인증 미들웨어가 요청에 부착하는 인증 사용자 정보
//! - [`token`] - 세션 토큰(JWT) 클레임
//! - [`oauth`] - 외부 ID 프로바이더(Firebase)가 발급한 ID 토큰 클레임

pub mod auth;
pub mod token;
pub mod oauth;
