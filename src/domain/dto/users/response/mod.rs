//! 인증 응답 DTO 모듈

pub mod user_response;

pub use user_response::*;
