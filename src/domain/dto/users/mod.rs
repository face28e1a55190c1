//! 사용자 인증 관련 DTO 모듈

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
