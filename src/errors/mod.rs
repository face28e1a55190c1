//! 애플리케이션 에러 모듈
//!
//! [`errors`] 하위 모듈의 [`AppError`](errors::AppError)를 재export 합니다.

pub mod errors;

pub use errors::*;
