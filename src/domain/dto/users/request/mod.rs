//! 인증 요청 DTO 모듈
//!
//! | 엔드포인트 | DTO |
//! |------------|-----|
//! | `POST /api/auth/signup` | [`SignupRequest`] |
//! | `POST /api/auth/signin` | [`SigninRequest`] |
//! | `POST /api/auth/google` | [`GoogleAuthRequest`] |

pub mod auth_request;

pub use auth_request::*;
