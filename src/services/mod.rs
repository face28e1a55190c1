//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 애플리케이션 시작 시 한 번 생성되어 `web::Data`로 핸들러에 전달됩니다.
//! 저장소와 외부 ID 검증기는 trait 객체(`Arc<dyn ...>`)로 주입받습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::{auth::TokenService, users::UserService};
//!
//! let token_service = Arc::new(TokenService::from_env());
//! let user_service = UserService::new(user_repo.clone(), token_service.clone());
//! ```

pub mod users;
pub mod auth;
