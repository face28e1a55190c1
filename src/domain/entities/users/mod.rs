//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! // 로컬 사용자 생성
//! let user = User::new_local("Alice", "alice@example.com", hashed_password);
//!
//! // Google 사용자 생성
//! let google_user = User::new_google(Some("Bob"), "bob@gmail.com", firebase_uid);
//! ```

pub mod user;

pub use user::*;
