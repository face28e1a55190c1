//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 구체 타입이 아닌 [`UserStore`](users::UserStore) trait에 의존합니다.
//! 운영 환경에서는 MongoDB 구현체를, 테스트에서는 메모리 구현체를 주입합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{MongoUserRepository, UserStore};
//!
//! let user_repo: Arc<dyn UserStore> = Arc::new(MongoUserRepository::new(database));
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod users;
