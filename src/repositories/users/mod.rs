//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! - [`MongoUserRepository`] - `users` 컬렉션 기반 구현체
//! - [`InMemoryUserRepository`] - 프로세스 메모리 기반 구현체 (테스트/로컬 실행용)

pub mod user_repo;
pub mod memory_repo;

pub use user_repo::*;
pub use memory_repo::*;
