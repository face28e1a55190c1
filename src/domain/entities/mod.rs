//! # Domain Entities
//!
//! MongoDB에 영속화되는 도메인 엔티티 모듈입니다.
//! 엔티티는 저장 형태 그대로의 구조를 가지며, API 응답에는
//! [`dto`](crate::domain::dto) 계층의 타입으로 변환되어 노출됩니다.

pub mod users;

pub use users::*;
