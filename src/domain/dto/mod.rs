//! # Data Transfer Objects
//!
//! HTTP API의 요청 본문과 응답 본문을 정의하는 모듈입니다.
//! 요청 DTO는 `validator`로 입력을 검증하고, 응답 DTO는 엔티티에서 민감 정보
//! (비밀번호 해시, 외부 ID)를 제외한 공개 필드만 담습니다.

pub mod users;

pub use users::*;
