//! # Domain Layer
//!
//! 인증 서비스의 도메인 모델을 정의하는 계층입니다.
//!
//! ```text
//! domain/
//! ├── entities/   ← MongoDB에 저장되는 엔티티 (User, Credential)
//! ├── dto/        ← HTTP 요청/응답 데이터 전송 객체
//! └── models/     ← 토큰 클레임, 인증된 사용자, 외부 ID 정보 등 내부 모델
//! ```

pub mod entities;
pub mod dto;
pub mod models;
