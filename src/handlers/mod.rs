//! HTTP 요청 핸들러 모듈
//!
//! 요청 본문 역직렬화와 입력 검증을 마친 뒤 서비스 계층을 호출하고,
//! 결과를 HTTP 응답으로 변환합니다. 에러는 [`AppError`](crate::errors::AppError)의
//! `ResponseError` 구현을 통해 `{"message": "..."}` 형태로 응답됩니다.

pub mod auth;
