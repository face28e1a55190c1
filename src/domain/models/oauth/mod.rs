//! # External Identity Models
//!
//! Google 로그인은 클라이언트가 Firebase Authentication으로 로그인한 뒤
//! 발급받은 ID 토큰을 서버로 전달하는 방식입니다. 이 모듈은 그 ID 토큰의
//! 클레임과, 검증을 통과한 뒤 서비스 계층에 전달되는 신원 정보를 정의합니다.

pub mod google_oauth_model;

pub use google_oauth_model::*;
