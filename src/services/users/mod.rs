//! 사용자 관리 서비스 모듈
//!
//! 로컬(이메일/패스워드) 계정의 회원가입, 로그인, 프로필 조회를 담당합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (환경별 cost)
//! - 프로바이더와 무관한 이메일 중복 방지
//! - 사용자 부재와 비밀번호 불일치를 구분하지 않는 로그인 실패 응답

pub mod user_service;

pub use user_service::*;
