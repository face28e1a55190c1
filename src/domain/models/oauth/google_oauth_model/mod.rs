//! Firebase ID 토큰 클레임 및 검증된 Google 신원 모델

pub mod google_user;

pub use google_user::*;
