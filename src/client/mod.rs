//! 인증 서비스 터미널 클라이언트
//!
//! `auth_client` 바이너리가 사용하는 라이브러리 부분입니다.
//!
//! # Modules
//!
//! - [`api`] - 인증 API HTTP 호출
//! - [`token_store`] - 세션 토큰 파일 저장소
//! - [`session`] - 세션 상태 머신과 라우트 가드
//! - [`form`] - 로그인/회원가입 겸용 폼
//! - [`notice`] - 3초 후 사라지는 알림
//! - [`app`] - 화면 동작 조립
//! - [`view`] - 터미널 렌더링
//!
//! # Examples
//!
//! ```rust,ignore
//! use auth_service::client::{ApiClient, ClientApp, Session, TokenStore};
//!
//! let session = Session::restore(TokenStore::from_env()?)?;
//! let mut app = ClientApp::new(ApiClient::from_env(), session);
//!
//! app.form.email = "a@x.com".to_string();
//! app.form.password = "secret1".to_string();
//! app.submit_form().await?;
//! ```

pub mod api;
pub mod app;
pub mod error;
pub mod form;
pub mod notice;
pub mod session;
pub mod token_store;
pub mod view;

pub use api::ApiClient;
pub use app::ClientApp;
pub use error::ClientError;
pub use form::{AuthForm, FormMode, FormSubmission};
pub use notice::{Notice, NoticeKind, NOTICE_TTL};
pub use session::{Route, Session, SessionState};
pub use token_store::TokenStore;
