//! # 클라이언트 애플리케이션
//!
//! 폼, 세션, 알림, 라우트를 묶어 화면 동작을 구현합니다.
//!
//! ## 화면 흐름
//!
//! ```text
//! Route::Auth ──로그인 / Google 로그인 성공──▶ Route::Dashboard
//!      ▲   └──회원가입 성공──▶ 로그인 모드 (토큰 저장, 폼 초기화)
//!      │
//!      └──로그아웃 / /auth/me 가 401·404 응답──┘
//! ```
//!
//! 서버 응답 실패는 에러 알림으로만 표시되며, 토큰 파일 입출력 실패만
//! `Err`로 반환됩니다.

use std::time::Duration;
use crate::domain::dto::users::response::{AuthResponse, UserProfileResponse};
use super::{
    ApiClient, AuthForm, ClientError, FormMode, FormSubmission, Notice, NoticeKind, Route, Session,
};

/// 성공 알림을 보여준 뒤 다음 화면으로 넘어가기까지의 지연
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

pub const GOOGLE_SUCCESS_MESSAGE: &str = "Google authentication successful!";
pub const GOOGLE_FAILURE_MESSAGE: &str = "Google authentication failed!";
pub const LOGOUT_MESSAGE: &str = "You have been logged out successfully";
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load user data";

pub struct ClientApp {
    api: ApiClient,
    session: Session,
    pub form: AuthForm,
    route: Route,
    notice: Option<Notice>,
}

impl ClientApp {
    pub fn new(api: ApiClient, session: Session) -> Self {
        Self {
            api,
            session,
            form: AuthForm::default(),
            route: Route::Auth,
            notice: None,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// 만료되지 않은 알림
    pub fn notice(&mut self) -> Option<&Notice> {
        if self.notice.as_ref().is_some_and(Notice::is_expired) {
            self.notice = None;
        }
        self.notice.as_ref()
    }

    /// 라우트 가드를 거쳐 이동합니다.
    pub fn navigate(&mut self, requested: Route) -> Route {
        self.route = self.session.guard(requested);
        self.route
    }

    /// 현재 모드로 폼을 제출합니다.
    ///
    /// 로그인 성공 시 대시보드로, 회원가입 성공 시 로그인 모드로 전환됩니다.
    pub async fn submit_form(&mut self) -> Result<NoticeKind, ClientError> {
        let mode = self.form.mode();

        let result = match self.form.submission() {
            FormSubmission::SignIn(request) => self.api.signin(&request).await,
            FormSubmission::SignUp(request) => self.api.signup(&request).await,
        };

        match result {
            Ok(response) => {
                self.accept(response)?;
                self.form.complete_submission();
                if mode == FormMode::SignIn {
                    self.navigate(Route::Dashboard);
                }
                Ok(self.show(Notice::success(mode.success_message())))
            }
            Err(e) => {
                log::debug!("폼 제출 실패: {}", e);
                Ok(self.show(Notice::error(e.notice_message(mode.failure_message()))))
            }
        }
    }

    /// Firebase ID 토큰으로 로그인합니다.
    pub async fn google_sign_in(&mut self, id_token: &str) -> Result<NoticeKind, ClientError> {
        match self.api.google(id_token).await {
            Ok(response) => {
                self.accept(response)?;
                self.navigate(Route::Dashboard);
                Ok(self.show(Notice::success(GOOGLE_SUCCESS_MESSAGE)))
            }
            Err(e) => {
                log::debug!("Google 로그인 실패: {}", e);
                Ok(self.show(Notice::error(GOOGLE_FAILURE_MESSAGE)))
            }
        }
    }

    /// 대시보드에 표시할 현재 사용자를 불러옵니다.
    ///
    /// 서버가 토큰을 거부하면 저장된 토큰을 지우고 로그인 화면으로 돌아갑니다.
    pub async fn load_dashboard(&mut self) -> Result<Option<UserProfileResponse>, ClientError> {
        if self.navigate(Route::Dashboard) != Route::Dashboard {
            return Ok(None);
        }

        let token = match self.session.token() {
            Some(token) => token.to_string(),
            None => return Ok(None),
        };

        match self.api.me(&token).await {
            Ok(profile) => Ok(Some(profile)),
            Err(e) if e.is_session_rejected() => {
                log::info!("세션 토큰 거부됨: {}", e);
                self.session.sign_out()?;
                self.navigate(Route::Auth);
                self.show(Notice::error(e.notice_message(LOAD_FAILURE_MESSAGE)));
                Ok(None)
            }
            Err(e) => {
                log::warn!("사용자 정보 조회 실패: {}", e);
                self.show(Notice::error(LOAD_FAILURE_MESSAGE));
                Ok(None)
            }
        }
    }

    pub fn logout(&mut self) -> Result<(), ClientError> {
        self.session.sign_out()?;
        self.navigate(Route::Auth);
        self.show(Notice::success(LOGOUT_MESSAGE));
        Ok(())
    }

    fn accept(&mut self, response: AuthResponse) -> Result<(), ClientError> {
        self.session.sign_in(response.token)
    }

    fn show(&mut self, notice: Notice) -> NoticeKind {
        let kind = notice.kind;
        self.notice = Some(notice);
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::client::TokenStore;
    use crate::repositories::users::InMemoryUserRepository;
    use crate::test_support::{spawn_test_server, StubVerifier};

    struct Harness {
        app: ClientApp,
        repo: Arc<InMemoryUserRepository>,
        dir: tempfile::TempDir,
    }

    fn harness() -> Harness {
        let repo = Arc::new(InMemoryUserRepository::new());
        let verifier = StubVerifier::new().with_identity("good-token", "uid-bob", "bob@gmail.com", Some("Bob"));
        let base_url = spawn_test_server(repo.clone(), verifier).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let session = Session::restore(TokenStore::new(dir.path())).unwrap();

        Harness { app: ClientApp::new(ApiClient::new(base_url), session), repo, dir }
    }

    fn fill(form: &mut AuthForm, name: &str, email: &str, password: &str) {
        form.name = name.to_string();
        form.email = email.to_string();
        form.password = password.to_string();
    }

    fn stored_token(dir: &tempfile::TempDir) -> Option<String> {
        TokenStore::new(dir.path()).load().unwrap()
    }

    #[actix_web::test]
    async fn test_signup_then_signin_reaches_dashboard() {
        let Harness { mut app, repo, dir } = harness();

        app.form.toggle_mode();
        fill(&mut app.form, "Alice", "a@x.com", "secret1");
        assert_eq!(app.submit_form().await.unwrap(), NoticeKind::Success);

        assert_eq!(app.notice().unwrap().message, "Signup successful!");
        assert_eq!(app.form.mode(), FormMode::SignIn);
        assert!(app.form.email.is_empty());
        assert_eq!(app.route(), Route::Auth);
        assert!(stored_token(&dir).is_some());
        assert_eq!(repo.len(), 1);

        fill(&mut app.form, "", "a@x.com", "secret1");
        assert_eq!(app.submit_form().await.unwrap(), NoticeKind::Success);
        assert_eq!(app.notice().unwrap().message, "Signin successful!");
        assert_eq!(app.route(), Route::Dashboard);

        let profile = app.load_dashboard().await.unwrap().unwrap();
        assert_eq!(profile.name, "Alice");
        assert_eq!(profile.email, "a@x.com");
    }

    #[actix_web::test]
    async fn test_server_messages_become_error_notices() {
        let Harness { mut app, dir, .. } = harness();

        app.form.toggle_mode();
        fill(&mut app.form, "Alice", "a@x.com", "secret1");
        app.submit_form().await.unwrap();

        app.form.toggle_mode();
        fill(&mut app.form, "Alice", "a@x.com", "secret1");
        assert_eq!(app.submit_form().await.unwrap(), NoticeKind::Error);
        assert_eq!(app.notice().unwrap().message, "User already exists");
        // 실패한 회원가입은 폼을 유지
        assert_eq!(app.form.mode(), FormMode::SignUp);

        app.logout().unwrap();
        assert!(stored_token(&dir).is_none());

        app.form.toggle_mode();
        fill(&mut app.form, "", "a@x.com", "wrong-password");
        assert_eq!(app.submit_form().await.unwrap(), NoticeKind::Error);
        assert_eq!(app.notice().unwrap().message, "Invalid credentials");
        assert_eq!(app.route(), Route::Auth);
        assert!(stored_token(&dir).is_none());
    }

    #[actix_web::test]
    async fn test_google_sign_in() {
        let Harness { mut app, repo, dir } = harness();

        assert_eq!(app.google_sign_in("forged").await.unwrap(), NoticeKind::Error);
        assert_eq!(app.notice().unwrap().message, GOOGLE_FAILURE_MESSAGE);
        assert!(!app.session().is_authenticated());
        assert!(repo.is_empty());

        assert_eq!(app.google_sign_in("good-token").await.unwrap(), NoticeKind::Success);
        assert_eq!(app.route(), Route::Dashboard);
        assert!(stored_token(&dir).is_some());

        let profile = app.load_dashboard().await.unwrap().unwrap();
        assert_eq!(profile.email, "bob@gmail.com");
    }

    #[actix_web::test]
    async fn test_rejected_token_returns_to_auth() {
        let Harness { app, dir, .. } = harness();
        let api = app.api.clone();

        TokenStore::new(dir.path()).save("not-a-real-token").unwrap();
        let session = Session::restore(TokenStore::new(dir.path())).unwrap();
        let mut app = ClientApp::new(api, session);

        assert!(app.load_dashboard().await.unwrap().is_none());
        assert_eq!(app.route(), Route::Auth);
        assert!(!app.session().is_authenticated());
        assert!(stored_token(&dir).is_none());
        assert_eq!(app.notice().unwrap().kind, NoticeKind::Error);
    }

    #[actix_web::test]
    async fn test_dashboard_guard_without_token() {
        let Harness { mut app, .. } = harness();

        assert_eq!(app.navigate(Route::Dashboard), Route::Auth);
        assert!(app.load_dashboard().await.unwrap().is_none());
        assert!(app.notice().is_none());
    }

    #[actix_web::test]
    async fn test_unreachable_server_uses_fallback_message() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::restore(TokenStore::new(dir.path())).unwrap();
        let mut app = ClientApp::new(ApiClient::new("http://127.0.0.1:9/api"), session);

        fill(&mut app.form, "", "a@x.com", "secret1");
        assert_eq!(app.submit_form().await.unwrap(), NoticeKind::Error);
        assert_eq!(app.notice().unwrap().message, "Error during signin");
    }
}
