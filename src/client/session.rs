//! 세션 상태 머신과 라우트 가드
//!
//! ```text
//! Anonymous ──(로그인 / 회원가입 / Google 로그인 성공)──▶ Authenticated(token)
//!     ▲                                                        │
//!     └───────────────(로그아웃 / 서버의 토큰 거부)─────────────┘
//! ```

use super::{ClientError, TokenStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated { token: String },
}

/// 화면 라우트
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// 로그인/회원가입 화면 (공개)
    Auth,
    /// 대시보드 (보호)
    Dashboard,
}

impl Route {
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Dashboard)
    }
}

/// 토큰 저장소와 동기화되는 세션
#[derive(Debug)]
pub struct Session {
    store: TokenStore,
    state: SessionState,
}

impl Session {
    /// 저장된 토큰으로 세션을 복원합니다.
    pub fn restore(store: TokenStore) -> Result<Self, ClientError> {
        let state = match store.load()? {
            Some(token) => SessionState::Authenticated { token },
            None => SessionState::Anonymous,
        };
        Ok(Self { store, state })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn token(&self) -> Option<&str> {
        match &self.state {
            SessionState::Authenticated { token } => Some(token),
            SessionState::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// 새 토큰을 저장하고 Authenticated로 전이합니다.
    pub fn sign_in(&mut self, token: String) -> Result<(), ClientError> {
        self.store.save(&token)?;
        self.state = SessionState::Authenticated { token };
        Ok(())
    }

    /// 토큰을 삭제하고 Anonymous로 전이합니다.
    pub fn sign_out(&mut self) -> Result<(), ClientError> {
        self.store.clear()?;
        self.state = SessionState::Anonymous;
        Ok(())
    }

    /// 토큰 유무로 보호된 라우트 접근을 결정합니다.
    ///
    /// 토큰이 없으면 보호된 라우트 요청은 [`Route::Auth`]로 돌려보냅니다.
    pub fn guard(&self, requested: Route) -> Route {
        if requested.is_protected() && !self.is_authenticated() {
            Route::Auth
        } else {
            requested
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_transitions_persist_token() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::restore(TokenStore::new(dir.path())).unwrap();

        assert_eq!(session.state(), &SessionState::Anonymous);
        assert_eq!(session.guard(Route::Dashboard), Route::Auth);
        assert_eq!(session.guard(Route::Auth), Route::Auth);

        session.sign_in("token-1".to_string()).unwrap();
        assert_eq!(session.token(), Some("token-1"));
        assert_eq!(session.guard(Route::Dashboard), Route::Dashboard);

        // 새 프로세스에서 복원
        let restored = Session::restore(TokenStore::new(dir.path())).unwrap();
        assert_eq!(restored.token(), Some("token-1"));

        session.sign_out().unwrap();
        assert_eq!(session.state(), &SessionState::Anonymous);

        let restored = Session::restore(TokenStore::new(dir.path())).unwrap();
        assert!(!restored.is_authenticated());
    }
}
