//! 로그인/회원가입 겸용 폼
//!
//! 하나의 필드 집합 `{name, email, password}`를 두 모드로 사용합니다.
//! 모드를 전환하면 모든 필드가 초기화됩니다.

use crate::domain::dto::users::request::{SigninRequest, SignupRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    SignIn,
    SignUp,
}

impl FormMode {
    pub fn toggled(self) -> Self {
        match self {
            FormMode::SignIn => FormMode::SignUp,
            FormMode::SignUp => FormMode::SignIn,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FormMode::SignIn => "Welcome Back",
            FormMode::SignUp => "Create Account",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            FormMode::SignIn => "Sign in to your account to continue",
            FormMode::SignUp => "Fill in your details to create your account",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            FormMode::SignIn => "Sign in",
            FormMode::SignUp => "Create Account",
        }
    }

    pub fn toggle_prompt(self) -> &'static str {
        match self {
            FormMode::SignIn => "Don't have an account? Sign up",
            FormMode::SignUp => "Already have an account? Sign in",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            FormMode::SignIn => "Signin successful!",
            FormMode::SignUp => "Signup successful!",
        }
    }

    /// 서버가 메시지를 주지 않은 실패에 쓰는 기본 문구
    pub fn failure_message(self) -> &'static str {
        match self {
            FormMode::SignIn => "Error during signin",
            FormMode::SignUp => "Error during signup",
        }
    }
}

/// 제출 시점의 폼 내용
#[derive(Debug, Clone)]
pub enum FormSubmission {
    SignIn(SigninRequest),
    SignUp(SignupRequest),
}

#[derive(Debug, Clone)]
pub struct AuthForm {
    mode: FormMode,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Default for AuthForm {
    fn default() -> Self {
        Self::new(FormMode::SignIn)
    }
}

impl AuthForm {
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            name: String::new(),
            email: String::new(),
            password: String::new(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// 모드를 전환하고 필드를 비웁니다.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.clear();
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.password.clear();
    }

    /// 로그인 모드에서는 이름 필드를 사용하지 않습니다.
    pub fn uses_name(&self) -> bool {
        self.mode == FormMode::SignUp
    }

    pub fn submission(&self) -> FormSubmission {
        match self.mode {
            FormMode::SignIn => FormSubmission::SignIn(SigninRequest {
                email: self.email.clone(),
                password: self.password.clone(),
            }),
            FormMode::SignUp => FormSubmission::SignUp(SignupRequest {
                name: self.name.clone(),
                email: self.email.clone(),
                password: self.password.clone(),
            }),
        }
    }

    /// 제출 성공 후의 폼 상태
    ///
    /// 회원가입이 끝나면 로그인 모드로 돌아가 빈 폼을 보여줍니다.
    pub fn complete_submission(&mut self) {
        if self.mode == FormMode::SignUp {
            self.mode = FormMode::SignIn;
            self.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(mode: FormMode) -> AuthForm {
        let mut form = AuthForm::new(mode);
        form.name = "Alice".to_string();
        form.email = "a@x.com".to_string();
        form.password = "secret1".to_string();
        form
    }

    #[test]
    fn test_toggle_clears_fields() {
        let mut form = filled(FormMode::SignIn);

        form.toggle_mode();

        assert_eq!(form.mode(), FormMode::SignUp);
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.password.is_empty());

        form.toggle_mode();
        assert_eq!(form.mode(), FormMode::SignIn);
    }

    #[test]
    fn test_submission_matches_mode() {
        match filled(FormMode::SignIn).submission() {
            FormSubmission::SignIn(request) => assert_eq!(request.email, "a@x.com"),
            other => panic!("Expected signin submission, got {:?}", other),
        }

        match filled(FormMode::SignUp).submission() {
            FormSubmission::SignUp(request) => assert_eq!(request.name, "Alice"),
            other => panic!("Expected signup submission, got {:?}", other),
        }
    }

    #[test]
    fn test_signup_completion_returns_to_signin() {
        let mut form = filled(FormMode::SignUp);
        form.complete_submission();

        assert_eq!(form.mode(), FormMode::SignIn);
        assert!(form.email.is_empty());

        // 로그인 완료는 폼을 건드리지 않음
        let mut form = filled(FormMode::SignIn);
        form.complete_submission();
        assert_eq!(form.email, "a@x.com");
    }

    #[test]
    fn test_mode_texts() {
        assert_eq!(FormMode::SignIn.title(), "Welcome Back");
        assert_eq!(FormMode::SignUp.title(), "Create Account");
        assert_eq!(FormMode::SignUp.failure_message(), "Error during signup");
    }
}
