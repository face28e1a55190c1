//! 터미널 화면 렌더링
//!
//! 모든 함수는 출력할 문자열을 반환하며 직접 출력하지 않습니다.

use crate::domain::dto::users::response::UserProfileResponse;
use super::{AuthForm, Notice, NoticeKind, Session};

/// 박스 형태로 둘러싸인 제목
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                   Welcome Back                   ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn boxed_title(title: &str) -> String {
    // 고정 너비 50칸 (박스 내부 콘텐츠)
    let border = "═".repeat(50);

    format!("╔{border}╗\n║{title:^50}║\n╚{border}╝")
}

pub fn notice(notice: &Notice) -> String {
    match notice.kind {
        NoticeKind::Success => format!("✓ {}", notice.message),
        NoticeKind::Error => format!("✗ {}", notice.message),
    }
}

/// 로그인/회원가입 폼 화면
pub fn auth_form(form: &AuthForm) -> String {
    let mode = form.mode();

    let mut lines = vec![
        boxed_title(mode.title()),
        format!("   {}", mode.subtitle()),
        String::new(),
    ];
    if form.uses_name() {
        lines.push(format!("   ├─ Full Name: {}", form.name));
    }
    lines.push(format!("   ├─ Email Address: {}", form.email));
    lines.push(format!("   ├─ Password: {}", "*".repeat(form.password.chars().count())));
    lines.push(String::new());
    lines.push(format!("   [s] {}   [g] Google   [t] {}   [q] Quit", mode.submit_label(), mode.toggle_prompt()));

    lines.join("\n")
}

pub fn dashboard(profile: &UserProfileResponse) -> String {
    [
        boxed_title("Welcome to Your Dashboard 🚀"),
        "   You have successfully logged in!".to_string(),
        String::new(),
        "   User Profile".to_string(),
        format!("   ├─ Name: {}", profile.name),
        format!("   ├─ Email: {}", profile.email),
        format!("   ├─ Provider: {}", profile.provider.as_str()),
    ]
    .join("\n")
}

pub fn status(session: &Session) -> String {
    if session.is_authenticated() {
        "Signed in (token stored)".to_string()
    } else {
        "Not signed in".to_string()
    }
}
