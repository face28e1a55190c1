//! 잠시 표시되었다가 사라지는 알림

use std::time::{Duration, Instant};

/// 알림 표시 시간
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    shown_at: Instant,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self::at(NoticeKind::Success, message, Instant::now())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::at(NoticeKind::Error, message, Instant::now())
    }

    pub fn at(kind: NoticeKind, message: impl Into<String>, shown_at: Instant) -> Self {
        Self { kind, message: message.into(), shown_at }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= NOTICE_TTL
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_expires_after_three_seconds() {
        let shown_at = Instant::now();
        let notice = Notice::at(NoticeKind::Success, "Signin successful!", shown_at);

        assert!(!notice.is_expired_at(shown_at));
        assert!(!notice.is_expired_at(shown_at + Duration::from_millis(2999)));
        assert!(notice.is_expired_at(shown_at + NOTICE_TTL));
    }
}
