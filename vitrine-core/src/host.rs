//! The environment a page flow runs in
//!
//! A browser shows notices as blocking alerts and navigates by changing
//! location; the CLI prints; tests record.

/// Kind of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
    Invalid,
}

/// A blocking message shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

pub trait Host {
    /// Show a blocking notice
    fn notify(&mut self, notice: Notice);

    /// Leave the current page
    fn navigate(&mut self, target: &str);
}

/// Host that keeps everything it was asked to do
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub notices: Vec<Notice>,
    pub location: Option<String>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }
}

impl Host for RecordingHost {
    fn notify(&mut self, notice: Notice) {
        tracing::debug!("Notice ({:?}): {}", notice.kind, notice.message);
        self.notices.push(notice);
    }

    fn navigate(&mut self, target: &str) {
        tracing::debug!("Navigating to {}", target);
        self.location = Some(target.to_string());
    }
}
