use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{info, warn};

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A localized message pushed to the notification surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Transient notification surface (toast). Fire-and-forget.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

pub type SharedNotifier = Arc<dyn Notifier>;

/// Prints notices to stdout.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        let marker = match notice.level {
            NoticeLevel::Success => {
                info!("Notice: {}", notice.message);
                "✅"
            }
            NoticeLevel::Error => {
                warn!("Notice: {}", notice.message);
                "❌"
            }
        };

        let mut stdout = std::io::stdout().lock();
        // A closed stdout must not take the form down with it
        let _ = writeln!(stdout, "{} {}", marker, notice.message);
        let _ = stdout.flush();
    }
}

/// Keeps every notice in memory; used by tests and for replaying history.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice);
    }
}
