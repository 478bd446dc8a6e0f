//! Single-line notice channel.

use tokio::sync::watch;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Notice,
    Error,
}

/// One user-visible status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.level {
            NoticeLevel::Notice => write!(f, "Notice: {}", self.message),
            NoticeLevel::Error => write!(f, "Error! {}", self.message),
        }
    }
}

/// The status line. Holds only the latest notice; no history.
#[derive(Debug)]
pub struct NoticeBoard {
    tx: watch::Sender<Option<Notice>>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx }
    }

    /// Publish an informational notice.
    pub fn notice(&self, message: impl Into<String>) {
        self.publish(NoticeLevel::Notice, message.into());
    }

    /// Publish an error notice.
    pub fn error(&self, message: impl Into<String>) {
        self.publish(NoticeLevel::Error, message.into());
    }

    fn publish(&self, level: NoticeLevel, message: String) {
        match level {
            NoticeLevel::Notice => tracing::info!(notice = %message, "Notice"),
            NoticeLevel::Error => tracing::warn!(notice = %message, "Error notice"),
        }
        self.tx.send_replace(Some(Notice { level, message }));
    }

    /// Latest notice, if any was published.
    pub fn current(&self) -> Option<Notice> {
        self.tx.borrow().clone()
    }

    /// Watch for changes of the status line.
    pub fn subscribe(&self) -> watch::Receiver<Option<Notice>> {
        self.tx.subscribe()
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new()
    }
}
