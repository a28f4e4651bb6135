//! User-facing notices produced by catalog commands.
//!
//! Commands never render anything themselves; they hand back notices that a
//! front-end shows for a fixed duration and then drops.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default time a notice stays visible.
pub const DEFAULT_NOTICE_DISPLAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub issued_at: DateTime<Utc>,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
            issued_at: Utc::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
            issued_at: Utc::now(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }

    /// When the notice should be dismissed.
    pub fn expires_at(&self, display: Duration) -> DateTime<Utc> {
        match chrono::Duration::from_std(display) {
            Ok(display) => self
                .issued_at
                .checked_add_signed(display)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
            Err(_) => DateTime::<Utc>::MAX_UTC,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>, display: Duration) -> bool {
        now >= self.expires_at(display)
    }
}
