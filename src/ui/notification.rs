//! Transient status messages.
//!
//! At most one notification is visible. A new one replaces the current one,
//! and each expires after a fixed lifetime unless replaced first.

use std::time::{Duration, Instant};

/// Default time a notification stays visible.
pub const DEFAULT_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub shown_at: Instant,
}

pub struct NotificationCenter {
    current: Option<Notification>,
    lifetime: Duration,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            current: None,
            lifetime,
            next_id: 0,
        }
    }

    /// Show `message`, removing whatever is currently visible.
    /// Returns the id of the new notification.
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        now: Instant,
    ) -> u64 {
        self.next_id += 1;
        let notification = Notification {
            id: self.next_id,
            message: message.into(),
            kind,
            shown_at: now,
        };
        match kind {
            NotificationKind::Success => {
                tracing::debug!(message = %notification.message, "Notification shown")
            }
            NotificationKind::Error => {
                tracing::info!(message = %notification.message, "Error notification shown")
            }
        }
        self.current = Some(notification);
        self.next_id
    }

    /// Remove the visible notification once its lifetime has passed.
    /// Returns true if one was removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|n| now.saturating_duration_since(n.shown_at) >= self.lifetime);
        if expired {
            self.current = None;
        }
        expired
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_LIFETIME)
    }
}
