// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the notification system.

use std::fmt;
use std::time::Duration;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Severity tag carried by a notification; it only affects styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A notification shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    /// Scheduler time at creation.
    created_at: Duration,
}

impl Notification {
    pub(crate) fn new(severity: Severity, message: impl Into<String>, created_at: Duration) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the scheduler time at which this notification was created.
    #[must_use]
    pub fn created_at(&self) -> Duration {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::new(Severity::Success, "test", Duration::ZERO);
        let n2 = Notification::new(Severity::Success, "test", Duration::ZERO);
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_labels_are_distinct() {
        assert_eq!(Severity::Info.to_string(), "info");
        assert_eq!(Severity::Success.to_string(), "success");
        assert_eq!(Severity::Error.to_string(), "error");
    }

    #[test]
    fn default_severity_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn accessors_return_construction_values() {
        let notification = Notification::new(Severity::Success, "done", Duration::from_secs(2));
        assert_eq!(notification.severity(), Severity::Success);
        assert_eq!(notification.message(), "done");
        assert_eq!(notification.created_at(), Duration::from_secs(2));
    }
}
