// SPDX-License-Identifier: MPL-2.0
//! Single-slot transient notifications.
//!
//! At most one notification is visible. A new one replaces the current one
//! at once, and each disappears on its own after a fixed delay unless the
//! user closes it first.
//!
//! # Components
//!
//! - [`notification`] - `Notification` data and `Severity` levels
//! - [`notifier`] - `Notifier`, the slot and its auto-dismiss timer
//!
//! # Usage
//!
//! ```
//! use coming_soon::notifications::{Notifier, Severity};
//! use coming_soon::scheduler::VirtualClock;
//! use coming_soon::test_utils::RecordingToasts;
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! let clock = Rc::new(VirtualClock::new());
//! let notifier = Notifier::new(clock.clone(), RecordingToasts::shared(), Duration::from_secs(5));
//!
//! let handle = notifier.notify("Saved", Severity::Success);
//! assert!(notifier.dismiss(handle));
//! assert!(!notifier.dismiss(handle));
//! ```

mod notification;
mod notifier;

pub use notification::{Notification, NotificationId, Severity};
pub use notifier::{
    DismissReason, NotificationHandle, NotificationSurface, Notifier, SharedNotificationSurface,
};
