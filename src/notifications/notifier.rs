// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Notifier` owns the single visible slot. Showing a notification
//! replaces whatever is there, and each notification carries a one-shot
//! auto-dismiss timer that is cancelled when the user closes it first.

use super::notification::{Notification, NotificationId, Severity};
use crate::scheduler::{Scheduler, TimerToken};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Why a notification left the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// The user closed it.
    Manual,
    /// Its auto-dismiss timer fired.
    Expired,
    /// A newer notification replaced it.
    Superseded,
}

/// Presentation side of the notifier.
pub trait NotificationSurface {
    fn show(&mut self, notification: &Notification);
    fn hide(&mut self, id: NotificationId, reason: DismissReason);
}

pub type SharedNotificationSurface = Rc<RefCell<dyn NotificationSurface>>;

/// Refers to one notification returned by [`Notifier::notify`].
///
/// A handle outlives its notification; using a stale handle is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationHandle(NotificationId);

impl NotificationHandle {
    #[must_use]
    pub fn id(self) -> NotificationId {
        self.0
    }
}

impl From<NotificationId> for NotificationHandle {
    fn from(id: NotificationId) -> Self {
        Self(id)
    }
}

struct Active {
    notification: Notification,
    timer: TimerToken,
}

struct Inner {
    scheduler: Rc<dyn Scheduler>,
    surface: SharedNotificationSurface,
    auto_dismiss: Duration,
    current: RefCell<Option<Active>>,
}

impl Inner {
    /// Empties the slot if it holds `id`.
    fn take_if(&self, id: NotificationId) -> Option<Active> {
        let mut current = self.current.borrow_mut();
        if current
            .as_ref()
            .is_some_and(|active| active.notification.id() == id)
        {
            current.take()
        } else {
            None
        }
    }

    fn expire(&self, id: NotificationId) {
        if self.take_if(id).is_some() {
            tracing::debug!(notification = %id, "notification expired");
            self.surface.borrow_mut().hide(id, DismissReason::Expired);
        }
    }
}

/// Single-slot notification holder.
///
/// Cloning yields another handle to the same slot, which is how timer
/// callbacks and UI handlers reach it.
#[derive(Clone)]
pub struct Notifier {
    inner: Rc<Inner>,
}

impl Notifier {
    pub fn new(
        scheduler: Rc<dyn Scheduler>,
        surface: SharedNotificationSurface,
        auto_dismiss: Duration,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                scheduler,
                surface,
                auto_dismiss,
                current: RefCell::new(None),
            }),
        }
    }

    /// Shows a notification, replacing the visible one if any.
    ///
    /// The replaced notification is hidden with [`DismissReason::Superseded`]
    /// and is never shown again.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> NotificationHandle {
        let previous = self.inner.current.borrow_mut().take();
        if let Some(previous) = previous {
            let id = previous.notification.id();
            self.inner.scheduler.cancel(previous.timer);
            tracing::debug!(notification = %id, "notification superseded");
            self.inner
                .surface
                .borrow_mut()
                .hide(id, DismissReason::Superseded);
        }

        let notification = Notification::new(severity, message, self.inner.scheduler.now());
        let id = notification.id();

        let weak = Rc::downgrade(&self.inner);
        let timer = self.inner.scheduler.after(
            self.inner.auto_dismiss,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.expire(id);
                }
            }),
        );

        tracing::info!(
            notification = %id,
            %severity,
            message = notification.message(),
            "notification shown"
        );
        self.inner.surface.borrow_mut().show(&notification);
        *self.inner.current.borrow_mut() = Some(Active {
            notification,
            timer,
        });

        NotificationHandle(id)
    }

    /// Closes the notification `handle` refers to.
    ///
    /// Returns `false`, and does nothing, when it is no longer visible
    /// (already dismissed, expired or superseded).
    pub fn dismiss(&self, handle: NotificationHandle) -> bool {
        let Some(active) = self.inner.take_if(handle.0) else {
            tracing::debug!(notification = %handle.0, "dismiss ignored; not visible");
            return false;
        };

        self.inner.scheduler.cancel(active.timer);
        tracing::debug!(notification = %handle.0, "notification dismissed");
        self.inner
            .surface
            .borrow_mut()
            .hide(handle.0, DismissReason::Manual);
        true
    }

    /// Dismisses whatever is visible. No-op on an empty slot.
    pub fn clear(&self) {
        let current = self
            .inner
            .current
            .borrow()
            .as_ref()
            .map(|active| NotificationHandle(active.notification.id()));
        if let Some(handle) = current {
            self.dismiss(handle);
        }
    }

    /// Returns a copy of the visible notification.
    #[must_use]
    pub fn current(&self) -> Option<Notification> {
        self.inner
            .current
            .borrow()
            .as_ref()
            .map(|active| active.notification.clone())
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.inner.current.borrow().is_some()
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("current", &self.current())
            .field("auto_dismiss", &self.inner.auto_dismiss)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::VirtualClock;
    use crate::test_utils::{RecordingToasts, ToastEvent};

    const AUTO_DISMISS: Duration = Duration::from_millis(5000);

    fn setup() -> (Rc<VirtualClock>, Notifier, Rc<RefCell<RecordingToasts>>) {
        let clock = Rc::new(VirtualClock::new());
        let toasts = RecordingToasts::shared();
        let notifier = Notifier::new(clock.clone(), toasts.clone(), AUTO_DISMISS);
        (clock, notifier, toasts)
    }

    #[test]
    fn new_notifier_is_empty() {
        let (clock, notifier, _) = setup();
        assert!(!notifier.is_visible());
        assert!(notifier.current().is_none());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn notify_shows_and_arms_timer() {
        let (clock, notifier, toasts) = setup();
        let handle = notifier.notify("hello", Severity::Info);

        let current = notifier.current().unwrap();
        assert_eq!(current.id(), handle.id());
        assert_eq!(current.message(), "hello");
        assert_eq!(toasts.borrow().shown_count(), 1);
        assert_eq!(clock.next_due(), Some(AUTO_DISMISS));
    }

    #[test]
    fn created_at_uses_scheduler_time() {
        let (clock, notifier, _) = setup();
        clock.advance(Duration::from_millis(1234));
        notifier.notify("later", Severity::Info);
        assert_eq!(
            notifier.current().unwrap().created_at(),
            Duration::from_millis(1234)
        );
    }

    #[test]
    fn second_notify_supersedes_first() {
        let (clock, notifier, toasts) = setup();
        let first = notifier.notify("a", Severity::Info);
        let second = notifier.notify("b", Severity::Error);

        let current = notifier.current().unwrap();
        assert_eq!(current.message(), "b");
        assert_eq!(current.severity(), Severity::Error);
        assert_eq!(
            toasts.borrow().hides_of(first.id()),
            vec![DismissReason::Superseded]
        );
        assert_eq!(clock.pending(), 1);

        clock.advance(AUTO_DISMISS);
        assert_eq!(toasts.borrow().shown_messages().len(), 2);
        assert_eq!(
            toasts.borrow().hides_of(second.id()),
            vec![DismissReason::Expired]
        );
        assert_eq!(
            toasts.borrow().hides_of(first.id()),
            vec![DismissReason::Superseded]
        );
    }

    #[test]
    fn auto_dismiss_after_configured_delay() {
        let (clock, notifier, toasts) = setup();
        let handle = notifier.notify("bye", Severity::Success);

        clock.advance(AUTO_DISMISS - Duration::from_millis(1));
        assert!(notifier.is_visible());

        clock.advance(Duration::from_millis(1));
        assert!(!notifier.is_visible());
        assert_eq!(
            toasts.borrow().hides_of(handle.id()),
            vec![DismissReason::Expired]
        );
    }

    #[test]
    fn dismiss_is_idempotent() {
        let (clock, notifier, toasts) = setup();
        let handle = notifier.notify("m", Severity::Info);

        assert!(notifier.dismiss(handle));
        assert!(!notifier.dismiss(handle));
        assert_eq!(clock.pending(), 0);
        assert_eq!(
            toasts.borrow().hides_of(handle.id()),
            vec![DismissReason::Manual]
        );
    }

    #[test]
    fn dismissing_superseded_handle_leaves_current_alone() {
        let (_, notifier, _) = setup();
        let old = notifier.notify("old", Severity::Info);
        let new = notifier.notify("new", Severity::Info);

        assert!(!notifier.dismiss(old));
        assert_eq!(notifier.current().unwrap().id(), new.id());
    }

    #[test]
    fn early_manual_dismiss_cancels_auto_dismiss() {
        let (clock, notifier, toasts) = setup();
        let handle = notifier.notify("early", Severity::Info);

        let user = notifier.clone();
        clock.after(
            Duration::ZERO,
            Box::new(move || {
                user.dismiss(handle);
            }),
        );
        clock.advance(AUTO_DISMISS);

        assert_eq!(clock.pending(), 0);
        assert_eq!(
            toasts.borrow().hides_of(handle.id()),
            vec![DismissReason::Manual]
        );
    }

    #[test]
    fn clear_hides_current_and_is_safe_when_empty() {
        let (clock, notifier, toasts) = setup();
        notifier.clear();
        let handle = notifier.notify("x", Severity::Error);
        notifier.clear();
        notifier.clear();

        assert!(!notifier.is_visible());
        assert_eq!(clock.pending(), 0);
        assert_eq!(
            toasts.borrow().events.last(),
            Some(&ToastEvent::Hidden {
                id: handle.id(),
                reason: DismissReason::Manual
            })
        );
    }

    #[test]
    fn dropped_notifier_ignores_stale_timer() {
        let (clock, notifier, toasts) = setup();
        notifier.notify("x", Severity::Info);
        drop(notifier);

        clock.advance(AUTO_DISMISS);
        assert_eq!(toasts.borrow().events.len(), 1);
    }
}
