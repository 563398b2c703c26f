// SPDX-License-Identifier: MPL-2.0
//! Recording surfaces for headless tests.
//!
//! These stand in for the window: they remember every call a rotator or the
//! notifier made so tests can assert on ordering without rendering anything.

use crate::notifications::{DismissReason, Notification, NotificationId, NotificationSurface, Severity};
use crate::rotation::TransitionSurface;
use std::cell::RefCell;
use std::rc::Rc;

/// One call made on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    BeginTransition,
    Render(String),
    EndTransition,
}

/// [`TransitionSurface`] that records every call.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub events: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    #[must_use]
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Texts passed to `render`, in order.
    #[must_use]
    pub fn renders(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::Render(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl TransitionSurface for RecordingSurface {
    fn begin_transition(&mut self) {
        self.events.push(SurfaceEvent::BeginTransition);
    }

    fn render(&mut self, text: &str) {
        self.events.push(SurfaceEvent::Render(text.to_string()));
    }

    fn end_transition(&mut self) {
        self.events.push(SurfaceEvent::EndTransition);
    }
}

/// One call made on a [`RecordingToasts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastEvent {
    Shown {
        id: NotificationId,
        message: String,
        severity: Severity,
    },
    Hidden {
        id: NotificationId,
        reason: DismissReason,
    },
}

/// [`NotificationSurface`] that records every call.
#[derive(Debug, Default)]
pub struct RecordingToasts {
    pub events: Vec<ToastEvent>,
}

impl RecordingToasts {
    #[must_use]
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Number of `show` calls.
    #[must_use]
    pub fn shown_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, ToastEvent::Shown { .. }))
            .count()
    }

    /// Reasons passed to `hide` for the given notification.
    #[must_use]
    pub fn hides_of(&self, id: NotificationId) -> Vec<DismissReason> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ToastEvent::Hidden { id: hidden, reason } if *hidden == id => Some(*reason),
                _ => None,
            })
            .collect()
    }

    /// Messages passed to `show`, in order.
    #[must_use]
    pub fn shown_messages(&self) -> Vec<(String, Severity)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ToastEvent::Shown {
                    message, severity, ..
                } => Some((message.clone(), *severity)),
                _ => None,
            })
            .collect()
    }
}

impl NotificationSurface for RecordingToasts {
    fn show(&mut self, notification: &Notification) {
        self.events.push(ToastEvent::Shown {
            id: notification.id(),
            message: notification.message().to_string(),
            severity: notification.severity(),
        });
    }

    fn hide(&mut self, id: NotificationId, reason: DismissReason) {
        self.events.push(ToastEvent::Hidden { id, reason });
    }
}
