// SPDX-License-Identifier: MPL-2.0
//! Windowless mode: runs the landing page with log output as its only surface.
//!
//! Each caption change and toast is written through `tracing`, which makes
//! the page's timing observable from a terminal or a CI log.

use crate::config::{Config, FRAME_TICK_MS};
use crate::landing::{LandingPage, Surfaces};
use crate::notifications::{DismissReason, Notification, NotificationId, NotificationSurface};
use crate::rotation::{Rotator, TransitionSurface};
use crate::scheduler::{Scheduler, VirtualClock};
use std::cell::RefCell;
use std::rc::Rc;
use std::thread;
use std::time::{Duration, Instant};

/// How virtual time is paced against the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Sleep between frames so the page runs at real speed.
    RealTime,
    /// Advance frame by frame without sleeping.
    FastForward,
}

/// What happened during a headless run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub message_rotations: u64,
    pub progress_rotations: u64,
    pub notifications_shown: usize,
    /// Configuration values the page rejected.
    pub config_errors: usize,
    pub elapsed: Duration,
}

struct LogSurface {
    label: &'static str,
}

impl TransitionSurface for LogSurface {
    fn begin_transition(&mut self) {
        tracing::trace!(surface = self.label, "fade out");
    }

    fn render(&mut self, text: &str) {
        tracing::info!(surface = self.label, text, "caption");
    }

    fn end_transition(&mut self) {
        tracing::trace!(surface = self.label, "fade in");
    }
}

#[derive(Default)]
struct LogToasts {
    shown: usize,
}

impl NotificationSurface for LogToasts {
    fn show(&mut self, notification: &Notification) {
        self.shown += 1;
        tracing::info!(
            severity = %notification.severity(),
            message = notification.message(),
            "toast"
        );
    }

    fn hide(&mut self, id: NotificationId, reason: DismissReason) {
        tracing::debug!(notification = %id, ?reason, "toast hidden");
    }
}

/// Runs the page for `duration`, optionally submitting `email` first.
///
/// Rejected configuration values leave their component out; the rest of the
/// page still runs.
pub fn run(config: &Config, duration: Duration, email: Option<&str>, pacing: Pacing) -> Summary {
    let clock = Rc::new(VirtualClock::new());
    let toasts = Rc::new(RefCell::new(LogToasts::default()));
    let page = LandingPage::new(
        config,
        clock.clone(),
        Surfaces {
            message: Rc::new(RefCell::new(LogSurface { label: "message" })),
            progress: Rc::new(RefCell::new(LogSurface { label: "progress" })),
            notifications: toasts.clone(),
        },
    );

    if let Some(rotator) = page.message_rotator() {
        tracing::info!(
            rotator = rotator.label(),
            text = rotator.current_text(),
            "initial caption"
        );
    }
    page.on_ready();

    if let Some(email) = email {
        if let Err(err) = page.on_submit(email) {
            tracing::warn!(error = %err, "submission rejected");
        }
    }

    let frame = Duration::from_millis(FRAME_TICK_MS);
    let mut last = Instant::now();
    while clock.now() < duration {
        let step = match pacing {
            Pacing::RealTime => {
                thread::sleep(frame);
                let now = Instant::now();
                let elapsed = now.saturating_duration_since(last);
                last = now;
                elapsed
            }
            Pacing::FastForward => frame,
        };
        clock.advance(step.min(duration - clock.now()));
    }

    let summary = Summary {
        message_rotations: page.message_rotator().map_or(0, Rotator::ticks),
        progress_rotations: page.progress_rotator().map_or(0, Rotator::ticks),
        notifications_shown: toasts.borrow().shown,
        config_errors: page.config_errors().len(),
        elapsed: clock.now(),
    };
    page.teardown();
    tracing::info!(?summary, "headless run finished");
    summary
}
