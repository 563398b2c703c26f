// SPDX-License-Identifier: MPL-2.0
//! The landing page as a whole: two rotators, the notifier and the signup form.
//!
//! The host environment only has to forward three signals: page ready,
//! form submitted, and notification closed. Everything else runs on the
//! injected scheduler.

use crate::config::{Config, DEFAULT_AUTO_DISMISS_MS, DEFAULT_SIGNUP_LATENCY_MS};
use crate::content::SignupCopy;
use crate::error::{Error, Result};
use crate::notifications::{NotificationHandle, Notifier, SharedNotificationSurface, Severity};
use crate::rotation::{Rotator, SharedSurface};
use crate::scheduler::Scheduler;
use crate::signup::{SignupForm, Submission};
use std::rc::Rc;
use std::time::Duration;

/// Display targets of the page.
#[derive(Clone)]
pub struct Surfaces {
    pub message: SharedSurface,
    pub progress: SharedSurface,
    pub notifications: SharedNotificationSurface,
}

/// Headless landing page.
pub struct LandingPage {
    scheduler: Rc<dyn Scheduler>,
    surfaces: Surfaces,
    message: Option<Rotator>,
    progress: Option<Rotator>,
    notifier: Notifier,
    signup: SignupForm,
    config_errors: Vec<Error>,
}

impl LandingPage {
    /// Builds every component from `config`.
    ///
    /// Components fail in isolation. A rotator whose list or timing is
    /// unusable is left out and the other one still runs. An unusable
    /// auto-dismiss delay or signup latency falls back to its default. Every
    /// rejected value is kept in [`LandingPage::config_errors`] and shown once
    /// the page is ready.
    pub fn new(config: &Config, scheduler: Rc<dyn Scheduler>, surfaces: Surfaces) -> Self {
        let mut config_errors = Vec::new();

        let message = config
            .message_timing()
            .and_then(|timing| Rotator::new("message", config.messages(), timing));
        let message = keep_ok(message, "message rotator", &mut config_errors);

        let progress = config
            .progress_timing()
            .and_then(|timing| Rotator::new("progress", config.progress_captions(), timing));
        let progress = keep_ok(progress, "progress rotator", &mut config_errors);

        let auto_dismiss = keep_ok(config.auto_dismiss(), "auto-dismiss", &mut config_errors)
            .unwrap_or(Duration::from_millis(DEFAULT_AUTO_DISMISS_MS));
        let latency = keep_ok(config.signup_latency(), "signup latency", &mut config_errors)
            .unwrap_or(Duration::from_millis(DEFAULT_SIGNUP_LATENCY_MS));

        let notifier = Notifier::new(
            Rc::clone(&scheduler),
            Rc::clone(&surfaces.notifications),
            auto_dismiss,
        );
        let signup = SignupForm::new(
            Rc::clone(&scheduler),
            notifier.clone(),
            latency,
            SignupCopy::default(),
        );

        Self {
            scheduler,
            surfaces,
            message,
            progress,
            notifier,
            signup,
            config_errors,
        }
    }

    /// Page-ready signal: starts the rotators that were built.
    ///
    /// Configuration problems found at construction are shown as an error
    /// notification.
    pub fn on_ready(&self) {
        tracing::info!("landing page ready");
        if let Some(message) = &self.message {
            message.start(
                Rc::clone(&self.scheduler),
                Rc::clone(&self.surfaces.message),
            );
        }
        if let Some(progress) = &self.progress {
            progress.start(
                Rc::clone(&self.scheduler),
                Rc::clone(&self.surfaces.progress),
            );
        }
        if !self.config_errors.is_empty() {
            let summary = self
                .config_errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            self.notifier.notify(summary, Severity::Error);
        }
    }

    /// Form-submitted signal carrying the raw input.
    ///
    /// A blank address is reported to the user as an error notification. A
    /// submission made while another is pending is ignored. Both errors are
    /// still returned.
    pub fn on_submit(&self, raw_input: &str) -> Result<Submission> {
        match self.signup.submit(raw_input) {
            Err(Error::Validation(message)) => {
                self.notifier.notify(message.clone(), Severity::Error);
                Err(Error::Validation(message))
            }
            Err(Error::SubmissionPending) => {
                tracing::debug!("submission ignored while pending");
                Err(Error::SubmissionPending)
            }
            other => other,
        }
    }

    /// User closed the notification.
    pub fn dismiss_notification(&self, handle: NotificationHandle) -> bool {
        self.notifier.dismiss(handle)
    }

    /// Stops every timer the page owns. Idempotent.
    pub fn teardown(&self) {
        self.stop_timers();
        self.notifier.clear();
        tracing::info!("landing page torn down");
    }

    fn stop_timers(&self) {
        for rotator in self.message.iter().chain(self.progress.iter()) {
            rotator.stop();
        }
        self.signup.cancel();
    }

    /// Status message rotator, absent when its configuration was rejected.
    #[must_use]
    pub fn message_rotator(&self) -> Option<&Rotator> {
        self.message.as_ref()
    }

    /// Progress caption rotator, absent when its configuration was rejected.
    #[must_use]
    pub fn progress_rotator(&self) -> Option<&Rotator> {
        self.progress.as_ref()
    }

    #[must_use]
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    #[must_use]
    pub fn signup(&self) -> &SignupForm {
        &self.signup
    }

    /// Values rejected while building the page.
    #[must_use]
    pub fn config_errors(&self) -> &[Error] {
        &self.config_errors
    }
}

impl Drop for LandingPage {
    fn drop(&mut self) {
        self.stop_timers();
    }
}

fn keep_ok<T>(result: Result<T>, component: &str, errors: &mut Vec<Error>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(component, error = %err, "component configuration rejected");
            errors.push(err);
            None
        }
    }
}
