// SPDX-License-Identifier: MPL-2.0
//! Simulated e-mail signup.
//!
//! Nothing leaves the process: a non-blank address puts the form in a pending
//! state for a fixed latency, after which it always succeeds, reports through
//! the [`Notifier`] and resets.

use crate::content::SignupCopy;
use crate::error::{Error, Result};
use crate::notifications::{Notifier, Severity};
use crate::scheduler::{Scheduler, TimerToken};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// State of the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Enabled, showing its normal label.
    #[default]
    Idle,
    /// Disabled while the simulated request is in flight.
    Pending,
}

/// An accepted submission waiting for its simulated response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub email: String,
    /// Scheduler time at which the submission resolves.
    pub resolves_at: Duration,
}

#[derive(Default)]
struct State {
    input: String,
    phase: Phase,
    timer: Option<TimerToken>,
}

struct Inner {
    scheduler: Rc<dyn Scheduler>,
    notifier: Notifier,
    latency: Duration,
    copy: SignupCopy,
    state: RefCell<State>,
}

impl Inner {
    fn complete(&self, email: &str) {
        {
            let mut state = self.state.borrow_mut();
            state.phase = Phase::Idle;
            state.timer = None;
            state.input.clear();
        }
        tracing::info!(email, "signup completed");
        self.notifier
            .notify(self.copy.success_message.clone(), Severity::Success);
    }
}

/// Headless model of the signup form: its input value and submit control.
#[derive(Clone)]
pub struct SignupForm {
    inner: Rc<Inner>,
}

impl SignupForm {
    pub fn new(
        scheduler: Rc<dyn Scheduler>,
        notifier: Notifier,
        latency: Duration,
        copy: SignupCopy,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                scheduler,
                notifier,
                latency,
                copy,
                state: RefCell::new(State::default()),
            }),
        }
    }

    /// Submits `email`.
    ///
    /// Blank input fails with `Validation` and changes nothing. While a
    /// submission is pending, further calls fail with `SubmissionPending` and
    /// leave the in-flight one untouched.
    pub fn submit(&self, email: &str) -> Result<Submission> {
        if self.phase() == Phase::Pending {
            tracing::debug!("submit ignored; request already pending");
            return Err(Error::SubmissionPending);
        }

        let email = email.trim();
        if email.is_empty() {
            tracing::warn!("submit rejected; empty email");
            return Err(Error::Validation(self.inner.copy.validation_message.clone()));
        }

        let weak = Rc::downgrade(&self.inner);
        let address = email.to_string();
        let timer = self.inner.scheduler.after(
            self.inner.latency,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.complete(&address);
                }
            }),
        );

        {
            let mut state = self.inner.state.borrow_mut();
            state.phase = Phase::Pending;
            state.timer = Some(timer);
        }

        let submission = Submission {
            email: email.to_string(),
            resolves_at: self.inner.scheduler.now() + self.inner.latency,
        };
        tracing::info!(email, latency = ?self.inner.latency, "signup pending");
        Ok(submission)
    }

    /// Submits the current input value.
    pub fn submit_input(&self) -> Result<Submission> {
        let input = self.input();
        self.submit(&input)
    }

    /// Drops an in-flight submission without notifying. Idempotent.
    pub fn cancel(&self) {
        let timer = {
            let mut state = self.inner.state.borrow_mut();
            state.phase = Phase::Idle;
            state.timer.take()
        };
        if let Some(timer) = timer {
            self.inner.scheduler.cancel(timer);
            tracing::debug!("pending signup cancelled");
        }
    }

    pub fn set_input(&self, value: impl Into<String>) {
        self.inner.state.borrow_mut().input = value.into();
    }

    #[must_use]
    pub fn input(&self) -> String {
        self.inner.state.borrow().input.clone()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.inner.state.borrow().phase
    }

    /// Whether the submit control accepts presses.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.phase() == Phase::Idle
    }

    #[must_use]
    pub fn button_label(&self) -> &str {
        match self.phase() {
            Phase::Idle => &self.inner.copy.button_label,
            Phase::Pending => &self.inner.copy.pending_label,
        }
    }

    #[must_use]
    pub fn copy(&self) -> &SignupCopy {
        &self.inner.copy
    }
}

impl fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("SignupForm")
            .field("input", &state.input)
            .field("phase", &state.phase)
            .finish()
    }
}
