// SPDX-License-Identifier: MPL-2.0
//! Timer abstraction shared by every timed component.
//!
//! Rotators, the notifier and the signup simulator never talk to a real clock.
//! They receive an `Rc<dyn Scheduler>` and express every delay as a deferred
//! callback, which keeps them single-threaded and lets tests replace
//! wall-clock waits with [`VirtualClock`].
//!
//! # Usage
//!
//! ```
//! use coming_soon::scheduler::{Scheduler, VirtualClock};
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! let clock = VirtualClock::new();
//! let fired = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&fired);
//! clock.every(Duration::from_millis(100), Box::new(move || counter.set(counter.get() + 1)));
//!
//! clock.advance(Duration::from_millis(350));
//! assert_eq!(fired.get(), 3);
//! ```

mod virtual_clock;

pub use virtual_clock::VirtualClock;

use std::time::Duration;

/// Handle returned by [`Scheduler::after`] and [`Scheduler::every`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Cooperative timer service.
///
/// Implementations run callbacks on the thread that drives them; nothing here
/// is `Send`. Callbacks are free to schedule or cancel other timers.
pub trait Scheduler {
    /// Time elapsed on this scheduler's clock.
    fn now(&self) -> Duration;

    /// Runs `callback` once, `delay` from now.
    fn after(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerToken;

    /// Runs `callback` every `period`, first one `period` from now.
    fn every(&self, period: Duration, callback: Box<dyn FnMut()>) -> TimerToken;

    /// Cancels a pending timer.
    ///
    /// Returns `false` if the timer already fired, was already cancelled or
    /// never existed. A repeating timer may cancel itself from its own callback.
    fn cancel(&self, token: TimerToken) -> bool;
}
