// SPDX-License-Identifier: MPL-2.0
//! The rotator: a repeating timer that advances through a [`RotationList`].

use super::list::RotationList;
use crate::error::{Error, Result};
use crate::scheduler::{Scheduler, TimerToken};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Display hooks a rotator drives on every tick.
///
/// Calls for one rotator never interleave: `begin_transition`, then `render`,
/// then `end_transition`, and the next tick only starts after that.
pub trait TransitionSurface {
    /// The current text is about to be replaced (fade out).
    fn begin_transition(&mut self);

    /// Show `text`.
    fn render(&mut self, text: &str);

    /// The new text is in place (fade in).
    fn end_transition(&mut self);
}

pub type SharedSurface = Rc<RefCell<dyn TransitionSurface>>;

/// Tick interval and fade delay of a rotator.
///
/// Both are strictly positive and the fade is shorter than the interval, so
/// one fade always completes before the next tick begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationTiming {
    interval: Duration,
    transition: Duration,
}

impl RotationTiming {
    pub fn new(interval: Duration, transition: Duration) -> Result<Self> {
        if interval.is_zero() || transition.is_zero() {
            return Err(Error::InvalidConfiguration(format!(
                "rotation interval ({interval:?}) and transition ({transition:?}) must be positive"
            )));
        }
        if transition >= interval {
            return Err(Error::InvalidConfiguration(format!(
                "rotation transition ({transition:?}) must be shorter than the interval ({interval:?})"
            )));
        }
        Ok(Self {
            interval,
            transition,
        })
    }

    pub fn from_millis(interval_ms: u64, transition_ms: u64) -> Result<Self> {
        Self::new(
            Duration::from_millis(interval_ms),
            Duration::from_millis(transition_ms),
        )
    }

    #[must_use]
    pub fn interval(self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn transition(self) -> Duration {
        self.transition
    }
}

#[derive(Default)]
struct Cycle {
    index: usize,
    ticks: u64,
    ticker: Option<TimerToken>,
    fade: Option<TimerToken>,
    scheduler: Option<Rc<dyn Scheduler>>,
    surface: Option<SharedSurface>,
}

struct Inner {
    label: String,
    list: RotationList,
    timing: RotationTiming,
    cycle: RefCell<Cycle>,
}

impl Inner {
    fn tick(self: &Rc<Self>) {
        let (scheduler, surface, fading) = {
            let cycle = self.cycle.borrow();
            (cycle.scheduler.clone(), cycle.surface.clone(), cycle.fade.is_some())
        };
        let (Some(scheduler), Some(surface)) = (scheduler, surface) else {
            return;
        };
        if fading {
            tracing::debug!(rotator = %self.label, "previous fade still running; tick skipped");
            return;
        }

        surface.borrow_mut().begin_transition();

        let weak: Weak<Inner> = Rc::downgrade(self);
        let fade = scheduler.after(
            self.timing.transition(),
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.complete_fade();
                }
            }),
        );
        self.cycle.borrow_mut().fade = Some(fade);
    }

    fn complete_fade(&self) {
        let (index, surface) = {
            let mut cycle = self.cycle.borrow_mut();
            cycle.fade = None;
            cycle.index = self.list.next_index(cycle.index);
            cycle.ticks += 1;
            (cycle.index, cycle.surface.clone())
        };
        let text = self.list.get(index);
        tracing::debug!(rotator = %self.label, index, text, "rotated");

        if let Some(surface) = surface {
            let mut surface = surface.borrow_mut();
            surface.render(text);
            surface.end_transition();
        }
    }
}

/// Cycles through a fixed list forever, one entry per interval.
///
/// Cloning yields another handle to the same rotator; separately constructed
/// rotators never share their index, even with equal lists.
#[derive(Clone)]
pub struct Rotator {
    inner: Rc<Inner>,
}

impl Rotator {
    /// Builds a stopped rotator positioned on the first entry.
    ///
    /// An empty list fails with `InvalidConfiguration`; nothing is scheduled.
    pub fn new<I, S>(label: impl Into<String>, items: I, timing: RotationTiming) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let label = label.into();
        let list = RotationList::new(items).map_err(|err| {
            tracing::warn!(rotator = %label, %err, "rotator not created");
            err
        })?;
        Ok(Self::with_list(label, list, timing))
    }

    #[must_use]
    fn with_list(label: impl Into<String>, list: RotationList, timing: RotationTiming) -> Self {
        Self {
            inner: Rc::new(Inner {
                label: label.into(),
                list,
                timing,
                cycle: RefCell::new(Cycle::default()),
            }),
        }
    }

    /// Starts ticking on `scheduler`, driving `surface`.
    ///
    /// A rotator that is already running keeps its current schedule. A stopped
    /// rotator resumes from its current index.
    pub fn start(&self, scheduler: Rc<dyn Scheduler>, surface: SharedSurface) {
        if self.is_running() {
            tracing::debug!(rotator = %self.inner.label, "already running");
            return;
        }

        let weak = Rc::downgrade(&self.inner);
        let ticker = scheduler.every(
            self.inner.timing.interval(),
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.tick();
                }
            }),
        );

        let mut cycle = self.inner.cycle.borrow_mut();
        cycle.ticker = Some(ticker);
        cycle.scheduler = Some(scheduler);
        cycle.surface = Some(surface);
        tracing::debug!(
            rotator = %self.inner.label,
            interval = ?self.inner.timing.interval(),
            transition = ?self.inner.timing.transition(),
            "started"
        );
    }

    /// Cancels the repeating schedule and any fade in progress.
    ///
    /// Safe to call at any time, any number of times. A fade interrupted
    /// half-way is closed with `end_transition` and the text left unchanged.
    pub fn stop(&self) {
        let (ticker, fade, scheduler, surface) = {
            let mut cycle = self.inner.cycle.borrow_mut();
            (
                cycle.ticker.take(),
                cycle.fade.take(),
                cycle.scheduler.clone(),
                cycle.surface.clone(),
            )
        };
        let Some(scheduler) = scheduler else {
            return;
        };

        if let Some(ticker) = ticker {
            scheduler.cancel(ticker);
            tracing::debug!(rotator = %self.inner.label, "stopped");
        }
        if let Some(fade) = fade {
            if scheduler.cancel(fade) {
                if let Some(surface) = surface {
                    surface.borrow_mut().end_transition();
                }
            }
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.inner.cycle.borrow().ticker.is_some()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.inner.cycle.borrow().index
    }

    #[must_use]
    pub fn current_text(&self) -> &str {
        self.inner.list.get(self.current_index())
    }

    /// Number of completed rotations.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.inner.cycle.borrow().ticks
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.inner.label
    }
}

impl fmt::Debug for Rotator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rotator")
            .field("label", &self.inner.label)
            .field("index", &self.current_index())
            .field("running", &self.is_running())
            .finish()
    }
}
