// SPDX-License-Identifier: MPL-2.0
//! Manually advanced clock.
//!
//! Tests advance it directly; the window advances it by the real time elapsed
//! between frame ticks. Either way, timers only fire inside
//! [`VirtualClock::advance_to`], in due-time order, with timers due at the same
//! instant firing in the order they were scheduled.

use super::{Scheduler, TimerToken};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::time::Duration;

/// Shortest accepted repeat period; a zero period would never let time advance.
const MIN_PERIOD: Duration = Duration::from_millis(1);

enum Callback {
    Once(Box<dyn FnOnce()>),
    Repeating {
        period: Duration,
        callback: Box<dyn FnMut()>,
    },
}

struct Entry {
    token: TimerToken,
    callback: Callback,
}

/// Queue key: due time, then scheduling sequence.
type Key = (Duration, u64);

#[derive(Default)]
struct State {
    now: Duration,
    next_token: u64,
    next_seq: u64,
    queue: BTreeMap<Key, Entry>,
    keys: HashMap<TimerToken, Key>,
    /// Repeating timer whose callback is currently running.
    firing: Option<TimerToken>,
    firing_cancelled: bool,
}

impl State {
    fn allocate_token(&mut self) -> TimerToken {
        let token = TimerToken::from_raw(self.next_token);
        self.next_token += 1;
        token
    }

    fn insert(&mut self, due: Duration, token: TimerToken, callback: Callback) {
        let key = (due, self.next_seq);
        self.next_seq += 1;
        self.queue.insert(key, Entry { token, callback });
        self.keys.insert(token, key);
    }

    /// Pops the earliest timer due at or before `target`.
    fn pop_due(&mut self, target: Duration) -> Option<(Duration, Entry)> {
        let key = *self.queue.keys().next()?;
        if key.0 > target {
            return None;
        }
        let entry = self.queue.remove(&key)?;
        self.keys.remove(&entry.token);
        self.now = self.now.max(key.0);
        Some((key.0, entry))
    }
}

/// Single-threaded [`Scheduler`] driven by explicit calls to advance time.
#[derive(Default)]
pub struct VirtualClock {
    state: RefCell<State>,
    advancing: Cell<bool>,
}

impl VirtualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances time by `by`, firing every timer that falls due.
    ///
    /// Returns the number of callbacks that ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now().saturating_add(by);
        self.advance_to(target)
    }

    /// Advances time to `target`, firing every timer due at or before it.
    ///
    /// Timers scheduled by callbacks fire in the same call when they fall due
    /// before `target`. Moving backwards is a no-op, and so is a nested call
    /// made from inside a timer callback.
    pub fn advance_to(&self, target: Duration) -> usize {
        if self.advancing.replace(true) {
            tracing::warn!("virtual clock advanced from inside a timer callback; ignored");
            return 0;
        }

        let mut fired = 0;
        loop {
            let next = self.state.borrow_mut().pop_due(target);
            let Some((due, entry)) = next else {
                break;
            };
            fired += 1;

            match entry.callback {
                Callback::Once(callback) => callback(),
                Callback::Repeating {
                    period,
                    mut callback,
                } => {
                    {
                        let mut state = self.state.borrow_mut();
                        state.firing = Some(entry.token);
                        state.firing_cancelled = false;
                    }

                    callback();

                    let mut state = self.state.borrow_mut();
                    let cancelled = state.firing_cancelled;
                    state.firing = None;
                    state.firing_cancelled = false;
                    if !cancelled {
                        state.insert(
                            due + period,
                            entry.token,
                            Callback::Repeating { period, callback },
                        );
                    }
                }
            }
        }

        {
            let mut state = self.state.borrow_mut();
            state.now = state.now.max(target);
        }
        self.advancing.set(false);
        fired
    }

    /// Number of live timers.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.state.borrow().queue.len()
    }

    /// Due time of the earliest live timer.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.state.borrow().queue.keys().next().map(|key| key.0)
    }
}

impl Scheduler for VirtualClock {
    fn now(&self) -> Duration {
        self.state.borrow().now
    }

    fn after(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerToken {
        let mut state = self.state.borrow_mut();
        let token = state.allocate_token();
        let due = state.now.saturating_add(delay);
        state.insert(due, token, Callback::Once(callback));
        token
    }

    fn every(&self, period: Duration, callback: Box<dyn FnMut()>) -> TimerToken {
        let period = period.max(MIN_PERIOD);
        let mut state = self.state.borrow_mut();
        let token = state.allocate_token();
        let due = state.now.saturating_add(period);
        state.insert(due, token, Callback::Repeating { period, callback });
        token
    }

    fn cancel(&self, token: TimerToken) -> bool {
        let mut state = self.state.borrow_mut();
        if let Some(key) = state.keys.remove(&token) {
            state.queue.remove(&key);
            return true;
        }
        if state.firing == Some(token) && !state.firing_cancelled {
            state.firing_cancelled = true;
            return true;
        }
        false
    }
}

impl fmt::Debug for VirtualClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("VirtualClock")
            .field("now", &state.now)
            .field("pending", &state.queue.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn log() -> Rc<RefCell<Vec<&'static str>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[test]
    fn new_clock_starts_at_zero_with_no_timers() {
        let clock = VirtualClock::new();
        assert_eq!(clock.now(), Duration::ZERO);
        assert_eq!(clock.pending(), 0);
        assert_eq!(clock.next_due(), None);
    }

    #[test]
    fn one_shot_fires_once_when_due() {
        let clock = VirtualClock::new();
        let events = log();
        let sink = Rc::clone(&events);
        clock.after(ms(100), Box::new(move || sink.borrow_mut().push("fired")));

        assert_eq!(clock.advance(ms(99)), 0);
        assert_eq!(clock.advance(ms(1)), 1);
        assert_eq!(clock.advance(ms(1000)), 0);
        assert_eq!(*events.borrow(), vec!["fired"]);
    }

    #[test]
    fn timers_fire_in_due_order_then_scheduling_order() {
        let clock = VirtualClock::new();
        let events = log();
        for (delay, name) in [(200, "late"), (100, "first"), (100, "second")] {
            let sink = Rc::clone(&events);
            clock.after(ms(delay), Box::new(move || sink.borrow_mut().push(name)));
        }

        clock.advance(ms(500));
        assert_eq!(*events.borrow(), vec!["first", "second", "late"]);
    }

    #[test]
    fn now_reports_due_time_inside_callbacks() {
        let clock = Rc::new(VirtualClock::new());
        let seen = Rc::new(Cell::new(Duration::ZERO));
        let (probe, sink) = (Rc::clone(&clock), Rc::clone(&seen));
        clock.after(ms(250), Box::new(move || sink.set(probe.now())));

        clock.advance(ms(1000));
        assert_eq!(seen.get(), ms(250));
        assert_eq!(clock.now(), ms(1000));
    }

    #[test]
    fn repeating_timer_fires_every_period() {
        let clock = VirtualClock::new();
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        clock.every(ms(100), Box::new(move || counter.set(counter.get() + 1)));

        clock.advance(ms(1000));
        assert_eq!(count.get(), 10);
        assert_eq!(clock.pending(), 1);
        assert_eq!(clock.next_due(), Some(ms(1100)));
    }

    #[test]
    fn cancel_reports_whether_timer_was_live() {
        let clock = VirtualClock::new();
        let once = clock.after(ms(10), Box::new(|| {}));
        let fired = clock.after(ms(5), Box::new(|| {}));
        clock.advance(ms(5));

        assert!(clock.cancel(once));
        assert!(!clock.cancel(once));
        assert!(!clock.cancel(fired));
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn repeating_timer_can_cancel_itself() {
        let clock = Rc::new(VirtualClock::new());
        let count = Rc::new(Cell::new(0));
        let token = Rc::new(Cell::new(None));

        let (handle, counter, own) = (Rc::clone(&clock), Rc::clone(&count), Rc::clone(&token));
        let registered = clock.every(
            ms(100),
            Box::new(move || {
                counter.set(counter.get() + 1);
                if counter.get() == 3 {
                    if let Some(own) = own.get() {
                        assert!(handle.cancel(own));
                    }
                }
            }),
        );
        token.set(Some(registered));

        clock.advance(ms(1000));
        assert_eq!(count.get(), 3);
        assert_eq!(clock.pending(), 0);
        assert!(!clock.cancel(registered));
    }

    #[test]
    fn timers_scheduled_by_callbacks_fire_within_same_advance() {
        let clock = Rc::new(VirtualClock::new());
        let events = log();
        let (handle, sink) = (Rc::clone(&clock), Rc::clone(&events));
        clock.after(
            ms(100),
            Box::new(move || {
                sink.borrow_mut().push("outer");
                let inner = Rc::clone(&sink);
                handle.after(ms(50), Box::new(move || inner.borrow_mut().push("inner")));
            }),
        );

        clock.advance(ms(150));
        assert_eq!(*events.borrow(), vec!["outer", "inner"]);
    }

    #[test]
    fn advancing_backwards_is_a_no_op() {
        let clock = VirtualClock::new();
        clock.advance(ms(500));
        assert_eq!(clock.advance_to(ms(100)), 0);
        assert_eq!(clock.now(), ms(500));
    }

    #[test]
    fn zero_period_is_clamped() {
        let clock = VirtualClock::new();
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        clock.every(Duration::ZERO, Box::new(move || counter.set(counter.get() + 1)));

        clock.advance(ms(5));
        assert_eq!(count.get(), 5);
    }

    #[test]
    fn nested_advance_is_ignored() {
        let clock = Rc::new(VirtualClock::new());
        let nested = Rc::new(Cell::new(usize::MAX));
        let (handle, sink) = (Rc::clone(&clock), Rc::clone(&nested));
        clock.after(ms(10), Box::new(move || sink.set(handle.advance(ms(10)))));

        clock.advance(ms(10));
        assert_eq!(nested.get(), 0);
        assert_eq!(clock.now(), ms(10));
    }
}
