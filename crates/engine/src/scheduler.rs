//! Fixed-rate tick scheduler.
//!
//! The host calls [`Scheduler::poll`] from whatever loop it runs (terminal
//! input polling, a display callback, a test). `poll` answers `true` at most
//! once per elapsed interval; when the host falls behind, the missed ticks
//! collapse into one instead of being queued, so ticks never reorder or burst.
//! Time comes from an injected [`Clock`], which lets tests step time by hand.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use log::debug;

/// Monotonic millisecond time source.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Hand-stepped clock for tests and replays.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self { now: Cell::new(0) }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

#[derive(Debug)]
pub struct Scheduler<C: Clock> {
    clock: C,
    interval_ms: u64,
    last_tick_ms: u64,
    armed: bool,
    ticks: u64,
    collapsed: u64,
}

impl<C: Clock> Scheduler<C> {
    /// A cancelled scheduler; call [`Scheduler::resume`] to start ticking.
    pub fn new(clock: C, interval_ms: u64) -> Self {
        Self {
            clock,
            interval_ms: interval_ms.max(1),
            last_tick_ms: 0,
            armed: false,
            ticks: 0,
            collapsed: 0,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Ticks granted so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Intervals that elapsed without a tick because the host fell behind.
    pub fn collapsed(&self) -> u64 {
        self.collapsed
    }

    /// Start (or restart) ticking; the first tick is one interval from now.
    pub fn resume(&mut self) {
        if self.armed {
            return;
        }
        self.armed = true;
        self.last_tick_ms = self.clock.now_ms();
        debug!("scheduler resumed ({}ms interval)", self.interval_ms);
    }

    /// Stop ticking. No tick is granted after this returns.
    pub fn cancel(&mut self) {
        if !self.armed {
            return;
        }
        self.armed = false;
        debug!(
            "scheduler cancelled after {} ticks ({} collapsed)",
            self.ticks, self.collapsed
        );
    }

    /// Whether a tick is due now. Consumes the tick when it is.
    pub fn poll(&mut self) -> bool {
        if !self.armed {
            return false;
        }
        let now = self.clock.now_ms();
        let elapsed = now.saturating_sub(self.last_tick_ms);
        if elapsed < self.interval_ms {
            return false;
        }
        self.collapsed += elapsed / self.interval_ms - 1;
        self.last_tick_ms = now;
        self.ticks += 1;
        true
    }

    /// How long the host may block before the next tick is due.
    ///
    /// `None` while cancelled.
    pub fn time_until_next_tick(&self) -> Option<Duration> {
        if !self.armed {
            return None;
        }
        let elapsed = self.clock.now_ms().saturating_sub(self.last_tick_ms);
        Some(Duration::from_millis(self.interval_ms.saturating_sub(elapsed)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_until_resumed() {
        let clock = ManualClock::new();
        let mut s = Scheduler::new(&clock, 16);
        clock.advance(100);
        assert!(!s.poll());
        assert_eq!(s.time_until_next_tick(), None);
    }

    #[test]
    fn test_ticks_once_per_interval() {
        let clock = ManualClock::new();
        let mut s = Scheduler::new(&clock, 16);
        s.resume();

        clock.advance(15);
        assert!(!s.poll());
        clock.advance(1);
        assert!(s.poll());
        assert!(!s.poll());
        assert_eq!(s.ticks(), 1);
    }

    #[test]
    fn test_late_frames_collapse() {
        let clock = ManualClock::new();
        let mut s = Scheduler::new(&clock, 16);
        s.resume();

        clock.advance(16 * 5);
        assert!(s.poll());
        assert!(!s.poll());
        assert_eq!(s.ticks(), 1);
        assert_eq!(s.collapsed(), 4);
    }

    #[test]
    fn test_cancel_is_immediate() {
        let clock = ManualClock::new();
        let mut s = Scheduler::new(&clock, 16);
        s.resume();
        clock.advance(32);
        s.cancel();
        assert!(!s.poll());
        assert_eq!(s.ticks(), 0);
    }

    #[test]
    fn test_resume_restarts_interval() {
        let clock = ManualClock::new();
        let mut s = Scheduler::new(&clock, 16);
        clock.set(1000);
        s.resume();
        clock.advance(10);
        assert_eq!(s.time_until_next_tick(), Some(Duration::from_millis(6)));
        assert!(!s.poll());
        clock.advance(6);
        assert!(s.poll());
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let clock = ManualClock::new();
        let s = Scheduler::new(&clock, 0);
        assert_eq!(s.interval_ms(), 1);
    }
}
