//! Cancelable deferred tasks driven by a caller-supplied clock.
//!
//! Engines never read the wall clock. The frontend passes a monotonic
//! `Duration` (time since the portal started) into `poll`, which keeps the
//! engines deterministic under test.
//!
//! ## Ownership
//!
//! A `TimerSlot` is owned by exactly one engine. Cancelling the slot, or
//! dropping the engine, is the only way a pending task goes away, so a
//! callback can never fire against state it was not armed for.
//!
//! ```
//! use std::time::Duration;
//! use game_portal::core::{Timer, TimerSlot};
//!
//! let ms = Duration::from_millis;
//! let mut slot = TimerSlot::new();
//! slot.arm(Timer::repeating(ms(0), ms(150)));
//!
//! assert!(!slot.poll(ms(100)));
//! assert!(slot.poll(ms(150)));
//! assert_eq!(slot.next_deadline(), Some(ms(300)));
//! ```

use std::time::Duration;

/// Whether a timer fires once or keeps firing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerMode {
    /// Fires once, then the slot empties.
    Once,
    /// Fires every `period`.
    Repeating(Duration),
}

/// A single deferred task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timer {
    deadline: Duration,
    mode: TimerMode,
}

impl Timer {
    /// A task that fires once, `delay` after `now`.
    #[must_use]
    pub fn once(now: Duration, delay: Duration) -> Self {
        Self {
            deadline: now + delay,
            mode: TimerMode::Once,
        }
    }

    /// A task that fires every `period`, first at `now + period`.
    #[must_use]
    pub fn repeating(now: Duration, period: Duration) -> Self {
        assert!(!period.is_zero(), "Repeating timer needs a non-zero period");
        Self {
            deadline: now + period,
            mode: TimerMode::Repeating(period),
        }
    }

    /// When the task next fires.
    #[must_use]
    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    #[must_use]
    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    /// Check whether the task is due at `now`.
    #[must_use]
    pub fn is_due(&self, now: Duration) -> bool {
        now >= self.deadline
    }
}

/// Owned handle for at most one pending task.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimerSlot {
    timer: Option<Timer>,
}

impl TimerSlot {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the slot, replacing any pending task.
    pub fn arm(&mut self, timer: Timer) {
        self.timer = Some(timer);
    }

    /// Cancel the pending task, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.timer.take().is_some()
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Deadline of the pending task.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timer.map(|t| t.deadline)
    }

    /// Period of a repeating task.
    #[must_use]
    pub fn period(&self) -> Option<Duration> {
        match self.timer?.mode {
            TimerMode::Repeating(period) => Some(period),
            TimerMode::Once => None,
        }
    }

    /// Change the period of a repeating task.
    ///
    /// The pending deadline moves by the difference, so the next firing is
    /// one new period after the last one. No-op for one-shot or empty slots.
    pub fn set_period(&mut self, period: Duration) {
        assert!(!period.is_zero(), "Repeating timer needs a non-zero period");
        if let Some(timer) = &mut self.timer {
            if let TimerMode::Repeating(old) = timer.mode {
                timer.deadline = timer.deadline.saturating_sub(old) + period;
                timer.mode = TimerMode::Repeating(period);
            }
        }
    }

    /// Fire the pending task if it is due.
    ///
    /// Fires at most once per call. A repeating task that fell behind by
    /// more than one period skips the missed firings instead of replaying
    /// them back to back.
    pub fn poll(&mut self, now: Duration) -> bool {
        let Some(timer) = &mut self.timer else {
            return false;
        };
        if !timer.is_due(now) {
            return false;
        }

        match timer.mode {
            TimerMode::Once => {
                self.timer = None;
            }
            TimerMode::Repeating(period) => {
                let next = timer.deadline + period;
                timer.deadline = if next > now { next } else { now + period };
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_once_fires_once() {
        let mut slot = TimerSlot::new();
        slot.arm(Timer::once(ms(0), ms(500)));

        assert!(!slot.poll(ms(499)));
        assert!(slot.poll(ms(500)));
        assert!(!slot.is_armed());
        assert!(!slot.poll(ms(10_000)));
    }

    #[test]
    fn test_repeating_keeps_cadence() {
        let mut slot = TimerSlot::new();
        slot.arm(Timer::repeating(ms(0), ms(150)));

        assert!(slot.poll(ms(160)));
        assert_eq!(slot.next_deadline(), Some(ms(300)));
        assert!(slot.poll(ms(300)));
        assert_eq!(slot.next_deadline(), Some(ms(450)));
    }

    #[test]
    fn test_repeating_skips_missed_periods() {
        let mut slot = TimerSlot::new();
        slot.arm(Timer::repeating(ms(0), ms(100)));

        assert!(slot.poll(ms(1_000)));
        // Only one firing per poll, and no burst afterwards
        assert!(!slot.poll(ms(1_000)));
        assert_eq!(slot.next_deadline(), Some(ms(1_100)));
    }

    #[test]
    fn test_cancel() {
        let mut slot = TimerSlot::new();
        assert!(!slot.cancel());

        slot.arm(Timer::once(ms(0), ms(10)));
        assert!(slot.cancel());
        assert!(!slot.poll(ms(100)));
    }

    #[test]
    fn test_arm_replaces_pending() {
        let mut slot = TimerSlot::new();
        slot.arm(Timer::once(ms(0), ms(10)));
        slot.arm(Timer::once(ms(0), ms(50)));

        assert!(!slot.poll(ms(20)));
        assert!(slot.poll(ms(50)));
    }

    #[test]
    fn test_set_period() {
        let mut slot = TimerSlot::new();
        slot.arm(Timer::repeating(ms(0), ms(150)));
        assert!(slot.poll(ms(150)));

        slot.set_period(ms(145));
        assert_eq!(slot.period(), Some(ms(145)));
        assert_eq!(slot.next_deadline(), Some(ms(295)));
    }

    #[test]
    fn test_set_period_ignores_once() {
        let mut slot = TimerSlot::new();
        slot.arm(Timer::once(ms(0), ms(500)));
        slot.set_period(ms(10));

        assert_eq!(slot.period(), None);
        assert_eq!(slot.next_deadline(), Some(ms(500)));
    }

    #[test]
    #[should_panic(expected = "non-zero period")]
    fn test_zero_period_panics() {
        let _ = Timer::repeating(ms(0), Duration::ZERO);
    }
}
