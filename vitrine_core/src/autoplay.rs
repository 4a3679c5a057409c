// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Autoplay timer state machine.
//!
//! [`Autoplay`] owns an [`IntervalTimer`] and guarantees that at most one
//! interval is live at a time: [`start`](Autoplay::start) always clears the
//! previous interval before scheduling a new one. Every interval is
//! identified by a [`TimerHandle`]; ticks are accepted only when they carry
//! the live handle, so a callback already queued by a cancelled interval
//! cannot advance the carousel.
//!
//! When the reduced-motion preference is active at construction, `start`
//! is inert for the lifetime of the value. The preference is not
//! re-checked later.

use core::fmt;
use core::time::Duration;

/// Opaque identifier of a scheduled interval.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(pub u32);

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimerHandle({})", self.0)
    }
}

/// A repeating timer source (`setInterval` in the browser).
///
/// The implementation delivers each tick to whatever callback it was built
/// with, tagged with the handle returned from [`set_interval`](Self::set_interval).
pub trait IntervalTimer {
    /// Schedules a repeating tick every `period`.
    fn set_interval(&mut self, period: Duration) -> TimerHandle;

    /// Cancels the interval. Cancelling an unknown handle is a no-op.
    fn clear_interval(&mut self, handle: TimerHandle);
}

/// Whether autoplay currently has a live interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutoplayState {
    /// No interval is scheduled.
    Stopped,
    /// One interval is scheduled.
    Running(TimerHandle),
}

/// Why autoplay was started or stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AutoplayReason {
    /// First start after the page mounts.
    Startup,
    /// A button, indicator, link, key or swipe moved the carousel.
    Navigation,
    /// A touch gesture began on the track.
    Gesture,
    /// The pointer entered the carousel region.
    PointerEnter,
    /// The pointer left the carousel region.
    PointerLeave,
    /// Keyboard focus moved into the carousel region.
    FocusIn,
    /// Keyboard focus left the carousel region.
    FocusOut,
    /// The tab became hidden.
    PageHidden,
    /// The tab became visible again.
    PageVisible,
}

/// Single-interval autoplay driver.
#[derive(Debug)]
pub struct Autoplay<T> {
    timer: T,
    period: Duration,
    reduced_motion: bool,
    state: AutoplayState,
}

impl<T: IntervalTimer> Autoplay<T> {
    /// Creates a stopped autoplay driver.
    ///
    /// `reduced_motion` is the reduced-motion preference sampled once at
    /// startup; when `true`, [`start`](Self::start) never schedules anything.
    pub fn new(timer: T, period: Duration, reduced_motion: bool) -> Self {
        Self {
            timer,
            period,
            reduced_motion,
            state: AutoplayState::Stopped,
        }
    }

    /// Clears any live interval and schedules a fresh one.
    ///
    /// Returns `true` if autoplay is running afterwards.
    pub fn start(&mut self) -> bool {
        if self.reduced_motion {
            return false;
        }
        self.stop();
        let handle = self.timer.set_interval(self.period);
        self.state = AutoplayState::Running(handle);
        true
    }

    /// Cancels the live interval, if any.
    ///
    /// Returns `true` if an interval was cancelled.
    pub fn stop(&mut self) -> bool {
        match self.state {
            AutoplayState::Running(handle) => {
                self.timer.clear_interval(handle);
                self.state = AutoplayState::Stopped;
                true
            }
            AutoplayState::Stopped => false,
        }
    }

    /// Returns `true` if `handle` identifies the live interval.
    #[must_use]
    pub fn accepts(&self, handle: TimerHandle) -> bool {
        self.state == AutoplayState::Running(handle)
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> AutoplayState {
        self.state
    }

    /// Returns `true` while an interval is live.
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.state, AutoplayState::Running(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::VirtualTimer;

    const PERIOD: Duration = Duration::from_millis(5000);

    #[test]
    fn one_tick_per_period() {
        let timer = VirtualTimer::new();
        let mut autoplay = Autoplay::new(timer.clone(), PERIOD, false);
        assert!(autoplay.start());

        let fired = timer.advance(Duration::from_millis(4999));
        assert!(fired.is_empty(), "no tick before the first period elapses");

        let fired = timer.advance(Duration::from_millis(1));
        assert_eq!(fired.len(), 1);
        assert!(autoplay.accepts(fired[0]));

        let fired = timer.advance(Duration::from_millis(20_000));
        assert_eq!(fired.len(), 4);
    }

    #[test]
    fn double_start_keeps_one_stream() {
        let timer = VirtualTimer::new();
        let mut autoplay = Autoplay::new(timer.clone(), PERIOD, false);
        autoplay.start();
        autoplay.start();
        assert_eq!(timer.active_count(), 1);

        let fired = timer.advance(Duration::from_millis(25_000));
        assert_eq!(fired.len(), 5, "one tick per period, not two");
        assert!(fired.iter().all(|&h| autoplay.accepts(h)));
    }

    #[test]
    fn stop_is_idempotent() {
        let timer = VirtualTimer::new();
        let mut autoplay = Autoplay::new(timer.clone(), PERIOD, false);
        assert!(!autoplay.stop());
        autoplay.start();
        assert!(autoplay.stop());
        assert!(!autoplay.stop());
        assert_eq!(timer.active_count(), 0);
        assert!(timer.advance(Duration::from_secs(60)).is_empty());
    }

    #[test]
    fn stale_handle_is_rejected() {
        let timer = VirtualTimer::new();
        let mut autoplay = Autoplay::new(timer.clone(), PERIOD, false);
        autoplay.start();
        let AutoplayState::Running(old) = autoplay.state() else {
            panic!("autoplay should be running");
        };
        autoplay.start();
        assert!(!autoplay.accepts(old));
        autoplay.stop();
        assert!(!autoplay.accepts(old));
    }

    #[test]
    fn reduced_motion_makes_start_inert() {
        let timer = VirtualTimer::new();
        let mut autoplay = Autoplay::new(timer.clone(), PERIOD, true);
        for _ in 0..3 {
            assert!(!autoplay.start());
        }
        assert!(!autoplay.is_running());
        assert_eq!(timer.active_count(), 0);
        assert!(timer.advance(Duration::from_secs(60)).is_empty());
    }
}
