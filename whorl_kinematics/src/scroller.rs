// Copyright 2025 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resumable ease-out scroll animation driven by host frame ticks.

use crate::decay::DecayCurve;
use crate::limits::{FlingLimits, snap_correction};

/// Default duration of a release-to-nearest-boundary ease, in milliseconds.
pub const DEFAULT_SNAP_DURATION_MS: u64 = 250;

/// Animates a scroll offset toward a resting target.
///
/// A `Scroller` is a resumable computation, not a background task: the host
/// calls [`Scroller::tick`] once per frame while
/// [`Scroller::is_finished`] is `false`, and may cancel synchronously at any
/// point with [`Scroller::abort`]. Both a fling and a direct ease share the
/// same ease-out interpolation; a fling merely derives its target and
/// duration from a [`DecayCurve`] first and then snap-corrects the target
/// onto an item boundary.
#[derive(Debug, Clone, Copy)]
pub struct Scroller {
    start: f64,
    delta: f64,
    start_time_ms: u64,
    duration_ms: u64,
    offset: f64,
    finished: bool,
}

impl Scroller {
    /// Creates a scroller at rest at the given offset.
    #[must_use]
    pub fn new(offset: f64) -> Self {
        Self {
            start: offset,
            delta: 0.0,
            start_time_ms: 0,
            duration_ms: 0,
            offset,
            finished: true,
        }
    }

    /// Starts a direct ease-out scroll from `from` to `target`.
    ///
    /// Used for slow releases, where the only remaining motion is the snap
    /// to the nearest item boundary. A zero `duration_ms` or zero travel
    /// completes immediately.
    pub fn ease_to(&mut self, now_ms: u64, from: f64, target: f64, duration_ms: u64) {
        self.start = from;
        self.delta = target - from;
        self.start_time_ms = now_ms;
        self.duration_ms = duration_ms;
        self.offset = from;
        self.finished = self.delta == 0.0 || duration_ms == 0;
        if self.finished {
            self.offset = target;
        }
    }

    /// Starts a fling released at `velocity` from offset `from`.
    ///
    /// The resting target is the decay curve's travel distance, clamped into
    /// `limits`, then snap-corrected onto an item boundary, then re-clamped.
    /// With unbounded limits (cyclic datasets) the clamps are no-ops and the
    /// snap correction alone decides the target; the virtual range is
    /// genuinely infinite.
    pub fn fling(
        &mut self,
        now_ms: u64,
        from: f64,
        velocity: f64,
        item_height: f64,
        limits: FlingLimits,
        decay: &dyn DecayCurve,
    ) {
        let mut target = limits.clamp(from + decay.distance(velocity));
        target += snap_correction(target % item_height, item_height, from);
        target = limits.clamp(target);
        let duration = decay.duration_ms(velocity).max(DEFAULT_SNAP_DURATION_MS);
        self.ease_to(now_ms, from, target, duration);
    }

    /// Advances the animation to `now_ms`.
    ///
    /// Returns `true` while motion is still ongoing. The final tick lands
    /// the offset exactly on the target and returns `false`.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.finished {
            return false;
        }
        let elapsed = now_ms.saturating_sub(self.start_time_ms);
        if elapsed >= self.duration_ms {
            self.offset = self.start + self.delta;
            self.finished = true;
            return false;
        }
        let t = elapsed as f64 / self.duration_ms as f64;
        self.offset = self.start + self.delta * ease_out(t);
        true
    }

    /// Stops the animation at the current offset.
    ///
    /// Cancellation is synchronous: after `abort` the scroller reports
    /// finished and no further tick moves the offset.
    pub fn abort(&mut self) {
        self.finished = true;
        self.delta = 0.0;
        self.start = self.offset;
    }

    /// Current animated offset.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Offset the animation will rest at.
    #[must_use]
    pub fn final_offset(&self) -> f64 {
        self.start + self.delta
    }

    /// Returns `true` when no animation is in flight.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Cubic ease-out, a close stand-in for platform scroller deceleration.
fn ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_SNAP_DURATION_MS, Scroller};
    use crate::decay::ExponentialDecay;
    use crate::limits::FlingLimits;

    fn run_to_rest(scroller: &mut Scroller, mut now: u64) -> u64 {
        while scroller.tick(now) {
            now += 16;
        }
        now
    }

    #[test]
    fn new_scroller_is_at_rest() {
        let mut scroller = Scroller::new(40.0);
        assert!(scroller.is_finished());
        assert_eq!(scroller.offset(), 40.0);
        assert!(!scroller.tick(100));
    }

    #[test]
    fn ease_reaches_target_exactly() {
        let mut scroller = Scroller::new(0.0);
        scroller.ease_to(0, 130.0, 100.0, DEFAULT_SNAP_DURATION_MS);
        run_to_rest(&mut scroller, 0);
        assert_eq!(scroller.offset(), 100.0);
        assert!(scroller.is_finished());
    }

    #[test]
    fn ease_is_monotonic_toward_target() {
        let mut scroller = Scroller::new(0.0);
        scroller.ease_to(0, 0.0, -200.0, 250);
        let mut prev = scroller.offset();
        let mut now = 16;
        while scroller.tick(now) {
            assert!(scroller.offset() <= prev, "offset moved away from target");
            prev = scroller.offset();
            now += 16;
        }
        assert_eq!(scroller.offset(), -200.0);
    }

    #[test]
    fn zero_travel_finishes_immediately() {
        let mut scroller = Scroller::new(0.0);
        scroller.ease_to(0, 100.0, 100.0, 250);
        assert!(scroller.is_finished());
        assert_eq!(scroller.offset(), 100.0);
    }

    #[test]
    fn fling_lands_on_item_boundary() {
        let decay = ExponentialDecay::default();
        let mut scroller = Scroller::new(0.0);
        scroller.fling(0, 30.0, -1800.0, 100.0, FlingLimits::unbounded(), &decay);
        let target = scroller.final_offset();
        assert!((target % 100.0).abs() < 1e-9, "target was {target}");
        assert!(target < 0.0, "upward fling must travel to negative offsets");

        run_to_rest(&mut scroller, 0);
        assert_eq!(scroller.offset(), target);
    }

    #[test]
    fn bounded_fling_clamps_to_limits() {
        let decay = ExponentialDecay::default();
        // Selection already at the last of three items: no travel below 0.
        let limits = FlingLimits::bounded(2, 3, 100.0);
        let mut scroller = Scroller::new(0.0);
        scroller.fling(0, 0.0, -5000.0, 100.0, limits, &decay);
        assert_eq!(scroller.final_offset(), 0.0);

        // And from the first item, a huge downward fling stops at max.
        let limits = FlingLimits::bounded(0, 3, 100.0);
        scroller.fling(0, 0.0, 5000.0, 100.0, limits, &decay);
        assert_eq!(scroller.final_offset(), 0.0);
    }

    #[test]
    fn cyclic_fling_is_snap_corrected_but_unclamped() {
        let decay = ExponentialDecay::default();
        let mut scroller = Scroller::new(0.0);
        scroller.fling(0, 0.0, 8000.0, 100.0, FlingLimits::unbounded(), &decay);
        let target = scroller.final_offset();
        // Far beyond any bounded dataset's range, still on a boundary.
        assert!(target > 1000.0, "target was {target}");
        assert!((target % 100.0).abs() < 1e-9);
    }

    #[test]
    fn abort_stops_synchronously() {
        let mut scroller = Scroller::new(0.0);
        scroller.ease_to(0, 0.0, 100.0, 250);
        assert!(scroller.tick(100));
        let frozen = scroller.offset();
        scroller.abort();
        assert!(scroller.is_finished());
        assert!(!scroller.tick(200));
        assert_eq!(scroller.offset(), frozen);
        assert_eq!(scroller.final_offset(), frozen);
    }

    #[test]
    fn slow_release_uses_snap_duration() {
        let decay = ExponentialDecay::default();
        let mut scroller = Scroller::new(0.0);
        // Velocity below rest: zero decay travel, snap correction only.
        scroller.fling(0, -130.0, 0.0, 100.0, FlingLimits::unbounded(), &decay);
        assert_eq!(scroller.final_offset(), -100.0);
    }
}
