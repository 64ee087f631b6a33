// Copyright 2025 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Release-velocity estimation from a trailing pointer-sample window.
//!
//! ## Usage
//!
//! 1) Call [`VelocityTracker::push`] for every pointer event of a gesture,
//!    down and moves alike.
//! 2) On release, call [`VelocityTracker::velocity`] to decide between a
//!    fling and a plain snap-back.
//! 3) Call [`VelocityTracker::clear`] on up or cancel; the history belongs
//!    to one gesture only.

use smallvec::SmallVec;

/// Samples older than this relative to the newest one are ignored.
///
/// A short window keeps the estimate responsive to the last flick of the
/// finger rather than the whole drag.
pub const VELOCITY_WINDOW_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Sample {
    time_ms: u64,
    y: f64,
}

/// Estimates pointer velocity from recent samples.
///
/// The tracker keeps only samples within [`VELOCITY_WINDOW_MS`] of the most
/// recent one, so long pauses mid-gesture correctly report a near-zero
/// release velocity.
#[derive(Debug, Clone, Default)]
pub struct VelocityTracker {
    samples: SmallVec<[Sample; 8]>,
}

impl VelocityTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pointer sample.
    ///
    /// Timestamps are expected to be monotonically non-decreasing within a
    /// gesture; a sample older than the newest one resets the history, since
    /// it indicates a new clock domain or a missed gesture boundary.
    pub fn push(&mut self, time_ms: u64, y: f64) {
        if let Some(last) = self.samples.last()
            && time_ms < last.time_ms
        {
            self.samples.clear();
        }
        self.samples.retain(|s| time_ms.saturating_sub(s.time_ms) <= VELOCITY_WINDOW_MS);
        self.samples.push(Sample { time_ms, y });
    }

    /// Returns the estimated velocity in pixels per second, y-down positive.
    ///
    /// Fewer than two samples in the window yield `0.0`.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        let (Some(first), Some(last)) = (self.samples.first(), self.samples.last()) else {
            return 0.0;
        };
        let dt_ms = last.time_ms.saturating_sub(first.time_ms);
        if dt_ms == 0 {
            return 0.0;
        }
        (last.y - first.y) / (dt_ms as f64) * 1000.0
    }

    /// Returns `true` if no samples are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Discards the gesture history.
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::VelocityTracker;

    #[test]
    fn empty_tracker_reports_zero() {
        let tracker = VelocityTracker::new();
        assert_eq!(tracker.velocity(), 0.0);
        assert!(tracker.is_empty());
    }

    #[test]
    fn single_sample_reports_zero() {
        let mut tracker = VelocityTracker::new();
        tracker.push(10, 100.0);
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn steady_downward_drag() {
        let mut tracker = VelocityTracker::new();
        for i in 0..5_u64 {
            tracker.push(i * 16, (i * 16) as f64);
        }
        // 1 px per ms.
        assert!((tracker.velocity() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn upward_drag_is_negative() {
        let mut tracker = VelocityTracker::new();
        tracker.push(0, 300.0);
        tracker.push(50, 200.0);
        assert!((tracker.velocity() + 2000.0).abs() < 1e-9);
    }

    #[test]
    fn stale_samples_fall_out_of_the_window() {
        let mut tracker = VelocityTracker::new();
        // Fast initial motion, then a long hold.
        tracker.push(0, 0.0);
        tracker.push(20, 200.0);
        tracker.push(500, 210.0);
        tracker.push(550, 210.0);
        // Only the post-hold samples count: no residual fling.
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn clock_regression_resets_history() {
        let mut tracker = VelocityTracker::new();
        tracker.push(100, 0.0);
        tracker.push(150, 100.0);
        tracker.push(10, 0.0);
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn clear_discards_history() {
        let mut tracker = VelocityTracker::new();
        tracker.push(0, 0.0);
        tracker.push(50, 100.0);
        tracker.clear();
        assert!(tracker.is_empty());
        assert_eq!(tracker.velocity(), 0.0);
    }
}
