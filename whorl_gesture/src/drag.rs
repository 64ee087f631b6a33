// Copyright 2025 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slop-gated drag tracking along one axis.
//!
//! ## Usage
//!
//! 1) Call [`DragTracker::begin`] on pointer-down with the down coordinate.
//! 2) On each move, call [`DragTracker::update`]; it returns a delta to apply
//!    once the gesture has crossed the slop threshold, `None` otherwise.
//! 3) On release, consult [`DragTracker::is_click`] to distinguish a tap from
//!    a completed drag, then call [`DragTracker::finish`].

/// Default touch-slop threshold in logical pixels.
///
/// Large enough to ignore finger jitter, small enough to keep intentional
/// drags responsive; matches common platform conventions (Android uses ~8dp).
pub const DEFAULT_TOUCH_SLOP: f64 = 8.0;

/// Movements smaller than this are swallowed rather than applied.
const MIN_DELTA: f64 = 1.0;

/// Tracks one drag gesture with a click/drag deadband.
///
/// A gesture starts as a *click*. The first position farther than the slop
/// threshold from the down point latches it into *drag* mode for the rest of
/// the gesture; returning under the threshold afterwards does not flip it
/// back. While still under slop the reference point stays at the down point,
/// so the first drag delta covers the full displacement rather than just the
/// final increment.
#[derive(Debug, Clone, Copy)]
pub struct DragTracker {
    slop: f64,
    down_y: Option<f64>,
    last_y: f64,
    crossed_slop: bool,
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new(DEFAULT_TOUCH_SLOP)
    }
}

impl DragTracker {
    /// Creates a tracker with a custom slop threshold in logical pixels.
    #[must_use]
    pub fn new(slop: f64) -> Self {
        Self {
            slop,
            down_y: None,
            last_y: 0.0,
            crossed_slop: false,
        }
    }

    /// Starts tracking a gesture from the pointer-down coordinate.
    ///
    /// Any gesture in progress is discarded.
    pub fn begin(&mut self, y: f64) {
        self.down_y = Some(y);
        self.last_y = y;
        self.crossed_slop = false;
    }

    /// Feeds a pointer-move coordinate.
    ///
    /// Returns the movement delta to apply to the scroll offset, or `None`
    /// when no gesture is active, the gesture is still within the slop
    /// deadband, or the increment is sub-pixel.
    pub fn update(&mut self, y: f64) -> Option<f64> {
        let down_y = self.down_y?;
        if !self.crossed_slop {
            if (y - down_y).abs() < self.slop {
                return None;
            }
            self.crossed_slop = true;
        }
        let delta = y - self.last_y;
        if delta.abs() < MIN_DELTA {
            return None;
        }
        self.last_y = y;
        Some(delta)
    }

    /// Returns `true` while a gesture is being tracked.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.down_y.is_some()
    }

    /// Returns `true` if the active gesture never crossed the slop threshold.
    ///
    /// Inactive trackers report `false`.
    #[must_use]
    pub fn is_click(&self) -> bool {
        self.down_y.is_some() && !self.crossed_slop
    }

    /// Returns `true` once the gesture has latched into drag mode.
    #[must_use]
    pub fn crossed_slop(&self) -> bool {
        self.crossed_slop
    }

    /// Ends the gesture and resets state.
    pub fn finish(&mut self) {
        self.down_y = None;
        self.crossed_slop = false;
    }
}

#[cfg(test)]
mod tests {
    use super::DragTracker;

    #[test]
    fn fresh_tracker_is_inactive() {
        let drag = DragTracker::default();
        assert!(!drag.is_active());
        assert!(!drag.is_click());
        assert_eq!(DragTracker::default().update(10.0), None);
    }

    #[test]
    fn under_slop_stays_click_and_yields_nothing() {
        let mut drag = DragTracker::new(8.0);
        drag.begin(100.0);
        assert_eq!(drag.update(104.0), None);
        assert_eq!(drag.update(96.0), None);
        assert!(drag.is_click());
        assert!(!drag.crossed_slop());
    }

    #[test]
    fn first_drag_delta_covers_full_displacement() {
        let mut drag = DragTracker::new(8.0);
        drag.begin(100.0);
        assert_eq!(drag.update(103.0), None);
        // 20 px from the down point, not 17 px from the last move.
        assert_eq!(drag.update(120.0), Some(20.0));
    }

    #[test]
    fn drag_mode_latches() {
        let mut drag = DragTracker::new(8.0);
        drag.begin(100.0);
        assert_eq!(drag.update(120.0), Some(20.0));
        // Back within slop distance of the down point: still a drag.
        let delta = drag.update(102.0);
        assert_eq!(delta, Some(-18.0));
        assert!(!drag.is_click());
    }

    #[test]
    fn subpixel_increments_are_swallowed() {
        let mut drag = DragTracker::new(8.0);
        drag.begin(0.0);
        assert_eq!(drag.update(20.0), Some(20.0));
        assert_eq!(drag.update(20.5), None);
        // The reference point did not advance past the swallowed move.
        assert_eq!(drag.update(22.0), Some(2.0));
    }

    #[test]
    fn downward_and_upward_deltas() {
        let mut drag = DragTracker::new(8.0);
        drag.begin(50.0);
        assert_eq!(drag.update(30.0), Some(-20.0));
        assert_eq!(drag.update(45.0), Some(15.0));
    }

    #[test]
    fn finish_resets_state() {
        let mut drag = DragTracker::new(8.0);
        drag.begin(0.0);
        drag.update(30.0);
        drag.finish();
        assert!(!drag.is_active());
        assert_eq!(drag.update(60.0), None);
    }

    #[test]
    fn begin_discards_previous_gesture() {
        let mut drag = DragTracker::new(8.0);
        drag.begin(0.0);
        drag.update(30.0);
        drag.begin(200.0);
        assert!(drag.is_click());
        assert_eq!(drag.update(203.0), None);
    }
}
