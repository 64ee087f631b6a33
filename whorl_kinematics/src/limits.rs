// Copyright 2025 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fling offset limits and the snap-to-boundary rounding rule.

/// The offset range a fling may come to rest in.
///
/// Offsets are measured from the resting position of the committed
/// selection, y-down: scrolling toward later items makes the offset more
/// negative. For a bounded dataset the range is exactly the offsets that
/// keep the implied index inside `[0, len - 1]`; for a cyclic dataset both
/// ends are infinite and clamping is a no-op.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingLimits {
    /// Most negative allowed resting offset (reaches the last item).
    pub min: f64,
    /// Most positive allowed resting offset (reaches the first item).
    pub max: f64,
}

impl FlingLimits {
    /// Limits for a cyclic dataset: the virtual range is infinite.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        }
    }

    /// Limits for a bounded dataset of `len` items with the committed
    /// selection at `selected`.
    ///
    /// The committed selection rests at offset zero, so the first item rests
    /// at `selected * item_height` and the last at
    /// `-(len - 1 - selected) * item_height`.
    #[must_use]
    pub fn bounded(selected: usize, len: usize, item_height: f64) -> Self {
        let anchor = selected as f64 * item_height;
        let last = len.saturating_sub(1) as f64 * item_height;
        Self {
            min: anchor - last,
            max: anchor,
        }
    }

    /// Clamps a resting offset into the allowed range.
    #[must_use]
    pub fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(self.min, self.max)
    }
}

/// Correction that moves a resting offset onto the nearest item boundary.
///
/// `remainder` is `offset % item_height` of the prospective resting offset;
/// `current_offset` is the live offset at release time, whose sign picks the
/// direction of travel for the beyond-half-item case. Remainders larger than
/// half an item snap forward to the next boundary in the travel direction;
/// smaller ones snap back. A remainder of exactly half an item rounds
/// half-up: it advances for a non-negative offset and snaps back for a
/// negative one.
///
/// For any offset, `(offset + correction) % item_height == 0`. A
/// non-positive `item_height` yields no correction (degenerate geometry is a
/// no-op, not an error).
#[must_use]
pub fn snap_correction(remainder: f64, item_height: f64, current_offset: f64) -> f64 {
    if item_height <= 0.0 {
        return 0.0;
    }
    let half = item_height / 2.0;
    let advance = if current_offset < 0.0 {
        remainder.abs() > half
    } else {
        remainder.abs() >= half
    };
    if advance {
        if current_offset < 0.0 {
            -item_height - remainder
        } else {
            item_height - remainder
        }
    } else {
        -remainder
    }
}

#[cfg(test)]
mod tests {
    use super::{FlingLimits, snap_correction};

    #[test]
    fn bounded_limits_bracket_the_dataset() {
        // Three items, selection at the first: can scroll up to two items
        // (negative offset), not down at all.
        let limits = FlingLimits::bounded(0, 3, 100.0);
        assert_eq!(limits.min, -200.0);
        assert_eq!(limits.max, 0.0);

        // Selection at the last item: the mirror image.
        let limits = FlingLimits::bounded(2, 3, 100.0);
        assert_eq!(limits.min, 0.0);
        assert_eq!(limits.max, 200.0);
    }

    #[test]
    fn bounded_limits_degenerate_dataset() {
        let limits = FlingLimits::bounded(0, 0, 100.0);
        assert_eq!(limits.min, 0.0);
        assert_eq!(limits.max, 0.0);

        let limits = FlingLimits::bounded(0, 1, 100.0);
        assert_eq!(limits.min, 0.0);
        assert_eq!(limits.max, 0.0);
    }

    #[test]
    fn unbounded_clamp_is_identity() {
        let limits = FlingLimits::unbounded();
        assert_eq!(limits.clamp(1e12), 1e12);
        assert_eq!(limits.clamp(-1e12), -1e12);
    }

    #[test]
    fn bounded_clamp_saturates() {
        let limits = FlingLimits::bounded(0, 3, 100.0);
        assert_eq!(limits.clamp(-350.0), -200.0);
        assert_eq!(limits.clamp(50.0), 0.0);
        assert_eq!(limits.clamp(-150.0), -150.0);
    }

    #[test]
    fn snap_within_half_item_snaps_back() {
        assert_eq!(snap_correction(30.0, 100.0, 130.0), -30.0);
        assert_eq!(snap_correction(-40.0, 100.0, -140.0), 40.0);
        assert_eq!(snap_correction(0.0, 100.0, 300.0), 0.0);
    }

    #[test]
    fn snap_beyond_half_item_advances() {
        // Scrolling down (positive offset): on to the next boundary above.
        assert_eq!(snap_correction(70.0, 100.0, 170.0), 30.0);
        // Scrolling up (negative offset): next boundary below.
        assert_eq!(snap_correction(-70.0, 100.0, -170.0), -30.0);
    }

    #[test]
    fn exact_half_item_rounds_half_up() {
        // Positive offsets advance from the tie, negative ones snap back.
        assert_eq!(snap_correction(50.0, 100.0, 250.0), 50.0);
        assert_eq!(snap_correction(-50.0, 100.0, -150.0), 50.0);
    }

    #[test]
    fn snapped_offset_lands_on_a_boundary() {
        let item_height = 100.0;
        for tenths in -2500_i32..2500 {
            let offset = f64::from(tenths) / 10.0 * 4.0;
            let corrected = offset + snap_correction(offset % item_height, item_height, offset);
            let rem = corrected % item_height;
            assert!(
                rem.abs() < 1e-6 || (rem.abs() - item_height).abs() < 1e-6,
                "offset {offset} corrected to {corrected}"
            );
        }
    }

    #[test]
    fn degenerate_item_height_is_a_no_op() {
        assert_eq!(snap_correction(30.0, 0.0, 30.0), 0.0);
        assert_eq!(snap_correction(30.0, -5.0, 30.0), 0.0);
    }
}
