// Copyright 2025 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whorl Index: pure index arithmetic for wheel-style selectors.
//!
//! A wheel selector maps a continuous scroll position onto a logical item
//! index. Drags and flings routinely produce raw indices outside the
//! dataset, negative ones included. This crate resolves those raw indices
//! against a dataset length in one of two modes:
//!
//! - [`IndexMode::Bounded`]: indices clamp to `[0, len - 1]`.
//! - [`IndexMode::Cyclic`]: indices wrap modularly, so the dataset repeats
//!   forever in both directions.
//!
//! Out-of-range input is never an error; an empty dataset is the only
//! degenerate case and yields `None` rather than panicking. Higher layers
//! treat `None` as "no valid selection" and skip position-dependent work.
//!
//! ## Minimal example
//!
//! ```
//! use whorl_index::{IndexMode, is_in_range, normalize};
//!
//! // Upward drag past the start of a three-item dataset.
//! assert_eq!(normalize(-3, 3, IndexMode::Cyclic), Some(0));
//! assert_eq!(normalize(-3, 3, IndexMode::Bounded), Some(0));
//! assert_eq!(normalize(5, 3, IndexMode::Bounded), Some(2));
//!
//! // Slots outside a bounded dataset render as empty.
//! assert!(!is_in_range(-1, 3));
//! assert!(is_in_range(2, 3));
//!
//! // Empty datasets have no valid index.
//! assert_eq!(normalize(0, 0, IndexMode::Cyclic), None);
//! ```
//!
//! This crate is `no_std` and has no dependencies.

#![no_std]

/// How raw indices resolve against the dataset length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum IndexMode {
    /// Clamp raw indices into `[0, len - 1]`.
    #[default]
    Bounded,
    /// Wrap raw indices modularly; the dataset repeats in both directions.
    Cyclic,
}

/// Resolves a raw item index against a dataset of `len` items.
///
/// Returns `None` when `len == 0`; otherwise the result is always a valid
/// index in `[0, len)`.
///
/// In [`IndexMode::Cyclic`] the result is periodic in `len`:
/// `normalize(k, len, Cyclic) == normalize(k + len, len, Cyclic)` for every
/// `k`. In [`IndexMode::Bounded`] the function is idempotent and clamps
/// monotonically.
#[must_use]
pub fn normalize(raw: i64, len: usize, mode: IndexMode) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let index = match mode {
        IndexMode::Bounded => {
            let max = len as i64 - 1;
            raw.clamp(0, max)
        }
        IndexMode::Cyclic => {
            let len = len as i64;
            ((raw % len) + len) % len
        }
    };
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "Both arms produce a value in [0, len), which fits in usize"
    )]
    let index = index as usize;
    Some(index)
}

/// Returns `true` if `raw` is a valid index into a dataset of `len` items.
///
/// Bounded-mode rendering uses this to decide whether a visible slot shows
/// an item or stays empty.
#[must_use]
pub fn is_in_range(raw: i64, len: usize) -> bool {
    raw >= 0 && (raw as u64) < len as u64
}

#[cfg(test)]
mod tests {
    use super::{IndexMode, is_in_range, normalize};

    #[test]
    fn cyclic_wraps_into_range() {
        for len in 1..7_usize {
            for raw in -25_i64..25 {
                let idx = normalize(raw, len, IndexMode::Cyclic).unwrap();
                assert!(idx < len, "normalize({raw}, {len}) out of range");
            }
        }
    }

    #[test]
    fn cyclic_is_periodic_in_len() {
        for len in 1..7_usize {
            for raw in -25_i64..25 {
                let a = normalize(raw, len, IndexMode::Cyclic);
                let b = normalize(raw + len as i64, len, IndexMode::Cyclic);
                assert_eq!(a, b, "period {len} broken at {raw}");
            }
        }
    }

    #[test]
    fn cyclic_handles_negative_raw_indices() {
        assert_eq!(normalize(-1, 3, IndexMode::Cyclic), Some(2));
        assert_eq!(normalize(-3, 3, IndexMode::Cyclic), Some(0));
        assert_eq!(normalize(-4, 3, IndexMode::Cyclic), Some(2));
    }

    #[test]
    fn bounded_clamps_monotonically() {
        assert_eq!(normalize(-5, 10, IndexMode::Bounded), Some(0));
        assert_eq!(normalize(15, 10, IndexMode::Bounded), Some(9));
        assert_eq!(normalize(4, 10, IndexMode::Bounded), Some(4));
    }

    #[test]
    fn bounded_is_idempotent() {
        for raw in -10_i64..20 {
            let once = normalize(raw, 10, IndexMode::Bounded).unwrap();
            let twice = normalize(once as i64, 10, IndexMode::Bounded).unwrap();
            assert_eq!(once, twice, "idempotence broken at {raw}");
        }
    }

    #[test]
    fn empty_dataset_has_no_index() {
        assert_eq!(normalize(0, 0, IndexMode::Bounded), None);
        assert_eq!(normalize(-7, 0, IndexMode::Cyclic), None);
        assert!(!is_in_range(0, 0));
    }

    #[test]
    fn in_range_matches_bounds() {
        assert!(is_in_range(0, 3));
        assert!(is_in_range(2, 3));
        assert!(!is_in_range(3, 3));
        assert!(!is_in_range(-1, 3));
    }
}
