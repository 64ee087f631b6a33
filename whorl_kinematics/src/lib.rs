// Copyright 2025 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whorl Kinematics: scroll physics for wheel selectors.
//!
//! A wheel selector's scroll offset moves in three ways: 1:1 with the
//! pointer during a drag, along a decaying fling after a fast release, and
//! along a short ease-out after a slow release. Whichever path is taken, the
//! offset must come to rest on an exact multiple of the item height so a
//! definite item sits in the selection window. This crate owns that math:
//!
//! - [`FlingLimits`]: the offset range that keeps a bounded dataset's index
//!   valid, or an unbounded range for cyclic datasets.
//! - [`snap_correction`]: the rounding rule that moves any resting target
//!   onto the nearest item boundary, with a half-item tie-break.
//! - [`DecayCurve`] / [`ExponentialDecay`]: the release-velocity → travel
//!   distance/duration model, swappable so hosts can supply a platform
//!   curve.
//! - [`Scroller`]: a resumable, strictly cancellable animation advanced by
//!   host-driven ticks; no threads, no blocking.
//!
//! The crate never looks at pointer events or datasets; it deals purely in
//! offsets, velocities, and milliseconds.
//!
//! ## Minimal example
//!
//! ```
//! use whorl_kinematics::{ExponentialDecay, FlingLimits, Scroller};
//!
//! let item_height = 100.0;
//! let mut scroller = Scroller::new(0.0);
//!
//! // Fast downward release from offset 30, cyclic dataset.
//! scroller.fling(
//!     0,
//!     30.0,
//!     1200.0,
//!     item_height,
//!     FlingLimits::unbounded(),
//!     &ExponentialDecay::default(),
//! );
//!
//! // The fling always terminates exactly on an item boundary.
//! assert_eq!(scroller.final_offset() % item_height, 0.0);
//!
//! // Drive it with frame ticks until it settles.
//! let mut now = 0;
//! while scroller.tick(now) {
//!     now += 16;
//! }
//! assert_eq!(scroller.offset(), scroller.final_offset());
//! ```

mod decay;
mod limits;
mod scroller;

pub use decay::{DecayCurve, ExponentialDecay};
pub use limits::{FlingLimits, snap_correction};
pub use scroller::{DEFAULT_SNAP_DURATION_MS, Scroller};
