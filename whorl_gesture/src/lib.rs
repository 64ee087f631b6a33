// Copyright 2025 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whorl Gesture: pointer-side state managers for wheel selectors.
//!
//! This crate tracks the input half of a drag-to-scroll gesture along one
//! axis. Each manager is stateful but small, and handles exactly one
//! pattern:
//!
//! - [`drag::DragTracker`]: classifies a gesture as *click* or *drag* using
//!   a touch-slop deadband, and yields movement deltas once the slop is
//!   crossed.
//! - [`velocity::VelocityTracker`]: keeps a short trailing history of
//!   pointer samples and estimates release velocity for fling decisions.
//!
//! Neither manager knows about scroll offsets, datasets, or rendering; they
//! accept raw coordinates/timestamps and produce classifications the owner
//! interprets. Both are scoped to a single down..up gesture and are reset
//! between gestures.
//!
//! ## Minimal example
//!
//! ```
//! use whorl_gesture::drag::DragTracker;
//! use whorl_gesture::velocity::VelocityTracker;
//!
//! let mut drag = DragTracker::default();
//! let mut velocity = VelocityTracker::default();
//!
//! drag.begin(100.0);
//! velocity.push(0, 100.0);
//!
//! // Jitter under the slop threshold: still a click, no delta.
//! assert_eq!(drag.update(103.0), None);
//! assert!(drag.is_click());
//!
//! // Crossing the slop latches drag mode; the first delta covers the full
//! // displacement from the down point.
//! assert_eq!(drag.update(120.0), Some(20.0));
//! velocity.push(50, 120.0);
//! assert!(!drag.is_click());
//!
//! // 20 px over 50 ms, reported in px/s.
//! assert!((velocity.velocity() - 400.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std` and has no allocator requirement beyond
//! `smallvec`'s inline storage.

#![no_std]

pub mod drag;
pub mod velocity;
