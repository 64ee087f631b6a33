// Copyright 2025 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whorl Engine: a headless wheel selector.
//!
//! [`WheelEngine`] turns a pointer stream and host frame ticks into scroll
//! motion, settled selections, and per-frame [`DrawCommand`]s, without
//! touching a toolkit or a pixel. The host owns the windowing, text layout,
//! and rendering; the engine owns everything in between:
//!
//! - gesture classification and 1:1 drag scrolling;
//! - fling and snap-back kinematics that always come to rest with one item
//!   centered in the selection window;
//! - bounded and cyclic index spaces;
//! - optional drum curvature and atmospheric fade for the renderer.
//!
//! The engine is a state manager in the mold of the gesture trackers it
//! composes: hosts feed it [`PointerEvent`]s and call
//! [`WheelEngine::tick`] while [`WheelEngine::needs_frame`] is `true`, and
//! consume the returned [`WheelEvent`] streams. There are no callbacks and
//! no background tasks.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Rect;
//! use whorl_engine::{PointerEvent, Scrollable, WheelConfig, WheelEngine, WheelEvent};
//!
//! let mut wheel = WheelEngine::new(vec!["Mon", "Tue", "Wed", "Thu", "Fri"]);
//! wheel.configure(WheelConfig {
//!     visible_item_count: 3,
//!     ..WheelConfig::default()
//! })?;
//! // 300 px tall viewport, 3 visible items: 100 px per item.
//! wheel.set_viewport(Rect::new(0.0, 0.0, 120.0, 300.0));
//!
//! // Drag one item height upward, pause, release.
//! wheel.on_pointer(PointerEvent::Down { y: 200.0, time_ms: 0 });
//! wheel.on_pointer(PointerEvent::Move { y: 100.0, time_ms: 500 });
//! wheel.on_pointer(PointerEvent::Up { y: 100.0, time_ms: 1_000 });
//!
//! // Drive frame ticks until the wheel settles on the next item.
//! let mut now = 1_000;
//! let mut committed = None;
//! while wheel.needs_frame() {
//!     now += 16;
//!     for event in wheel.tick(now) {
//!         if let WheelEvent::ItemSelected { item, .. } = event {
//!             committed = Some(item);
//!         }
//!     }
//! }
//! assert_eq!(committed, Some("Tue"));
//! # Ok::<(), whorl_engine::ConfigError>(())
//! ```

mod config;
mod draw;
mod engine;
mod event;
mod geometry;

pub use config::{Align, ConfigError, TextMeasure, WheelConfig};
pub use draw::DrawCommand;
pub use engine::{Configurable, Scrollable, Selectable, WheelDebugInfo, WheelEngine};
pub use event::{PointerEvent, ScrollState, WheelEvent};
pub use geometry::ItemGeometry;
