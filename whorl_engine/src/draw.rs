// Copyright 2025 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw instructions emitted once per frame.

use kurbo::Point;
use peniko::Color;

/// One slot's draw instruction.
///
/// The engine emits one command per realized slot, top to bottom. Commands
/// are descriptions, not pixels: the renderer draws `text` at `anchor`,
/// after applying the curved-mode rotation of `angle_x_deg` degrees about
/// the horizontal axis through `pivot` and pushing the slot `depth` pixels
/// away from the viewer. Flat wheels carry a zero angle and depth.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    /// Item text; empty for slots outside a bounded dataset.
    pub text: String,
    /// Text anchor position. The x side to anchor follows the configured
    /// alignment.
    pub anchor: Point,
    /// Pivot for the curved-mode rotation and depth displacement.
    pub pivot: Point,
    /// Rotation about the horizontal axis, in degrees; zero when flat.
    pub angle_x_deg: f64,
    /// Depth displacement away from the viewer; zero when flat.
    pub depth: f64,
    /// Opacity in `[0, 1]`; below 1 only in atmospheric mode.
    pub alpha: f32,
    /// Text color for this slot.
    pub color: Color,
}
