// Copyright 2025 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry derived from the viewport and the visible item count.

use kurbo::{Point, Rect};

use crate::config::{Align, WheelConfig};

/// Geometry snapshot derived from one viewport/configuration pair.
///
/// Recomputed whenever the host reports a new viewport or reconfigures the
/// wheel; all fields are plain derived values. Before the first layout the
/// viewport is empty and `item_height` is zero, in which case every
/// offset/selection computation in the engine is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ItemGeometry {
    /// Drawn area in host coordinates, padding already removed.
    pub viewport: Rect,
    /// Height of one item slot: viewport height over visible count.
    pub item_height: f64,
    /// Half of [`ItemGeometry::item_height`], the snap tie-break distance.
    pub half_item_height: f64,
    /// Half the viewport height; the drum radius for curved rendering.
    pub half_wheel_height: f64,
    /// Center of the viewport.
    pub wheel_center: Point,
    /// Anchor for item text: x follows the alignment, y the wheel center.
    pub drawn_center: Point,
}

impl ItemGeometry {
    /// Derives geometry for a viewport under the given configuration.
    #[must_use]
    pub fn derive(viewport: Rect, config: &WheelConfig) -> Self {
        let visible = config.effective_visible_count();
        let item_height = if visible == 0 {
            0.0
        } else {
            viewport.height() / visible as f64
        };
        let wheel_center = viewport.center();
        let drawn_x = match config.align {
            Align::Left => viewport.x0,
            Align::Right => viewport.x1,
            Align::Center => wheel_center.x,
        };
        Self {
            viewport,
            item_height,
            half_item_height: item_height / 2.0,
            half_wheel_height: viewport.height() / 2.0,
            wheel_center,
            drawn_center: Point::new(drawn_x, wheel_center.y),
        }
    }

    /// Returns `true` while no usable layout exists.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.item_height <= 0.0
    }
}
