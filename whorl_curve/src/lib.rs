// Copyright 2025 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whorl Curve: pseudo-3D projection for drum-style wheel rendering.
//!
//! A curved wheel draws its items as if printed on a rotating drum seen
//! side-on: slots near the vertical center face the viewer, slots toward the
//! edges tilt away, compress, and may fade. [`CurvatureProjector`] is a pure
//! function of a slot's vertical position in the viewport; it computes the
//! rotation angle, the depth displacement, and the translation correction a
//! renderer applies before drawing the slot's text. It never touches pixels.
//!
//! Angles saturate at ±90° at the viewport edges, where a drum's surface
//! would be seen exactly edge-on.
//!
//! ## Minimal example
//!
//! ```
//! use whorl_curve::CurvatureProjector;
//!
//! // 300 px tall viewport starting at y = 0.
//! let projector = CurvatureProjector::new(0.0, 150.0, 150.0);
//!
//! // The center slot faces the viewer head-on.
//! let center = projector.project(150.0);
//! assert_eq!(center.angle_deg, 0.0);
//! assert_eq!(center.depth, 0.0);
//!
//! // A slot at the top edge is seen edge-on.
//! let top = projector.project(0.0);
//! assert_eq!(top.angle_deg.abs(), 90.0);
//! ```

use kurbo::Vec2;

/// Projects a slot's vertical position onto drum-surface coordinates.
///
/// Constructed per frame from the drawn viewport: `top_edge` and `center_y`
/// bound the upper half of the viewport, and `half_wheel_height` is the drum
/// radius (half the viewport height).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvatureProjector {
    top_edge: f64,
    center_y: f64,
    half_wheel_height: f64,
}

/// Drum-surface placement of one slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Rotation about the horizontal axis, in degrees, saturated to ±90.
    ///
    /// Negative below the center, positive above, matching the camera
    /// convention of the drum rolling away at both edges.
    pub angle_deg: f64,
    /// Displacement away from the viewer along the depth axis.
    pub depth: f64,
    /// Translation applied to the slot before rotation; y-only.
    pub offset: Vec2,
}

impl CurvatureProjector {
    /// Creates a projector for a viewport spanning `top_edge` to
    /// `top_edge + 2 * half_wheel_height`, centered at `center_y`.
    #[must_use]
    pub fn new(top_edge: f64, center_y: f64, half_wheel_height: f64) -> Self {
        Self {
            top_edge,
            center_y,
            half_wheel_height,
        }
    }

    /// Rotation angle for a slot centered at `slot_y`, in degrees.
    ///
    /// Zero at the drawn center, growing linearly with distance from it and
    /// saturating at ±90 at the viewport edges.
    #[must_use]
    pub fn angle_deg(&self, slot_y: f64) -> f64 {
        let span = self.center_y - self.top_edge;
        if span <= 0.0 {
            return 0.0;
        }
        let ratio = (self.center_y - (self.center_y - slot_y).abs() - self.top_edge) / span;
        let unit = if slot_y > self.center_y {
            1.0
        } else if slot_y < self.center_y {
            -1.0
        } else {
            return 0.0;
        };
        (-(1.0 - ratio) * 90.0 * unit).clamp(-90.0, 90.0)
    }

    /// Depth displacement for a slot rotated by `angle_deg`.
    ///
    /// Zero for a face-on slot, one full radius for an edge-on slot.
    #[must_use]
    pub fn depth(&self, angle_deg: f64) -> f64 {
        self.half_wheel_height * (1.0 - angle_deg.to_radians().cos())
    }

    /// Vertical displacement of a slot along the drum surface.
    ///
    /// This is the distance the slot's drawn center moves toward the wheel
    /// center as it rolls over the drum.
    #[must_use]
    pub fn space(&self, angle_deg: f64) -> f64 {
        self.half_wheel_height * angle_deg.to_radians().sin()
    }

    /// Full projection for a slot centered at `slot_y`.
    #[must_use]
    pub fn project(&self, slot_y: f64) -> Projection {
        let angle_deg = self.angle_deg(slot_y);
        Projection {
            angle_deg,
            depth: self.depth(angle_deg),
            offset: Vec2::new(0.0, -self.space(angle_deg)),
        }
    }
}

/// Atmospheric fade for a slot centered at `slot_y`, in `[0, 1]`.
///
/// Full opacity at the drawn center, fading linearly with distance and
/// flooring at fully transparent.
#[must_use]
pub fn atmospheric_alpha(center_y: f64, slot_y: f64) -> f64 {
    if center_y <= 0.0 {
        return 1.0;
    }
    ((center_y - (center_y - slot_y).abs()) / center_y).clamp(0.0, 1.0)
}
