// Copyright 2025 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel configuration, validation, and the text-measurement seam.

use core::fmt;

use kurbo::Size;
use peniko::Color;

/// Horizontal alignment of item text inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Anchor text at the horizontal center.
    #[default]
    Center,
    /// Anchor text at the left edge.
    Left,
    /// Anchor text at the right edge.
    Right,
}

/// Host-facing text measurement.
///
/// Font loading and shaping stay outside the engine; the engine only needs
/// the pixel extent of a rendered string to size its content box.
pub trait TextMeasure {
    /// Returns the pixel width/height of `text` in the host's item font.
    fn measure(&self, text: &str) -> Size;
}

/// Static configuration of a wheel.
///
/// Handed to [`WheelEngine::configure`](crate::WheelEngine::configure),
/// which validates it and derives the geometry snapshot. Colors and
/// decoration fields are pass-through values for the renderer; the engine
/// only stores and echoes them.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelConfig {
    /// Number of simultaneously visible items. Must be at least 2; even
    /// values are promoted to the next odd value so one item can sit
    /// centered in the selection window.
    pub visible_item_count: usize,
    /// Wrap the dataset infinitely instead of clamping at its ends.
    pub cyclic: bool,
    /// Apply the pseudo-3D drum projection to off-center slots.
    pub curved: bool,
    /// Fade off-center slots toward transparency.
    pub atmospheric: bool,
    /// Extra vertical spacing per item, in pixels.
    pub item_space: f64,
    /// Horizontal text alignment.
    pub align: Align,
    /// Text color for unselected items.
    pub item_text_color: Color,
    /// Optional distinct color for the item in the selection window.
    pub selected_item_text_color: Option<Color>,
    /// Draw indicator bars around the selection window.
    pub indicator: bool,
    /// Thickness of each indicator bar, in pixels.
    pub indicator_size: f64,
    /// Indicator bar color.
    pub indicator_color: Color,
    /// Draw a translucent curtain over the selection window.
    pub curtain: bool,
    /// Curtain color.
    pub curtain_color: Color,
    /// Optional widest-possible text used for measurement instead of
    /// scanning the whole dataset.
    pub max_width_text: Option<String>,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            visible_item_count: 7,
            cyclic: false,
            curved: false,
            atmospheric: false,
            item_space: 0.0,
            align: Align::Center,
            item_text_color: Color::from_rgba8(0x88, 0x88, 0x88, 0xFF),
            selected_item_text_color: None,
            indicator: false,
            indicator_size: 2.0,
            indicator_color: Color::from_rgba8(0xEE, 0x33, 0x33, 0xFF),
            curtain: false,
            curtain_color: Color::from_rgba8(0xFF, 0xFF, 0xFF, 0x88),
            max_width_text: None,
        }
    }
}

impl WheelConfig {
    /// Visible item count with even values promoted to odd.
    #[must_use]
    pub fn effective_visible_count(&self) -> usize {
        if self.visible_item_count % 2 == 0 {
            self.visible_item_count + 1
        } else {
            self.visible_item_count
        }
    }

    /// Number of slots realized per frame: the visible ones plus one
    /// partially visible slot at each edge.
    #[must_use]
    pub fn drawn_item_count(&self) -> usize {
        self.effective_visible_count() + 2
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.visible_item_count < 2 {
            return Err(ConfigError::VisibleItemCount(self.visible_item_count));
        }
        Ok(())
    }
}

/// Rejected wheel configuration.
///
/// Configuration errors indicate programmer error and fail loudly at
/// configure time; the engine never silently degrades a bad config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The visible item count was below the minimum of 2.
    VisibleItemCount(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VisibleItemCount(count) => {
                write!(f, "wheel visible item count cannot be less than 2, got {count}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
