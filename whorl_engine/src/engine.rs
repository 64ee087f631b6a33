// Copyright 2025 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The wheel engine: composition of index space, gesture tracking,
//! kinematics, and curvature projection.

use core::fmt;

use kurbo::{Rect, Size};
use whorl_curve::{CurvatureProjector, atmospheric_alpha};
use whorl_gesture::drag::DragTracker;
use whorl_gesture::velocity::VelocityTracker;
use whorl_index::{IndexMode, is_in_range, normalize};
use whorl_kinematics::{
    DEFAULT_SNAP_DURATION_MS, DecayCurve, ExponentialDecay, FlingLimits, Scroller, snap_correction,
};

use crate::config::{ConfigError, TextMeasure, WheelConfig};
use crate::draw::DrawCommand;
use crate::event::{PointerEvent, ScrollState, WheelEvent};
use crate::geometry::ItemGeometry;

/// Release speed below which a drag snaps instead of flinging, in px/s.
const MIN_FLING_VELOCITY: f64 = 50.0;

/// Cap applied to the estimated release velocity, in px/s.
const MAX_FLING_VELOCITY: f64 = 8000.0;

/// Internal gesture/animation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    Dragging,
    Settling,
}

/// Read access to a wheel's scroll status.
///
/// Narrow capability surface for hosts and adapters that only observe
/// motion, without reaching for the full engine API.
pub trait Scrollable {
    /// Live signed offset from the committed selection's resting position.
    fn scroll_offset(&self) -> f64;

    /// Externally visible scroll state.
    fn scroll_state(&self) -> ScrollState;

    /// Returns `true` while the host must keep scheduling frame ticks.
    fn needs_frame(&self) -> bool;
}

/// Access to a wheel's configuration and layout surface.
pub trait Configurable {
    /// Current configuration.
    fn config(&self) -> &WheelConfig;

    /// Applies a new configuration, returning the re-derived geometry.
    fn configure(&mut self, config: WheelConfig) -> Result<ItemGeometry, ConfigError>;

    /// Reports a new viewport, returning the derived geometry.
    fn set_viewport(&mut self, viewport: Rect) -> ItemGeometry;
}

/// Access to a wheel's committed and live selection.
pub trait Selectable {
    /// Number of items in the dataset.
    fn len(&self) -> usize;

    /// Returns `true` for an empty dataset.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Committed selection index.
    fn selected_index(&self) -> usize;

    /// Index implied by the live offset; `None` for an empty dataset.
    fn current_index(&self) -> Option<usize>;

    /// Commits a selection, clamped into the dataset, and resets scroll.
    fn select(&mut self, index: usize);
}

/// Inspection snapshot of an engine's mutable state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelDebugInfo {
    /// Live scroll offset in pixels.
    pub scroll_offset_y: f64,
    /// Committed selection index.
    pub selected_index: usize,
    /// Index implied by the live offset.
    pub current_index: Option<usize>,
    /// Fling limits in effect.
    pub fling_limits: FlingLimits,
    /// Externally visible scroll state.
    pub scroll_state: ScrollState,
    /// Derived item height in pixels.
    pub item_height: f64,
    /// Dataset length.
    pub len: usize,
}

/// A headless wheel selector.
///
/// The engine owns the dataset, configuration, geometry, and the
/// drag/fling/settle state machine, and communicates with its host through
/// three surfaces:
///
/// - [`WheelEngine::on_pointer`] consumes the host's pointer stream;
/// - [`WheelEngine::tick`] advances release animations, driven by the
///   host's frame scheduler while [`WheelEngine::needs_frame`] is `true`;
/// - [`WheelEngine::frame`] produces the draw commands for the current
///   offset.
///
/// Both input methods return the events the interaction produced, in order.
/// Items render through their `Display` impl; the dataset itself stays
/// opaque to the engine.
#[derive(Debug)]
pub struct WheelEngine<T> {
    data: Vec<T>,
    config: WheelConfig,
    geometry: ItemGeometry,
    decay: Box<dyn DecayCurve>,
    scroller: Scroller,
    drag: DragTracker,
    velocity: VelocityTracker,
    limits: FlingLimits,
    selected: usize,
    scroll_offset_y: f64,
    phase: Phase,
    force_finished: bool,
}

impl<T: fmt::Display + Clone> Default for WheelEngine<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: fmt::Display + Clone> WheelEngine<T> {
    /// Creates an engine over `data` with the default configuration.
    ///
    /// Geometry is degenerate until the host calls
    /// [`WheelEngine::set_viewport`].
    #[must_use]
    pub fn new(data: Vec<T>) -> Self {
        let mut engine = Self {
            data,
            config: WheelConfig::default(),
            geometry: ItemGeometry::default(),
            decay: Box::new(ExponentialDecay::default()),
            scroller: Scroller::new(0.0),
            drag: DragTracker::default(),
            velocity: VelocityTracker::new(),
            limits: FlingLimits::unbounded(),
            selected: 0,
            scroll_offset_y: 0.0,
            phase: Phase::Idle,
            force_finished: false,
        };
        engine.recompute_limits();
        engine
    }

    /// Replaces the fling decay model, e.g. with a platform-native curve.
    pub fn set_decay(&mut self, decay: Box<dyn DecayCurve>) {
        self.decay = decay;
    }

    /// Applies a new configuration.
    ///
    /// Fails loudly on invalid configuration instead of degrading. On
    /// success the geometry is re-derived for the current viewport and the
    /// snapshot is returned.
    pub fn configure(&mut self, config: WheelConfig) -> Result<ItemGeometry, ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(self.set_viewport(self.geometry.viewport))
    }

    /// Reports the drawn viewport (padding already removed) and returns the
    /// derived geometry snapshot.
    pub fn set_viewport(&mut self, viewport: Rect) -> ItemGeometry {
        self.geometry = ItemGeometry::derive(viewport, &self.config);
        self.recompute_limits();
        self.geometry
    }

    /// Replaces the dataset.
    ///
    /// The committed selection carries over where possible: a selection or
    /// live position past the new end clamps to the last item, otherwise
    /// the live position becomes the committed one. Scroll state resets and
    /// any running animation is cancelled.
    pub fn set_data(&mut self, data: Vec<T>) {
        let current = self.current_index().unwrap_or(0);
        self.data = data;
        let len = self.data.len();
        self.selected = if len == 0 {
            0
        } else if self.selected >= len || current >= len {
            len - 1
        } else {
            current
        };
        self.reset_motion();
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    /// Current geometry snapshot.
    #[must_use]
    pub fn geometry(&self) -> ItemGeometry {
        self.geometry
    }

    /// The dataset items, in order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.data
    }

    /// Item at `index`, if in range.
    #[must_use]
    pub fn item(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Item under the committed selection, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&T> {
        self.data.get(self.selected)
    }

    /// Inspection snapshot of the engine's mutable state.
    #[must_use]
    pub fn debug_info(&self) -> WheelDebugInfo {
        WheelDebugInfo {
            scroll_offset_y: self.scroll_offset_y,
            selected_index: self.selected,
            current_index: self.current_index(),
            fling_limits: self.limits,
            scroll_state: self.scroll_state(),
            item_height: self.geometry.item_height,
            len: self.data.len(),
        }
    }

    /// Feeds one pointer event, returning the events it produced.
    pub fn on_pointer(&mut self, event: PointerEvent) -> Vec<WheelEvent<T>> {
        let mut events = Vec::new();
        match event {
            PointerEvent::Down { y, time_ms } => {
                if !self.scroller.is_finished() {
                    // Grab a moving wheel: freeze it where it is and make
                    // sure the interrupted animation cannot fire a settle.
                    self.scroller.abort();
                    self.scroll_offset_y = self.scroller.offset();
                    self.force_finished = true;
                }
                self.drag.begin(y);
                self.velocity.clear();
                self.velocity.push(time_ms, y);
            }
            PointerEvent::Move { y, time_ms } => {
                if !self.drag.is_active() || self.geometry.is_degenerate() {
                    return events;
                }
                self.velocity.push(time_ms, y);
                if let Some(delta) = self.drag.update(y) {
                    if self.phase != Phase::Dragging {
                        self.phase = Phase::Dragging;
                        events.push(WheelEvent::StateChanged {
                            state: ScrollState::Dragging,
                        });
                    }
                    self.scroll_offset_y += delta;
                    events.push(WheelEvent::Scrolled {
                        offset: self.scroll_offset_y,
                    });
                }
            }
            PointerEvent::Up { y, time_ms } => {
                if !self.drag.is_active() {
                    return events;
                }
                self.velocity.push(time_ms, y);
                let click = self.drag.is_click();
                self.drag.finish();
                if click {
                    // A tap is a no-op scroll: the selection stands.
                    self.velocity.clear();
                    self.force_finished = false;
                    self.phase = Phase::Idle;
                } else {
                    self.release(time_ms);
                }
            }
            PointerEvent::Cancel { time_ms } => {
                if !self.drag.is_active() {
                    return events;
                }
                let click = self.drag.is_click();
                self.drag.finish();
                // Cancel always discards the velocity history, so a
                // cancelled drag settles by plain snap-back.
                self.velocity.clear();
                if click {
                    self.force_finished = false;
                    self.phase = Phase::Idle;
                } else {
                    self.release(time_ms);
                }
            }
        }
        events
    }

    /// Advances a running release animation to `now_ms`.
    ///
    /// Call once per frame while [`WheelEngine::needs_frame`] is `true`.
    /// The settle fires on the tick after the animation completes, emitting
    /// the selection pair and the idle transition exactly once.
    pub fn tick(&mut self, now_ms: u64) -> Vec<WheelEvent<T>> {
        let mut events = Vec::new();
        if self.phase != Phase::Settling {
            return events;
        }
        if self.scroller.is_finished() {
            if self.force_finished {
                // Interrupted animation: suppress the pending settle.
                self.force_finished = false;
                self.phase = Phase::Idle;
            } else {
                self.settle(&mut events);
            }
            return events;
        }
        self.scroller.tick(now_ms);
        self.scroll_offset_y = self.scroller.offset();
        events.push(WheelEvent::StateChanged {
            state: ScrollState::Scrolling,
        });
        events.push(WheelEvent::Scrolled {
            offset: self.scroll_offset_y,
        });
        events
    }

    /// Draw commands for the current offset, top slot first.
    ///
    /// Returns an empty frame while geometry is degenerate.
    #[must_use]
    pub fn frame(&self) -> Vec<DrawCommand> {
        let mut commands = Vec::new();
        let h = self.geometry.item_height;
        if self.geometry.is_degenerate() {
            return commands;
        }
        let drawn = self.config.drawn_item_count();
        let half_drawn = (drawn / 2) as i64;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Offsets stay within a few item heights of the dataset span"
        )]
        let travelled = (self.scroll_offset_y / h).trunc() as i64;
        let rem = self.scroll_offset_y % h;
        let first = -travelled - half_drawn + self.selected as i64;
        let len = self.data.len();
        let center = self.geometry.drawn_center;
        let projector = CurvatureProjector::new(
            self.geometry.viewport.y0,
            center.y,
            self.geometry.half_wheel_height,
        );
        for slot in 0..drawn as i64 {
            let data_pos = first + slot;
            let text = if self.config.cyclic {
                normalize(data_pos, len, IndexMode::Cyclic)
                    .map(|i| self.data[i].to_string())
                    .unwrap_or_default()
            } else if is_in_range(data_pos, len) {
                #[expect(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    reason = "is_in_range guarantees the value fits in usize"
                )]
                let index = data_pos as usize;
                self.data[index].to_string()
            } else {
                String::new()
            };
            let slot_y = center.y + (slot - half_drawn) as f64 * h + rem;
            let (anchor_y, angle_x_deg, depth) = if self.config.curved {
                let projection = projector.project(slot_y);
                (center.y + projection.offset.y, projection.angle_deg, projection.depth)
            } else {
                (slot_y, 0.0, 0.0)
            };
            let alpha = if self.config.atmospheric {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "Alpha is in [0, 1] and f32 precision suffices"
                )]
                let alpha = atmospheric_alpha(center.y, slot_y) as f32;
                alpha
            } else {
                1.0
            };
            commands.push(DrawCommand {
                text,
                anchor: kurbo::Point::new(center.x, anchor_y),
                pivot: kurbo::Point::new(center.x, anchor_y),
                angle_x_deg,
                depth,
                alpha,
                color: self.config.item_text_color,
            });
        }
        commands
    }

    /// Content size the wheel would like to occupy, before padding.
    ///
    /// Width is the widest item (or the configured `max_width_text`);
    /// height stacks the visible items plus spacing. Curved wheels
    /// compress the height onto the drum circumference.
    #[must_use]
    pub fn content_size(&self, measure: &dyn TextMeasure) -> Size {
        let mut max_width: f64 = 0.0;
        let mut text_height: f64 = 0.0;
        if let Some(text) = &self.config.max_width_text {
            let size = measure.measure(text);
            max_width = size.width;
            text_height = size.height;
        }
        for item in &self.data {
            let size = measure.measure(&item.to_string());
            max_width = max_width.max(size.width);
            text_height = text_height.max(size.height);
        }
        let visible = self.config.effective_visible_count() as f64;
        let mut height = text_height * visible + self.config.item_space * (visible - 1.0);
        if self.config.curved {
            height = 2.0 * height / core::f64::consts::PI;
        }
        Size::new(max_width, height)
    }

    /// Rectangle over the selection window, for curtain/selected-color
    /// rendering. `None` while geometry is degenerate.
    #[must_use]
    pub fn current_item_rect(&self) -> Option<Rect> {
        if self.geometry.is_degenerate() {
            return None;
        }
        let g = self.geometry;
        Some(Rect::new(
            g.viewport.x0,
            g.wheel_center.y - g.half_item_height,
            g.viewport.x1,
            g.wheel_center.y + g.half_item_height,
        ))
    }

    /// Indicator bars bracketing the selection window, `(head, foot)`.
    ///
    /// `None` unless the indicator is enabled and geometry is usable.
    #[must_use]
    pub fn indicator_rects(&self) -> Option<(Rect, Rect)> {
        if !self.config.indicator || self.geometry.is_degenerate() {
            return None;
        }
        let g = self.geometry;
        let half_size = self.config.indicator_size / 2.0;
        let head_y = g.wheel_center.y + g.half_item_height;
        let foot_y = g.wheel_center.y - g.half_item_height;
        Some((
            Rect::new(g.viewport.x0, head_y - half_size, g.viewport.x1, head_y + half_size),
            Rect::new(g.viewport.x0, foot_y - half_size, g.viewport.x1, foot_y + half_size),
        ))
    }

    fn index_mode(&self) -> IndexMode {
        if self.config.cyclic {
            IndexMode::Cyclic
        } else {
            IndexMode::Bounded
        }
    }

    fn recompute_limits(&mut self) {
        self.limits = if self.config.cyclic {
            FlingLimits::unbounded()
        } else {
            FlingLimits::bounded(self.selected, self.data.len(), self.geometry.item_height)
        };
    }

    fn reset_motion(&mut self) {
        self.scroll_offset_y = 0.0;
        self.scroller = Scroller::new(0.0);
        self.force_finished = false;
        self.phase = Phase::Idle;
        self.recompute_limits();
    }

    fn release(&mut self, now_ms: u64) {
        let h = self.geometry.item_height;
        if self.geometry.is_degenerate() {
            self.phase = Phase::Idle;
            return;
        }
        self.force_finished = false;
        let velocity = self
            .velocity
            .velocity()
            .clamp(-MAX_FLING_VELOCITY, MAX_FLING_VELOCITY);
        self.velocity.clear();
        let from = self.scroll_offset_y;
        if velocity.abs() > MIN_FLING_VELOCITY {
            self.scroller
                .fling(now_ms, from, velocity, h, self.limits, self.decay.as_ref());
        } else {
            let target = self
                .limits
                .clamp(from + snap_correction(from % h, h, from));
            self.scroller.ease_to(now_ms, from, target, DEFAULT_SNAP_DURATION_MS);
        }
        self.phase = Phase::Settling;
    }

    fn settle(&mut self, events: &mut Vec<WheelEvent<T>>) {
        self.phase = Phase::Idle;
        let h = self.geometry.item_height;
        if self.data.is_empty() || self.geometry.is_degenerate() {
            return;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Resting offsets are a small integer number of item heights"
        )]
        let travelled = (self.scroll_offset_y / h).round() as i64;
        let raw = self.selected as i64 - travelled;
        let Some(index) = normalize(raw, self.data.len(), self.index_mode()) else {
            return;
        };
        self.selected = index;
        self.scroll_offset_y = 0.0;
        self.scroller = Scroller::new(0.0);
        self.recompute_limits();
        events.push(WheelEvent::ItemSelected {
            item: self.data[index].clone(),
            index,
        });
        events.push(WheelEvent::Selected { index });
        events.push(WheelEvent::StateChanged {
            state: ScrollState::Idle,
        });
    }
}

impl<T: fmt::Display + Clone> Scrollable for WheelEngine<T> {
    fn scroll_offset(&self) -> f64 {
        self.scroll_offset_y
    }

    fn scroll_state(&self) -> ScrollState {
        match self.phase {
            Phase::Idle => ScrollState::Idle,
            Phase::Dragging => ScrollState::Dragging,
            Phase::Settling => ScrollState::Scrolling,
        }
    }

    fn needs_frame(&self) -> bool {
        self.phase == Phase::Settling
    }
}

impl<T: fmt::Display + Clone> Configurable for WheelEngine<T> {
    fn config(&self) -> &WheelConfig {
        &self.config
    }

    fn configure(&mut self, config: WheelConfig) -> Result<ItemGeometry, ConfigError> {
        Self::configure(self, config)
    }

    fn set_viewport(&mut self, viewport: Rect) -> ItemGeometry {
        Self::set_viewport(self, viewport)
    }
}

impl<T: fmt::Display + Clone> Selectable for WheelEngine<T> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn selected_index(&self) -> usize {
        self.selected
    }

    fn current_index(&self) -> Option<usize> {
        let len = self.data.len();
        if len == 0 {
            return None;
        }
        if self.geometry.is_degenerate() {
            return Some(self.selected);
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Live offsets span a small integer number of item heights"
        )]
        let travelled = (self.scroll_offset_y / self.geometry.item_height).round() as i64;
        normalize(self.selected as i64 - travelled, len, self.index_mode())
    }

    fn select(&mut self, index: usize) {
        let len = self.data.len();
        self.selected = if len == 0 { 0 } else { index.min(len - 1) };
        self.reset_motion();
    }
}
