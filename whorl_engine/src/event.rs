// Copyright 2025 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input and the engine's outbound event stream.

/// Pointer events fed to the engine by the host.
///
/// Only the vertical coordinate matters to a wheel; `time_ms` timestamps
/// come from the host's event clock and feed velocity estimation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary pointer pressed.
    Down {
        /// Vertical position in viewport coordinates.
        y: f64,
        /// Event timestamp in milliseconds.
        time_ms: u64,
    },
    /// Pointer moved while pressed.
    Move {
        /// Vertical position in viewport coordinates.
        y: f64,
        /// Event timestamp in milliseconds.
        time_ms: u64,
    },
    /// Pointer released.
    Up {
        /// Vertical position in viewport coordinates.
        y: f64,
        /// Event timestamp in milliseconds.
        time_ms: u64,
    },
    /// Gesture cancelled by the platform.
    Cancel {
        /// Event timestamp in milliseconds.
        time_ms: u64,
    },
}

/// Externally visible scroll state.
///
/// `Dragging` while the pointer moves the wheel 1:1; `Scrolling` while a
/// fling or snap animation is in flight; `Idle` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollState {
    /// The wheel is at rest.
    #[default]
    Idle,
    /// The pointer is moving the wheel directly.
    Dragging,
    /// A release animation is running.
    Scrolling,
}

/// Events produced by the engine in response to input and ticks.
///
/// Hosts receive these as return values from
/// [`WheelEngine::on_pointer`](crate::WheelEngine::on_pointer) and
/// [`WheelEngine::tick`](crate::WheelEngine::tick), in emission order. A
/// settle produces exactly one [`WheelEvent::ItemSelected`] /
/// [`WheelEvent::Selected`] pair; an interrupted animation produces none.
#[derive(Debug, Clone, PartialEq)]
pub enum WheelEvent<T> {
    /// The scroll offset changed, by drag or by animation.
    Scrolled {
        /// Signed offset from the committed selection's resting position.
        offset: f64,
    },
    /// A settled selection was committed: the item-level contract.
    ItemSelected {
        /// The newly selected item.
        item: T,
        /// Its index in the dataset.
        index: usize,
    },
    /// A settled selection was committed: the index-level contract.
    Selected {
        /// The newly selected index.
        index: usize,
    },
    /// The scroll state transitioned.
    StateChanged {
        /// The new state.
        state: ScrollState,
    },
}
