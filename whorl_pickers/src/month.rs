// Copyright 2025 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A wheel over the twelve calendar months.

use whorl_engine::{Selectable, WheelEngine};

/// A wheel whose items are the month numbers `1..=12`.
#[derive(Debug)]
pub struct MonthWheel {
    engine: WheelEngine<u32>,
}

impl Default for MonthWheel {
    fn default() -> Self {
        Self::new()
    }
}

impl MonthWheel {
    /// Creates a month wheel with January selected.
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: WheelEngine::new((1..=12).collect()),
        }
    }

    /// The committed month number, `1..=12`.
    #[must_use]
    pub fn selected_month(&self) -> u32 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "The index is at most 11"
        )]
        let index = self.engine.selected_index() as u32;
        index + 1
    }

    /// Commits a month, clamped into `1..=12`, and resets scroll.
    pub fn set_selected_month(&mut self, month: u32) {
        let month = month.clamp(1, 12);
        self.engine
            .select(usize::try_from(month - 1).unwrap_or(0));
    }

    /// The underlying engine.
    #[must_use]
    pub fn engine(&self) -> &WheelEngine<u32> {
        &self.engine
    }

    /// The underlying engine, for feeding input and configuration.
    pub fn engine_mut(&mut self) -> &mut WheelEngine<u32> {
        &mut self.engine
    }
}
