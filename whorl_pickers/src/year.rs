// Copyright 2025 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A wheel over a contiguous range of calendar years.

use whorl_engine::{Selectable, WheelEngine};

/// A wheel whose items are the years `start..=end`.
///
/// The wheel owns a plain [`WheelEngine`] over the year numbers; this
/// adapter only translates between year values and dataset indices. Hosts
/// drive the engine directly through [`YearWheel::engine_mut`].
#[derive(Debug)]
pub struct YearWheel {
    engine: WheelEngine<i32>,
    start: i32,
    end: i32,
}

impl YearWheel {
    /// Creates a wheel spanning `start..=end`, selecting `start`.
    ///
    /// A reversed range is treated as the single year `start`.
    #[must_use]
    pub fn new(start: i32, end: i32) -> Self {
        let end = end.max(start);
        Self {
            engine: WheelEngine::new((start..=end).collect()),
            start,
            end,
        }
    }

    /// The inclusive `(start, end)` year range.
    #[must_use]
    pub fn year_range(&self) -> (i32, i32) {
        (self.start, self.end)
    }

    /// Replaces the year range, keeping the selected year where the new
    /// range still contains it and clamping it to the nearer end otherwise.
    pub fn set_year_frame(&mut self, start: i32, end: i32) {
        let keep = self.selected_year();
        let end = end.max(start);
        self.start = start;
        self.end = end;
        self.engine.set_data((start..=end).collect());
        self.set_selected_year(keep);
    }

    /// The committed year.
    #[must_use]
    pub fn selected_year(&self) -> i32 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Year ranges are far smaller than i32"
        )]
        let offset = self.engine.selected_index() as i32;
        self.start + offset
    }

    /// Commits a year, clamped into the range, and resets scroll.
    pub fn set_selected_year(&mut self, year: i32) {
        let year = year.clamp(self.start, self.end);
        self.engine
            .select(usize::try_from(year - self.start).unwrap_or(0));
    }

    /// The underlying engine.
    #[must_use]
    pub fn engine(&self) -> &WheelEngine<i32> {
        &self.engine
    }

    /// The underlying engine, for feeding input and configuration.
    pub fn engine_mut(&mut self) -> &mut WheelEngine<i32> {
        &mut self.engine
    }
}

#[cfg(test)]
mod tests {
    use whorl_engine::Selectable;

    use super::YearWheel;

    #[test]
    fn years_map_to_indices() {
        let mut wheel = YearWheel::new(2000, 2010);
        assert_eq!(wheel.selected_year(), 2000);
        wheel.set_selected_year(2004);
        assert_eq!(wheel.engine().selected_index(), 4);
        assert_eq!(wheel.selected_year(), 2004);
    }

    #[test]
    fn selection_clamps_into_the_range() {
        let mut wheel = YearWheel::new(2000, 2010);
        wheel.set_selected_year(1990);
        assert_eq!(wheel.selected_year(), 2000);
        wheel.set_selected_year(2050);
        assert_eq!(wheel.selected_year(), 2010);
    }

    #[test]
    fn new_frame_keeps_the_selected_year() {
        let mut wheel = YearWheel::new(2000, 2010);
        wheel.set_selected_year(2008);
        wheel.set_year_frame(2005, 2030);
        assert_eq!(wheel.selected_year(), 2008);
        assert_eq!(wheel.engine().selected_index(), 3);

        // A frame that no longer contains the year clamps it.
        wheel.set_year_frame(2020, 2030);
        assert_eq!(wheel.selected_year(), 2020);
    }

    #[test]
    fn reversed_range_collapses_to_one_year() {
        let wheel = YearWheel::new(2010, 2000);
        assert_eq!(wheel.year_range(), (2010, 2010));
        assert_eq!(wheel.engine().len(), 1);
    }
}
