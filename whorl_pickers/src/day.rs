// Copyright 2025 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A wheel over the days of one calendar month.

use hashbrown::HashMap;
use whorl_engine::{Selectable, WheelEngine};

/// Proleptic-Gregorian leap year test.
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, proleptic Gregorian.
///
/// `month` is clamped into `1..=12`.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month.clamp(1, 12) {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// A wheel whose items are the day numbers of one month.
///
/// Changing the month with [`DayWheel::set_month`] swaps the dataset in
/// place; the engine's carry-over rule re-clamps a selected day that the new
/// month does not have (the 31st becomes the 30th, and so on). Day lists are
/// cached per month length, so the four possible datasets are built once.
#[derive(Debug)]
pub struct DayWheel {
    engine: WheelEngine<u32>,
    year: i32,
    month: u32,
    cache: HashMap<u32, Vec<u32>>,
}

impl DayWheel {
    /// Creates a day wheel for `month` of `year`, selecting the 1st.
    #[must_use]
    pub fn new(year: i32, month: u32) -> Self {
        let mut wheel = Self {
            engine: WheelEngine::new(Vec::new()),
            year,
            month: month.clamp(1, 12),
            cache: HashMap::new(),
        };
        let days = wheel.day_list(days_in_month(year, month));
        wheel.engine.set_data(days);
        wheel
    }

    /// The `(year, month)` the wheel currently shows.
    #[must_use]
    pub fn month(&self) -> (i32, u32) {
        (self.year, self.month)
    }

    /// Shows a different month, re-clamping the selected day if needed.
    pub fn set_month(&mut self, year: i32, month: u32) {
        self.year = year;
        self.month = month.clamp(1, 12);
        let days = self.day_list(days_in_month(year, month));
        self.engine.set_data(days);
    }

    /// The committed day number, `1..=31`.
    #[must_use]
    pub fn selected_day(&self) -> u32 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "The index is at most 30"
        )]
        let index = self.engine.selected_index() as u32;
        index + 1
    }

    /// Commits a day, clamped into the month, and resets scroll.
    pub fn set_selected_day(&mut self, day: u32) {
        let day = day.clamp(1, days_in_month(self.year, self.month));
        self.engine
            .select(usize::try_from(day - 1).unwrap_or(0));
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

    fn day_list(&mut self, length: u32) -> Vec<u32> {
        self.cache
            .entry(length)
            .or_insert_with(|| (1..=length).collect())
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use whorl_engine::Selectable;

    use super::{DayWheel, days_in_month, is_leap_year};

    #[test]
    fn gregorian_month_lengths() {
        assert_eq!(days_in_month(2023, 1), 31);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        // Century years follow the 400 rule.
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
    }

    #[test]
    fn leap_year_rule() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }

    #[test]
    fn shorter_month_reclamps_the_day() {
        let mut wheel = DayWheel::new(2023, 1);
        wheel.set_selected_day(31);
        assert_eq!(wheel.selected_day(), 31);

        wheel.set_month(2023, 4);
        assert_eq!(wheel.engine().len(), 30);
        assert_eq!(wheel.selected_day(), 30);

        wheel.set_month(2023, 2);
        assert_eq!(wheel.selected_day(), 28);

        // Growing the month again keeps the clamped day.
        wheel.set_month(2023, 3);
        assert_eq!(wheel.selected_day(), 28);
    }

    #[test]
    fn day_selection_clamps_into_the_month() {
        let mut wheel = DayWheel::new(2023, 2);
        wheel.set_selected_day(0);
        assert_eq!(wheel.selected_day(), 1);
        wheel.set_selected_day(31);
        assert_eq!(wheel.selected_day(), 28);
    }
}
