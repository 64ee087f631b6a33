// Copyright 2025 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Three wheels wired into one date picker.

use core::fmt;

use peniko::Color;
use whorl_engine::{ConfigError, WheelConfig};

use crate::day::DayWheel;
use crate::month::MonthWheel;
use crate::year::YearWheel;

/// An aggregate read across the composed wheels found them disagreeing.
///
/// The per-wheel value is still available through the individual wheels;
/// the aggregate accessors refuse to pick a winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateMismatch {
    /// The wheels are configured with different visible item counts.
    VisibleItemCount,
    /// The wheels are configured with different item text colors.
    ItemTextColor,
}

impl fmt::Display for AggregateMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = match self {
            Self::VisibleItemCount => "visible item count",
            Self::ItemTextColor => "item text color",
        };
        write!(f, "composed date wheels disagree on the {field}")
    }
}

impl core::error::Error for AggregateMismatch {}

/// Year, month, and day wheels composed into a date picker.
///
/// Each wheel keeps its own engine; the host lays them out side by side and
/// routes pointer input and frame ticks to each through the `*_wheel_mut`
/// accessors. The composition only adds the calendar coupling: after a
/// settle on the year or month wheel, [`DateWheel::refresh_days`] re-derives
/// the day wheel's dataset so it always shows the selected month.
#[derive(Debug)]
pub struct DateWheel {
    year: YearWheel,
    month: MonthWheel,
    day: DayWheel,
}

impl DateWheel {
    /// Creates a date picker over the year range `start..=end`, selecting
    /// the first of January of `start`.
    #[must_use]
    pub fn new(start_year: i32, end_year: i32) -> Self {
        let year = YearWheel::new(start_year, end_year);
        let month = MonthWheel::new();
        let day = DayWheel::new(year.selected_year(), month.selected_month());
        Self { year, month, day }
    }

    /// Commits a full date; each component clamps into its valid range.
    pub fn set_date(&mut self, year: i32, month: u32, day: u32) {
        self.year.set_selected_year(year);
        self.month.set_selected_month(month);
        self.refresh_days();
        self.day.set_selected_day(day);
    }

    /// The committed `(year, month, day)` triple.
    #[must_use]
    pub fn selected_date(&self) -> (i32, u32, u32) {
        (
            self.year.selected_year(),
            self.month.selected_month(),
            self.day.selected_day(),
        )
    }

    /// Re-derives the day wheel's dataset from the committed year and month.
    ///
    /// Call after any interaction that may have settled the year or month
    /// wheel. A day beyond the end of the new month re-clamps to its last
    /// day.
    pub fn refresh_days(&mut self) {
        let target = (self.year.selected_year(), self.month.selected_month());
        if self.day.month() != target {
            self.day.set_month(target.0, target.1);
        }
    }

    /// Applies one configuration to all three wheels.
    ///
    /// Going through this method keeps the aggregate accessors conflict
    /// free.
    pub fn configure_all(&mut self, config: &WheelConfig) -> Result<(), ConfigError> {
        self.year.engine_mut().configure(config.clone())?;
        self.month.engine_mut().configure(config.clone())?;
        self.day.engine_mut().configure(config.clone())?;
        Ok(())
    }

    /// The visible item count shared by the three wheels.
    pub fn visible_item_count(&self) -> Result<usize, AggregateMismatch> {
        let count = self.year.engine().config().visible_item_count;
        if self.month.engine().config().visible_item_count != count
            || self.day.engine().config().visible_item_count != count
        {
            return Err(AggregateMismatch::VisibleItemCount);
        }
        Ok(count)
    }

    /// The item text color shared by the three wheels.
    pub fn item_text_color(&self) -> Result<Color, AggregateMismatch> {
        let color = self.year.engine().config().item_text_color;
        if self.month.engine().config().item_text_color != color
            || self.day.engine().config().item_text_color != color
        {
            return Err(AggregateMismatch::ItemTextColor);
        }
        Ok(color)
    }

    /// The year wheel.
    #[must_use]
    pub fn year_wheel(&self) -> &YearWheel {
        &self.year
    }

    /// The year wheel, for routing input.
    pub fn year_wheel_mut(&mut self) -> &mut YearWheel {
        &mut self.year
    }

    /// The month wheel.
    #[must_use]
    pub fn month_wheel(&self) -> &MonthWheel {
        &self.month
    }

    /// The month wheel, for routing input.
    pub fn month_wheel_mut(&mut self) -> &mut MonthWheel {
        &mut self.month
    }

    /// The day wheel.
    #[must_use]
    pub fn day_wheel(&self) -> &DayWheel {
        &self.day
    }

    /// The day wheel, for routing input.
    pub fn day_wheel_mut(&mut self) -> &mut DayWheel {
        &mut self.day
    }
}

#[cfg(test)]
mod tests {
    use whorl_engine::{Selectable, WheelConfig};

    use super::{AggregateMismatch, DateWheel};

    #[test]
    fn set_date_commits_all_three_wheels() {
        let mut date = DateWheel::new(2000, 2030);
        date.set_date(2024, 2, 29);
        assert_eq!(date.selected_date(), (2024, 2, 29));
        assert_eq!(date.day_wheel().engine().len(), 29);
    }

    #[test]
    fn impossible_dates_clamp() {
        let mut date = DateWheel::new(2000, 2030);
        date.set_date(2023, 2, 31);
        assert_eq!(date.selected_date(), (2023, 2, 28));
    }

    #[test]
    fn refresh_follows_the_settled_month() {
        let mut date = DateWheel::new(2000, 2030);
        date.set_date(2023, 1, 31);

        // The host settles the month wheel on April, then refreshes.
        date.month_wheel_mut().set_selected_month(4);
        date.refresh_days();
        assert_eq!(date.selected_date(), (2023, 4, 30));

        // A no-op refresh leaves the day wheel alone.
        date.refresh_days();
        assert_eq!(date.selected_date(), (2023, 4, 30));
    }

    #[test]
    fn leap_day_survives_a_year_change_only_in_leap_years() {
        let mut date = DateWheel::new(2000, 2030);
        date.set_date(2024, 2, 29);

        date.year_wheel_mut().set_selected_year(2025);
        date.refresh_days();
        assert_eq!(date.selected_date(), (2025, 2, 28));
    }

    #[test]
    fn aggregate_reads_report_disagreement() {
        let mut date = DateWheel::new(2000, 2030);
        assert_eq!(date.visible_item_count(), Ok(7));
        assert!(date.item_text_color().is_ok());

        date.month_wheel_mut()
            .engine_mut()
            .configure(WheelConfig {
                visible_item_count: 5,
                ..WheelConfig::default()
            })
            .unwrap();
        assert_eq!(
            date.visible_item_count(),
            Err(AggregateMismatch::VisibleItemCount)
        );

        // Re-aligning through the shared path clears the conflict.
        date.configure_all(&WheelConfig {
            visible_item_count: 5,
            ..WheelConfig::default()
        })
        .unwrap();
        assert_eq!(date.visible_item_count(), Ok(5));
    }
}
