// Copyright 2025 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whorl Pickers: calendar adapters over the wheel engine.
//!
//! Each picker composes a plain [`whorl_engine::WheelEngine`] and adds only
//! the domain translation: year values to indices, one-based month and day
//! numbers, Gregorian month lengths. [`DateWheel`] wires the three into a
//! full date picker whose day wheel follows the settled year and month.
//!
//! Input, configuration, and rendering go through the exposed engines, so a
//! host drives a picker exactly like a bare wheel.
//!
//! ## Minimal example
//!
//! ```
//! use whorl_pickers::DateWheel;
//!
//! let mut date = DateWheel::new(2000, 2030);
//! date.set_date(2024, 2, 29);
//! assert_eq!(date.selected_date(), (2024, 2, 29));
//!
//! // Moving to a common year re-clamps the leap day.
//! date.year_wheel_mut().set_selected_year(2025);
//! date.refresh_days();
//! assert_eq!(date.selected_date(), (2025, 2, 28));
//! ```

mod date;
mod day;
mod month;
mod year;

pub use date::{AggregateMismatch, DateWheel};
pub use day::{DayWheel, days_in_month, is_leap_year};
pub use month::MonthWheel;
pub use year::YearWheel;
