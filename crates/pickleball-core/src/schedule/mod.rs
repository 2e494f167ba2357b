//! Operating-hours parsing and evaluation.
//!
//! The dataset stores a facility's hours as serialized JSON keyed by English
//! day name, with free-text values:
//!
//! ```text
//! {"Monday": "9am-12pm, 4pm-8pm", "Saturday": "Open 24 hours", "Sunday": "Closed"}
//! ```
//!
//! [`parse_schedule`] turns that field into a [`WeeklySchedule`] of seven
//! [`DayHours`] slots, and [`DayHours::is_open_at`] answers whether a day is
//! open at a given minute. Bad data degrades instead of failing: an unreadable
//! field is a [`ScheduleError`], an unreadable day is closed, and an unreadable
//! range is skipped.
//!
//! # Example
//!
//! ```
//! use chrono::Weekday;
//! use pickleball_core_rs::schedule::{format_day_hours, parse_schedule};
//! use pickleball_core_rs::Locale;
//!
//! let schedule = parse_schedule(Some(r#"{"Monday":"9am-12pm, 4pm-8pm"}"#)).unwrap();
//! let monday = schedule.day(Weekday::Mon);
//!
//! assert!(monday.is_open_at(10 * 60 + 30));
//! assert!(!monday.is_open_at(14 * 60));
//! assert_eq!(format_day_hours(monday, Locale::Pt), "09:00-12:00, 16:00-20:00");
//! ```

mod error;
mod format;
mod hours;
mod parser;

pub use error::{ScheduleError, ScheduleResult};
pub use format::{format_clock, format_day_hours, format_day_value, format_range};
pub use hours::{is_open_at, minute_of_day, parse_clock, DayHours, RangeSegment, TimeRange};
pub use parser::{parse_schedule, WeeklySchedule, WEEK};

#[cfg(test)]
mod tests;
