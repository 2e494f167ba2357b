//! Display formatting for hours, in 24-hour notation.

use super::hours::{DayHours, RangeSegment, TimeRange};
use crate::locale::Locale;

/// Formats minutes since midnight as `HH:MM`.
pub fn format_clock(minute: u16) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

/// Formats a range as `HH:MM-HH:MM`.
pub fn format_range(range: TimeRange) -> String {
    format!("{}-{}", format_clock(range.start), format_clock(range.end))
}

/// Formats a day's hours for display.
///
/// Closed and all-day days use the localized fixed text. Recognized ranges are
/// rendered in 24-hour form; unrecognized segments are shown as written.
///
/// # Examples
///
/// ```
/// use pickleball_core_rs::schedule::{format_day_hours, DayHours};
/// use pickleball_core_rs::Locale;
///
/// let hours = DayHours::parse("9am-12:30pm, 4pm-8pm");
/// assert_eq!(format_day_hours(&hours, Locale::Pt), "09:00-12:30, 16:00-20:00");
/// assert_eq!(format_day_hours(&DayHours::Closed, Locale::Pt), "Fechado");
/// assert_eq!(format_day_hours(&DayHours::OpenAllDay, Locale::En), "24 hours");
/// ```
pub fn format_day_hours(hours: &DayHours, locale: Locale) -> String {
    match hours {
        DayHours::Closed => locale.closed().to_string(),
        DayHours::OpenAllDay => locale.all_day().to_string(),
        DayHours::Ranges(segments) => segments
            .iter()
            .map(|segment| match segment {
                RangeSegment::Range(range) => format_range(*range),
                RangeSegment::Unrecognized(text) => text.clone(),
            })
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Formats a raw day value for display.
///
/// Shorthand for `format_day_hours(&DayHours::parse(value), locale)`.
pub fn format_day_value(value: &str, locale: Locale) -> String {
    format_day_hours(&DayHours::parse(value), locale)
}
