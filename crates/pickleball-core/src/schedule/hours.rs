//! Per-day hours values and open/closed evaluation.
//!
//! A day value is free text from the dataset. It is one of:
//!
//! - a closed marker: `Closed` or `Fechado`
//! - an all-day marker: `Open 24 hours` or the range `12am-12am`
//! - one or more comma-separated `start-end` ranges in 12-hour clock notation,
//!   e.g. `9am-12pm, 4pm-8pm` or `6:30am-10pm`
//!
//! Ranges that cannot be read are kept as [`RangeSegment::Unrecognized`] and
//! never count as open; the remaining ranges of the day are still evaluated.

use std::sync::LazyLock;

use chrono::Timelike;
use regex::Regex;

/// Matches a 12-hour clock time such as `9am`, `12:30pm` or `10:45AM`.
static CLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)(?::(\d+))?(am|pm)").expect("clock pattern is valid"));

const CLOSED_MARKERS: [&str; 2] = ["closed", "fechado"];
const ALL_DAY_MARKERS: [&str; 4] = ["open24hours", "24hours", "24horas", "12am-12am"];

/// An opening interval in minutes since midnight, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    /// Opening minute.
    pub start: u16,
    /// Closing minute.
    pub end: u16,
}

impl TimeRange {
    /// Creates a range. `start > end` is allowed and never matches.
    pub fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// Returns true if `minute` lies within `[start, end]`.
    ///
    /// Overnight ranges written without rollover (`10pm-2am`) have
    /// `start > end` and contain no minute at all.
    pub fn contains(&self, minute: u16) -> bool {
        self.start <= minute && minute <= self.end
    }
}

/// One comma-separated piece of a day value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeSegment {
    /// A range with both endpoints understood.
    Range(TimeRange),
    /// Text that could not be read as a range, kept verbatim (trimmed).
    Unrecognized(String),
}

/// The normalized hours of one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayHours {
    /// Closed all day. Also the value for days missing from the source.
    Closed,
    /// Open around the clock.
    OpenAllDay,
    /// Open during the recognized ranges.
    Ranges(Vec<RangeSegment>),
}

impl DayHours {
    /// Normalizes a raw day value.
    ///
    /// Never fails: blank text is closed, and unreadable ranges are kept as
    /// [`RangeSegment::Unrecognized`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pickleball_core_rs::schedule::{DayHours, TimeRange};
    ///
    /// assert_eq!(DayHours::parse("Closed"), DayHours::Closed);
    /// assert_eq!(DayHours::parse("Open 24 hours"), DayHours::OpenAllDay);
    ///
    /// let hours = DayHours::parse("9am-12pm, 4pm-8pm");
    /// assert_eq!(
    ///     hours.ranges().collect::<Vec<_>>(),
    ///     vec![TimeRange::new(540, 720), TimeRange::new(960, 1200)]
    /// );
    /// ```
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || is_closed_marker(trimmed) {
            return DayHours::Closed;
        }
        if is_all_day_marker(trimmed) {
            return DayHours::OpenAllDay;
        }

        let segments = trimmed
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(parse_segment)
            .collect();
        DayHours::Ranges(segments)
    }

    /// Returns true if the day is open at `minute` (minutes since midnight).
    pub fn is_open_at(&self, minute: u16) -> bool {
        match self {
            DayHours::Closed => false,
            DayHours::OpenAllDay => true,
            DayHours::Ranges(_) => self.ranges().any(|range| range.contains(minute)),
        }
    }

    /// Iterates over the recognized ranges, skipping unrecognized segments.
    pub fn ranges(&self) -> impl Iterator<Item = TimeRange> + '_ {
        let segments: &[RangeSegment] = match self {
            DayHours::Ranges(segments) => segments,
            _ => &[],
        };
        segments.iter().filter_map(|segment| match segment {
            RangeSegment::Range(range) => Some(*range),
            RangeSegment::Unrecognized(_) => None,
        })
    }

    /// Returns true for [`DayHours::Closed`].
    pub fn is_closed(&self) -> bool {
        matches!(self, DayHours::Closed)
    }
}

/// Returns true if the raw day value is open at `minute`.
///
/// Shorthand for `DayHours::parse(day_value).is_open_at(minute)`.
pub fn is_open_at(day_value: &str, minute: u16) -> bool {
    DayHours::parse(day_value).is_open_at(minute)
}

/// Returns the minutes elapsed since midnight for a clock reading.
pub fn minute_of_day(time: &impl Timelike) -> u16 {
    // hour() < 24 and minute() < 60, so the result is below 1440.
    (time.hour() * 60 + time.minute()) as u16
}

/// Converts a 12-hour clock time to minutes since midnight.
///
/// `12am` is midnight, `12pm` is noon, other `pm` hours add twelve hours.
/// Hours above 12 or minutes above 59 are rejected.
///
/// # Examples
///
/// ```
/// use pickleball_core_rs::schedule::parse_clock;
///
/// assert_eq!(parse_clock("12am"), Some(0));
/// assert_eq!(parse_clock("9:30am"), Some(570));
/// assert_eq!(parse_clock("12pm"), Some(720));
/// assert_eq!(parse_clock("8PM"), Some(1200));
/// assert_eq!(parse_clock("20:00"), None);
/// ```
pub fn parse_clock(text: &str) -> Option<u16> {
    let captures = CLOCK_RE.captures(text)?;

    let hours: u16 = captures.get(1)?.as_str().parse().ok()?;
    let minutes: u16 = match captures.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    if hours > 12 || minutes > 59 {
        return None;
    }

    let is_pm = captures.get(3)?.as_str().eq_ignore_ascii_case("pm");
    let hours = match (is_pm, hours) {
        (false, 12) => 0,
        (true, 12) => 12,
        (true, h) => h + 12,
        (false, h) => h,
    };

    Some(hours * 60 + minutes)
}

fn is_closed_marker(value: &str) -> bool {
    let lower = value.to_lowercase();
    CLOSED_MARKERS.contains(&lower.as_str())
}

fn is_all_day_marker(value: &str) -> bool {
    let compact: String = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == '–' { '-' } else { c })
        .collect::<String>()
        .to_lowercase();
    ALL_DAY_MARKERS.contains(&compact.as_str())
}

fn parse_segment(segment: &str) -> RangeSegment {
    let parts: Vec<&str> = segment.split(['-', '–']).collect();
    // `9am-12pm-3pm` is not cut down to its first range: any segment without
    // exactly one separator stays unrecognized and never counts as open.
    let range = match parts.as_slice() {
        [start, end] => parse_clock(start.trim()).zip(parse_clock(end.trim())),
        _ => None,
    };

    match range {
        Some((start, end)) => RangeSegment::Range(TimeRange::new(start, end)),
        None => {
            log::debug!("skipping unrecognized hours range '{segment}'");
            RangeSegment::Unrecognized(segment.to_string())
        }
    }
}
