//! Parsing the serialized operating-hours field into a weekly schedule.

use chrono::Weekday;
use serde_json::Value;

use super::error::{ScheduleError, ScheduleResult};
use super::hours::DayHours;

/// Days in display order.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Normalized hours for the seven days of the week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySchedule {
    days: [DayHours; 7],
}

impl Default for WeeklySchedule {
    fn default() -> Self {
        Self::closed()
    }
}

impl WeeklySchedule {
    /// Creates a schedule that is closed every day.
    pub fn closed() -> Self {
        Self {
            days: std::array::from_fn(|_| DayHours::Closed),
        }
    }

    /// Returns the schedule with `day` replaced.
    pub fn with_day(mut self, day: Weekday, hours: DayHours) -> Self {
        self.days[day.num_days_from_monday() as usize] = hours;
        self
    }

    /// Returns the hours for `day`.
    pub fn day(&self, day: Weekday) -> &DayHours {
        &self.days[day.num_days_from_monday() as usize]
    }

    /// Iterates over the days from Monday to Sunday.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &DayHours)> {
        WEEK.into_iter().zip(self.days.iter())
    }

    /// Returns true if every day is closed.
    pub fn is_always_closed(&self) -> bool {
        self.days.iter().all(DayHours::is_closed)
    }
}

/// Parses the serialized operating-hours field.
///
/// The field is a JSON object keyed by English day name, each value a free-text
/// hours string. Exact day names (`"Monday"`) take priority; otherwise day
/// names are matched case-insensitively, abbreviations such as `Mon`
/// included, with the first such key in key order winning. Other keys are
/// ignored. Days that are missing, or
/// whose value is not a string, are closed.
///
/// # Errors
///
/// - [`ScheduleError::NoData`] if `raw` is absent or blank.
/// - [`ScheduleError::Malformed`] if `raw` is not a JSON object. The failure
///   is logged as a warning.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use pickleball_core_rs::schedule::{parse_schedule, DayHours, ScheduleError};
///
/// let schedule = parse_schedule(Some(r#"{"Monday":"9am-12pm","Sunday":"Closed"}"#)).unwrap();
/// assert!(schedule.day(Weekday::Mon).is_open_at(600));
/// assert_eq!(schedule.day(Weekday::Tue), &DayHours::Closed);
///
/// assert_eq!(parse_schedule(None), Err(ScheduleError::NoData));
/// assert!(parse_schedule(Some("{bad json")).unwrap_err().is_malformed());
/// ```
pub fn parse_schedule(raw: Option<&str>) -> ScheduleResult<WeeklySchedule> {
    let raw = raw
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .ok_or(ScheduleError::NoData)?;

    let mapping = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(mapping)) => mapping,
        Ok(other) => return Err(malformed(raw, format!("expected an object, found {}", kind(&other)))),
        Err(e) => return Err(malformed(raw, e.to_string())),
    };

    // Exact day names win; other spellings only fill days still missing.
    let mut schedule = WeeklySchedule::closed();
    let mut filled = [false; 7];
    for day in WEEK {
        if let Some(value) = mapping.get(day_name(day)) {
            schedule = schedule.with_day(day, day_hours(day_name(day), value));
            filled[day.num_days_from_monday() as usize] = true;
        }
    }

    for (key, value) in &mapping {
        let Ok(day) = key.trim().parse::<Weekday>() else {
            log::debug!("ignoring unknown day '{key}' in operating hours");
            continue;
        };
        let slot = &mut filled[day.num_days_from_monday() as usize];
        if *slot {
            if key != day_name(day) {
                log::debug!("ignoring duplicate key '{key}' for {}", day_name(day));
            }
            continue;
        }
        schedule = schedule.with_day(day, day_hours(key, value));
        *slot = true;
    }

    Ok(schedule)
}

/// The dataset's key for `day`.
fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn day_hours(key: &str, value: &Value) -> DayHours {
    match value {
        Value::String(text) => DayHours::parse(text),
        other => {
            log::debug!("treating non-text hours for {key} as closed: {other}");
            DayHours::Closed
        }
    }
}

fn malformed(raw: &str, reason: String) -> ScheduleError {
    log::warn!("failed to parse operating hours {raw:?}: {reason}");
    ScheduleError::malformed(reason)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
