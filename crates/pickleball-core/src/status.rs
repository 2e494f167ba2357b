//! Live open/closed status of a facility.
//!
//! Status depends on wall-clock time, so it is always computed for an explicit
//! `now` and never stored. Callers recompute it on every redisplay.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDateTime};
use pickleball_data_rs::Facility;
use serde::{Deserialize, Serialize};

use crate::schedule::{minute_of_day, parse_schedule, ScheduleResult, WeeklySchedule};

/// Open/closed classification of a facility at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Today's hours include the current minute.
    Open,
    /// Today is closed, or no range includes the current minute.
    Closed,
    /// The facility has no usable schedule.
    Unknown,
}

impl Status {
    /// Returns true for [`Status::Open`].
    pub fn is_open(self) -> bool {
        self == Status::Open
    }

    /// Returns the lowercase name used in filters and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Open => "open",
            Status::Closed => "closed",
            Status::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized status name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status '{0}' (expected open, closed or unknown)")]
pub struct UnknownStatus(pub String);

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" | "aberto" => Ok(Status::Open),
            "closed" | "fechado" => Ok(Status::Closed),
            "unknown" | "desconhecido" => Ok(Status::Unknown),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

/// Resolves a facility's status at `now`.
///
/// Returns [`Status::Unknown`] exactly when the facility's hours field cannot
/// be parsed (see [`parse_schedule`]).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use pickleball_core_rs::{resolve_status, Status};
/// use pickleball_data_rs::Facility;
///
/// let mut facility = Facility::new("Clube", "Porto");
/// facility.operating_hours = Some(r#"{"Monday":"9am-12pm, 4pm-8pm"}"#.to_string());
///
/// // 2025-01-06 is a Monday.
/// let monday = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
/// assert_eq!(resolve_status(&facility, monday.and_hms_opt(10, 30, 0).unwrap()), Status::Open);
/// assert_eq!(resolve_status(&facility, monday.and_hms_opt(14, 0, 0).unwrap()), Status::Closed);
/// ```
pub fn resolve_status(facility: &Facility, now: NaiveDateTime) -> Status {
    resolve_schedule_status(&parse_schedule(facility.operating_hours.as_deref()), now)
}

/// Resolves status from an already-parsed schedule.
pub fn resolve_schedule_status(schedule: &ScheduleResult<WeeklySchedule>, now: NaiveDateTime) -> Status {
    let Ok(schedule) = schedule else {
        return Status::Unknown;
    };

    if schedule.day(now.weekday()).is_open_at(minute_of_day(&now)) {
        Status::Open
    } else {
        Status::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    /// 2025-01-06 is a Monday.
    fn monday_at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 6)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn facility_with_hours(hours: Option<&str>) -> Facility {
        let mut facility = Facility::new("Test Courts", "Lisboa");
        facility.operating_hours = hours.map(str::to_string);
        facility
    }

    #[test]
    fn test_split_shift_monday() {
        let facility = facility_with_hours(Some(r#"{"Monday":"9am-12pm, 4pm-8pm"}"#));

        assert_eq!(resolve_status(&facility, monday_at(10, 30)), Status::Open);
        assert_eq!(resolve_status(&facility, monday_at(14, 0)), Status::Closed);
        assert_eq!(resolve_status(&facility, monday_at(16, 0)), Status::Open);
    }

    #[test]
    fn test_boundaries_inclusive() {
        let facility = facility_with_hours(Some(r#"{"Monday":"9am-12pm"}"#));

        assert_eq!(resolve_status(&facility, monday_at(8, 59)), Status::Closed);
        assert_eq!(resolve_status(&facility, monday_at(9, 0)), Status::Open);
        assert_eq!(resolve_status(&facility, monday_at(12, 0)), Status::Open);
        assert_eq!(resolve_status(&facility, monday_at(12, 1)), Status::Closed);
    }

    #[test]
    fn test_seconds_do_not_affect_minute() {
        let facility = facility_with_hours(Some(r#"{"Monday":"9am-12pm"}"#));
        let now = NaiveDate::from_ymd_opt(2025, 1, 6)
            .unwrap()
            .and_hms_opt(12, 0, 59)
            .unwrap();
        assert_eq!(resolve_status(&facility, now), Status::Open);
    }

    #[test]
    fn test_other_day_uses_its_own_hours() {
        let facility = facility_with_hours(Some(r#"{"Monday":"Closed","Tuesday":"Open 24 hours"}"#));
        let tuesday = NaiveDate::from_ymd_opt(2025, 1, 7)
            .unwrap()
            .and_hms_opt(3, 0, 0)
            .unwrap();

        assert_eq!(resolve_status(&facility, monday_at(10, 0)), Status::Closed);
        assert_eq!(resolve_status(&facility, tuesday), Status::Open);
    }

    #[test]
    fn test_sunday_lookup() {
        let facility = facility_with_hours(Some(r#"{"Sunday":"10am-1pm"}"#));
        let sunday = NaiveDate::from_ymd_opt(2025, 1, 12)
            .unwrap()
            .and_hms_opt(11, 0, 0)
            .unwrap();
        assert_eq!(resolve_status(&facility, sunday), Status::Open);
    }

    #[test]
    fn test_absent_day_is_closed() {
        let facility = facility_with_hours(Some(r#"{"Friday":"9am-5pm"}"#));
        assert_eq!(resolve_status(&facility, monday_at(10, 0)), Status::Closed);
    }

    #[test]
    fn test_unknown_when_schedule_unusable() {
        for hours in [None, Some(""), Some("{bad json"), Some("[]")] {
            let facility = facility_with_hours(hours);
            for hour in [0, 9, 12, 23] {
                assert_eq!(
                    resolve_status(&facility, monday_at(hour, 0)),
                    Status::Unknown,
                    "hours {hours:?} at {hour}:00"
                );
            }
        }
    }

    #[test]
    fn test_closed_every_day_is_not_unknown() {
        let facility = facility_with_hours(Some("{}"));
        assert_eq!(resolve_status(&facility, monday_at(10, 0)), Status::Closed);
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("open".parse::<Status>().unwrap(), Status::Open);
        assert_eq!("Fechado".parse::<Status>().unwrap(), Status::Closed);
        assert_eq!(" UNKNOWN ".parse::<Status>().unwrap(), Status::Unknown);
        assert!("maybe".parse::<Status>().is_err());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Open).unwrap(), "\"open\"");
        assert_eq!(Status::Unknown.to_string(), "unknown");
    }
}
