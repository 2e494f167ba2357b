//! List-view cards.

use chrono::{Datelike, NaiveDateTime, Weekday};
use pickleball_data_rs::Facility;
use serde::Serialize;

use crate::locale::Locale;
use crate::schedule::{format_day_hours, parse_schedule};
use crate::status::{resolve_schedule_status, Status};
use crate::tags::parse_additional_info;

/// Returns the court count with its unit, e.g. `"1 campo"` or `"6 campos"`.
///
/// The raw dataset text is kept as written. The singular noun is used only
/// when the count parses to exactly one.
pub fn court_label(facility: &Facility, locale: Locale) -> String {
    let singular = facility.court_count() == Some(1);
    format!("{} {}", facility.courts.trim(), locale.courts_noun(singular))
}

/// One row of the weekly hours table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoursLine {
    /// The weekday this row describes.
    pub day: Weekday,
    /// Localized day name, with the today marker appended on today's row.
    pub label: String,
    /// Display text for the day's hours.
    pub hours: String,
    pub is_today: bool,
    pub is_closed: bool,
    /// Set only on today's row while the facility is open.
    pub open_now: bool,
}

/// Everything the list view shows for one facility.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacilityCard {
    pub name: String,
    pub district: String,
    pub address: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Court count with its unit.
    pub courts: String,
    pub status: Status,
    /// Localized open/closed badge shown next to the hours title.
    pub status_badge: String,
    /// Weekly hours, Monday first. Absent when the schedule is unusable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<Vec<HoursLine>>,
    /// Service tags from the additional information.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl FacilityCard {
    /// Builds the card for `facility` as seen at `now`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use pickleball_core_rs::view::FacilityCard;
    /// use pickleball_core_rs::{Locale, Status};
    /// use pickleball_data_rs::Facility;
    ///
    /// let mut facility = Facility::new("Clube", "Porto");
    /// facility.courts = "1".to_string();
    /// facility.operating_hours = Some(r#"{"Monday":"9am-5pm"}"#.to_string());
    ///
    /// let now = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap().and_hms_opt(10, 0, 0).unwrap();
    /// let card = FacilityCard::build(&facility, now, Locale::Pt);
    ///
    /// assert_eq!(card.courts, "1 campo");
    /// assert_eq!(card.status, Status::Open);
    /// assert_eq!(card.hours.unwrap()[0].label, "Segunda-feira (hoje)");
    /// ```
    pub fn build(facility: &Facility, now: NaiveDateTime, locale: Locale) -> Self {
        let schedule = parse_schedule(facility.operating_hours.as_deref());
        let status = resolve_schedule_status(&schedule, now);
        let today = now.weekday();

        let hours = schedule.ok().map(|schedule| {
            schedule
                .days()
                .map(|(day, day_hours)| {
                    let is_today = day == today;
                    let mut label = locale.day_name(day).to_string();
                    if is_today {
                        label.push_str(locale.today_marker());
                    }
                    HoursLine {
                        day,
                        label,
                        hours: format_day_hours(day_hours, locale),
                        is_today,
                        is_closed: day_hours.is_closed(),
                        open_now: is_today && status.is_open(),
                    }
                })
                .collect()
        });

        Self {
            name: facility.name.clone(),
            district: facility.district.clone(),
            address: facility.address.clone(),
            phone: facility.phone.clone(),
            email: facility.email().map(str::to_string),
            website: facility.website().map(str::to_string),
            courts: court_label(facility, locale),
            status,
            status_badge: locale.open_badge(status.is_open()).to_string(),
            hours,
            tags: parse_additional_info(&facility.additional_info),
        }
    }

    /// Returns today's hours row, if the card has an hours table.
    pub fn today(&self) -> Option<&HoursLine> {
        self.hours.as_ref()?.iter().find(|line| line.is_today)
    }
}
