//! Opening hours, live status and filtering for the pickleball directory.
//!
//! This crate turns the read-only facility records of
//! [`pickleball_data_rs`] into what a directory user sees:
//!
//! - [`schedule`] parses the free-text operating hours of a facility
//! - [`resolve_status`] classifies a facility as open, closed or unknown at a
//!   given instant
//! - [`filter`] narrows the collection by search text, district, court count
//!   and status
//! - [`view`] projects facilities into list cards and map markers
//! - [`Directory`] owns the collection and the user's filter session
//!
//! Every time-dependent operation takes `now` explicitly; nothing here reads
//! the wall clock.
//!
//! # Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use pickleball_core_rs::{Directory, Locale, Status};
//! use pickleball_data_rs::Facility;
//!
//! let mut open = Facility::new("Porto Pickleball", "Porto");
//! open.operating_hours = Some(r#"{"Monday":"9am-12pm, 4pm-8pm"}"#.to_string());
//! let unknown = Facility::new("Faro Club", "Faro");
//!
//! let mut directory = Directory::new(vec![open, unknown]);
//! directory.set_status(Some(Status::Open));
//!
//! // 2025-01-06 is a Monday.
//! let now = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap().and_hms_opt(10, 30, 0).unwrap();
//! assert_eq!(directory.apply_filters(now), 1);
//!
//! let cards = directory.cards(now, Locale::Pt);
//! assert_eq!(cards[0].status_badge, "Aberto");
//! ```

pub mod controller;
pub mod filter;
pub mod locale;
pub mod lookup;
pub mod schedule;
pub mod status;
pub mod tags;
pub mod view;

pub use controller::{Directory, ViewMode, ViewSwitch};
pub use filter::{CourtClass, FilterCriteria};
pub use locale::{Locale, UnknownLocale};
pub use lookup::{find_facility, LookupError};
pub use schedule::{parse_schedule, ScheduleError, WeeklySchedule};
pub use status::{resolve_status, Status, UnknownStatus};
pub use tags::{parse_additional_info, MAX_TAGS};
