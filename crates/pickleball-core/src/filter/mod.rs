//! Filtering of the facility collection.
//!
//! A [`FilterCriteria`] holds up to four independent constraints, combined
//! with logical AND:
//!
//! ## Search
//! - Case-insensitive substring over name, district, additional information
//!   and address
//!
//! ## District
//! - Exact district name
//!
//! ## Courts
//! - `1`, `2` - exactly one or two courts
//! - `4`, `8` - at least four or eight courts
//!
//! ## Status
//! - `open`, `closed`, `unknown` - live status at the evaluation instant
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use pickleball_core_rs::filter::{apply, FilterCriteria};
//! use pickleball_data_rs::Facility;
//!
//! let facilities = vec![
//!     Facility::new("Porto Pickleball", "Porto"),
//!     Facility::new("Lisboa Pickleball", "Lisboa"),
//! ];
//! let criteria = FilterCriteria::new().with_district("Porto");
//! let now = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap().and_hms_opt(10, 0, 0).unwrap();
//!
//! let results = apply(&facilities, &criteria, now);
//! assert_eq!(results.len(), 1);
//! ```

mod criteria;
mod evaluator;

pub use criteria::{CourtClass, FilterCriteria, UnknownCourtClass};
pub(crate) use criteria::non_blank;
pub use evaluator::{apply, FilterEvaluator};
