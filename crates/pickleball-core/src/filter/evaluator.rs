//! Filter evaluation against facilities.
//!
//! This module provides the [`FilterEvaluator`], which combines the four
//! criteria of a [`FilterCriteria`] with logical AND. An absent criterion is
//! vacuously true.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use pickleball_core_rs::filter::{CourtClass, FilterCriteria, FilterEvaluator};
//! use pickleball_data_rs::Facility;
//!
//! let mut big = Facility::new("Centro de Pickleball", "Lisboa");
//! big.courts = "8".to_string();
//! let mut small = Facility::new("Clube Pequeno", "Lisboa");
//! small.courts = "1".to_string();
//! let facilities = vec![big, small];
//!
//! let criteria = FilterCriteria::new().with_courts(CourtClass::AtLeast4);
//! let now = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap().and_hms_opt(10, 0, 0).unwrap();
//!
//! let evaluator = FilterEvaluator::new(&criteria, now);
//! let results = evaluator.filter_facilities(&facilities);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].name, "Centro de Pickleball");
//! ```

use chrono::NaiveDateTime;
use pickleball_data_rs::Facility;

use super::criteria::FilterCriteria;
use crate::status::resolve_status;

/// Evaluates filter criteria against facilities at a fixed instant.
///
/// The instant is captured once so every facility in a pass is judged against
/// the same clock reading.
#[derive(Debug)]
pub struct FilterEvaluator<'a> {
    criteria: &'a FilterCriteria,
    query: Option<String>,
    now: NaiveDateTime,
}

impl<'a> FilterEvaluator<'a> {
    /// Creates a new filter evaluator.
    ///
    /// # Arguments
    ///
    /// * `criteria` - The constraints to apply
    /// * `now` - The instant used by the status criterion
    pub fn new(criteria: &'a FilterCriteria, now: NaiveDateTime) -> Self {
        Self {
            criteria,
            query: criteria.search_query(),
            now,
        }
    }

    /// Returns true if the facility satisfies every criterion.
    pub fn matches(&self, facility: &Facility) -> bool {
        self.matches_search(facility)
            && self.matches_district(facility)
            && self.matches_courts(facility)
            && self.matches_status(facility)
    }

    /// Filters a slice of facilities, preserving their order.
    pub fn filter_facilities<'b>(&self, facilities: &'b [Facility]) -> Vec<&'b Facility> {
        facilities.iter().filter(|f| self.matches(f)).collect()
    }

    /// Returns the positions of the matching facilities, in order.
    pub fn matching_indices(&self, facilities: &[Facility]) -> Vec<usize> {
        facilities
            .iter()
            .enumerate()
            .filter(|(_, f)| self.matches(f))
            .map(|(index, _)| index)
            .collect()
    }

    /// Case-insensitive substring match on name, district, additional info or address.
    pub fn matches_search(&self, facility: &Facility) -> bool {
        let Some(query) = &self.query else {
            return true;
        };

        [
            &facility.name,
            &facility.district,
            &facility.additional_info,
            &facility.address,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(query.as_str()))
    }

    /// Exact district equality.
    pub fn matches_district(&self, facility: &Facility) -> bool {
        self.criteria
            .district()
            .map_or(true, |district| facility.district == district)
    }

    /// Court-count class membership.
    pub fn matches_courts(&self, facility: &Facility) -> bool {
        self.criteria
            .courts
            .map_or(true, |class| class.matches(facility.court_count()))
    }

    /// Live status equality at the evaluator's instant.
    pub fn matches_status(&self, facility: &Facility) -> bool {
        self.criteria
            .status
            .map_or(true, |status| resolve_status(facility, self.now) == status)
    }
}

/// Applies `criteria` to `facilities` at `now`, returning the matching
/// facilities in their original order.
///
/// Neither the facilities nor the criteria are modified.
pub fn apply<'b>(
    facilities: &'b [Facility],
    criteria: &FilterCriteria,
    now: NaiveDateTime,
) -> Vec<&'b Facility> {
    let results = FilterEvaluator::new(criteria, now).filter_facilities(facilities);
    log::debug!(
        "filter matched {} of {} facilities",
        results.len(),
        facilities.len()
    );
    results
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod tests;
