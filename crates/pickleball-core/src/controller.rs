//! The directory session state.
//!
//! [`Directory`] owns the facility collection, the current
//! [`FilterCriteria`], the filtered result set and the active view. Criteria
//! setters only record the new value; [`Directory::apply_filters`] recomputes
//! the result set in one full pass for an explicit instant.

use chrono::NaiveDateTime;
use pickleball_data_rs::{district_names, Dataset, Facility};
use serde::{Deserialize, Serialize};

use crate::filter::{non_blank, CourtClass, FilterCriteria, FilterEvaluator};
use crate::locale::Locale;
use crate::lookup::{find_facility, LookupError};
use crate::status::{resolve_status, Status};
use crate::view::{FacilityCard, MapView};

/// The two ways of presenting the result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Map,
}

/// What the presentation layer must do after a view switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewSwitch {
    /// Nothing beyond showing the view.
    None,
    /// The map became visible and must re-measure and redraw its markers.
    RefreshMap,
}

/// Facility collection plus the user's current filter session.
#[derive(Debug, Clone)]
pub struct Directory {
    facilities: Vec<Facility>,
    criteria: FilterCriteria,
    filtered: Vec<usize>,
    view_mode: ViewMode,
}

impl Directory {
    /// Creates a directory showing every facility, with no criteria, in list view.
    pub fn new(facilities: Vec<Facility>) -> Self {
        let filtered = (0..facilities.len()).collect();
        Self {
            facilities,
            criteria: FilterCriteria::default(),
            filtered,
            view_mode: ViewMode::default(),
        }
    }

    // ==================== Criteria ====================

    /// Records the search text. Blank text clears the search.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = non_blank(search.into());
    }

    /// Clears the search text.
    pub fn clear_search(&mut self) {
        self.criteria.search = None;
    }

    /// Records the district. `None` or blank means all districts.
    pub fn set_district(&mut self, district: Option<String>) {
        self.criteria.district = district.and_then(non_blank);
    }

    /// Records the court class.
    pub fn set_courts(&mut self, courts: Option<CourtClass>) {
        self.criteria.courts = courts;
    }

    /// Records the status.
    pub fn set_status(&mut self, status: Option<Status>) {
        self.criteria.status = status;
    }

    /// Replaces every criterion at once.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// Recomputes the result set from the current criteria at `now`.
    ///
    /// Returns the number of matching facilities.
    pub fn apply_filters(&mut self, now: NaiveDateTime) -> usize {
        self.filtered = FilterEvaluator::new(&self.criteria, now).matching_indices(&self.facilities);
        log::debug!(
            "filters applied: {} of {} facilities",
            self.filtered.len(),
            self.facilities.len()
        );
        self.filtered.len()
    }

    /// Clears every criterion and restores the full collection.
    pub fn reset_filters(&mut self) {
        self.criteria.clear();
        self.filtered = (0..self.facilities.len()).collect();
    }

    // ==================== Reads ====================

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// All facilities in source order.
    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    /// The current result set in source order.
    pub fn filtered(&self) -> impl Iterator<Item = &Facility> + '_ {
        self.filtered.iter().map(|&index| &self.facilities[index])
    }

    pub fn result_count(&self) -> usize {
        self.filtered.len()
    }

    /// Sorted, de-duplicated district names of the full collection.
    pub fn districts(&self) -> Vec<&str> {
        district_names(&self.facilities)
    }

    // ==================== Views ====================

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Makes `mode` the active view.
    pub fn switch_view(&mut self, mode: ViewMode) -> ViewSwitch {
        self.view_mode = mode;
        match mode {
            ViewMode::Map => ViewSwitch::RefreshMap,
            ViewMode::List => ViewSwitch::None,
        }
    }

    /// List-view cards for the current result set.
    pub fn cards(&self, now: NaiveDateTime, locale: Locale) -> Vec<FacilityCard> {
        self.filtered()
            .map(|facility| FacilityCard::build(facility, now, locale))
            .collect()
    }

    /// Map view of the current result set.
    pub fn map_view(&self, now: NaiveDateTime, locale: Locale) -> MapView {
        MapView::build(self.filtered(), now, locale)
    }

    /// Status of the `position`-th facility of the current result set.
    pub fn resolve_status(&self, position: usize, now: NaiveDateTime) -> Option<Status> {
        let index = *self.filtered.get(position)?;
        Some(resolve_status(&self.facilities[index], now))
    }

    /// Finds a facility of the full collection by name.
    pub fn find_by_name(&self, name: &str) -> Result<&Facility, LookupError> {
        find_facility(&self.facilities, name)
    }
}

impl From<Dataset> for Directory {
    fn from(dataset: Dataset) -> Self {
        Self::new(dataset.into_facilities())
    }
}
