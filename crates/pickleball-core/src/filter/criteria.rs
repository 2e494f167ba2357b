//! The user-selected filter criteria.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::status::Status;

/// A court-count filter bucket.
///
/// The set is closed: each class is a named threshold, not a general
/// comparator. Counts of 3 or 5–7 only match the classes whose threshold they
/// meet, so a count of 3 matches none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourtClass {
    /// Exactly one court.
    #[serde(rename = "exactly-1")]
    Exactly1,
    /// Exactly two courts.
    #[serde(rename = "exactly-2")]
    Exactly2,
    /// Four courts or more.
    #[serde(rename = "at-least-4")]
    AtLeast4,
    /// Eight courts or more.
    #[serde(rename = "at-least-8")]
    AtLeast8,
}

impl CourtClass {
    /// All classes, in selector order.
    pub const ALL: [CourtClass; 4] = [
        CourtClass::Exactly1,
        CourtClass::Exactly2,
        CourtClass::AtLeast4,
        CourtClass::AtLeast8,
    ];

    /// Returns true if a facility with `count` courts falls in this class.
    ///
    /// A missing count never matches.
    pub fn matches(self, count: Option<u32>) -> bool {
        let Some(count) = count else {
            return false;
        };
        match self {
            CourtClass::Exactly1 => count == 1,
            CourtClass::Exactly2 => count == 2,
            CourtClass::AtLeast4 => count >= 4,
            CourtClass::AtLeast8 => count >= 8,
        }
    }

    /// Returns the class name.
    pub fn as_str(self) -> &'static str {
        match self {
            CourtClass::Exactly1 => "exactly-1",
            CourtClass::Exactly2 => "exactly-2",
            CourtClass::AtLeast4 => "at-least-4",
            CourtClass::AtLeast8 => "at-least-8",
        }
    }
}

impl fmt::Display for CourtClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized court class.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown court class '{0}' (expected 1, 2, 4 or 8)")]
pub struct UnknownCourtClass(pub String);

impl FromStr for CourtClass {
    type Err = UnknownCourtClass;

    /// Accepts the selector values `1`, `2`, `4`, `8` and the class names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "exactly-1" => Ok(CourtClass::Exactly1),
            "2" | "exactly-2" => Ok(CourtClass::Exactly2),
            "4" | "4+" | "at-least-4" => Ok(CourtClass::AtLeast4),
            "8" | "8+" | "at-least-8" => Ok(CourtClass::AtLeast8),
            _ => Err(UnknownCourtClass(s.to_string())),
        }
    }
}

/// The current set of filter constraints.
///
/// Each criterion is optional; an absent criterion places no constraint.
/// Blank text is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text search over name, district, additional info and address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Exact district name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,

    /// Court-count class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courts: Option<CourtClass>,

    /// Live status at evaluation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl FilterCriteria {
    /// Creates criteria with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = non_blank(search.into());
        self
    }

    /// Sets the district.
    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.district = non_blank(district.into());
        self
    }

    /// Sets the court class.
    pub fn with_courts(mut self, courts: CourtClass) -> Self {
        self.courts = Some(courts);
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns true if no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.search_query().is_none()
            && self.district().is_none()
            && self.courts.is_none()
            && self.status.is_none()
    }

    /// Returns the normalized search query: trimmed and lowercased.
    pub fn search_query(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
    }

    /// Returns the selected district, if any.
    pub fn district(&self) -> Option<&str> {
        self.district.as_deref().filter(|d| !d.is_empty())
    }

    /// Clears every criterion.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub(crate) fn non_blank(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}
