//! Loading the facility collection.
//!
//! The dataset is a JSON array of [`Facility`] records. Its order is the
//! display order of the directory, so it is preserved exactly.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::{DatasetError, DatasetResult};
use crate::models::Facility;

/// The ordered, read-only collection of facilities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    facilities: Vec<Facility>,
}

impl Dataset {
    /// Wraps an already-built collection.
    pub fn new(facilities: Vec<Facility>) -> Self {
        Self { facilities }
    }

    /// Parses a dataset from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Json`] if the text is not an array of records.
    pub fn from_json_str(json: &str) -> DatasetResult<Self> {
        let facilities: Vec<Facility> = serde_json::from_str(json)?;
        Ok(Self::new(facilities))
    }

    /// Reads and parses a dataset file.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Read`] if the file cannot be read, or
    /// [`DatasetError::Json`] if it is not an array of records.
    pub fn load(path: impl AsRef<Path>) -> DatasetResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::from_json_str(&content)?;
        log::info!(
            "loaded {} facilities from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Returns the facilities in dataset order.
    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    /// Consumes the dataset, returning the facilities in dataset order.
    pub fn into_facilities(self) -> Vec<Facility> {
        self.facilities
    }

    /// Returns the number of facilities.
    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    /// Returns true if the dataset has no facilities.
    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }

    /// Returns the distinct district names, sorted. See [`district_names`].
    pub fn districts(&self) -> Vec<&str> {
        district_names(&self.facilities)
    }
}

/// Returns the sorted, de-duplicated district names of `facilities`.
///
/// Blank districts are left out.
pub fn district_names(facilities: &[Facility]) -> Vec<&str> {
    facilities
        .iter()
        .map(|f| f.district.as_str())
        .filter(|d| !d.trim().is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

impl From<Vec<Facility>> for Dataset {
    fn from(facilities: Vec<Facility>) -> Self {
        Self::new(facilities)
    }
}
