//! Facility records for the pickleball directory.
//!
//! This crate owns the read-only reference data: the [`Facility`] record as it
//! appears in the published dataset, and the [`Dataset`] loader that reads the
//! ordered collection from disk.
//!
//! # Quick Start
//!
//! ```
//! use pickleball_data_rs::prelude::*;
//!
//! let dataset = Dataset::from_json_str(r#"[
//!     {"Facility Name": "Clube Ténis Porto", "District": "Porto", "Number of Courts": "4"}
//! ]"#).unwrap();
//!
//! assert_eq!(dataset.len(), 1);
//! assert_eq!(dataset.facilities()[0].court_count(), Some(4));
//! ```

pub mod dataset;
pub mod error;
pub mod models;
pub mod prelude;

pub use dataset::{district_names, Dataset};
pub use error::{DatasetError, DatasetResult};
pub use models::{Coordinates, Facility};
