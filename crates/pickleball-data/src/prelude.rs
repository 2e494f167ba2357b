//! Prelude module for convenient imports.
//!
//! ```
//! use pickleball_data_rs::prelude::*;
//!
//! // Now you have access to:
//! // - Dataset (loading the facility collection)
//! // - DatasetError, DatasetResult (error handling)
//! // - Facility, Coordinates (data models)
//! ```

pub use crate::dataset::Dataset;
pub use crate::error::{DatasetError, DatasetResult};
pub use crate::models::{Coordinates, Facility};
