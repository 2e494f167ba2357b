//! Data types for the facility dataset.
//!
//! The dataset stores every value as text (court counts and coordinates
//! included), so the models keep the raw strings and expose lenient accessors
//! for the derived numeric values.

mod common;
mod facility;

pub use common::*;
pub use facility::*;
