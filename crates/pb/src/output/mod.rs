//! Output formatting utilities for the pb CLI.
//!
//! This module provides functions for formatting data as tables or JSON.
//! It is organized into submodules by view:
//!
//! - [`facilities`] - List view and facility details (list, show)
//! - [`markers`] - Map markers and viewport (map)
//! - [`districts`] - District summaries (districts)
//! - [`helpers`] - Common formatting utilities (truncation, status badges)

mod districts;
mod facilities;
pub mod helpers;
mod markers;

pub use districts::{format_districts_json, format_districts_table};
pub use facilities::{
    format_card_details, format_card_json, format_facilities_json, format_facilities_table,
};
pub use markers::{format_map_json, format_map_table};
