//! Display-ready projections of facilities.
//!
//! The list view shows one [`FacilityCard`] per facility; the map view shows
//! a [`MapView`] of positioned markers. Both are plain data computed for an
//! explicit instant, left to the presentation layer to render.

mod card;
mod html;
mod map;

pub use card::{court_label, FacilityCard, HoursLine};
pub use html::escape_html;
pub use map::{
    popup_content, Bounds, MapMarker, MapView, FALLBACK_CENTER, FALLBACK_ZOOM, FIT_PADDING,
    MAX_FIT_ZOOM,
};
