//! Map markers and the initial map viewport.

use chrono::NaiveDateTime;
use pickleball_data_rs::{Coordinates, Facility};
use serde::Serialize;

use super::card::court_label;
use super::html::escape_html;
use crate::locale::Locale;
use crate::status::{resolve_status, Status};

/// Fraction of the marker extent added on each side when fitting the view.
pub const FIT_PADDING: f64 = 0.05;

/// Highest zoom used when fitting the view to markers.
pub const MAX_FIT_ZOOM: u8 = 12;

/// Center of the fallback view (mainland Portugal).
pub const FALLBACK_CENTER: Coordinates = Coordinates {
    latitude: 39.5,
    longitude: -8.0,
};

/// Zoom of the fallback view.
pub const FALLBACK_ZOOM: u8 = 7;

/// A positioned facility marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub status: Status,
    /// Display-ready popup HTML.
    pub popup: String,
}

/// A latitude/longitude bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south_west: Coordinates,
    pub north_east: Coordinates,
}

impl Bounds {
    /// Returns the smallest box containing every point, or `None` for no points.
    pub fn around(points: impl IntoIterator<Item = Coordinates>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self {
            south_west: first,
            north_east: first,
        };
        for point in points {
            bounds.south_west.latitude = bounds.south_west.latitude.min(point.latitude);
            bounds.south_west.longitude = bounds.south_west.longitude.min(point.longitude);
            bounds.north_east.latitude = bounds.north_east.latitude.max(point.latitude);
            bounds.north_east.longitude = bounds.north_east.longitude.max(point.longitude);
        }
        Some(bounds)
    }

    /// Grows the box by `ratio` of its height and width on each side.
    pub fn pad(self, ratio: f64) -> Self {
        let lat = (self.north_east.latitude - self.south_west.latitude).abs() * ratio;
        let lng = (self.north_east.longitude - self.south_west.longitude).abs() * ratio;
        Self {
            south_west: Coordinates::new(
                self.south_west.latitude - lat,
                self.south_west.longitude - lng,
            ),
            north_east: Coordinates::new(
                self.north_east.latitude + lat,
                self.north_east.longitude + lng,
            ),
        }
    }

    /// Returns the midpoint of the box.
    pub fn center(&self) -> Coordinates {
        Coordinates::new(
            (self.south_west.latitude + self.north_east.latitude) / 2.0,
            (self.south_west.longitude + self.north_east.longitude) / 2.0,
        )
    }
}

/// The markers of a result set and how the map should frame them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub markers: Vec<MapMarker>,
    /// Padded marker bounds to fit, absent when there are no markers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
    pub center: Coordinates,
    /// Maximum zoom when fitting bounds, or the fixed fallback zoom.
    pub zoom: u8,
}

impl MapView {
    /// Builds markers for every facility with usable coordinates.
    ///
    /// Facilities without a position are skipped. With no markers the view
    /// falls back to [`FALLBACK_CENTER`] at [`FALLBACK_ZOOM`].
    pub fn build<'a>(
        facilities: impl IntoIterator<Item = &'a Facility>,
        now: NaiveDateTime,
        locale: Locale,
    ) -> Self {
        let markers: Vec<MapMarker> = facilities
            .into_iter()
            .filter_map(|facility| marker(facility, now, locale))
            .collect();

        let bounds = Bounds::around(
            markers
                .iter()
                .map(|m| Coordinates::new(m.latitude, m.longitude)),
        )
        .map(|b| b.pad(FIT_PADDING));

        match bounds {
            Some(bounds) => Self {
                markers,
                center: bounds.center(),
                bounds: Some(bounds),
                zoom: MAX_FIT_ZOOM,
            },
            None => Self {
                markers,
                bounds: None,
                center: FALLBACK_CENTER,
                zoom: FALLBACK_ZOOM,
            },
        }
    }

    /// Returns true if the view shows the fallback framing.
    pub fn is_fallback(&self) -> bool {
        self.bounds.is_none()
    }
}

fn marker(facility: &Facility, now: NaiveDateTime, locale: Locale) -> Option<MapMarker> {
    let Some(position) = facility.coordinates() else {
        log::debug!("no map position for '{}'", facility.name);
        return None;
    };
    let status = resolve_status(facility, now);
    Some(MapMarker {
        name: facility.name.clone(),
        latitude: position.latitude,
        longitude: position.longitude,
        status,
        popup: popup_content(facility, status, locale),
    })
}

/// Builds the popup HTML for a facility marker.
///
/// Facility-provided text is escaped. The website line is omitted when the
/// facility has no website.
pub fn popup_content(facility: &Facility, status: Status, locale: Locale) -> String {
    let status_class = if status.is_open() {
        "status-open"
    } else {
        "status-closed"
    };

    let mut html = String::new();
    html.push_str("<div class=\"popup-content\">");
    html.push_str(&format!(
        "<h3 class=\"popup-title\">{}</h3>",
        escape_html(&facility.name)
    ));
    html.push_str(&format!(
        "<span class=\"popup-district\">{}</span>",
        escape_html(&facility.district)
    ));
    html.push_str("<div class=\"popup-info\">");
    html.push_str(&format!(
        "<div class=\"popup-info-item\"><span>{}</span></div>",
        escape_html(&facility.address)
    ));
    let phone = escape_html(&facility.phone);
    html.push_str(&format!(
        "<div class=\"popup-info-item\"><a href=\"tel:{phone}\">{phone}</a></div>"
    ));
    html.push_str(&format!(
        "<div class=\"popup-info-item\"><span>{}</span></div>",
        escape_html(&court_label(facility, locale))
    ));
    html.push_str(&format!(
        "<div class=\"popup-info-item\"><span class=\"{status_class}\">{}</span></div>",
        locale.open_now(status.is_open())
    ));
    if let Some(website) = facility.website() {
        html.push_str(&format!(
            "<div class=\"popup-info-item\"><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Website</a></div>",
            escape_html(website)
        ));
    }
    html.push_str("</div></div>");
    html
}
