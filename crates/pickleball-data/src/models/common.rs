//! Model types shared by facility records and their projections.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
///
/// # Examples
///
/// ```
/// use pickleball_data_rs::models::Coordinates;
///
/// let coords = Coordinates::parse("38.7223", "-9.1393").unwrap();
/// assert_eq!(coords.latitude, 38.7223);
///
/// // Zero or non-numeric values mean "no usable position".
/// assert!(Coordinates::parse("0", "-9.1393").is_none());
/// assert!(Coordinates::parse("", "").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Coordinates {
    /// Creates a coordinate pair.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parses a coordinate pair from its dataset text form.
    ///
    /// Returns `None` unless both values are finite and non-zero.
    pub fn parse(latitude: &str, longitude: &str) -> Option<Self> {
        let latitude = parse_degrees(latitude)?;
        let longitude = parse_degrees(longitude)?;
        Some(Self::new(latitude, longitude))
    }
}

fn parse_degrees(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    (value.is_finite() && value != 0.0).then_some(value)
}
