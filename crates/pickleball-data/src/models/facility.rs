//! The facility record.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::common::Coordinates;

/// A pickleball facility as published in the dataset.
///
/// Records are read-only reference data. Field names follow the dataset keys
/// (`"Facility Name"`, `"Number of Courts"`, ...). Numeric fields are kept as
/// text; use [`Facility::court_count`] and [`Facility::coordinates`] for the
/// parsed values.
///
/// # Examples
///
/// ```
/// use pickleball_data_rs::models::Facility;
///
/// let facility: Facility = serde_json::from_str(r#"{
///     "Facility Name": "Lisboa Pickleball Club",
///     "District": "Lisboa",
///     "Number of Courts": 6,
///     "Latitude": "38.7223",
///     "Longitude": "-9.1393",
///     "Operating Hours": {"Monday": "9am-9pm"}
/// }"#).unwrap();
///
/// assert_eq!(facility.courts, "6");
/// assert_eq!(facility.court_count(), Some(6));
/// assert_eq!(facility.operating_hours.as_deref(), Some(r#"{"Monday":"9am-9pm"}"#));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    /// Facility display name.
    #[serde(rename = "Facility Name", default, deserialize_with = "text")]
    pub name: String,

    /// District the facility belongs to (the categorical filter field).
    #[serde(rename = "District", default, deserialize_with = "text")]
    pub district: String,

    /// Full postal address.
    #[serde(rename = "Full Address", default, deserialize_with = "text")]
    pub address: String,

    /// Contact phone number.
    #[serde(rename = "Phone", default, deserialize_with = "text")]
    pub phone: String,

    /// Contact email, if published.
    #[serde(
        rename = "Email",
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,

    /// Website URL, if published.
    #[serde(
        rename = "Website",
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub website: Option<String>,

    /// Number of courts, as text.
    #[serde(rename = "Number of Courts", default, deserialize_with = "text")]
    pub courts: String,

    /// Latitude in decimal degrees, as text.
    #[serde(rename = "Latitude", default, deserialize_with = "text")]
    pub latitude: String,

    /// Longitude in decimal degrees, as text.
    #[serde(rename = "Longitude", default, deserialize_with = "text")]
    pub longitude: String,

    /// Free-text list of services, separated by commas or semicolons.
    #[serde(rename = "Additional Information", default, deserialize_with = "text")]
    pub additional_info: String,

    /// Serialized day-name to hours mapping, e.g. `{"Monday":"9am-12pm, 4pm-8pm"}`.
    #[serde(
        rename = "Operating Hours",
        default,
        deserialize_with = "serialized_mapping",
        skip_serializing_if = "Option::is_none"
    )]
    pub operating_hours: Option<String>,
}

impl Facility {
    /// Creates a facility with a name and district and every other field empty.
    pub fn new(name: impl Into<String>, district: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            district: district.into(),
            ..Self::default()
        }
    }

    /// Returns the number of courts.
    ///
    /// Reads the leading digits of the trimmed value, so `"4"` and `"4 campos"`
    /// both give 4. Returns `None` when the value does not start with a digit.
    pub fn court_count(&self) -> Option<u32> {
        let trimmed = self.courts.trim();
        let digits = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .map_or(trimmed, |end| &trimmed[..end]);
        digits.parse().ok()
    }

    /// Returns the facility position, if both coordinates are usable.
    pub fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::parse(&self.latitude, &self.longitude)
    }

    /// Returns the contact email, treating a blank value as absent.
    pub fn email(&self) -> Option<&str> {
        non_blank(self.email.as_deref())
    }

    /// Returns the website URL, treating a blank value as absent.
    pub fn website(&self) -> Option<&str> {
        non_blank(self.website.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Renders a scalar JSON value as dataset text. `null` becomes empty text.
fn value_to_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(value_to_text)
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = value_to_text(Value::deserialize(deserializer)?);
    Ok((!text.is_empty()).then_some(text))
}

/// Accepts the hours mapping either serialized as text or inline as an object.
fn serialized_mapping<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        other => Ok(Some(other.to_string())),
    }
}
