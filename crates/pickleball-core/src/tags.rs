//! Service tags from the free-text additional-information field.

/// Maximum number of tags shown for a facility.
pub const MAX_TAGS: usize = 8;

/// Splits additional information into service tags.
///
/// Splits on commas and semicolons, trims each piece, drops empty pieces and
/// keeps at most [`MAX_TAGS`].
///
/// # Examples
///
/// ```
/// use pickleball_core_rs::parse_additional_info;
///
/// assert_eq!(
///     parse_additional_info("Bar; Balneários, Aulas"),
///     vec!["Bar", "Balneários", "Aulas"]
/// );
/// ```
pub fn parse_additional_info(text: &str) -> Vec<String> {
    text.split([',', ';'])
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .take(MAX_TAGS)
        .map(str::to_string)
        .collect()
}
