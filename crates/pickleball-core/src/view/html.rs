//! HTML escaping for facility-provided text.

/// Escapes `&`, `<`, `>`, `"` and `'` for safe inclusion in HTML text and
/// attribute values.
///
/// # Examples
///
/// ```
/// use pickleball_core_rs::view::escape_html;
///
/// assert_eq!(escape_html(r#"Tom & "Jerry's" <Club>"#), "Tom &amp; &quot;Jerry&#039;s&quot; &lt;Club&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}
