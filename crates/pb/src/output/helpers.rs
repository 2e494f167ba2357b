//! Common helper functions for output formatting.

use owo_colors::OwoColorize;
use pickleball_core_rs::{Locale, Status};

/// Truncates a string to a maximum number of characters.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Returns the localized badge for a status.
pub fn status_label(status: Status, locale: Locale) -> &'static str {
    match status {
        Status::Unknown => locale.unknown_status(),
        known => locale.open_badge(known.is_open()),
    }
}

/// Formats a status badge for display.
pub fn format_status(status: Status, locale: Locale, use_colors: bool) -> String {
    let label = status_label(status, locale);

    if use_colors {
        match status {
            Status::Open => label.green().to_string(),
            Status::Closed => label.red().to_string(),
            Status::Unknown => label.dimmed().to_string(),
        }
    } else {
        label.to_string()
    }
}

/// Formats a header line, dimmed when colors are enabled.
pub fn format_header(header: &str, use_colors: bool) -> String {
    if use_colors {
        format!("{}\n", header.dimmed())
    } else {
        format!("{header}\n")
    }
}

/// Formats a coordinate with four decimals.
pub fn format_degrees(value: f64) -> String {
    format!("{value:.4}")
}
