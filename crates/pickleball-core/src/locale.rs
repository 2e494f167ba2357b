//! Display strings for the two supported locales.
//!
//! The dataset is written in English ("Closed", "Open 24 hours") while the
//! directory is displayed in Portuguese by default.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Display locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Portuguese (default).
    #[default]
    Pt,
    /// English.
    En,
}

impl Locale {
    /// Text shown for a closed day.
    pub fn closed(self) -> &'static str {
        match self {
            Locale::Pt => "Fechado",
            Locale::En => "Closed",
        }
    }

    /// Text shown for a day open around the clock.
    pub fn all_day(self) -> &'static str {
        match self {
            Locale::Pt => "24 horas",
            Locale::En => "24 hours",
        }
    }

    /// Suffix appended to today's day name.
    pub fn today_marker(self) -> &'static str {
        match self {
            Locale::Pt => " (hoje)",
            Locale::En => " (today)",
        }
    }

    /// Short status badge.
    pub fn open_badge(self, open: bool) -> &'static str {
        match (self, open) {
            (Locale::Pt, true) => "Aberto",
            (Locale::Pt, false) => "Fechado",
            (Locale::En, true) => "Open",
            (Locale::En, false) => "Closed",
        }
    }

    /// Badge for a facility without usable hours.
    pub fn unknown_status(self) -> &'static str {
        match self {
            Locale::Pt => "Sem horário",
            Locale::En => "No hours",
        }
    }

    /// Status line used in map popups.
    pub fn open_now(self, open: bool) -> &'static str {
        match (self, open) {
            (Locale::Pt, true) => "Aberto agora",
            (Locale::Pt, false) => "Fechado agora",
            (Locale::En, true) => "Open now",
            (Locale::En, false) => "Closed now",
        }
    }

    /// Unit noun for a court count.
    pub fn courts_noun(self, singular: bool) -> &'static str {
        match (self, singular) {
            (Locale::Pt, true) => "campo",
            (Locale::Pt, false) => "campos",
            (Locale::En, true) => "court",
            (Locale::En, false) => "courts",
        }
    }

    /// Full day name.
    pub fn day_name(self, day: Weekday) -> &'static str {
        match self {
            Locale::Pt => match day {
                Weekday::Mon => "Segunda-feira",
                Weekday::Tue => "Terça-feira",
                Weekday::Wed => "Quarta-feira",
                Weekday::Thu => "Quinta-feira",
                Weekday::Fri => "Sexta-feira",
                Weekday::Sat => "Sábado",
                Weekday::Sun => "Domingo",
            },
            Locale::En => match day {
                Weekday::Mon => "Monday",
                Weekday::Tue => "Tuesday",
                Weekday::Wed => "Wednesday",
                Weekday::Thu => "Thursday",
                Weekday::Fri => "Friday",
                Weekday::Sat => "Saturday",
                Weekday::Sun => "Sunday",
            },
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Pt => write!(f, "pt"),
            Locale::En => write!(f, "en"),
        }
    }
}

/// Error returned when parsing an unsupported locale tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale '{0}' (expected 'pt' or 'en')")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pt" | "pt-pt" | "pt_pt" => Ok(Locale::Pt),
            "en" | "en-gb" | "en-us" | "en_gb" | "en_us" => Ok(Locale::En),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}
