//! Facility output formatting.

use chrono::NaiveDateTime;
use owo_colors::OwoColorize;
use pickleball_core_rs::view::{FacilityCard, HoursLine};
use pickleball_core_rs::{FilterCriteria, Locale};
use serde::Serialize;

use super::helpers::{format_header, format_status, status_label, truncate_str};

/// JSON output structure for list command.
#[derive(Serialize)]
pub struct ListOutput<'a> {
    pub criteria: &'a FilterCriteria,
    pub evaluated_at: NaiveDateTime,
    pub count: usize,
    pub facilities: &'a [FacilityCard],
}

/// Field labels of the facility details view.
struct DetailLabels {
    address: &'static str,
    phone: &'static str,
    email: &'static str,
    website: &'static str,
    courts: &'static str,
    hours: &'static str,
    services: &'static str,
}

fn detail_labels(locale: Locale) -> DetailLabels {
    match locale {
        Locale::Pt => DetailLabels {
            address: "Morada",
            phone: "Telefone",
            email: "Email",
            website: "Website",
            courts: "Número de Campos",
            hours: "Horário de Funcionamento",
            services: "Serviços Adicionais",
        },
        Locale::En => DetailLabels {
            address: "Address",
            phone: "Phone",
            email: "Email",
            website: "Website",
            courts: "Courts",
            hours: "Opening Hours",
            services: "Services",
        },
    }
}

/// Formats the list view as JSON.
pub fn format_facilities_json(
    criteria: &FilterCriteria,
    evaluated_at: NaiveDateTime,
    cards: &[FacilityCard],
) -> Result<String, serde_json::Error> {
    let output = ListOutput {
        criteria,
        evaluated_at,
        count: cards.len(),
        facilities: cards,
    };

    serde_json::to_string_pretty(&output)
}

/// Formats the list view as a table.
pub fn format_facilities_table(
    cards: &[FacilityCard],
    verbose: bool,
    use_colors: bool,
    locale: Locale,
) -> String {
    if cards.is_empty() {
        return "No facilities found.\n".to_string();
    }

    let mut output = String::new();

    let mut header = format!(
        "{:<32} {:<16} {:<12} {:<14}",
        "Name", "District", "Courts", "Status"
    );
    if verbose {
        header.push_str(" Address");
    }
    output.push_str(&format_header(header.trim_end(), use_colors));

    for card in cards {
        let status = format_status(card.status, locale, use_colors);
        let mut line = format!(
            "{:<32} {:<16} {:<12} {}",
            truncate_str(&card.name, 32),
            truncate_str(&card.district, 16),
            truncate_str(&card.courts, 12),
            status
        );
        if verbose {
            // Status is colored, so pad from its plain width.
            let plain_width = status_label(card.status, locale).chars().count();
            line.push_str(&" ".repeat(14usize.saturating_sub(plain_width) + 1));
            line.push_str(&card.address);
        }
        output.push_str(&line);
        output.push('\n');
    }

    let noun = if cards.len() == 1 { "facility" } else { "facilities" };
    output.push_str(&format!("\n{} {}\n", cards.len(), noun));

    output
}

/// Formats facility details as JSON (show command).
pub fn format_card_json(card: &FacilityCard) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(card)
}

/// Formats facility details as human-readable text (show command).
pub fn format_card_details(card: &FacilityCard, use_colors: bool, locale: Locale) -> String {
    let labels = detail_labels(locale);
    let mut output = String::new();

    if use_colors {
        output.push_str(&format!("{}\n", card.name.bold()));
    } else {
        output.push_str(&format!("{}\n", card.name));
    }
    output.push_str(&format!("{}\n\n", card.district));

    output.push_str(&format!("{}: {}\n", labels.address, card.address));
    output.push_str(&format!("{}: {}\n", labels.phone, card.phone));
    if let Some(ref email) = card.email {
        output.push_str(&format!("{}: {}\n", labels.email, email));
    }
    if let Some(ref website) = card.website {
        output.push_str(&format!("{}: {}\n", labels.website, website));
    }
    output.push_str(&format!("{}: {}\n", labels.courts, card.courts));

    if let Some(ref hours) = card.hours {
        output.push_str(&format!(
            "\n{} ({}):\n",
            labels.hours,
            format_status(card.status, locale, use_colors)
        ));
        for line in hours {
            output.push_str(&format_hours_line(line, use_colors));
        }
    }

    if !card.tags.is_empty() {
        output.push_str(&format!("\n{}: {}\n", labels.services, card.tags.join(", ")));
    }

    output
}

fn format_hours_line(line: &HoursLine, use_colors: bool) -> String {
    let label = format!("{:<24}", line.label);

    if !use_colors {
        return format!("  {} {}\n", label, line.hours);
    }

    let label = if line.is_today {
        label.bold().to_string()
    } else {
        label
    };
    let hours = if line.open_now {
        line.hours.green().to_string()
    } else if line.is_closed {
        line.hours.dimmed().to_string()
    } else {
        line.hours.clone()
    };
    format!("  {} {}\n", label, hours)
}
