//! Facility lookup by name, with "did you mean" suggestions.

use pickleball_data_rs::Facility;
use strsim::levenshtein;

/// Maximum Levenshtein distance to consider a name as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Maximum number of candidates listed in an ambiguity error.
const MAX_LISTED_CANDIDATES: usize = 5;

/// Errors from [`find_facility`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// No facility name matches.
    #[error("{}", not_found_message(.name, .suggestion))]
    NotFound {
        name: String,
        suggestion: Option<String>,
    },

    /// More than one facility name contains the query.
    #[error("'{name}' matches several facilities: {}", .candidates.join(", "))]
    Ambiguous {
        name: String,
        candidates: Vec<String>,
    },
}

fn not_found_message(name: &str, suggestion: &Option<String>) -> String {
    let base = format!("facility '{name}' not found");
    match suggestion {
        Some(s) => format!("{base}. Did you mean '{s}'?"),
        None => base,
    }
}

/// Finds a facility by name.
///
/// An exact case-insensitive match wins. Otherwise a case-insensitive
/// substring match is accepted when exactly one facility contains the query.
///
/// # Errors
///
/// Returns [`LookupError::NotFound`] (with a suggestion when a name is within
/// a small edit distance) or [`LookupError::Ambiguous`].
///
/// # Examples
///
/// ```
/// use pickleball_core_rs::find_facility;
/// use pickleball_data_rs::Facility;
///
/// let facilities = vec![
///     Facility::new("Porto Pickleball", "Porto"),
///     Facility::new("Lisboa Pickleball", "Lisboa"),
/// ];
///
/// assert_eq!(find_facility(&facilities, "porto pickleball").unwrap().district, "Porto");
/// assert_eq!(find_facility(&facilities, "lisboa").unwrap().district, "Lisboa");
/// assert!(find_facility(&facilities, "pickleball").is_err());
/// ```
pub fn find_facility<'a>(facilities: &'a [Facility], name: &str) -> Result<&'a Facility, LookupError> {
    let query = name.trim().to_lowercase();

    if let Some(facility) = facilities
        .iter()
        .find(|f| f.name.trim().to_lowercase() == query)
    {
        return Ok(facility);
    }

    let partial: Vec<&Facility> = if query.is_empty() {
        Vec::new()
    } else {
        facilities
            .iter()
            .filter(|f| f.name.to_lowercase().contains(&query))
            .collect()
    };

    match partial.as_slice() {
        [single] => Ok(single),
        [] => Err(LookupError::NotFound {
            name: name.to_string(),
            suggestion: find_similar_name(name, facilities.iter().map(|f| f.name.as_str())),
        }),
        many => Err(LookupError::Ambiguous {
            name: name.to_string(),
            candidates: many
                .iter()
                .take(MAX_LISTED_CANDIDATES)
                .map(|f| f.name.clone())
                .collect(),
        }),
    }
}

/// Finds the best matching name from a list of candidates using Levenshtein distance.
///
/// Returns the best match if its edit distance is within the threshold,
/// otherwise returns `None`.
pub fn find_similar_name<'a>(
    query: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Option<String> {
    let query_lower = query.trim().to_lowercase();

    let (best_match, best_distance) = candidates
        .filter(|name| !name.is_empty())
        .map(|name| {
            let distance = levenshtein(&query_lower, &name.to_lowercase());
            (name.to_string(), distance)
        })
        .min_by_key(|(_, d)| *d)?;

    // Only suggest if the distance is within threshold and not an exact match
    if best_distance > 0 && best_distance <= MAX_SUGGESTION_DISTANCE {
        Some(best_match)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facilities() -> Vec<Facility> {
        vec![
            Facility::new("Clube Ténis Faro", "Faro"),
            Facility::new("Porto Pickleball", "Porto"),
            Facility::new("Lisboa Pickleball", "Lisboa"),
            Facility::new("Lisboa Racket Centre", "Lisboa"),
        ]
    }

    #[test]
    fn test_exact_match_case_insensitive() {
        let facilities = facilities();
        let found = find_facility(&facilities, "  PORTO pickleball ").unwrap();
        assert_eq!(found.name, "Porto Pickleball");
    }

    #[test]
    fn test_exact_match_beats_substring() {
        let facilities = vec![
            Facility::new("Arena", "Porto"),
            Facility::new("Arena Norte", "Porto"),
        ];
        assert_eq!(find_facility(&facilities, "arena").unwrap().name, "Arena");
    }

    #[test]
    fn test_unique_substring_match() {
        let facilities = facilities();
        assert_eq!(find_facility(&facilities, "racket").unwrap().name, "Lisboa Racket Centre");
    }

    #[test]
    fn test_ambiguous_substring() {
        let facilities = facilities();
        let err = find_facility(&facilities, "lisboa").unwrap_err();
        assert_eq!(
            err,
            LookupError::Ambiguous {
                name: "lisboa".to_string(),
                candidates: vec![
                    "Lisboa Pickleball".to_string(),
                    "Lisboa Racket Centre".to_string()
                ],
            }
        );
        assert!(err.to_string().contains("several facilities"));
    }

    #[test]
    fn test_not_found_with_suggestion() {
        let facilities = facilities();
        let err = find_facility(&facilities, "Porto Pickelball").unwrap_err();
        match &err {
            LookupError::NotFound { suggestion, .. } => {
                assert_eq!(suggestion.as_deref(), Some("Porto Pickleball"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "facility 'Porto Pickelball' not found. Did you mean 'Porto Pickleball'?"
        );
    }

    #[test]
    fn test_not_found_without_suggestion() {
        let facilities = facilities();
        let err = find_facility(&facilities, "Braga Padel").unwrap_err();
        assert_eq!(
            err,
            LookupError::NotFound {
                name: "Braga Padel".to_string(),
                suggestion: None,
            }
        );
    }

    #[test]
    fn test_blank_query_not_found() {
        let facilities = facilities();
        assert!(matches!(
            find_facility(&facilities, "  "),
            Err(LookupError::NotFound { .. })
        ));
    }

    #[test]
    fn test_find_similar_name_threshold() {
        let names = ["Porto Pickleball", "Faro"];
        assert_eq!(
            find_similar_name("faro", names.iter().copied()),
            None,
            "exact match is not a suggestion"
        );
        assert_eq!(
            find_similar_name("Fara", names.iter().copied()),
            Some("Faro".to_string())
        );
        assert_eq!(find_similar_name("Coimbra", names.iter().copied()), None);
    }
}
