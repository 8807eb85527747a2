//! Fuzzy resolution of external titles against the catalog
//!
//! External filmography feeds format titles loosely ("Up (2009)" where the
//! catalog stores "Up"). Matching runs three ordered passes over catalog row
//! order, first success wins. With duplicate or highly similar catalog
//! titles the outcome depends on row order; that ambiguity is documented
//! rather than resolved.

use crate::catalog::Catalog;
use crate::text;

/// Minimum normalized length of the external title for the containment
/// pass; shorter titles would spuriously match ("Up" vs "Cup Stories")
pub const MIN_CONTAINMENT_LEN: usize = 6;

/// Resolve a loosely-formatted external title to a canonical catalog title.
///
/// Passes, in order:
/// 1. exact string equality
/// 2. equality after normalization (alphanumerics only, lowercased)
/// 3. normalized containment either way, gated on the external title
///    normalizing to at least [`MIN_CONTAINMENT_LEN`] characters
pub fn resolve_title<'a>(external_title: &str, catalog: &'a Catalog) -> Option<&'a str> {
    for record in catalog.records() {
        if record.title == external_title {
            return Some(&record.title);
        }
    }

    let normalized = text::normalize_title(external_title);
    for record in catalog.records() {
        if text::normalize_title(&record.title) == normalized {
            return Some(&record.title);
        }
    }

    if normalized.chars().count() >= MIN_CONTAINMENT_LEN {
        for record in catalog.records() {
            let candidate = text::normalize_title(&record.title);
            if candidate.contains(&normalized) || normalized.contains(&candidate) {
                return Some(&record.title);
            }
        }
    }

    tracing::debug!(title = external_title, "external title did not resolve");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{test_record, MovieDetails};

    fn catalog(titles: &[&str]) -> Catalog {
        let records: Vec<_> = titles
            .iter()
            .enumerate()
            .map(|(i, t)| test_record(i as i64 + 1, t, "overview"))
            .collect();
        let details = vec![MovieDetails::default(); records.len()];
        Catalog::new(records, details)
    }

    #[test]
    fn test_exact_match() {
        let c = catalog(&["The Matrix", "Inception"]);
        assert_eq!(resolve_title("Inception", &c), Some("Inception"));
    }

    #[test]
    fn test_normalized_equality() {
        let c = catalog(&["The  Matrix!"]);
        assert_eq!(resolve_title("The Matrix", &c), Some("The  Matrix!"));
    }

    #[test]
    fn test_containment_strips_year_suffix() {
        let c = catalog(&["Blade Runner"]);
        assert_eq!(
            resolve_title("Blade Runner (1982)", &c),
            Some("Blade Runner")
        );
    }

    #[test]
    fn test_short_titles_never_match_via_containment() {
        let c = catalog(&["Cup Stories", "Up and Away"]);
        // "Up" normalizes to 2 characters, below the containment gate
        assert_eq!(resolve_title("Up", &c), None);
    }

    #[test]
    fn test_exact_pass_beats_containment_candidates() {
        let c = catalog(&["Alien Covenant", "Alien"]);
        assert_eq!(resolve_title("Alien", &c), Some("Alien"));
    }

    #[test]
    fn test_first_row_wins_on_ambiguity() {
        let c = catalog(&[
            "The Hobbit: An Unexpected Journey",
            "The Hobbit: The Desolation of Smaug",
        ]);
        assert_eq!(
            resolve_title("The Hobbit", &c),
            Some("The Hobbit: An Unexpected Journey")
        );
    }

    #[test]
    fn test_no_match_is_none() {
        let c = catalog(&["The Matrix"]);
        assert_eq!(resolve_title("Totally Unrelated Film", &c), None);
    }
}
