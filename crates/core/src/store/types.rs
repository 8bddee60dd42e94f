//! Types for the catalog store.

use std::fmt;

use crate::wine::Wine;

/// Lifecycle stage of the most recent fetch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    /// A fetch is pending (or none has settled yet).
    Loading,
    /// The last fetch failed; carries a human-readable description.
    Error(String),
    /// The last fetch succeeded.
    Ready,
}

impl LoadPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadPhase::Loading => "loading",
            LoadPhase::Error(_) => "error",
            LoadPhase::Ready => "ready",
        }
    }

    pub fn error_detail(&self) -> Option<&str> {
        match self {
            LoadPhase::Error(detail) => Some(detail),
            _ => None,
        }
    }
}

/// The active categorical constraint on the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TypeFilter {
    /// Show every record.
    #[default]
    All,
    /// Show records whose type matches, ignoring case.
    Type(String),
}

impl TypeFilter {
    /// Parse a filter control value; blank means no filter.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() {
            TypeFilter::All
        } else {
            TypeFilter::Type(value.to_string())
        }
    }

    /// Whether `wine` passes this filter. Untyped records only pass `All`.
    pub fn matches(&self, wine: &Wine) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Type(wanted) => wine
                .wine_type()
                .is_some_and(|t| t.trim().to_lowercase() == wanted.to_lowercase()),
        }
    }

    /// Value as used by the filter control (`""` for no filter).
    pub fn as_value(&self) -> &str {
        match self {
            TypeFilter::All => "",
            TypeFilter::Type(value) => value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, TypeFilter::All)
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::All => write!(f, "all types"),
            TypeFilter::Type(value) => write!(f, "{}", value),
        }
    }
}

/// Owned copy of the store state, taken under a single read lock.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub phase: LoadPhase,
    pub full: Vec<Wine>,
    pub visible: Vec<Wine>,
    pub filter: TypeFilter,
    /// Distinct types of `full`, first-seen order.
    pub available_types: Vec<String>,
}

/// Records of `wines` passing `filter`, original order kept.
pub fn filter_wines(wines: &[Wine], filter: &TypeFilter) -> Vec<Wine> {
    wines.iter().filter(|w| filter.matches(w)).cloned().collect()
}

/// Distinct non-blank types in first-seen order.
///
/// Spellings differing only in case count as one type; the first one seen
/// is kept.
pub fn distinct_types(wines: &[Wine]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    let mut types: Vec<String> = Vec::new();
    for wine_type in wines.iter().filter_map(|w| w.wine_type()) {
        let key = wine_type.trim().to_lowercase();
        if !keys.contains(&key) {
            keys.push(key);
            types.push(wine_type.to_string());
        }
    }
    types
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wines() -> Vec<Wine> {
        vec![
            Wine::new(1, "Malbec", 12.5).with_type("Red"),
            Wine::new(2, "Chablis", 18.0).with_type("White"),
            Wine::new(3, "Barolo", 45.0).with_type("Red"),
            Wine::new(4, "Mystery", 5.0),
            Wine::new(5, "Provence", 15.0).with_type("Rosé"),
        ]
    }

    #[test]
    fn test_parse_blank_is_all() {
        assert_eq!(TypeFilter::parse(""), TypeFilter::All);
        assert_eq!(TypeFilter::parse("   "), TypeFilter::All);
        assert_eq!(TypeFilter::parse(" red "), TypeFilter::Type("red".to_string()));
    }

    #[test]
    fn test_matches_ignores_case() {
        let wine = Wine::new(1, "Malbec", 12.5).with_type("Red");
        assert!(TypeFilter::parse("red").matches(&wine));
        assert!(TypeFilter::parse("RED").matches(&wine));
        assert!(!TypeFilter::parse("White").matches(&wine));
        assert!(TypeFilter::All.matches(&wine));
    }

    #[test]
    fn test_matches_non_ascii_case() {
        let wine = Wine::new(5, "Provence", 15.0).with_type("Rosé");
        assert!(TypeFilter::parse("ROSÉ").matches(&wine));
    }

    #[test]
    fn test_untyped_only_matches_all() {
        let wine = Wine::new(4, "Mystery", 5.0);
        assert!(TypeFilter::All.matches(&wine));
        assert!(!TypeFilter::parse("red").matches(&wine));
    }

    #[test]
    fn test_filter_wines_keeps_order() {
        let visible = filter_wines(&wines(), &TypeFilter::parse("red"));
        let ids: Vec<i64> = visible.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_distinct_types_first_seen_order() {
        assert_eq!(distinct_types(&wines()), vec!["Red", "White", "Rosé"]);
        assert!(distinct_types(&[]).is_empty());
    }

    #[test]
    fn test_distinct_types_skips_blank() {
        let wines = vec![
            Wine::new(1, "A", 1.0).with_type(""),
            Wine::new(2, "B", 1.0).with_type("Sparkling"),
        ];
        assert_eq!(distinct_types(&wines), vec!["Sparkling"]);
    }

    #[test]
    fn test_distinct_types_folds_case_variants() {
        let wines = vec![
            Wine::new(1, "Malbec", 12.5).with_type("Red"),
            Wine::new(2, "Barolo", 45.0).with_type("red"),
            Wine::new(3, "Tavel", 16.0).with_type("ROSÉ"),
            Wine::new(4, "Provence", 15.0).with_type("rosé"),
        ];
        assert_eq!(distinct_types(&wines), vec!["Red", "ROSÉ"]);
    }

    #[test]
    fn test_phase_error_detail() {
        assert_eq!(LoadPhase::Ready.error_detail(), None);
        assert_eq!(
            LoadPhase::Error("boom".to_string()).error_detail(),
            Some("boom")
        );
        assert_eq!(LoadPhase::Loading.as_str(), "loading");
    }
}
