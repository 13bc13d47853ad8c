//! The active category filter.

use std::fmt;

/// Which part of the catalog is visible.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Every record, in catalog order.
    #[default]
    All,
    /// Only records whose category equals the label.
    Category(String),
}

impl Selection {
    /// Sentinel value for [`Selection::All`].
    pub const ALL: &'static str = "all";

    /// Parse a selection from a query value.
    ///
    /// Empty input and `all` (any case) select everything; anything else is
    /// taken as a category label verbatim.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(Self::ALL) {
            Selection::All
        } else {
            Selection::Category(value.to_string())
        }
    }

    /// Create a category selection.
    pub fn category(label: impl Into<String>) -> Self {
        Selection::Category(label.into())
    }

    /// Check if this is the `all` sentinel.
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// Check whether a record with `category` is visible under this selection.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Category(label) => label == category,
        }
    }

    /// Value as used in query strings.
    pub fn as_str(&self) -> &str {
        match self {
            Selection::All => Self::ALL,
            Selection::Category(label) => label,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Selection {
    fn from(s: &str) -> Self {
        Selection::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_sentinel() {
        assert_eq!(Selection::parse("all"), Selection::All);
        assert_eq!(Selection::parse("ALL"), Selection::All);
        assert_eq!(Selection::parse(""), Selection::All);
        assert_eq!(Selection::parse("  "), Selection::All);
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(
            Selection::parse("Cold & Flu"),
            Selection::Category("Cold & Flu".to_string())
        );
    }

    #[test]
    fn test_matches() {
        assert!(Selection::All.matches("anything"));
        let pain = Selection::category("Pain Relief");
        assert!(pain.matches("Pain Relief"));
        assert!(!pain.matches("Antibiotic"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Selection::All.to_string(), "all");
        assert_eq!(Selection::category("Vitamins").to_string(), "Vitamins");
    }
}
