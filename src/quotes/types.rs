//! Quote and filter types.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A text/category pair.
///
/// Quotes carry no identifier. Two quotes are the same for sync purposes when
/// their `text` is identical, whatever their category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// The quote itself.
    #[serde(default)]
    pub text: String,
    /// Free-form category label.
    #[serde(default)]
    pub category: String,
}

impl Quote {
    /// Create a new quote.
    #[must_use]
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }
}

/// Sentinel selecting every category.
pub const ALL_CATEGORIES: &str = "all";

/// Which quotes are eligible for display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every quote.
    #[default]
    All,
    /// Only quotes whose category equals this value exactly.
    Category(String),
}

impl CategoryFilter {
    /// Parse a filter value. `"all"` selects everything; anything else is a
    /// category name.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Category(value.to_string())
        }
    }

    /// The stored form of this filter.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Category(c) => c,
        }
    }

    /// Check whether a quote passes this filter.
    #[must_use]
    pub fn matches(&self, quote: &Quote) -> bool {
        match self {
            Self::All => true,
            Self::Category(c) => quote.category == *c,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
