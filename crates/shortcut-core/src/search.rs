//! Query matching for the shortcut catalogue.
//!
//! Every lookup is a case-insensitive substring test against one or more text
//! fields of a [`Shortcut`]. Which fields take part is chosen by a
//! [`QueryScope`], so "filter by application", "filter by feature" and "search
//! everything" are all the same code path with a different scope.
//!
//! An empty query matches every entry.

use crate::error::{Result, ShortcutError};
use crate::types::Shortcut;
use std::fmt;
use std::str::FromStr;

/// Which field(s) a query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QueryScope {
    /// Application name, feature description and shortcut key
    #[default]
    All,

    /// Application name only
    Application,

    /// Feature description only
    Feature,
}

impl QueryScope {
    /// All scopes, in the order a UI would offer them
    pub const ALL: [QueryScope; 3] = [
        QueryScope::All,
        QueryScope::Application,
        QueryScope::Feature,
    ];

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryScope::All => "all",
            QueryScope::Application => "application",
            QueryScope::Feature => "feature",
        }
    }
}

impl fmt::Display for QueryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryScope {
    type Err = ShortcutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" | "" => Ok(QueryScope::All),
            "application" | "app" => Ok(QueryScope::Application),
            "feature" => Ok(QueryScope::Feature),
            _ => Err(ShortcutError::InvalidScope {
                name: s.to_string(),
            }),
        }
    }
}

/// A prepared query: a scope plus the lowercased needle.
///
/// Build once and reuse for every entry; the needle is folded a single time.
///
/// # Example
/// ```
/// use shortcut_core::{QueryScope, ShortcutQuery};
/// let query = ShortcutQuery::new(QueryScope::Application, "Term");
/// assert_eq!(query.needle(), "term");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutQuery {
    scope: QueryScope,
    needle_lower: String,
}

impl ShortcutQuery {
    /// Create a query matching `text` within `scope`.
    pub fn new(scope: QueryScope, text: &str) -> Self {
        ShortcutQuery {
            scope,
            needle_lower: text.to_lowercase(),
        }
    }

    /// Query over all three fields
    pub fn all(text: &str) -> Self {
        Self::new(QueryScope::All, text)
    }

    /// Query over the application name
    pub fn application(text: &str) -> Self {
        Self::new(QueryScope::Application, text)
    }

    /// Query over the feature description
    pub fn feature(text: &str) -> Self {
        Self::new(QueryScope::Feature, text)
    }

    /// The lowercased search text
    pub fn needle(&self) -> &str {
        &self.needle_lower
    }

    /// Check if this query would match everything (empty needle)
    pub fn matches_all(&self) -> bool {
        self.needle_lower.is_empty()
    }

    /// Check if a shortcut matches this query.
    pub fn matches(&self, shortcut: &Shortcut) -> bool {
        if self.matches_all() {
            return true;
        }
        let needle = self.needle_lower.as_str();
        match self.scope {
            QueryScope::All => {
                contains_folded(&shortcut.application_name, needle)
                    || contains_folded(&shortcut.feature_description, needle)
                    || contains_folded(&shortcut.shortcut_key, needle)
            }
            QueryScope::Application => contains_folded(&shortcut.application_name, needle),
            QueryScope::Feature => contains_folded(&shortcut.feature_description, needle),
        }
    }
}

/// Case-insensitive containment; `needle_lower` must already be lowercase.
fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
