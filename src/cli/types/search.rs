//! Classification of free-text player searches.
//!
//! The search box accepts either `Name#1234` or a 6-digit player id. Anything
//! else is rejected locally before a request is made.

use std::fmt;

use super::ids::{PlayerId, PlayerTag};

/// A classified search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// `Name#1234`
    NameTag { name: String, tag: PlayerTag },
    /// `123456`
    NumericId(PlayerId),
    Invalid,
}

impl SearchQuery {
    pub fn is_valid(&self) -> bool {
        !matches!(self, SearchQuery::Invalid)
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchQuery::NameTag { name, tag } => write!(f, "{}#{:04}", name, tag.as_u16()),
            SearchQuery::NumericId(id) => write!(f, "{}", id),
            SearchQuery::Invalid => write!(f, "<invalid>"),
        }
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Classify raw search text.
///
/// Surrounding whitespace is ignored for `Name#1234`; a player id must be
/// exactly six digits with nothing around it.
///
/// ```rust
/// use kards_stats::cli::types::search::{classify, SearchQuery};
///
/// assert!(matches!(classify("FuTBoL#3801"), SearchQuery::NameTag { .. }));
/// assert!(matches!(classify("499626"), SearchQuery::NumericId(_)));
/// assert_eq!(classify("bad input"), SearchQuery::Invalid);
/// ```
pub fn classify(text: &str) -> SearchQuery {
    if let Some((name, tag)) = text.trim().split_once('#') {
        if !name.is_empty() && name.chars().all(is_name_char) {
            if let Ok(tag) = tag.parse::<PlayerTag>() {
                return SearchQuery::NameTag {
                    name: name.to_string(),
                    tag,
                };
            }
        }
        return SearchQuery::Invalid;
    }

    text.parse::<PlayerId>()
        .map(SearchQuery::NumericId)
        .unwrap_or(SearchQuery::Invalid)
}
