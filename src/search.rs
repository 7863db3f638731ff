//! Search Queries

use std::fmt::{Display, Formatter, Result as FmtResult};

/// A free-text search query.
///
/// Queries match case-insensitively anywhere inside a field. The store runs
/// the same match with `ILIKE` against [`SearchQuery::like_pattern`];
/// [`SearchQuery::matches`] is the in-memory equivalent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Build a query from raw user input. Surrounding whitespace is dropped.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    /// The trimmed query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty query matches everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `ILIKE` pattern for a substring match.
    ///
    /// `%`, `_` and the escape character itself are escaped with `\` so they
    /// match literally.
    #[must_use]
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);

        pattern.push('%');

        for c in self.0.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }

            pattern.push(c);
        }

        pattern.push('%');

        pattern
    }

    /// Whether `haystack` contains the query, ignoring case.
    #[must_use]
    pub fn matches(&self, haystack: &str) -> bool {
        self.is_empty() || haystack.to_lowercase().contains(&self.0.to_lowercase())
    }

    /// Whether any of `haystacks` contains the query, ignoring case.
    pub fn matches_any<'a>(&self, haystacks: impl IntoIterator<Item = &'a str>) -> bool {
        self.is_empty() || haystacks.into_iter().any(|haystack| self.matches(haystack))
    }
}

impl Display for SearchQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for SearchQuery {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
