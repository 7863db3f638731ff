//! Request helper extensions.

use salvo::Request;

/// Trimmed, non-empty query and path values.
pub(crate) trait RequestExt {
    fn query_text(&self, key: &str) -> Option<String>;

    fn param_text(&self, key: &str) -> String;
}

impl RequestExt for Request {
    fn query_text(&self, key: &str) -> Option<String> {
        self.query::<String>(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn param_text(&self, key: &str) -> String {
        self.param::<String>(key).unwrap_or_default()
    }
}
