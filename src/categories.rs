//! Categories

/// Whether two category names refer to the same category.
#[must_use]
pub fn same_category(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_category_ignores_case() {
        assert!(same_category("Brain Health", "brain health"));
        assert!(!same_category("Brain Health", "Heart Health"));
    }
}
