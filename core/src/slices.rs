//! Slice helpers.

/// True if any item of `haystack` equals `needle`.
pub fn slice_contains<S: AsRef<str>>(needle: &str, haystack: &[S]) -> bool {
    haystack.iter().any(|item| item.as_ref() == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_present_item() {
        assert!(slice_contains("b", &["a", "b", "c"]));
    }

    #[test]
    fn missing_item() {
        assert!(!slice_contains("d", &["a", "b", "c"]));
        assert!(!slice_contains("", &Vec::<String>::new()));
    }

    #[test]
    fn comparison_is_exact() {
        let haystack = vec!["Foo".to_string(), "bar ".to_string()];
        assert!(!slice_contains("foo", &haystack));
        assert!(!slice_contains("bar", &haystack));
    }
}
