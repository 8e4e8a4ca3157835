//! Captured path parameters.

use std::collections::HashMap;

/// The name to value map captured from dynamic segments during a match.
///
/// Values captured from a request path are percent-decoded before being
/// stored. Values inserted programmatically via [`Params::insert`] are
/// stored as-is.
#[derive(Debug, Clone, Default)]
pub struct Params {
    entries: HashMap<String, String>,
}

impl Params {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Insert a parameter value directly, bypassing decoding.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Fold another parameter map into this one.
    pub fn extend(&mut self, other: Params) {
        self.entries.extend(other.entries);
    }

    /// The number of captured parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no parameters were captured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all captured name/value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut params = Params::new();
        params.insert("id", "42");

        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.get("missing"), None);
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_insert_bypasses_decoding() {
        let mut params = Params::new();
        params.insert("raw", "a%20b");

        assert_eq!(params.get("raw"), Some("a%20b"));
    }

    #[test]
    fn test_extend_overrides() {
        let mut base = Params::new();
        base.insert("a", "1");
        base.insert("b", "2");

        let mut child = Params::new();
        child.insert("b", "3");
        base.extend(child);

        assert_eq!(base.get("a"), Some("1"));
        assert_eq!(base.get("b"), Some("3"));
    }
}
