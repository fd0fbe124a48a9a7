use std::collections::btree_map::{self, BTreeMap};

use serde::Serialize;

/// Form fields submitted when asking for recommendations
///
/// Built from one request body and dropped with it. When a field name
/// repeats, the first value is kept and later ones are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PreferenceSubmission {
    fields: BTreeMap<String, String>,
}

impl PreferenceSubmission {
    /// Creates an empty submission
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a field unless one with the same name was already seen
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.entry(name.into()).or_insert_with(|| value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in name order
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.fields.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for PreferenceSubmission
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut submission = Self::new();
        for (name, value) in iter {
            submission.insert(name, value);
        }
        submission
    }
}

impl<'a> IntoIterator for &'a PreferenceSubmission {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_value_wins() {
        let submission: PreferenceSubmission =
            [("color", "red"), ("size", "m"), ("color", "blue")].into_iter().collect();

        assert_eq!(submission.len(), 2);
        assert_eq!(submission.get("color"), Some("red"));
        assert_eq!(submission.get("size"), Some("m"));
    }

    #[test]
    fn test_empty_submission() {
        let submission = PreferenceSubmission::new();
        assert!(submission.is_empty());
        assert_eq!(submission.get("anything"), None);
    }

    #[test]
    fn test_serializes_as_flat_map() {
        let submission: PreferenceSubmission =
            [("budget", "200"), ("category", "audio")].into_iter().collect();
        let json = serde_json::to_string(&submission).unwrap();
        assert_eq!(json, r#"{"budget":"200","category":"audio"}"#);
    }
}
