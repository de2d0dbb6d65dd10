use serde::Serialize;
use std::collections::BTreeMap;

/// Query string sent to a TMDB discover endpoint
///
/// Keys are kept sorted so the outgoing URL is stable for a given filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: impl ToString) {
        self.0.insert(key.to_string(), value.to_string());
    }

    /// Returns a copy without the given keys
    pub fn without(&self, keys: &[&str]) -> Self {
        let mut params = self.clone();
        for key in keys {
            params.0.remove(*key);
        }
        params
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
