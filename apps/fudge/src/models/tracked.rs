//! Registry file schema: `{"paths": [...]}`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedPathSet {
    #[serde(default)]
    pub paths: Vec<String>,
}

impl TrackedPathSet {
    /// Exact string match; spellings that resolve to the same file are distinct.
    pub fn contains(&self, path: &str) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_paths_key_defaults_empty() {
        let set: TrackedPathSet = serde_json::from_str("{}").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_contains_is_exact() {
        let set = TrackedPathSet {
            paths: vec!["./a.json".into()],
        };
        assert!(set.contains("./a.json"));
        assert!(!set.contains("a.json"));
    }
}
