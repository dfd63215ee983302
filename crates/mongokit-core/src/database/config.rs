//! Database wrapper configuration

use serde::{Deserialize, Serialize};

/// Default number of sample documents appended to each collection description
pub const DEFAULT_SAMPLE_DOCS: usize = 3;

/// Default maximum rendered length for string field values
pub const DEFAULT_MAX_STRING_LENGTH: usize = 300;

/// Configuration for a [`MongoDatabase`] handle
///
/// Built once at construction time and held as a read-only field; the
/// include/exclude filters are validated against the collection snapshot
/// when the handle is created and never re-checked.
///
/// `include_collections` and `exclude_collections` are mutually exclusive.
///
/// [`MongoDatabase`]: crate::database::MongoDatabase
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// If non-empty, only these collections are usable
    pub include_collections: Vec<String>,
    /// Collections hidden from the usable set
    pub exclude_collections: Vec<String>,
    /// Sample documents fetched per collection description
    pub sample_docs_in_collection_info: usize,
    /// Maximum characters for rendered string values before truncation
    pub max_string_length: usize,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            include_collections: Vec::new(),
            exclude_collections: Vec::new(),
            sample_docs_in_collection_info: DEFAULT_SAMPLE_DOCS,
            max_string_length: DEFAULT_MAX_STRING_LENGTH,
        }
    }
}

impl DatabaseConfig {
    /// Create a config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the usable set to these collections
    pub fn with_include_collections(
        mut self,
        names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.include_collections = names.into_iter().map(Into::into).collect();
        self
    }

    /// Hide these collections from the usable set
    pub fn with_exclude_collections(
        mut self,
        names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.exclude_collections = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the sample document count
    pub fn with_sample_docs(mut self, count: usize) -> Self {
        self.sample_docs_in_collection_info = count;
        self
    }

    /// Set the string truncation length
    pub fn with_max_string_length(mut self, length: usize) -> Self {
        self.max_string_length = length;
        self
    }

    /// Parse a config from YAML text
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DatabaseConfig::default();

        assert!(config.include_collections.is_empty());
        assert!(config.exclude_collections.is_empty());
        assert_eq!(config.sample_docs_in_collection_info, 3);
        assert_eq!(config.max_string_length, 300);
    }

    #[test]
    fn test_builder() {
        let config = DatabaseConfig::new()
            .with_include_collections(["users"])
            .with_sample_docs(2)
            .with_max_string_length(10);

        assert_eq!(config.include_collections, vec!["users"]);
        assert_eq!(config.sample_docs_in_collection_info, 2);
        assert_eq!(config.max_string_length, 10);
    }

    #[test]
    fn test_from_yaml() {
        let config = DatabaseConfig::from_yaml_str(
            "exclude_collections:\n  - audit_log\nsample_docs_in_collection_info: 5\n",
        )
        .expect("yaml should parse");

        assert_eq!(config.exclude_collections, vec!["audit_log"]);
        assert_eq!(config.sample_docs_in_collection_info, 5);
        // Unspecified fields keep their defaults
        assert_eq!(config.max_string_length, 300);
    }
}
