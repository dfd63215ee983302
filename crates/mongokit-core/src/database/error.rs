//! Database error types

use thiserror::Error;

/// Errors that can occur in the database layer
///
/// Two tiers share this enum. Operational failures (`Driver`, `Execution`,
/// `InvalidCommand`) are caught inside [`MongoDatabase::run`] and rendered as
/// `"Error: <message>"` strings. Configuration, lookup, and usage-contract
/// failures propagate to the caller.
///
/// [`MongoDatabase::run`]: crate::database::MongoDatabase::run
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Both include and exclude filters were supplied
    #[error("cannot specify both include_collections and exclude_collections")]
    ConflictingFilters,

    /// A filter references collections missing from the snapshot
    #[error("{filter} {} not found in database", .missing.join(", "))]
    UnknownFilterCollections {
        filter: &'static str,
        missing: Vec<String>,
    },

    /// Requested collection names are outside the usable set
    #[error("collection_names {} not found in database", .missing.join(", "))]
    CollectionsNotFound { missing: Vec<String> },

    /// The fetch parameter was neither "one" nor "all"
    #[error("fetch parameter must be either \"one\" or \"all\", got {0:?}")]
    InvalidFetch(String),

    /// Fetch::One was requested but the command returned no documents
    #[error("command returned no documents to fetch")]
    NoDocuments,

    /// Command text could not be parsed into a BSON document
    #[error("invalid command: {0}")]
    InvalidCommand(#[from] serde_json::Error),

    /// Driver-level failure (connectivity, permissions, server errors)
    #[error("{0}")]
    Driver(#[from] mongodb::error::Error),

    /// Execution failure reported by a non-driver backend
    #[error("{0}")]
    Execution(String),
}

impl DatabaseError {
    /// Create a configuration error for filter names missing from the snapshot
    pub fn unknown_filter_collections(
        filter: &'static str,
        missing: Vec<String>,
    ) -> Self {
        Self::UnknownFilterCollections { filter, missing }
    }

    /// Create an execution error
    pub fn execution(message: impl Into<String>) -> Self {
        Self::Execution(message.into())
    }

    /// Whether this is an operational (database-level) failure that the
    /// executor contains rather than propagates
    pub fn is_execution(&self) -> bool {
        matches!(
            self,
            Self::Driver(_) | Self::Execution(_) | Self::InvalidCommand(_)
        )
    }
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_filter_names_are_enumerated() {
        let err = DatabaseError::unknown_filter_collections(
            "include_collections",
            vec!["users".to_string(), "orders".to_string()],
        );

        let message = err.to_string();
        assert!(message.contains("include_collections"));
        assert!(message.contains("users"));
        assert!(message.contains("orders"));
    }

    #[test]
    fn test_execution_classification() {
        assert!(DatabaseError::execution("boom").is_execution());
        assert!(!DatabaseError::NoDocuments.is_execution());
        assert!(!DatabaseError::ConflictingFilters.is_execution());
        assert!(!DatabaseError::InvalidFetch("many".to_string()).is_execution());
    }
}
