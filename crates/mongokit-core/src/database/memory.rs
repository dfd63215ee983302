//! In-memory backend for testing
//!
//! Deterministic, configurable behavior without a MongoDB deployment.
//! Documents keep their insertion order within a collection; the collection
//! listing is sorted by name.

use std::collections::BTreeMap;

use mongodb::bson::{doc, Document};

use super::backend::DatabaseBackend;
use super::error::{DatabaseError, DatabaseResult};

/// In-memory database backend
///
/// Commands are dispatched on the first key of the command document, which
/// also exercises the order-sensitivity of the command representation:
/// `{"find": ..., "limit": ...}` and `{"limit": ..., "find": ...}` are
/// different commands.
pub struct MemoryBackend {
    db_name: String,
    collections: BTreeMap<String, Vec<Document>>,
    command_failure: Option<String>,
}

impl MemoryBackend {
    /// Create an empty backend bound to `db_name`
    pub fn new(db_name: impl Into<String>) -> Self {
        Self {
            db_name: db_name.into(),
            collections: BTreeMap::new(),
            command_failure: None,
        }
    }

    /// Add a collection with the given documents
    pub fn with_collection(
        mut self,
        name: impl Into<String>,
        documents: Vec<Document>,
    ) -> Self {
        self.collections.insert(name.into(), documents);
        self
    }

    /// Make every subsequent command fail with `message`
    pub fn with_failing_commands(mut self, message: impl Into<String>) -> Self {
        self.command_failure = Some(message.into());
        self
    }

    fn find(&self, command: &Document) -> DatabaseResult<Vec<Document>> {
        let collection = command
            .get_str("find")
            .map_err(|_| DatabaseError::execution("find requires a collection name"))?;

        let documents = self
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default();

        let limit = command.get_i64("limit").ok().or_else(|| {
            command.get_i32("limit").ok().map(i64::from)
        });
        match limit {
            Some(n) if n > 0 => Ok(documents.into_iter().take(n as usize).collect()),
            _ => Ok(documents),
        }
    }

    fn count(&self, command: &Document) -> DatabaseResult<Vec<Document>> {
        let collection = command
            .get_str("count")
            .map_err(|_| DatabaseError::execution("count requires a collection name"))?;

        let n = self
            .collections
            .get(collection)
            .map_or(0, |docs| docs.len() as i64);
        Ok(vec![doc! { "n": n, "ok": 1 }])
    }
}

impl DatabaseBackend for MemoryBackend {
    fn database_name(&self) -> &str {
        &self.db_name
    }

    fn list_collection_names(&self) -> DatabaseResult<Vec<String>> {
        Ok(self.collections.keys().cloned().collect())
    }

    fn count_documents(&self, collection: &str) -> DatabaseResult<u64> {
        // Counting a missing collection yields 0, matching the server.
        Ok(self
            .collections
            .get(collection)
            .map_or(0, |docs| docs.len() as u64))
    }

    fn sample_documents(
        &self,
        collection: &str,
        limit: usize,
    ) -> DatabaseResult<Vec<Document>> {
        Ok(self
            .collections
            .get(collection)
            .map(|docs| docs.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }

    fn run_command(&self, command: Document) -> DatabaseResult<Vec<Document>> {
        if let Some(message) = &self.command_failure {
            return Err(DatabaseError::execution(message.clone()));
        }

        let operation = match command.iter().next() {
            Some((key, _)) => key.as_str(),
            None => return Err(DatabaseError::execution("empty command document")),
        };

        match operation {
            "find" => self.find(&command),
            "count" => self.count(&command),
            other => Err(DatabaseError::execution(format!(
                "no such command: '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Vec<Document> {
        vec![
            doc! { "name": "alice" },
            doc! { "name": "bob" },
            doc! { "name": "carol" },
        ]
    }

    #[test]
    fn test_listing_is_sorted() {
        let backend = MemoryBackend::new("crm")
            .with_collection("users", users())
            .with_collection("orders", Vec::new());

        assert_eq!(
            backend.list_collection_names().unwrap(),
            vec!["orders", "users"]
        );
    }

    #[test]
    fn test_find_honors_limit() {
        let backend = MemoryBackend::new("crm").with_collection("users", users());

        let result = backend
            .run_command(doc! { "find": "users", "limit": 2_i64 })
            .unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].get_str("name").unwrap(), "alice");
    }

    #[test]
    fn test_dispatch_is_first_key_sensitive() {
        let backend = MemoryBackend::new("crm").with_collection("users", users());

        // "limit" first means "limit" is the operation, which does not exist.
        let err = backend
            .run_command(doc! { "limit": 2_i64, "find": "users" })
            .unwrap_err();
        assert!(err.to_string().contains("no such command"));
    }

    #[test]
    fn test_missing_collection_counts_zero() {
        let backend = MemoryBackend::new("crm");
        assert_eq!(backend.count_documents("ghosts").unwrap(), 0);
    }

    #[test]
    fn test_failure_mode() {
        let backend = MemoryBackend::new("crm").with_failing_commands("network down");

        let err = backend.run_command(doc! { "find": "users" }).unwrap_err();
        assert!(err.is_execution());
        assert_eq!(err.to_string(), "network down");
    }
}
