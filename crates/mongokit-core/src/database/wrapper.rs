//! Read-only wrapper around one MongoDB database
//!
//! [`MongoDatabase`] owns the collection snapshot, the include/exclude
//! filter, and the command executor. It is created once at session startup
//! and shared (via `Arc`) across sequential tool invocations.

use std::collections::BTreeSet;
use std::str::FromStr;
use std::sync::Arc;

use mongodb::bson::Document;

use crate::logging::SharedLogger;

use super::backend::DatabaseBackend;
use super::config::DatabaseConfig;
use super::error::{DatabaseError, DatabaseResult};
use super::mongo::MongoBackend;
use super::truncate::truncate_document;

/// How many result documents [`MongoDatabase::run`] materializes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fetch {
    /// Every result document, rendered as a list
    All,
    /// Exactly the first result document; an error if there are none
    One,
}

impl FromStr for Fetch {
    type Err = DatabaseError;

    /// Parse the textual fetch parameter
    ///
    /// Anything other than `"all"` or `"one"` fails before any database
    /// call is made.
    fn from_str(value: &str) -> DatabaseResult<Self> {
        match value {
            "all" => Ok(Self::All),
            "one" => Ok(Self::One),
            other => Err(DatabaseError::InvalidFetch(other.to_string())),
        }
    }
}

/// Wrapper around a MongoDB database for read-only agent access
///
/// The collection snapshot is taken once at construction and never
/// refreshed: collections created or dropped afterwards are invisible for
/// the handle's lifetime. Wherever an ordering is exposed (collection
/// listings, unnamed [`collection_info`]), names are sorted ascending so
/// output is deterministic.
///
/// Nothing in this layer prevents a write-capable command from being
/// submitted through [`run`]; read-only safety relies entirely on upstream
/// prompting and policy. That is a known, accepted trust boundary of this
/// design, not an enforced guarantee.
///
/// [`collection_info`]: MongoDatabase::collection_info
/// [`run`]: MongoDatabase::run
pub struct MongoDatabase {
    backend: Arc<dyn DatabaseBackend>,
    all_collections: BTreeSet<String>,
    usable_collections: BTreeSet<String>,
    sample_docs_in_collection_info: usize,
    max_string_length: usize,
    logger: SharedLogger,
}

impl std::fmt::Debug for MongoDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoDatabase")
            .field("database_name", &self.backend.database_name())
            .field("all_collections", &self.all_collections)
            .field("usable_collections", &self.usable_collections)
            .field(
                "sample_docs_in_collection_info",
                &self.sample_docs_in_collection_info,
            )
            .field("max_string_length", &self.max_string_length)
            .finish_non_exhaustive()
    }
}

impl MongoDatabase {
    /// Create a handle over an existing backend
    ///
    /// Takes the collection snapshot and validates the filter configuration.
    /// Fails if both filters are non-empty or if either filter names a
    /// collection missing from the snapshot (the message enumerates the
    /// missing names).
    pub fn new(
        backend: Arc<dyn DatabaseBackend>,
        config: DatabaseConfig,
        logger: SharedLogger,
    ) -> DatabaseResult<Self> {
        if !config.include_collections.is_empty() && !config.exclude_collections.is_empty()
        {
            return Err(DatabaseError::ConflictingFilters);
        }

        let all_collections: BTreeSet<String> =
            backend.list_collection_names()?.into_iter().collect();

        let missing = missing_from(&config.include_collections, &all_collections);
        if !missing.is_empty() {
            return Err(DatabaseError::unknown_filter_collections(
                "include_collections",
                missing,
            ));
        }
        let missing = missing_from(&config.exclude_collections, &all_collections);
        if !missing.is_empty() {
            return Err(DatabaseError::unknown_filter_collections(
                "exclude_collections",
                missing,
            ));
        }

        let usable_collections: BTreeSet<String> = if config.include_collections.is_empty()
        {
            let excluded: BTreeSet<&str> = config
                .exclude_collections
                .iter()
                .map(String::as_str)
                .collect();
            all_collections
                .iter()
                .filter(|name| !excluded.contains(name.as_str()))
                .cloned()
                .collect()
        } else {
            config.include_collections.iter().cloned().collect()
        };

        logger.info(&format!(
            "[MongoDatabase] connected to '{}': {} collections in snapshot, {} usable",
            backend.database_name(),
            all_collections.len(),
            usable_collections.len(),
        ));

        Ok(Self {
            backend,
            all_collections,
            usable_collections,
            sample_docs_in_collection_info: config.sample_docs_in_collection_info,
            max_string_length: config.max_string_length,
            logger,
        })
    }

    /// Connect to a MongoDB deployment and wrap one of its databases
    pub fn from_uri(
        uri: &str,
        db_name: &str,
        config: DatabaseConfig,
        logger: SharedLogger,
    ) -> DatabaseResult<Self> {
        let backend = Arc::new(MongoBackend::connect(uri, db_name)?);
        Self::new(backend, config, logger)
    }

    /// Name of the wrapped database
    pub fn database_name(&self) -> &str {
        self.backend.database_name()
    }

    /// Names of all collections in the construction-time snapshot, sorted
    pub fn all_collection_names(&self) -> Vec<String> {
        self.all_collections.iter().cloned().collect()
    }

    /// Names of the collections usable under the active filter, sorted
    pub fn usable_collection_names(&self) -> Vec<String> {
        self.usable_collections.iter().cloned().collect()
    }

    /// Check that every name is in the usable set
    ///
    /// Fails listing (in input order) each name that is not.
    pub fn validate_collection_names(&self, names: &[String]) -> DatabaseResult<()> {
        let missing: Vec<String> = names
            .iter()
            .filter(|name| !self.usable_collections.contains(*name))
            .cloned()
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DatabaseError::CollectionsNotFound { missing })
        }
    }

    /// Describe collections: name, exact document count, sample documents
    ///
    /// With `None`, every usable collection is described in sorted order.
    /// With explicit names, they are validated first (no partial output) and
    /// described in the caller's order. Each call re-queries the database:
    /// one count and one limited fetch per collection, nothing is cached.
    ///
    /// Sample documents are fetched without a sort, so their order is
    /// implementation-defined and may differ between calls.
    pub fn collection_info(&self, names: Option<&[String]>) -> DatabaseResult<String> {
        let targets: Vec<String> = match names {
            Some(requested) => {
                self.validate_collection_names(requested)?;
                requested.to_vec()
            }
            None => self.usable_collection_names(),
        };

        let mut blocks = Vec::with_capacity(targets.len());
        for name in &targets {
            let count = self.backend.count_documents(name)?;
            let samples = self
                .backend
                .sample_documents(name, self.sample_docs_in_collection_info)?;

            let mut block = format!("Collection Name: {name}\nCount: {count}");
            block.push_str("\nSample Documents:");
            for sample in &samples {
                let rendered = truncate_document(sample, self.max_string_length);
                block.push('\n');
                block.push_str(&rendered.to_string());
            }
            blocks.push(block);
        }

        Ok(blocks.join("\n\n"))
    }

    /// [`collection_info`] variant that renders any failure as a string
    ///
    /// Lookup and backend errors come back as `"Error: <message>"` instead
    /// of propagating. Tool adapters rely on this contract.
    ///
    /// [`collection_info`]: MongoDatabase::collection_info
    pub fn collection_info_no_throw(&self, names: Option<&[String]>) -> String {
        match self.collection_info(names) {
            Ok(info) => info,
            Err(e) => format!("Error: {e}"),
        }
    }

    /// Execute a database command and render the result as a string
    ///
    /// `command` is an order-preserving document; which key comes first
    /// matters for command correctness. Every top-level value of every
    /// result document is truncated before rendering.
    ///
    /// Database-level failures (malformed command, permissions, network)
    /// are caught and returned as `Ok("Error: <message>")`. Only the usage
    /// contract propagates as `Err`: [`Fetch::One`] with zero result
    /// documents fails with [`DatabaseError::NoDocuments`], since that is a
    /// caller bug rather than a database condition.
    pub fn run(&self, command: &Document, fetch: Fetch) -> DatabaseResult<String> {
        self.logger
            .debug(&format!("[MongoDatabase] run: {command}"));

        let documents = match self.backend.run_command(command.clone()) {
            Ok(documents) => documents,
            Err(e) if e.is_execution() => return Ok(format!("Error: {e}")),
            Err(e) => return Err(e),
        };

        match fetch {
            Fetch::All => {
                let rendered: Vec<String> = documents
                    .iter()
                    .map(|d| truncate_document(d, self.max_string_length).to_string())
                    .collect();
                Ok(format!("[{}]", rendered.join(", ")))
            }
            Fetch::One => {
                let first = documents.into_iter().next().ok_or(DatabaseError::NoDocuments)?;
                Ok(truncate_document(&first, self.max_string_length).to_string())
            }
        }
    }

    /// Parse command text as JSON and run it, never failing
    ///
    /// Field order in the JSON text survives parsing into the command
    /// document. Parse failures and every other error render as
    /// `"Error: <message>"`; results are fetched with [`Fetch::All`].
    pub fn run_no_throw(&self, command_json: &str) -> String {
        let command: Document = match serde_json::from_str(command_json) {
            Ok(command) => command,
            Err(e) => return format!("Error: {}", DatabaseError::from(e)),
        };

        match self.run(&command, Fetch::All) {
            Ok(result) => result,
            Err(e) => format!("Error: {e}"),
        }
    }
}

/// Names in `requested` that are absent from `snapshot`, in input order
fn missing_from(requested: &[String], snapshot: &BTreeSet<String>) -> Vec<String> {
    requested
        .iter()
        .filter(|name| !snapshot.contains(*name))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::MemoryBackend;
    use crate::logging::NoOpLogger;
    use mongodb::bson::doc;

    fn backend() -> Arc<MemoryBackend> {
        Arc::new(
            MemoryBackend::new("crm")
                .with_collection(
                    "users",
                    vec![
                        doc! { "name": "alice", "age": 34 },
                        doc! { "name": "bob", "age": 51 },
                        doc! { "name": "carol", "age": 27 },
                        doc! { "name": "dan", "age": 43 },
                        doc! { "name": "erin", "age": 38 },
                    ],
                )
                .with_collection("orders", vec![doc! { "sku": "A-1", "qty": 2 }])
                .with_collection("empty", Vec::new()),
        )
    }

    fn database(config: DatabaseConfig) -> DatabaseResult<MongoDatabase> {
        MongoDatabase::new(backend(), config, Arc::new(NoOpLogger::new()))
    }

    #[test]
    fn test_conflicting_filters_rejected() {
        let err = database(
            DatabaseConfig::new()
                .with_include_collections(["users"])
                .with_exclude_collections(["orders"]),
        )
        .unwrap_err();

        assert!(matches!(err, DatabaseError::ConflictingFilters));
    }

    #[test]
    fn test_unknown_include_names_enumerated() {
        let err = database(
            DatabaseConfig::new().with_include_collections(["users", "ghosts", "wraiths"]),
        )
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("include_collections"));
        assert!(message.contains("ghosts"));
        assert!(message.contains("wraiths"));
        assert!(!message.contains("users,"));
    }

    #[test]
    fn test_unknown_exclude_names_rejected() {
        let err =
            database(DatabaseConfig::new().with_exclude_collections(["ghosts"])).unwrap_err();

        assert!(err.to_string().contains("exclude_collections"));
    }

    #[test]
    fn test_usable_is_include_when_present() {
        let db = database(DatabaseConfig::new().with_include_collections(["users"])).unwrap();
        assert_eq!(db.usable_collection_names(), vec!["users"]);
    }

    #[test]
    fn test_usable_is_all_minus_exclude() {
        let db = database(DatabaseConfig::new().with_exclude_collections(["orders"])).unwrap();
        assert_eq!(db.usable_collection_names(), vec!["empty", "users"]);
    }

    #[test]
    fn test_usable_defaults_to_all_sorted() {
        let db = database(DatabaseConfig::new()).unwrap();
        assert_eq!(
            db.usable_collection_names(),
            vec!["empty", "orders", "users"]
        );
    }

    #[test]
    fn test_validate_lists_missing_names() {
        let db = database(DatabaseConfig::new().with_include_collections(["users"])).unwrap();

        let err = db
            .validate_collection_names(&["orders".to_string()])
            .unwrap_err();
        assert!(err.to_string().contains("orders"));
    }

    #[test]
    fn test_collection_info_count_and_samples() {
        let db = database(DatabaseConfig::new().with_sample_docs(2)).unwrap();

        let info = db.collection_info(Some(&["users".to_string()])).unwrap();

        assert!(info.contains("Collection Name: users"));
        assert!(info.contains("Count: 5"));
        // Exactly 2 sample documents after the header
        let samples = info
            .split("Sample Documents:")
            .nth(1)
            .unwrap()
            .lines()
            .filter(|line| !line.is_empty())
            .count();
        assert_eq!(samples, 2);
    }

    #[test]
    fn test_collection_info_never_partial() {
        let db = database(DatabaseConfig::new()).unwrap();

        let err = db
            .collection_info(Some(&["users".to_string(), "ghosts".to_string()]))
            .unwrap_err();
        assert!(err.to_string().contains("ghosts"));
    }

    #[test]
    fn test_collection_info_all_usable_in_sorted_order() {
        let db = database(DatabaseConfig::new()).unwrap();

        let info = db.collection_info(None).unwrap();
        let empty_at = info.find("Collection Name: empty").unwrap();
        let orders_at = info.find("Collection Name: orders").unwrap();
        let users_at = info.find("Collection Name: users").unwrap();
        assert!(empty_at < orders_at && orders_at < users_at);

        // Blocks are separated by a blank line
        assert!(info.contains("\n\nCollection Name: orders"));
    }

    #[test]
    fn test_collection_info_truncates_values() {
        let backend = Arc::new(
            MemoryBackend::new("crm")
                .with_collection("notes", vec![doc! { "body": "abcdefghijklmnop" }]),
        );
        let db = MongoDatabase::new(
            backend,
            DatabaseConfig::new().with_max_string_length(10),
            Arc::new(NoOpLogger::new()),
        )
        .unwrap();

        let info = db.collection_info(None).unwrap();
        assert!(info.contains("abcdefghij..."));
        assert!(!info.contains("abcdefghijk"));
    }

    #[test]
    fn test_no_throw_renders_lookup_error() {
        let db = database(DatabaseConfig::new().with_include_collections(["users"])).unwrap();

        let output = db.collection_info_no_throw(Some(&["orders".to_string()]));
        assert!(output.starts_with("Error: "));
        assert!(output.contains("orders"));
    }

    #[test]
    fn test_run_fetch_all_renders_list() {
        let db = database(DatabaseConfig::new()).unwrap();

        let result = db
            .run(&doc! { "find": "orders" }, Fetch::All)
            .unwrap();
        assert!(result.starts_with('['));
        assert!(result.contains("\"sku\""));
    }

    #[test]
    fn test_run_fetch_all_empty_is_empty_list() {
        let db = database(DatabaseConfig::new()).unwrap();

        let result = db.run(&doc! { "find": "empty" }, Fetch::All).unwrap();
        assert_eq!(result, "[]");
    }

    #[test]
    fn test_run_fetch_one_returns_first() {
        let db = database(DatabaseConfig::new()).unwrap();

        let result = db.run(&doc! { "find": "users" }, Fetch::One).unwrap();
        assert!(result.contains("alice"));
        assert!(!result.contains("bob"));
    }

    #[test]
    fn test_run_fetch_one_with_no_documents_propagates() {
        let db = database(DatabaseConfig::new()).unwrap();

        let err = db.run(&doc! { "find": "empty" }, Fetch::One).unwrap_err();
        assert!(matches!(err, DatabaseError::NoDocuments));
    }

    #[test]
    fn test_run_contains_database_failures() {
        let db = database(DatabaseConfig::new()).unwrap();

        let result = db
            .run(&doc! { "dropDatabase": 1 }, Fetch::All)
            .unwrap();
        assert!(result.starts_with("Error: "));
    }

    #[test]
    fn test_run_truncates_values() {
        let backend = Arc::new(
            MemoryBackend::new("crm")
                .with_collection("notes", vec![doc! { "body": "abcdefghijklmnop" }]),
        );
        let db = MongoDatabase::new(
            backend,
            DatabaseConfig::new().with_max_string_length(10),
            Arc::new(NoOpLogger::new()),
        )
        .unwrap();

        let result = db.run(&doc! { "find": "notes" }, Fetch::All).unwrap();
        assert!(result.contains("abcdefghij..."));
    }

    #[test]
    fn test_run_no_throw_on_unparsable_command() {
        let db = database(DatabaseConfig::new()).unwrap();

        let result = db.run_no_throw("{not json");
        assert!(result.starts_with("Error: "));
    }

    #[test]
    fn test_run_no_throw_happy_path() {
        let db = database(DatabaseConfig::new()).unwrap();

        let result = db.run_no_throw(r#"{"find": "orders"}"#);
        assert!(result.contains("A-1"));
    }

    #[test]
    fn test_fetch_parsing() {
        assert_eq!("all".parse::<Fetch>().unwrap(), Fetch::All);
        assert_eq!("one".parse::<Fetch>().unwrap(), Fetch::One);

        let err = "many".parse::<Fetch>().unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidFetch(ref v) if v == "many"));
    }
}
