//! Database backend trait definition
//!
//! The seam between [`MongoDatabase`] and a concrete store. The live
//! implementation is [`MongoBackend`]; [`MemoryBackend`] stands in for the
//! network in tests.
//!
//! [`MongoDatabase`]: crate::database::MongoDatabase
//! [`MongoBackend`]: crate::database::MongoBackend
//! [`MemoryBackend`]: crate::database::MemoryBackend

use mongodb::bson::Document;

use super::error::DatabaseResult;

/// Read-only access to one named database
///
/// Methods are synchronous: each tool invocation is blocking from the agent
/// loop's perspective. Implementations must be shareable across sequential
/// tool invocations for the life of an agent session.
pub trait DatabaseBackend: Send + Sync {
    /// Name of the database this backend is bound to
    fn database_name(&self) -> &str;

    /// List the names of all collections physically present
    fn list_collection_names(&self) -> DatabaseResult<Vec<String>>;

    /// Exact document count for a collection (not an estimate)
    fn count_documents(&self, collection: &str) -> DatabaseResult<u64>;

    /// Fetch up to `limit` documents from a collection
    ///
    /// No sort is applied: the order is implementation-defined (typically
    /// insertion/physical order) and not guaranteed stable across calls.
    fn sample_documents(&self, collection: &str, limit: usize)
        -> DatabaseResult<Vec<Document>>;

    /// Execute a database command and return its result documents
    ///
    /// `command` is an order-preserving document; the first key selects the
    /// operation. Replies that carry their results in a cursor batch are
    /// unwrapped into that batch, any other reply comes back as a
    /// one-element sequence.
    fn run_command(&self, command: Document) -> DatabaseResult<Vec<Document>>;
}
