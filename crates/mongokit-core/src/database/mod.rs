//! Read-only database access layer
//!
//! ## Architecture
//!
//! [`MongoDatabase`] is the single handle an agent session holds: it takes a
//! collection snapshot at construction, applies the include/exclude filter,
//! and exposes collection listing, schema inspection (count + sample
//! documents), and command execution with value truncation and
//! error-to-string containment.
//!
//! The store itself sits behind the [`DatabaseBackend`] trait:
//! [`MongoBackend`] talks to a live deployment through the blocking driver
//! API, [`MemoryBackend`] keeps tests deterministic and offline.

mod backend;
mod config;
mod error;
mod memory;
mod mongo;
mod truncate;
mod wrapper;

pub use backend::DatabaseBackend;
pub use config::{DatabaseConfig, DEFAULT_MAX_STRING_LENGTH, DEFAULT_SAMPLE_DOCS};
pub use error::{DatabaseError, DatabaseResult};
pub use memory::MemoryBackend;
pub use mongo::MongoBackend;
pub use truncate::{truncate_document, truncate_value};
pub use wrapper::{Fetch, MongoDatabase};
