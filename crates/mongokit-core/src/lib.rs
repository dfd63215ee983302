//! MongoKit Core
//!
//! Read-only MongoDB access layer and agent tools.
//! This crate lets an autonomous LLM agent explore and query a document
//! database safely: collection enumeration under include/exclude filters,
//! schema summaries via sampling, and contained command execution, exposed
//! as four string-in/string-out tools an agent loop can sequence.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use mongokit_core::database::{DatabaseConfig, MongoDatabase};
//! use mongokit_core::checker::GenaiModel;
//! use mongokit_core::tools::{DatabaseTool, DatabaseToolkit};
//! use mongokit_core::logging::ConsoleLogger;
//!
//! let logger = Arc::new(ConsoleLogger::new());
//! let db = MongoDatabase::from_uri(
//!     "mongodb://localhost:27017",
//!     "crm",
//!     DatabaseConfig::new().with_exclude_collections(["audit_log"]),
//!     logger.clone(),
//! )?;
//! let model = GenaiModel::new("gpt-4o-mini", logger.clone())?;
//! let toolkit = DatabaseToolkit::new(Arc::new(db), Arc::new(model), logger);
//!
//! let collections = toolkit.run(DatabaseTool::ListCollections, "")?;
//! ```
//!
//! Command execution is read-only by convention, not enforcement: the
//! executor will submit whatever command it is given, and safety against
//! writes relies on the agent's prompting (see [`tools::agent_prefix`]).

pub mod checker;
pub mod database;
pub mod logging;
pub mod tools;

// Re-export commonly used types
pub use checker::{CheckerError, CompletionModel, GenaiModel, MockModel};
pub use database::{
    DatabaseBackend, DatabaseConfig, DatabaseError, Fetch, MemoryBackend, MongoBackend,
    MongoDatabase,
};
pub use logging::{ConsoleLogger, Logger, NoOpLogger, SharedLogger};
pub use tools::{DatabaseTool, DatabaseToolkit, ToolError};
