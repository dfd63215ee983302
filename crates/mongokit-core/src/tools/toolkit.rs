//! The four database tools and their dispatch

use std::sync::Arc;

use thiserror::Error;

use crate::checker::{render_query_checker_prompt, CheckerError, CompletionModel};
use crate::database::MongoDatabase;
use crate::logging::SharedLogger;

/// Errors surfaced by the tool layer
///
/// Operational database failures never appear here; those are already
/// rendered into the output string by the layers below. What remains is the
/// unsupported-async contract and checker completion failures.
#[derive(Error, Debug)]
pub enum ToolError {
    /// The tool has no asynchronous form
    #[error("{0} does not support async invocation")]
    AsyncNotSupported(&'static str),

    /// The query checker's model call failed
    #[error(transparent)]
    Checker(#[from] CheckerError),
}

pub type ToolResult<T> = Result<T, ToolError>;

/// The closed set of tools exposed to the agent loop
///
/// Each tool has a fixed name, a natural-language description consumed by
/// the agent's planner, and a single-string-in/single-string-out contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseTool {
    /// List the usable collections
    ListCollections,
    /// Describe collections: structure and sample documents
    CollectionInfo,
    /// Execute a database command
    Query,
    /// Review a candidate command with the model before executing it
    QueryChecker,
}

impl DatabaseTool {
    /// Every tool, in registration order
    pub const ALL: [Self; 4] = [
        Self::ListCollections,
        Self::CollectionInfo,
        Self::Query,
        Self::QueryChecker,
    ];

    /// Fixed tool name
    pub fn name(&self) -> &'static str {
        match self {
            Self::ListCollections => "mongodb_list_collections",
            Self::CollectionInfo => "mongodb_collection_info",
            Self::Query => "mongodb_query",
            Self::QueryChecker => "mongodb_command_checker",
        }
    }

    /// Description shown to the agent's planner
    pub fn description(&self) -> &'static str {
        match self {
            Self::ListCollections => {
                "Input is an empty string, output is a comma-separated list of \
                 collections in the database."
            }
            Self::CollectionInfo => {
                "Input to this tool is a comma-separated list of collections, output \
                 is the structure and sample documents for those collections. Be sure \
                 that the collections actually exist by calling \
                 mongodb_list_collections first! \
                 Example Input: 'collection1, collection2, collection3'"
            }
            Self::Query => {
                "Input to this tool is a detailed and correct MongoDB command, output \
                 is a result from the database. If the command is not correct, an \
                 error message will be returned. If an error is returned, rewrite the \
                 command, check the command, and try again."
            }
            Self::QueryChecker => {
                "Use this tool to double check if your command is correct before \
                 executing it. Always use this tool before executing a command with \
                 mongodb_query!"
            }
        }
    }
}

/// Toolkit binding the four tools to a database handle and a checker model
///
/// The agent loop picks a tool, supplies a string input, and receives a
/// string output; no tool calls another.
pub struct DatabaseToolkit {
    db: Arc<MongoDatabase>,
    model: Arc<dyn CompletionModel>,
    logger: SharedLogger,
}

impl DatabaseToolkit {
    /// Create a toolkit over a database handle and a completion model
    pub fn new(
        db: Arc<MongoDatabase>,
        model: Arc<dyn CompletionModel>,
        logger: SharedLogger,
    ) -> Self {
        Self { db, model, logger }
    }

    /// Invoke a tool synchronously
    ///
    /// This is the normal path: every tool is blocking from the agent
    /// loop's perspective. Lookup and database failures come back inside
    /// the output string, never as `Err`; only checker completion failures
    /// surface as errors.
    pub fn run(&self, tool: DatabaseTool, input: &str) -> ToolResult<String> {
        self.logger
            .debug(&format!("[DatabaseToolkit] run {}: {input}", tool.name()));

        match tool {
            DatabaseTool::ListCollections => {
                Ok(self.db.usable_collection_names().join(", "))
            }
            DatabaseTool::CollectionInfo => {
                // Splits on the exact substring ", ". An input like
                // "users,orders" therefore stays one (nonexistent) name and
                // fails lookup. Preserved as-is; callers follow the example
                // format in the tool description.
                let names: Vec<String> =
                    input.split(", ").map(str::to_string).collect();
                Ok(self.db.collection_info_no_throw(Some(&names)))
            }
            DatabaseTool::Query => Ok(self.db.run_no_throw(input)),
            DatabaseTool::QueryChecker => {
                let prompt = render_query_checker_prompt(input);
                Ok(self.model.complete(&prompt)?)
            }
        }
    }

    /// Invoke a tool asynchronously
    ///
    /// Only the query checker has a genuine asynchronous path; the other
    /// three tools fail immediately rather than silently blocking.
    pub async fn run_async(&self, tool: DatabaseTool, input: &str) -> ToolResult<String> {
        match tool {
            DatabaseTool::QueryChecker => {
                let prompt = render_query_checker_prompt(input);
                Ok(self.model.complete_async(&prompt).await?)
            }
            other => Err(ToolError::AsyncNotSupported(other.name())),
        }
    }
}
