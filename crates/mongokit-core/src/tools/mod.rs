//! Tool surface for the agent loop
//!
//! Four independently invocable tools over one [`MongoDatabase`] handle:
//!
//! | tool                       | input                          | output                         |
//! |----------------------------|--------------------------------|--------------------------------|
//! | `mongodb_list_collections` | ignored                        | comma-joined usable collections|
//! | `mongodb_collection_info`  | `"coll1, coll2"`               | counts + sample documents      |
//! | `mongodb_query`            | a JSON command                 | results, or `"Error: ..."`     |
//! | `mongodb_command_checker`  | a candidate command            | model-reviewed command         |
//!
//! The set is closed by design: a [`DatabaseTool`] enum rather than an open
//! subclassing hierarchy, since the action set is fixed and small.
//!
//! [`MongoDatabase`]: crate::database::MongoDatabase

mod prompt;
mod toolkit;

pub use prompt::{agent_prefix, AGENT_PREFIX_TEMPLATE, AGENT_SUFFIX};
pub use toolkit::{DatabaseTool, DatabaseToolkit, ToolError, ToolResult};
