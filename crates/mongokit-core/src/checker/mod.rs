//! LLM-backed command checking
//!
//! The query-checker tool reviews a candidate command with a language model
//! before it is executed. The model sits behind [`CompletionModel`]:
//! [`GenaiModel`] reaches real providers through the `genai` crate, and
//! [`MockModel`] keeps tests deterministic.

mod genai_model;
mod mock;
mod prompt;
mod traits;

pub use genai_model::GenaiModel;
pub use mock::{MockMode, MockModel};
pub use prompt::{render_query_checker_prompt, QUERY_CHECKER_TEMPLATE};
pub use traits::{CheckerError, CheckerResult, CompletionModel};
