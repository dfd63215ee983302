//! Completion model trait definition

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while obtaining a model completion
#[derive(Error, Debug)]
pub enum CheckerError {
    /// The completion request failed
    #[error("{model} completion failed: {message}")]
    Api { model: String, message: String },

    /// The model returned no text
    #[error("model returned an empty response")]
    EmptyResponse,

    /// The blocking facade could not build its runtime
    #[error("failed to build blocking runtime: {0}")]
    Runtime(String),
}

impl CheckerError {
    /// Create an API error
    pub fn api(model: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            model: model.into(),
            message: message.into(),
        }
    }
}

pub type CheckerResult<T> = Result<T, CheckerError>;

/// A text-completion model
///
/// The query-checker tool hands a review prompt to an implementation of this
/// trait and returns the model output verbatim. `complete` is the blocking
/// form used by the synchronous tool surface; `complete_async` is the only
/// genuinely asynchronous path in the crate.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Model identifier, for logs and error messages
    fn name(&self) -> &str;

    /// Complete a prompt, blocking until the model responds
    fn complete(&self, prompt: &str) -> CheckerResult<String>;

    /// Complete a prompt asynchronously
    async fn complete_async(&self, prompt: &str) -> CheckerResult<String>;
}
