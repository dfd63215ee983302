//! Genai-backed completion model
//!
//! All real LLM providers are reached through the `genai` crate, which
//! handles provider protocols, auth, and error mapping. This is a
//! non-streaming facade: the checker needs one completed response, not a
//! token stream.

use async_trait::async_trait;

use genai::chat::{ChatMessage, ChatRequest};
use genai::Client;

use crate::logging::SharedLogger;

use super::traits::{CheckerError, CheckerResult, CompletionModel};

/// Completion model backed by a genai client
///
/// `model` is a genai model identifier (e.g. `"gpt-4o-mini"`); credentials
/// resolve through genai's environment lookup.
pub struct GenaiModel {
    client: Client,
    model: String,
    runtime: tokio::runtime::Runtime,
    logger: SharedLogger,
}

impl GenaiModel {
    /// Create a model facade
    ///
    /// Builds the current-thread runtime that backs the blocking
    /// [`complete`] path.
    ///
    /// [`complete`]: CompletionModel::complete
    pub fn new(model: impl Into<String>, logger: SharedLogger) -> CheckerResult<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| CheckerError::Runtime(e.to_string()))?;

        Ok(Self {
            client: Client::default(),
            model: model.into(),
            runtime,
            logger,
        })
    }
}

#[async_trait]
impl CompletionModel for GenaiModel {
    fn name(&self) -> &str {
        &self.model
    }

    /// Blocking completion
    ///
    /// Drives the async call on the internally-owned runtime. Must not be
    /// called from inside an async context; use [`complete_async`] there.
    ///
    /// [`complete_async`]: CompletionModel::complete_async
    fn complete(&self, prompt: &str) -> CheckerResult<String> {
        self.runtime.block_on(self.complete_async(prompt))
    }

    async fn complete_async(&self, prompt: &str) -> CheckerResult<String> {
        self.logger.debug(&format!(
            "[GenaiModel] completion request: model={}, prompt_len={}",
            self.model,
            prompt.len()
        ));

        let request = ChatRequest::new(vec![ChatMessage::user(prompt)]);
        let response = self
            .client
            .exec_chat(&self.model, request, None)
            .await
            .map_err(|e| CheckerError::api(&self.model, e.to_string()))?;

        response
            .first_text()
            .map(str::to_string)
            .ok_or(CheckerError::EmptyResponse)
    }
}
