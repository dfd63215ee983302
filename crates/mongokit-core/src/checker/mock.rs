//! Mock completion model for testing
//!
//! Deterministic, configurable responses without network dependencies.

use async_trait::async_trait;

use super::traits::{CheckerError, CheckerResult, CompletionModel};

/// Mock response mode
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Echo the prompt back
    Echo,
    /// Return a fixed response
    Fixed(String),
    /// Fail with an error message
    Error(String),
}

/// Mock completion model
pub struct MockModel {
    mode: MockMode,
}

impl MockModel {
    /// Create an echo model (returns the prompt)
    pub fn echo() -> Self {
        Self {
            mode: MockMode::Echo,
        }
    }

    /// Create a fixed-response model
    pub fn fixed(response: impl Into<String>) -> Self {
        Self {
            mode: MockMode::Fixed(response.into()),
        }
    }

    /// Create an error-producing model
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            mode: MockMode::Error(message.into()),
        }
    }

    fn respond(&self, prompt: &str) -> CheckerResult<String> {
        match &self.mode {
            MockMode::Echo => Ok(prompt.to_string()),
            MockMode::Fixed(response) => Ok(response.clone()),
            MockMode::Error(message) => Err(CheckerError::api("mock", message.clone())),
        }
    }
}

#[async_trait]
impl CompletionModel for MockModel {
    fn name(&self) -> &str {
        "mock"
    }

    fn complete(&self, prompt: &str) -> CheckerResult<String> {
        self.respond(prompt)
    }

    async fn complete_async(&self, prompt: &str) -> CheckerResult<String> {
        self.respond(prompt)
    }
}
