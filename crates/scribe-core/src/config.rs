//! Agent configuration.
//!
//! The model is a plain provider identifier (`"gpt-4o"`, `"gpt-4o-mini"`, …)
//! handed to the [`CompletionClient`](crate::provider::CompletionClient) as-is.

use crate::error::{Result, ScribeError};

/// Model used when the host does not configure one.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Immutable settings owned by one [`MessageAgent`](crate::agent::MessageAgent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    model: String,
    web_search: bool,
}

impl AgentConfig {
    /// Create a configuration for `model` with web search disabled.
    ///
    /// # Errors
    ///
    /// * [`ScribeError::InvalidArgument`] – if `model` is blank.
    pub fn new(model: impl Into<String>) -> Result<Self> {
        let model = model.into();
        if model.trim().is_empty() {
            return Err(ScribeError::invalid_argument("model cannot be empty"));
        }

        Ok(Self {
            model,
            web_search: false,
        })
    }

    pub fn with_web_search(mut self, web_search: bool) -> Self {
        self.web_search = web_search;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn web_search(&self) -> bool {
        self.web_search
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_owned(),
            web_search: false,
        }
    }
}
