//! Unified error type exposed by **`scribe-core`**.
//!
//! Every component catches the failures of the layer below and re-wraps them
//! into one of these variants before bubbling them up:
//!
//! ```text
//! CompletionClient ──ProviderError──► MessageAgent ──AgentCommunication──►
//!     ArticleGenerator ──ArticleGeneration──► caller
//! ```
//!
//! Provider crates convert their internal errors into a [`ProviderError`];
//! callers of the agent or the generator never see a transport error type.

use std::error::Error as StdError;

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ScribeError>;

#[derive(Debug, Error)]
pub enum ScribeError {
    /// The caller passed empty or missing input. Raised before any call to
    /// the provider is made.
    #[error("{0}")]
    InvalidArgument(String),

    /// The message agent could not obtain an answer from the provider.
    #[error("failed to communicate with AI: {0}")]
    AgentCommunication(#[source] ProviderError),

    /// Article generation failed, either while talking to the agent or
    /// because the generated text was unusable.
    #[error(transparent)]
    ArticleGeneration(#[from] ArticleGenerationError),

    /// A component was assembled with unusable settings.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl ScribeError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// `true` if the failure was caused by the caller's input rather than by
    /// the service or its provider.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// The single error kind surfaced by the article generator.
#[derive(Debug, Error)]
pub enum ArticleGenerationError {
    #[error("article generation failed: {0}")]
    Failed(#[source] Box<ScribeError>),

    #[error("generated article is empty")]
    Empty,
}

/// Failure reported by a [`CompletionClient`](crate::provider::CompletionClient)
/// when the remote call could not be completed.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ProviderError {
    message: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap a lower-level error, keeping it reachable through
    /// [`std::error::Error::source`].
    pub fn from_source(source: impl StdError + Send + Sync + 'static) -> Self {
        Self {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
