use std::{env, sync::Arc, time::Duration};

use scribe_core::error::{Result, ScribeError};

use crate::client::{DEFAULT_TIMEOUT, OpenAiClient};

/// Thin wrapper that wires the HTTP client [`OpenAiClient`] into a value that
/// implements [`scribe_core::provider::CompletionClient`].
///
/// * stores the API key and base URL inside the client,
/// * owns a shareable, connection-pooled `reqwest::Client`,
/// * provides a fluent [`OpenAiAdapterBuilder`] so callers don’t have to juggle
///   `Option<String>` manually.
#[derive(Debug, Clone)]
pub struct OpenAiAdapter {
    pub(crate) client: Arc<OpenAiClient>,
    pub(crate) temperature: Option<f64>,
}

impl OpenAiAdapter {
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

/// Builder for [`OpenAiAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use scribe_openai::OpenAiAdapterBuilder;
///
/// let backend = OpenAiAdapterBuilder::new_from_env()
///     .build()
///     .expect("OPENAI_API_KEY must be set");
/// ```
#[derive(Debug, Default)]
pub struct OpenAiAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
    pub(crate) timeout: Option<Duration>,
    pub(crate) temperature: Option<f64>,
}

impl OpenAiAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor that reads `OPENAI_API_KEY` and, if present,
    /// `OPENAI_BASE_URL`.
    ///
    /// Missing keys only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var("OPENAI_API_KEY").ok(),
            base_url: env::var("OPENAI_BASE_URL").ok(),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the adapter at any OpenAI-compatible gateway.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Request deadline; defaults to 30 seconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`ScribeError::Configuration`] – the API key is missing or blank, or
    ///   the HTTP client could not be built.
    pub fn build(self) -> Result<OpenAiAdapter> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(ScribeError::Configuration(
                "missing env variable: `OPENAI_API_KEY`".into(),
            ))?;

        let client = OpenAiClient::new(
            api_key,
            self.base_url,
            self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        )
        .map_err(|err| ScribeError::Configuration(err.to_string()))?;

        Ok(OpenAiAdapter {
            client: Arc::new(client),
            temperature: self.temperature,
        })
    }
}
