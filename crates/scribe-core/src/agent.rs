//! Message agent that forwards a single user message to a
//! [`CompletionClient`].
//!
//! The agent is **generic over the client type `C`**, so callers can either
//! keep the concrete adapter type or erase it to `dyn CompletionClient`:
//!
//! ```rust
//! use std::sync::Arc;
//! use scribe_core::{agent::MessageAgent, config::AgentConfig, provider::CompletionClient};
//!
//! fn erase(client: Arc<dyn CompletionClient>) -> MessageAgent {
//!     MessageAgent::from_shared(AgentConfig::default(), client)
//! }
//! # let _ = erase;
//! ```
use std::sync::Arc;

use crate::{
    config::AgentConfig,
    error::{Result, ScribeError},
    generic::{Message, ResponseText},
    observe::{preview, AgentEvent, Observer, TracingObserver},
    provider::CompletionClient,
};

/// An agent bound to a single completion client.
///
/// Cloning is cheap: the client and the observer sit behind an `Arc`, so
/// one agent can be shared by every request handler.
pub struct MessageAgent<C: ?Sized = dyn CompletionClient> {
    config: AgentConfig,
    client: Arc<C>,
    observer: Arc<dyn Observer>,
}

impl<C: ?Sized> Clone for MessageAgent<C> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            client: Arc::clone(&self.client),
            observer: Arc::clone(&self.observer),
        }
    }
}

impl<C: ?Sized> std::fmt::Debug for MessageAgent<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageAgent")
            .field("config", &self.config)
            .field("observer", &self.observer)
            .finish_non_exhaustive()
    }
}

impl<C> MessageAgent<C>
where
    C: CompletionClient,
{
    /// Create a new agent that delegates all calls to `client`.
    pub fn new(config: AgentConfig, client: C) -> Self {
        Self::from_shared(config, Arc::new(client))
    }
}

impl<C> MessageAgent<C>
where
    C: CompletionClient + ?Sized,
{
    /// Create an agent around a client that is already shared.
    pub fn from_shared(config: AgentConfig, client: Arc<C>) -> Self {
        Self {
            config,
            client,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replace the default [`TracingObserver`].
    pub fn with_observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observer = observer;
        self
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Access the underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn observer(&self) -> &Arc<dyn Observer> {
        &self.observer
    }

    /// Send `text` as a single user message and return the provider's
    /// answer untouched.
    ///
    /// # Errors
    ///
    /// * [`ScribeError::InvalidArgument`] – `text` is blank; the client is not
    ///   called.
    /// * [`ScribeError::AgentCommunication`] – the client failed.
    pub async fn send_message(&self, text: &str) -> Result<ResponseText> {
        if text.trim().is_empty() {
            return Err(ScribeError::invalid_argument("message cannot be empty"));
        }

        self.observer.observe(AgentEvent::MessageSent {
            model: self.config.model().to_owned(),
            preview: preview(text),
        });

        let messages = [Message::user(text)];
        let answer = self
            .client
            .complete(self.config.model(), &messages, self.config.web_search())
            .await;

        match answer {
            Ok(message) => {
                self.observer.observe(AgentEvent::ResponseReceived {
                    chars: message.chars().count(),
                });
                Ok(ResponseText { message })
            }
            Err(err) => {
                self.observer.observe(AgentEvent::MessageFailed {
                    cause: err.to_string(),
                });
                Err(ScribeError::AgentCommunication(err))
            }
        }
    }
}
