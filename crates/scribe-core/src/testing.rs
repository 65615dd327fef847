//! Test doubles shared by the workspace crates.
//!
//! Enabled for this crate's own tests and, for downstream crates, through the
//! `test-util` feature.
use std::sync::Mutex;

use crate::{
    error::ProviderError,
    generic::Message,
    observe::{AgentEvent, Observer},
    provider::{CompletionClient, CompletionFuture},
};

/// Arguments of one [`CompletionClient::complete`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub model: String,
    pub messages: Vec<Message>,
    pub web_search: bool,
}

/// Completion client that answers every call with the same scripted outcome
/// and records what it was asked.
#[derive(Debug)]
pub struct ScriptedClient {
    outcome: Result<String, String>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedClient {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            outcome: Ok(text.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(cause: impl Into<String>) -> Self {
        Self {
            outcome: Err(cause.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("call log poisoned").clone()
    }
}

impl CompletionClient for ScriptedClient {
    fn complete<'a>(
        &'a self,
        model: &'a str,
        messages: &'a [Message],
        web_search: bool,
    ) -> CompletionFuture<'a> {
        self.calls
            .lock()
            .expect("call log poisoned")
            .push(RecordedCall {
                model: model.to_owned(),
                messages: messages.to_vec(),
                web_search,
            });

        let outcome = self.outcome.clone().map_err(ProviderError::new);
        Box::pin(async move { outcome })
    }
}

/// Observer that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<AgentEvent>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<AgentEvent> {
        self.events.lock().expect("event log poisoned").clone()
    }
}

impl Observer for RecordingObserver {
    fn observe(&self, event: AgentEvent) {
        self.events.lock().expect("event log poisoned").push(event);
    }
}
