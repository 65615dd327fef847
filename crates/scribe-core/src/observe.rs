//! Observability hook for the pipeline.
//!
//! The agent and the generator never log through a global directly. They
//! report [`AgentEvent`]s to an injected [`Observer`]; the default
//! [`TracingObserver`] forwards them to `tracing`, tests plug in a recorder.

use std::fmt::Debug;

/// Number of characters kept by [`preview`].
pub const PREVIEW_CHARS: usize = 100;

/// Something worth reporting while a request moves through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentEvent {
    /// A message is about to be sent; `preview` is truncated.
    MessageSent { model: String, preview: String },
    /// The provider answered with `chars` characters of text.
    ResponseReceived { chars: usize },
    /// The provider call failed.
    MessageFailed { cause: String },
    /// An article was requested for `title`.
    ArticleRequested { title: String },
    /// The article was parsed successfully.
    ArticleGenerated { paragraphs: usize, summary: String },
    /// Fewer paragraphs than the configured threshold were generated.
    NotEnoughParagraphs { found: usize, required: usize },
    /// The summary is shorter than the configured threshold.
    ShortSummary { chars: usize, minimum: usize },
    /// Generation failed; `cause` is the error shown to the caller.
    ArticleFailed { cause: String },
}

pub trait Observer: Send + Sync + Debug {
    fn observe(&self, event: AgentEvent);
}

/// Forwards events to the `tracing` subscriber of the host process.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn observe(&self, event: AgentEvent) {
        match event {
            AgentEvent::MessageSent { model, preview } => {
                tracing::info!(%model, %preview, "sending message");
            }
            AgentEvent::ResponseReceived { chars } => {
                tracing::info!(chars, "received response");
            }
            AgentEvent::MessageFailed { cause } => {
                tracing::error!(%cause, "AI communication error");
            }
            AgentEvent::ArticleRequested { title } => {
                tracing::info!(%title, "generating article");
            }
            AgentEvent::ArticleGenerated {
                paragraphs,
                summary,
            } => {
                tracing::info!(paragraphs, %summary, "article generated");
            }
            AgentEvent::NotEnoughParagraphs { found, required } => {
                tracing::warn!(found, required, "not enough paragraphs");
            }
            AgentEvent::ShortSummary { chars, minimum } => {
                tracing::warn!(chars, minimum, "summary is too short");
            }
            AgentEvent::ArticleFailed { cause } => {
                tracing::error!(%cause, "article generation failed");
            }
        }
    }
}

/// First [`PREVIEW_CHARS`] characters of `text`, with `...` appended when
/// something was cut. Counts characters, never splits a code point.
pub fn preview(text: &str) -> String {
    let mut chars = text.char_indices();
    match chars.nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}
