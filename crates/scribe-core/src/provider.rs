use std::{future::Future, pin::Pin, sync::Arc};

use crate::{error::ProviderError, generic::Message};

/// Boxed future returned by [`CompletionClient::complete`].
pub type CompletionFuture<'a> =
    Pin<Box<dyn Future<Output = Result<String, ProviderError>> + Send + 'a>>;

/// A **completion client** turns a list of chat messages into a single
/// network round-trip against a concrete provider and returns the generated
/// text.
///
/// The trait is intentionally minimal:
///
/// * **One method** – `complete`, a single non-streaming request/response
///   exchange. No retries happen at this layer.
/// * **One error type** – every failure (transport, status, malformed
///   payload, timeout) is reported as a [`ProviderError`].
///
/// The method returns a [`Pin<Box<dyn Future>>`] so the trait stays object
/// safe without pulling in `async_trait`. Implementations must tolerate
/// concurrent calls.
pub trait CompletionClient: Send + Sync {
    /// Ask `model` to answer `messages`. Inputs are borrowed and never
    /// mutated.
    fn complete<'a>(
        &'a self,
        model: &'a str,
        messages: &'a [Message],
        web_search: bool,
    ) -> CompletionFuture<'a>;
}

impl<C: CompletionClient + ?Sized> CompletionClient for Arc<C> {
    fn complete<'a>(
        &'a self,
        model: &'a str,
        messages: &'a [Message],
        web_search: bool,
    ) -> CompletionFuture<'a> {
        (**self).complete(model, messages, web_search)
    }
}

impl<C: CompletionClient + ?Sized> CompletionClient for Box<C> {
    fn complete<'a>(
        &'a self,
        model: &'a str,
        messages: &'a [Message],
        web_search: bool,
    ) -> CompletionFuture<'a> {
        (**self).complete(model, messages, web_search)
    }
}
