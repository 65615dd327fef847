//! Provider-agnostic building blocks of the Scribe article service.
//!
//! * [`provider::CompletionClient`] – capability trait over a text-completion
//!   backend.
//! * [`agent::MessageAgent`] – validates a message, sends it through the
//!   client and translates failures.
//! * [`error`] – the unified error taxonomy every layer reports through.
//! * [`observe`] – the injected observability hook.
pub mod agent;
pub mod config;
pub mod error;
pub mod generic;
pub mod observe;
pub mod provider;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use agent::MessageAgent;
