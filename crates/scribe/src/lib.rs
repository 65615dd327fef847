//! # `scribe` – The umbrella crate
//!
//! This crate is a *one-stop import* that glues together the building-block
//! crates in the workspace
//!
//! | Crate                  | What it provides                                                        |
//! |------------------------|-------------------------------------------------------------------------|
//! | **`scribe-core`**      | `CompletionClient` trait, `MessageAgent`, errors, observer hook         |
//! | **`scribe-prompt`**    | The article instruction template                                        |
//! | **`scribe-article`**   | `ArticleGenerator` and summary/body segmentation                        |
//! | **`scribe-openai`**    | HTTP client implementing `CompletionClient` for OpenAI-compatible APIs  |
//!
//! The `openai` feature (on by default) re-exports the adapter crate; turn it
//! off to stay provider-agnostic and plug in your own client.
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use scribe::{
//!     MessageAgent,
//!     article::ArticleGenerator,
//!     config::AgentConfig,
//!     openai::OpenAiAdapterBuilder,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = OpenAiAdapterBuilder::new_from_env().build()?;
//!     let agent = MessageAgent::new(AgentConfig::new("gpt-4o-mini")?, backend);
//!     let generator = ArticleGenerator::new(agent).with_language("English");
//!
//!     let article = generator.generate("The year 2000 problem").await?;
//!     println!("{}\n\n{}", article.summary, article.body);
//!     Ok(())
//! }
//! ```
#![doc(html_root_url = "https://docs.rs/scribe/latest")]

pub use scribe_article as article;
pub use scribe_core::*;
pub use scribe_prompt as prompt;

#[cfg(feature = "openai")]
pub use scribe_openai as openai;
