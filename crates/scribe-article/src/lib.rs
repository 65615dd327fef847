//! Turns a topic into a structured article.
//!
//! [`ArticleGenerator`] builds the prompt, sends it through a
//! [`MessageAgent`](scribe_core::MessageAgent) and splits the answer into an
//! [`ArticleResult`] with [`segment::paragraphs`].
pub mod generator;
pub mod outputs;
pub mod segment;

pub use generator::ArticleGenerator;
pub use outputs::ArticleResult;
