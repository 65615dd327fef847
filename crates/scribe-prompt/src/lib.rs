pub mod template;

pub use template::{ArticlePrompt, DEFAULT_LANGUAGE, DEFAULT_TEMPLATE};
