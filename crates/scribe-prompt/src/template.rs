//! Instruction template used to ask the provider for an article.
//!
//! A template is plain text with two placeholders, `{title}` and
//! `{language}`. Substitution happens in a single left-to-right pass: the
//! substituted values are never scanned again, and any other `{…}` text is
//! emitted literally.
//!
//! ```rust
//! use scribe_prompt::template::ArticlePrompt;
//!
//! let prompt = ArticlePrompt::with_template("Write about {title} in {language}.");
//! assert_eq!(prompt.format("rust", "English"), "Write about rust in English.");
//! ```
use std::borrow::Cow;

/// Language used when the caller does not pick one.
pub const DEFAULT_LANGUAGE: &str = "Russian";

/// Template shipped with the service.
///
/// Asks for a label-free summary paragraph first, then the article body,
/// no surrounding commentary and a fixed output language.
pub const DEFAULT_TEMPLATE: &str = "Generate an article titled: {title}. \
The first paragraph must be a short, self-contained summary of the article, \
without any label or heading. \
The article itself starts with the next paragraph and must not refer back to the summary. \
Do not add any statements or questions before or after the article. \
Separate paragraphs with a blank line. \
The article must be written in {language}.";

const TITLE: &str = "{title}";
const LANGUAGE: &str = "{language}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlePrompt {
    template: Cow<'static, str>,
}

impl Default for ArticlePrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticlePrompt {
    /// Prompt backed by [`DEFAULT_TEMPLATE`].
    pub fn new() -> Self {
        Self {
            template: Cow::Borrowed(DEFAULT_TEMPLATE),
        }
    }

    /// Replace the default template wholesale.
    pub fn with_template(template: impl Into<Cow<'static, str>>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Substitute `title` and `language` into the template.
    pub fn format(&self, title: &str, language: &str) -> String {
        let mut out = String::with_capacity(self.template.len() + title.len() + language.len());
        let mut rest = self.template.as_ref();

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];

            if let Some(after) = tail.strip_prefix(TITLE) {
                out.push_str(title);
                rest = after;
            } else if let Some(after) = tail.strip_prefix(LANGUAGE) {
                out.push_str(language);
                rest = after;
            } else {
                out.push('{');
                rest = &tail[1..];
            }
        }

        out.push_str(rest);
        out
    }
}
