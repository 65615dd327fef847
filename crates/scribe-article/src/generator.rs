//! Article generation on top of a [`MessageAgent`].
//!
//! ```text
//! title ─► ArticlePrompt::format ─► MessageAgent::send_message ─► paragraphs
//!       ─► validate ─► ArticleResult
//! ```
//!
//! The generator *holds* its agent and prompt instead of extending them, so
//! either can be swapped or tested on its own.
use std::sync::Arc;

use scribe_core::{
    MessageAgent,
    error::{ArticleGenerationError, Result, ScribeError},
    observe::{AgentEvent, Observer, preview},
    provider::CompletionClient,
};
use scribe_prompt::{ArticlePrompt, DEFAULT_LANGUAGE};

use crate::{outputs::ArticleResult, segment::paragraphs};

/// Paragraph count below which a warning is reported.
pub const DEFAULT_MIN_PARAGRAPHS: usize = 2;

/// Summary length, in characters, below which a warning is reported.
pub const DEFAULT_MIN_SUMMARY_CHARS: usize = 10;

pub struct ArticleGenerator<C: ?Sized = dyn CompletionClient> {
    agent: MessageAgent<C>,
    prompt: ArticlePrompt,
    language: String,
    min_paragraphs: usize,
    min_summary_chars: usize,
    observer: Arc<dyn Observer>,
}

impl<C: ?Sized> std::fmt::Debug for ArticleGenerator<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArticleGenerator")
            .field("agent", &self.agent)
            .field("prompt", &self.prompt)
            .field("language", &self.language)
            .field("min_paragraphs", &self.min_paragraphs)
            .field("min_summary_chars", &self.min_summary_chars)
            .finish_non_exhaustive()
    }
}

impl<C: ?Sized> Clone for ArticleGenerator<C> {
    fn clone(&self) -> Self {
        Self {
            agent: self.agent.clone(),
            prompt: self.prompt.clone(),
            language: self.language.clone(),
            min_paragraphs: self.min_paragraphs,
            min_summary_chars: self.min_summary_chars,
            observer: Arc::clone(&self.observer),
        }
    }
}

impl<C> ArticleGenerator<C>
where
    C: CompletionClient + ?Sized,
{
    /// Generator with the default prompt, language and thresholds. Events go
    /// to the agent's observer.
    pub fn new(agent: MessageAgent<C>) -> Self {
        let observer = Arc::clone(agent.observer());
        Self {
            agent,
            prompt: ArticlePrompt::new(),
            language: DEFAULT_LANGUAGE.to_owned(),
            min_paragraphs: DEFAULT_MIN_PARAGRAPHS,
            min_summary_chars: DEFAULT_MIN_SUMMARY_CHARS,
            observer,
        }
    }

    pub fn with_prompt(mut self, prompt: ArticlePrompt) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_min_paragraphs(mut self, min_paragraphs: usize) -> Self {
        self.min_paragraphs = min_paragraphs;
        self
    }

    pub fn with_min_summary_chars(mut self, min_summary_chars: usize) -> Self {
        self.min_summary_chars = min_summary_chars;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observer = observer;
        self
    }

    pub fn agent(&self) -> &MessageAgent<C> {
        &self.agent
    }

    pub fn prompt(&self) -> &ArticlePrompt {
        &self.prompt
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn min_paragraphs(&self) -> usize {
        self.min_paragraphs
    }

    /// Generate an article titled `title`.
    ///
    /// Too few paragraphs or a short summary are reported to the observer
    /// but do not fail the call.
    ///
    /// # Errors
    ///
    /// * [`ScribeError::InvalidArgument`] – `title` is blank; nothing is sent.
    /// * [`ScribeError::ArticleGeneration`] – the agent failed, or the answer
    ///   held no text at all.
    pub async fn generate(&self, title: &str) -> Result<ArticleResult> {
        if title.trim().is_empty() {
            return Err(ScribeError::invalid_argument("title cannot be empty"));
        }

        self.observer.observe(AgentEvent::ArticleRequested {
            title: title.to_owned(),
        });

        let prompt = self.prompt.format(title, &self.language);
        let response = match self.agent.send_message(&prompt).await {
            Ok(response) => response,
            Err(err) => return Err(self.fail(ArticleGenerationError::Failed(Box::new(err)))),
        };

        let parts = paragraphs(&response.message);
        if parts.len() < self.min_paragraphs {
            self.observer.observe(AgentEvent::NotEnoughParagraphs {
                found: parts.len(),
                required: self.min_paragraphs,
            });
        }

        let article = ArticleResult::from_paragraphs(&parts);
        if article.is_empty() {
            return Err(self.fail(ArticleGenerationError::Empty));
        }

        let summary_chars = article.summary.chars().count();
        if summary_chars < self.min_summary_chars {
            self.observer.observe(AgentEvent::ShortSummary {
                chars: summary_chars,
                minimum: self.min_summary_chars,
            });
        }

        self.observer.observe(AgentEvent::ArticleGenerated {
            paragraphs: parts.len(),
            summary: preview(&article.summary),
        });

        Ok(article)
    }

    fn fail(&self, err: ArticleGenerationError) -> ScribeError {
        self.observer.observe(AgentEvent::ArticleFailed {
            cause: err.to_string(),
        });
        err.into()
    }
}

#[cfg(test)]
mod tests {
    use scribe_core::{
        config::AgentConfig,
        testing::{RecordingObserver, ScriptedClient},
    };

    use super::*;

    fn generator(
        client: ScriptedClient,
    ) -> (ArticleGenerator<ScriptedClient>, Arc<RecordingObserver>) {
        let observer = Arc::new(RecordingObserver::default());
        let agent = MessageAgent::new(AgentConfig::new("test-model").unwrap(), client)
            .with_observer(observer.clone());
        (ArticleGenerator::new(agent), observer)
    }

    fn sent_prompts(generator: &ArticleGenerator<ScriptedClient>) -> Vec<String> {
        generator
            .agent()
            .client()
            .calls()
            .into_iter()
            .map(|call| call.messages[0].content.clone())
            .collect()
    }

    #[test]
    fn defaults() {
        let (generator, _) = generator(ScriptedClient::replying(""));
        assert_eq!(generator.language(), "Russian");
        assert_eq!(generator.min_paragraphs(), 2);
        assert_eq!(generator.prompt(), &ArticlePrompt::new());
    }

    #[test]
    fn custom_values() {
        let (generator, _) = generator(ScriptedClient::replying(""));
        let generator = generator
            .with_prompt(ArticlePrompt::with_template("Custom template: {title}"))
            .with_language("English")
            .with_min_paragraphs(3);

        assert_eq!(generator.prompt().template(), "Custom template: {title}");
        assert_eq!(generator.language(), "English");
        assert_eq!(generator.min_paragraphs(), 3);
    }

    #[tokio::test]
    async fn generate_end_to_end() {
        let (generator, observer) = generator(ScriptedClient::replying(
            "Summary text.\n\nBody paragraph one.\n\nBody paragraph two.",
        ));

        let article = generator.generate("Topic").await.unwrap();

        assert_eq!(
            article,
            ArticleResult {
                summary: "Summary text.".into(),
                body: "Body paragraph one.\n\nBody paragraph two.".into(),
            }
        );

        let prompts = sent_prompts(&generator);
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Topic"));
        assert!(prompts[0].contains("Russian"));

        let events = observer.events();
        assert!(events.contains(&AgentEvent::ArticleGenerated {
            paragraphs: 3,
            summary: "Summary text.".into(),
        }));
        assert!(!events.iter().any(|event| matches!(
            event,
            AgentEvent::NotEnoughParagraphs { .. } | AgentEvent::ShortSummary { .. }
        )));
    }

    #[tokio::test]
    async fn generate_with_custom_language() {
        let (generator, _) = generator(ScriptedClient::replying("Sum\n\nBody"));
        let generator = generator.with_language("English");

        generator.generate("Test Title").await.unwrap();

        assert!(sent_prompts(&generator)[0].contains("English"));
    }

    #[tokio::test]
    async fn generate_with_custom_template() {
        let (generator, _) = generator(ScriptedClient::replying("Sum\n\nBody"));
        let generator =
            generator.with_prompt(ArticlePrompt::with_template("Write {title} in {language}"));

        generator.generate("Rust").await.unwrap();

        assert_eq!(sent_prompts(&generator), vec!["Write Rust in Russian"]);
    }

    #[tokio::test]
    async fn blank_title_is_rejected_before_any_call() {
        let (generator, observer) = generator(ScriptedClient::replying("unused"));

        for title in ["", "   ", "\n", "\t"] {
            let err = generator.generate(title).await.unwrap_err();
            assert!(matches!(err, ScribeError::InvalidArgument(_)));
            assert_eq!(err.to_string(), "title cannot be empty");
        }

        assert!(sent_prompts(&generator).is_empty());
        assert!(observer.events().is_empty());
    }

    #[tokio::test]
    async fn single_paragraph_is_valid_but_reported() {
        let (generator, observer) = generator(ScriptedClient::replying("Only one paragraph"));

        let article = generator.generate("Test Title").await.unwrap();

        assert_eq!(article.summary, "Only one paragraph");
        assert_eq!(article.body, "");
        assert!(observer.events().contains(&AgentEvent::NotEnoughParagraphs {
            found: 1,
            required: 2
        }));
    }

    #[tokio::test]
    async fn extra_blank_lines_are_collapsed() {
        let (generator, _) = generator(ScriptedClient::replying("First\n\n\n\nSecond\n\n\nThird"));

        let article = generator.generate("Test Title").await.unwrap();

        assert_eq!(article.summary, "First");
        assert_eq!(article.body, "Second\n\nThird");
    }

    #[tokio::test]
    async fn paragraphs_are_trimmed() {
        let (generator, _) =
            generator(ScriptedClient::replying("  First  \n\n  Second  \n\n  Third  "));

        let article = generator.generate("Test Title").await.unwrap();

        assert_eq!(article.summary, "First");
        assert_eq!(article.body, "Second\n\nThird");
    }

    #[tokio::test]
    async fn short_summary_is_reported() {
        let (generator, observer) = generator(ScriptedClient::replying("Short\n\nBody text"));

        let article = generator.generate("Test Title").await.unwrap();

        assert_eq!(article.summary, "Short");
        assert!(observer.events().contains(&AgentEvent::ShortSummary {
            chars: 5,
            minimum: 10
        }));
    }

    #[tokio::test]
    async fn empty_response_fails() {
        for answer in ["", "   \n\n   \n\n"] {
            let (generator, observer) = generator(ScriptedClient::replying(answer));

            let err = generator.generate("Test Title").await.unwrap_err();

            assert!(matches!(
                err,
                ScribeError::ArticleGeneration(ArticleGenerationError::Empty)
            ));
            assert!(err.to_string().contains("empty"));
            assert!(observer.events().contains(&AgentEvent::ArticleFailed {
                cause: "generated article is empty".into()
            }));
        }
    }

    #[tokio::test]
    async fn client_failure_surfaces_as_article_generation_error() {
        let (generator, _) = generator(ScriptedClient::failing("Agent error"));

        let err = generator.generate("Test Title").await.unwrap_err();

        let ScribeError::ArticleGeneration(ArticleGenerationError::Failed(cause)) = &err else {
            panic!("expected ArticleGeneration, got {err:?}");
        };
        assert!(matches!(**cause, ScribeError::AgentCommunication(_)));
        assert_eq!(
            err.to_string(),
            "article generation failed: failed to communicate with AI: Agent error"
        );
    }

    #[tokio::test]
    async fn blank_custom_template_fails_as_generation_error() {
        let (generator, _) = generator(ScriptedClient::replying("unused"));
        let generator = generator.with_prompt(ArticlePrompt::with_template("   "));

        let err = generator.generate("Title").await.unwrap_err();

        assert!(matches!(err, ScribeError::ArticleGeneration(_)));
        assert_eq!(
            err.to_string(),
            "article generation failed: message cannot be empty"
        );
        assert!(sent_prompts(&generator).is_empty());
    }
}
