use std::sync::Arc;

use scribe::MessageAgent;
use scribe::article::ArticleGenerator;
use scribe::config::AgentConfig;
use scribe::error::Result;
use scribe::openai::{OpenAiAdapter, OpenAiAdapterBuilder};
use scribe::prompt::ArticlePrompt;
use scribe::provider::CompletionClient;

use crate::settings::{AppSettings, ProviderSettings, Settings};

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub agent: MessageAgent,
    pub generator: ArticleGenerator,
    pub info: Arc<AppSettings>,
}

impl AppState {
    /// Wires the agent and the article generator around `client`.
    pub fn new(settings: &Settings, client: Arc<dyn CompletionClient>) -> Result<Self> {
        let config = AgentConfig::new(settings.agent.default_model.as_str())?
            .with_web_search(settings.agent.web_search);
        let agent: MessageAgent = MessageAgent::from_shared(config, client);

        let mut generator = ArticleGenerator::new(agent.clone())
            .with_language(settings.agent.language.as_str())
            .with_min_paragraphs(settings.agent.min_paragraphs);
        if let Some(template) = &settings.agent.prompt_template {
            generator = generator.with_prompt(ArticlePrompt::with_template(template.clone()));
        }

        Ok(Self {
            agent,
            generator,
            info: Arc::new(settings.app.clone()),
        })
    }
}

/// Builds the OpenAI-compatible completion client from the provider section.
pub fn provider(settings: &ProviderSettings) -> Result<OpenAiAdapter> {
    let mut builder = OpenAiAdapterBuilder::new().with_timeout(settings.timeout());
    if let Some(api_key) = &settings.api_key {
        builder = builder.with_api_key(api_key.as_str());
    }
    if let Some(base_url) = &settings.base_url {
        builder = builder.with_base_url(base_url.as_str());
    }
    if let Some(temperature) = settings.temperature {
        builder = builder.with_temperature(temperature);
    }
    builder.build()
}
