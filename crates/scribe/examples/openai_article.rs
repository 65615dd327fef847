use scribe::article::ArticleGenerator;
use scribe::openai::OpenAiAdapterBuilder;
use scribe::{MessageAgent, config::AgentConfig};

/// # Article – Topic to summary + body
///
/// Builds an [`ArticleGenerator`] on top of the OpenAI adapter and prints the
/// two parts of the generated article.
///
/// ```bash
/// export OPENAI_API_KEY=sk-…      # mandatory
/// cargo run -p scribe --example openai_article -- "Bug 2000" English
/// ```
///
/// The second argument picks the output language (Russian by default).
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let title = args.next().unwrap_or_else(|| "Bug 2000".to_owned());

    let backend = OpenAiAdapterBuilder::new_from_env().build()?;
    let agent = MessageAgent::new(AgentConfig::new("gpt-4o")?, backend);

    let mut generator = ArticleGenerator::new(agent);
    if let Some(language) = args.next() {
        generator = generator.with_language(language);
    }

    let article = generator.generate(&title).await?;

    println!("Summary:\n{}\n", article.summary);
    if article.body.is_empty() {
        println!("(the model returned a single paragraph)");
    } else {
        println!("Article:\n{}", article.body);
    }

    Ok(())
}
