use scribe::openai::OpenAiAdapterBuilder;
use scribe::{MessageAgent, config::AgentConfig};

/// # Send Message – Direct `send_message` Example
///
/// This example skips the article pipeline and talks to the agent directly:
///
/// 1. **You** pick the model.
/// 2. **You** write the message.
/// 3. The agent returns the provider's answer untouched.
///
/// ```bash
/// export OPENAI_API_KEY=sk-…      # mandatory
/// cargo run -p scribe --example openai_send_message -- "Why is the Rust borrow checker important?"
/// ```
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let message = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Why is the Rust borrow checker important?".to_owned());

    let backend = OpenAiAdapterBuilder::new_from_env().build()?;
    let agent = MessageAgent::new(AgentConfig::new("gpt-4o-mini")?, backend);

    let response = agent.send_message(&message).await?;
    println!("Assistant: {}", response.message);

    Ok(())
}
