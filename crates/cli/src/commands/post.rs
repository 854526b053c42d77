//! `slack-clean post` - transform text and post it to a channel.

use slack_clean_server::config::{ConfigError, OpenAiConfig, SlackConfig};
use slack_clean_server::openai::OpenAiClient;
use slack_clean_server::slack::SlackClient;

use super::{CliError, clean};

/// Clean up `text` and post it to `SLACK_CHANNEL_ID`.
///
/// Returns the posted message's timestamp.
///
/// # Errors
///
/// Returns error if configuration is missing, the transformation fails, or
/// Slack rejects the message.
pub async fn run(text: &str) -> Result<String, CliError> {
    dotenvy::dotenv().ok();

    let slack = SlackConfig::from_env()?;
    let bot = slack
        .bot
        .as_ref()
        .ok_or_else(|| ConfigError::MissingEnvVar("SLACK_BOT_TOKEN".to_string()))?;
    let client = SlackClient::from_config(&slack.api_url, bot);

    let openai = OpenAiClient::new(&OpenAiConfig::from_env()?)?;
    let cleaned = clean::transform(&openai, text).await?;

    let response = client.post_message(&cleaned).await?;

    Ok(response.ts.unwrap_or_default())
}
