//! CLI subcommands.

pub mod clean;
pub mod post;

use slack_clean_server::config::ConfigError;
use slack_clean_server::openai::OpenAiError;
use slack_clean_server::slack::SlackError;
use thiserror::Error;

/// Errors that end a CLI command with exit status 1.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Completion API call failed.
    #[error("{}", .0.api_message().unwrap_or("Unknown error."))]
    Transform(#[from] OpenAiError),

    /// Slack rejected the post.
    #[error(transparent)]
    Slack(#[from] SlackError),

    /// Writing the result failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}
