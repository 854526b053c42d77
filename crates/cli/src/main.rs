//! slack-clean CLI - Clean up text from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Print a cleaned-up version of the text
//! slack-clean clean "Hey Team. I am going to be out of the office for the next 2 weeks."
//!
//! # Clean up the text and post it to SLACK_CHANNEL_ID
//! slack-clean post "Hey Team. I am going to be out of the office for the next 2 weeks."
//! ```
//!
//! # Commands
//!
//! - `clean` - Transform text and print the result
//! - `post` - Transform text and post it to the configured channel
//!
//! Both commands exit with status 1 when the completion API rejects the
//! request. This runs synchronously in its own process; the server never
//! takes this path.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "slack-clean")]
#[command(author, version, about = "Clean up text with OpenAI and post it to Slack")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean up text and print the result
    Clean {
        /// Text to clean up
        text: String,
    },
    /// Clean up text and post it to the configured Slack channel
    Post {
        /// Text to clean up
        text: String,
    },
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout only carries the cleaned text
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "slack_clean=info,slack_clean_server=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    match cli.command {
        Commands::Clean { text } => {
            let cleaned = commands::clean::run(&text).await?;
            writeln!(std::io::stdout().lock(), "{cleaned}")?;
        }
        Commands::Post { text } => {
            let ts = commands::post::run(&text).await?;
            tracing::info!(ts = %ts, "Posted cleaned text");
        }
    }
    Ok(())
}
