//! `slack-clean clean` - transform text synchronously.

use slack_clean_core::NO_TEXT_MESSAGE;
use slack_clean_server::config::OpenAiConfig;
use slack_clean_server::openai::OpenAiClient;

use super::CliError;

/// Load the `OpenAI` configuration and clean up `text`.
///
/// # Errors
///
/// Returns error if `OPENAI_API_KEY` is missing or the API call fails.
pub async fn run(text: &str) -> Result<String, CliError> {
    dotenvy::dotenv().ok();

    let config = OpenAiConfig::from_env()?;
    let client = OpenAiClient::new(&config)?;

    transform(&client, text).await
}

/// Clean up `text` with `client`.
///
/// Empty text is answered locally without calling the API.
///
/// # Errors
///
/// Returns error if the API call fails.
pub async fn transform(client: &OpenAiClient, text: &str) -> Result<String, CliError> {
    if text.is_empty() {
        return Ok(NO_TEXT_MESSAGE.to_string());
    }

    tracing::debug!(model = client.model(), "Cleaning text");
    Ok(client.complete(text).await?)
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client(api_url: &str) -> OpenAiClient {
        OpenAiClient::new(&OpenAiConfig {
            api_key: SecretString::from("sk-proj-Q7vX2mK9pL4nR8tW1zB6cY3"),
            api_url: api_url.to_string(),
            model: "gpt-4o".to_string(),
        })
        .expect("client")
    }

    #[tokio::test]
    async fn test_empty_text_skips_api() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let cleaned = transform(&client(&server.uri()), "").await.expect("transform");
        assert_eq!(cleaned, NO_TEXT_MESSAGE);
    }

    #[tokio::test]
    async fn test_api_failure_reports_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {"message": "Incorrect API key provided"}
            })))
            .mount(&server)
            .await;

        let err = transform(&client(&server.uri()), "hello")
            .await
            .expect_err("should fail");
        assert_eq!(err.to_string(), "Incorrect API key provided");
    }
}
