use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::traits::Assistant;
use crate::app::AssistantConfig;
use crate::constants::{FALLBACK_NO_CANDIDATE, FALLBACK_UNAVAILABLE};
use crate::utils::AssistantError;

/// Client for the Gemini generateContent endpoint
///
/// One blocking round trip per call: no retry, no streaming. The API key
/// travels in the x-goog-api-key header, never in the URL.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    /// Create a new client from the assistant configuration
    ///
    /// A missing API key is not an error here: the endpoint rejects the
    /// request and the caller sees the generic fallback string.
    pub fn new(config: &AssistantConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env).ok();

        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(config.timeout_secs))
                .build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        })
    }

    async fn generate(&self, prompt: &str) -> Result<String, AssistantError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let mut request = self.client.post(&url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.header("x-goog-api-key", key);
        }

        tracing::debug!(model = %self.model, "sending generateContent request");

        let response = request
            .send()
            .await
            .map_err(|e| AssistantError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AssistantError::Unavailable {
                status: status.as_u16(),
            });
        }

        let response_body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|_| AssistantError::MalformedResponse)?;

        response_body
            .first_text()
            .ok_or(AssistantError::MalformedResponse)
    }
}

#[async_trait]
impl Assistant for GeminiClient {
    async fn ask(&self, prompt: &str) -> String {
        match self.generate(prompt).await {
            Ok(text) => text,
            Err(AssistantError::MalformedResponse) => FALLBACK_NO_CANDIDATE.to_string(),
            Err(err) => {
                tracing::debug!(error = %err, "assistant request failed");
                FALLBACK_UNAVAILABLE.to_string()
            }
        }
    }

    fn name(&self) -> &str {
        &self.model
    }
}

// Wire structures for the generateContent API

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Only the first candidate is consulted
    fn first_text(&self) -> Option<String> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .find_map(|part| part.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> GeminiClient {
        let config = AssistantConfig {
            model: "gemini-2.0-flash".to_string(),
            base_url: base_url.to_string(),
            // Point at a variable that is never set in the test environment
            api_key_env: "UNITWISE_TEST_NO_SUCH_KEY".to_string(),
            timeout_secs: 5,
        };
        GeminiClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_returns_first_candidate_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(json!({
                "contents": [{"parts": [{"text": "What is a meter?"}]}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [
                    {"content": {"parts": [{"text": "The SI base unit of length."}]}},
                    {"content": {"parts": [{"text": "ignored second candidate"}]}}
                ]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let answer = client.ask("What is a meter?").await;
        assert_eq!(answer, "The SI base unit of length.");
    }

    #[tokio::test]
    async fn test_non_200_maps_to_unavailable_string() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        assert_eq!(client.ask("hello").await, "Error: Unable to fetch response.");
    }

    #[tokio::test]
    async fn test_empty_body_maps_to_no_candidate_string() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        assert_eq!(client.ask("hello").await, "Sorry, I couldn't process that.");
    }

    #[tokio::test]
    async fn test_candidate_without_text_maps_to_no_candidate_string() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": []}}]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        assert_eq!(client.ask("hello").await, "Sorry, I couldn't process that.");
    }

    #[tokio::test]
    async fn test_transport_failure_maps_to_unavailable_string() {
        // Grab a port that was live, then shut it down
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let client = test_client(&uri);
        assert_eq!(client.ask("hello").await, "Error: Unable to fetch response.");
    }

    #[tokio::test]
    async fn test_api_key_sent_as_header() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("x-goog-api-key", "test-key-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": "ok"}]}}]
            })))
            .mount(&server)
            .await;

        let config = AssistantConfig {
            model: "gemini-2.0-flash".to_string(),
            base_url: server.uri(),
            api_key_env: "UNITWISE_TEST_GEMINI_KEY".to_string(),
            timeout_secs: 5,
        };
        std::env::set_var("UNITWISE_TEST_GEMINI_KEY", "test-key-123");
        let client = GeminiClient::new(&config).unwrap();
        std::env::remove_var("UNITWISE_TEST_GEMINI_KEY");

        assert_eq!(client.ask("hello").await, "ok");
    }
}
