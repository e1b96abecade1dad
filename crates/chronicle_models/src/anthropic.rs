//! Anthropic Messages API client.

use crate::ResponseEnvelope;
use async_trait::async_trait;
use chronicle_core::{GenerateRequest, GenerateResponse, Role};
use chronicle_error::{ProviderError, ProviderErrorKind, ProviderResult};
use chronicle_interface::AnalysisDriver;
use derive_builder::Builder;
use derive_getters::Getters;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, instrument};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Deep analysis is a slow, multi-minute operation.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

const DEFAULT_MAX_TOKENS: u32 = 4000;

/// Some creativity for nuanced analysis.
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// A message in an Anthropic conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct AnthropicMessage {
    /// Message role ("user" or "assistant")
    role: String,
    /// Message content
    content: String,
}

impl AnthropicMessage {
    /// Creates a new builder for `AnthropicMessage`.
    pub fn builder() -> AnthropicMessageBuilder {
        AnthropicMessageBuilder::default()
    }
}

/// Messages API request parameters.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct AnthropicRequest {
    /// Model identifier
    model: String,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// Conversation messages
    messages: Vec<AnthropicMessage>,
    /// Sampling temperature
    temperature: f32,
}

impl AnthropicRequest {
    /// Creates a new builder for `AnthropicRequest`.
    pub fn builder() -> AnthropicRequestBuilder {
        AnthropicRequestBuilder::default()
    }
}

/// Anthropic Messages API client.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    model: String,
}

impl AnthropicClient {
    /// Creates a new Anthropic client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> ProviderResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                ProviderError::new(ProviderErrorKind::InvalidConfiguration(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;
        debug!("Creating new Anthropic client");
        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    /// Creates a client with the API key from the `ANTHROPIC_API_KEY`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is not set or the HTTP client
    /// cannot be initialized.
    pub fn from_env(model: impl Into<String>) -> ProviderResult<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|e| {
            ProviderError::new(ProviderErrorKind::InvalidConfiguration(format!(
                "ANTHROPIC_API_KEY not set: {}",
                e
            )))
        })?;
        Self::new(api_key, model)
    }

    /// Sends a request to the Messages API and decodes the envelope.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn send(&self, request: &AnthropicRequest) -> ProviderResult<ResponseEnvelope> {
        debug!("Sending request to Anthropic API");

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Anthropic API");
                ProviderError::new(ProviderErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Anthropic API returned error");
            return Err(ProviderError::new(ProviderErrorKind::Api {
                status: status.as_u16(),
                message: body,
            }));
        }

        let envelope: ResponseEnvelope = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Anthropic response envelope");
            ProviderError::new(ProviderErrorKind::Parse(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        debug!(response_id = ?envelope.id(), "Received response from Anthropic");
        Ok(envelope)
    }

    /// Converts a Chronicle GenerateRequest to a Messages API request.
    fn convert_request(&self, request: &GenerateRequest) -> ProviderResult<AnthropicRequest> {
        let messages: Result<Vec<AnthropicMessage>, ProviderError> = request
            .messages
            .iter()
            .map(|message| {
                let role = match message.role {
                    Role::User => "user",
                    Role::Assistant => "assistant",
                    Role::System => {
                        return Err(ProviderError::new(ProviderErrorKind::Conversion(
                            "System role not supported in messages".to_string(),
                        )));
                    }
                };

                AnthropicMessage::builder()
                    .role(role)
                    .content(message.content.clone())
                    .build()
                    .map_err(|e| ProviderError::new(ProviderErrorKind::Builder(e.to_string())))
            })
            .collect();

        AnthropicRequest::builder()
            .model(request.model.clone().unwrap_or_else(|| self.model.clone()))
            .max_tokens(request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS))
            .messages(messages?)
            .temperature(request.temperature.unwrap_or(DEFAULT_TEMPERATURE))
            .build()
            .map_err(|e| ProviderError::new(ProviderErrorKind::Builder(e.to_string())))
    }
}

#[async_trait]
impl AnalysisDriver for AnthropicClient {
    fn provider_name(&self) -> &'static str {
        "anthropic"
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, request))]
    async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> chronicle_error::ChronicleResult<GenerateResponse> {
        debug!("Generating response with Anthropic");

        let anthropic_request = self.convert_request(request)?;
        let envelope = self.send(&anthropic_request).await?;
        let text = envelope.extract_text()?;

        Ok(GenerateResponse { text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronicle_core::Message;

    #[test]
    fn request_serializes_expected_body() {
        let request = AnthropicRequest::builder()
            .model("claude-3-5-sonnet-20241022")
            .max_tokens(4000u32)
            .messages(vec![
                AnthropicMessage::builder()
                    .role("user")
                    .content("hi")
                    .build()
                    .unwrap(),
            ])
            .temperature(0.7f32)
            .build()
            .unwrap();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["max_tokens"], 4000);
        // f32 widens through serialization, so compare with a tolerance.
        assert!((json["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
        assert_eq!(json["messages"][0]["content"], "hi");
    }

    #[test]
    fn convert_request_fills_provider_defaults() {
        let client = AnthropicClient::new("key", "claude-3-5-sonnet-20241022").unwrap();
        let request = GenerateRequest {
            messages: vec![Message::user("analyze")],
            ..GenerateRequest::default()
        };

        let converted = client.convert_request(&request).unwrap();
        assert_eq!(*converted.max_tokens(), DEFAULT_MAX_TOKENS);
        assert_eq!(*converted.temperature(), DEFAULT_TEMPERATURE);
    }

    #[test]
    fn convert_request_rejects_system_role() {
        let client = AnthropicClient::new("key", "claude-3-5-sonnet-20241022").unwrap();
        let request = GenerateRequest {
            messages: vec![Message::system("persona")],
            ..GenerateRequest::default()
        };

        assert!(client.convert_request(&request).is_err());
    }
}
