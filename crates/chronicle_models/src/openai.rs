//! OpenAI Responses API client.

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

const OPENAI_RESPONSES_URL: &str = "https://api.openai.com/v1/responses";

/// Deep analysis is a slow, multi-minute operation.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 16_000;

/// Standing instruction prepended to every request.
const SYSTEM_INSTRUCTION: &str = "You are a clear, down-to-earth analyst of episodic television.\n\
Write like you're explaining to a smart friend. Use everyday words. Prefer short, direct sentences.\n\
Avoid stacked hyphenated phrases and flowery language. No metaphors unless necessary.\n\
Keep quotes exact, but keep descriptions simple. Output valid JSON only (no markdown).";

/// A single input message for the Responses API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct OpenAiMessage {
    /// Message role ("system", "user", "assistant")
    role: String,
    /// Message content
    content: String,
}

impl OpenAiMessage {
    /// Creates a new builder for `OpenAiMessage`.
    pub fn builder() -> OpenAiMessageBuilder {
        OpenAiMessageBuilder::default()
    }
}

/// Responses API request parameters.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct OpenAiRequest {
    /// Model identifier
    model: String,
    /// Input messages
    input: Vec<OpenAiMessage>,
    /// Maximum tokens to generate
    max_output_tokens: u32,
}

impl OpenAiRequest {
    /// Creates a new builder for `OpenAiRequest`.
    pub fn builder() -> OpenAiRequestBuilder {
        OpenAiRequestBuilder::default()
    }
}

/// OpenAI Responses API client.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    /// Creates a new OpenAI client.
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
        debug!("Creating new OpenAI client");
        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    /// Creates a client with the API key from the `OPENAI_API_KEY`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is not set or the HTTP client
    /// cannot be initialized.
    pub fn from_env(model: impl Into<String>) -> ProviderResult<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|e| {
            ProviderError::new(ProviderErrorKind::InvalidConfiguration(format!(
                "OPENAI_API_KEY not set: {}",
                e
            )))
        })?;
        Self::new(api_key, model)
    }

    /// Sends a request to the Responses API and decodes the envelope.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn send(&self, request: &OpenAiRequest) -> ProviderResult<ResponseEnvelope> {
        debug!("Sending request to OpenAI Responses API");

        let response = self
            .client
            .post(OPENAI_RESPONSES_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to OpenAI API");
                ProviderError::new(ProviderErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "OpenAI API returned error");
            return Err(ProviderError::new(ProviderErrorKind::Api {
                status: status.as_u16(),
                message: body,
            }));
        }

        let envelope: ResponseEnvelope = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse OpenAI response envelope");
            ProviderError::new(ProviderErrorKind::Parse(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        debug!(response_id = ?envelope.id(), "Received response from OpenAI");
        Ok(envelope)
    }

    /// Converts a Chronicle GenerateRequest to a Responses API request.
    fn convert_request(&self, request: &GenerateRequest) -> ProviderResult<OpenAiRequest> {
        let mut input = vec![
            OpenAiMessage::builder()
                .role("system")
                .content(SYSTEM_INSTRUCTION)
                .build()
                .map_err(|e| ProviderError::new(ProviderErrorKind::Builder(e.to_string())))?,
        ];

        for message in &request.messages {
            let role = match message.role {
                Role::System => "system",
                Role::User => "user",
                Role::Assistant => "assistant",
            };
            input.push(
                OpenAiMessage::builder()
                    .role(role)
                    .content(message.content.clone())
                    .build()
                    .map_err(|e| ProviderError::new(ProviderErrorKind::Builder(e.to_string())))?,
            );
        }

        OpenAiRequest::builder()
            .model(request.model.clone().unwrap_or_else(|| self.model.clone()))
            .input(input)
            .max_output_tokens(request.max_tokens.unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS))
            .build()
            .map_err(|e| ProviderError::new(ProviderErrorKind::Builder(e.to_string())))
    }
}

#[async_trait]
impl AnalysisDriver for OpenAiClient {
    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, request))]
    async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> chronicle_error::ChronicleResult<GenerateResponse> {
        debug!("Generating response with OpenAI");

        let openai_request = self.convert_request(request)?;
        let envelope = self.send(&openai_request).await?;
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
        let request = OpenAiRequest::builder()
            .model("gpt-5")
            .input(vec![
                OpenAiMessage::builder()
                    .role("user")
                    .content("hi")
                    .build()
                    .unwrap(),
            ])
            .max_output_tokens(16_000u32)
            .build()
            .unwrap();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-5");
        assert_eq!(json["max_output_tokens"], 16_000);
        assert_eq!(json["input"][0]["role"], "user");
    }

    #[test]
    fn convert_request_prepends_system_instruction() {
        let client = OpenAiClient::new("key", "gpt-5").unwrap();
        let request = GenerateRequest {
            messages: vec![Message::user("analyze")],
            ..GenerateRequest::default()
        };

        let converted = client.convert_request(&request).unwrap();
        assert_eq!(converted.input().len(), 2);
        assert_eq!(converted.input()[0].role(), "system");
        assert_eq!(converted.input()[1].content(), "analyze");
        assert_eq!(*converted.max_output_tokens(), DEFAULT_MAX_OUTPUT_TOKENS);
    }
}
