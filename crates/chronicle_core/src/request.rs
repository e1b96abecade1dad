//! Request and response types for provider text generation.

use crate::Message;
use serde::{Deserialize, Serialize};

/// Generic generation request handed to a provider driver.
///
/// Generation parameters left as `None` are filled with provider-specific
/// defaults by each driver.
///
/// # Examples
///
/// ```
/// use chronicle_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest {
///     messages: vec![Message::user("Analyze this transcript.")],
///     max_tokens: Some(4000),
///     temperature: None,
///     model: None,
/// };
///
/// assert_eq!(request.messages.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GenerateRequest {
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 1.0)
    pub temperature: Option<f32>,
    /// Model identifier override
    pub model: Option<String>,
}

/// The unified response object: the provider's extracted assistant text.
///
/// Envelope normalization happens inside each driver; by the time a
/// response reaches the orchestrator it is a single text payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The extracted assistant text
    pub text: String,
}
