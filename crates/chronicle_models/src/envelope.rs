//! Provider transport envelope normalization.
//!
//! The two supported providers return structurally different envelopes for
//! equivalent semantic content: Anthropic carries a flat `content[]` array
//! of text blocks, while the OpenAI Responses API nests assistant text
//! under `output[]` message items (and sometimes includes a convenience
//! `outputText` field). This module is the single point where those shapes
//! are normalized into one extracted text payload. A new envelope variant
//! is added by extending [`ResponseEnvelope::extract_text`], never by
//! introducing a new response type.

use chronicle_error::{ProviderError, ProviderErrorKind, ProviderResult};
use derive_getters::Getters;
use serde::Deserialize;

/// The closed set of envelope shapes a provider response can take.
#[derive(Debug, Clone, Default, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    /// Response identifier, when the provider assigns one
    #[serde(default)]
    id: Option<String>,
    /// Flat text blocks (Anthropic Messages shape)
    #[serde(default)]
    content: Option<Vec<ContentBlock>>,
    /// Typed output items (OpenAI Responses shape)
    #[serde(default)]
    output: Option<Vec<OutputItem>>,
    /// Convenience text field some envelopes include
    #[serde(default, alias = "output_text")]
    output_text: Option<String>,
}

/// A flat text block under `content[]`.
#[derive(Debug, Clone, Default, Deserialize)]
struct ContentBlock {
    #[serde(default, rename = "type")]
    block_type: Option<String>,
    #[serde(default)]
    text: Option<String>,
}

/// A typed item under `output[]`: "message", "reasoning", etc.
#[derive(Debug, Clone, Default, Deserialize)]
struct OutputItem {
    #[serde(default, rename = "type")]
    item_type: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    content: Option<Vec<ContentPart>>,
}

/// A content part within an output item; text lives under "output_text".
#[derive(Debug, Clone, Default, Deserialize)]
struct ContentPart {
    #[serde(default, rename = "type")]
    part_type: Option<String>,
    #[serde(default)]
    text: Option<String>,
}

impl ResponseEnvelope {
    /// Normalize the envelope into a single extracted text payload.
    ///
    /// Resolution order:
    /// 1. the convenience text field, if present and non-empty;
    /// 2. the first `output[]` item of type "message" whose role is absent
    ///    or "assistant", concatenating its "output_text" parts;
    /// 3. the first non-empty `content[]` text block.
    ///
    /// # Errors
    ///
    /// Fails when no text is recoverable by any path.
    pub fn extract_text(&self) -> ProviderResult<String> {
        if let Some(text) = &self.output_text {
            if !text.trim().is_empty() {
                return Ok(text.clone());
            }
        }

        if let Some(output) = &self.output {
            let message = output.iter().find(|item| {
                item.item_type
                    .as_deref()
                    .is_some_and(|t| t.eq_ignore_ascii_case("message"))
                    && item
                        .role
                        .as_deref()
                        .is_none_or(|r| r.eq_ignore_ascii_case("assistant"))
            });

            if let Some(message) = message {
                let text: String = message
                    .content
                    .iter()
                    .flatten()
                    .filter(|part| {
                        part.part_type
                            .as_deref()
                            .is_some_and(|t| t.eq_ignore_ascii_case("output_text"))
                    })
                    .filter_map(|part| part.text.as_deref())
                    .collect();

                if !text.trim().is_empty() {
                    return Ok(text);
                }
            }
        }

        if let Some(content) = &self.content {
            let text = content
                .iter()
                .filter(|block| {
                    block
                        .block_type
                        .as_deref()
                        .is_none_or(|t| t.eq_ignore_ascii_case("text"))
                })
                .find_map(|block| block.text.as_deref())
                .unwrap_or_default();

            if !text.trim().is_empty() {
                return Ok(text.to_string());
            }
        }

        Err(ProviderError::new(ProviderErrorKind::EmptyResponse))
    }
}
