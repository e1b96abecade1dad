//! Provider selection and configuration.
//!
//! Configuration is an explicit immutable value injected at construction;
//! nothing reads the environment after the config is built.

use chronicle_error::ConfigError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const DEFAULT_OPENAI_MODEL: &str = "gpt-5";
const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Which provider backs the analysis pipeline.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// OpenAI Responses API
    #[display("openai")]
    OpenAi,
    /// Anthropic Messages API
    #[display("anthropic")]
    Anthropic,
}

impl FromStr for ProviderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "anthropic" => Ok(ProviderKind::Anthropic),
            other => Err(ConfigError::new(format!(
                "Unknown provider '{}', expected 'openai' or 'anthropic'",
                other
            ))),
        }
    }
}

/// Immutable provider configuration injected into the orchestrator.
///
/// # Examples
///
/// ```
/// use chronicle_models::{ProviderConfig, ProviderKind};
///
/// let config = ProviderConfig {
///     provider: ProviderKind::Anthropic,
///     api_key: "sk-...".to_string(),
///     model: "claude-3-5-sonnet-20241022".to_string(),
/// };
///
/// assert_eq!(config.provider, ProviderKind::Anthropic);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Which provider to call
    pub provider: ProviderKind,
    /// API key carried in the provider's auth header
    pub api_key: String,
    /// Model identifier
    pub model: String,
}

impl ProviderConfig {
    /// Build a configuration from the environment.
    ///
    /// Reads `CHRONICLE_PROVIDER` ("openai" or "anthropic", defaulting to
    /// "anthropic"), the matching `OPENAI_API_KEY`/`ANTHROPIC_API_KEY`, and
    /// an optional `CHRONICLE_MODEL` override.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider name is unknown or the API key
    /// variable is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let provider = match std::env::var("CHRONICLE_PROVIDER") {
            Ok(value) => value.parse()?,
            Err(_) => ProviderKind::Anthropic,
        };

        let (key_var, default_model) = match provider {
            ProviderKind::OpenAi => ("OPENAI_API_KEY", DEFAULT_OPENAI_MODEL),
            ProviderKind::Anthropic => ("ANTHROPIC_API_KEY", DEFAULT_ANTHROPIC_MODEL),
        };

        let api_key = std::env::var(key_var)
            .map_err(|_| ConfigError::new(format!("{} not set", key_var)))?;

        let model =
            std::env::var("CHRONICLE_MODEL").unwrap_or_else(|_| default_model.to_string());

        Ok(Self {
            provider,
            api_key,
            model,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_kind_parses_case_insensitively() {
        assert_eq!("OpenAI".parse::<ProviderKind>().unwrap(), ProviderKind::OpenAi);
        assert_eq!(
            " anthropic ".parse::<ProviderKind>().unwrap(),
            ProviderKind::Anthropic
        );
        assert!("gemini".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn provider_kind_displays_lowercase() {
        assert_eq!(ProviderKind::OpenAi.to_string(), "openai");
        assert_eq!(ProviderKind::Anthropic.to_string(), "anthropic");
    }
}
