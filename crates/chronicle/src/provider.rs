//! Provider selection from configuration.

use chronicle_analysis::DeepAnalyst;
use chronicle_error::ChronicleResult;
use chronicle_interface::AnalysisProvider;
use chronicle_models::{AnthropicClient, OpenAiClient, ProviderConfig, ProviderKind};

/// Build an analyst backed by the configured provider.
///
/// # Errors
///
/// Returns an error if the provider's HTTP client cannot be initialized.
pub fn analyst_from_config(config: &ProviderConfig) -> ChronicleResult<Box<dyn AnalysisProvider>> {
    match config.provider {
        ProviderKind::OpenAi => {
            let client = OpenAiClient::new(config.api_key.clone(), config.model.clone())?;
            Ok(Box::new(DeepAnalyst::new(client)))
        }
        ProviderKind::Anthropic => {
            let client = AnthropicClient::new(config.api_key.clone(), config.model.clone())?;
            Ok(Box::new(DeepAnalyst::new(client)))
        }
    }
}
