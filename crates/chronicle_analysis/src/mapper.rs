//! Decoding sanitized provider text into analysis shapes.

use chronicle_error::{AnalysisError, AnalysisErrorKind};
use serde::de::DeserializeOwned;

/// How much of the offending text to keep for diagnostics.
const EXCERPT_LEN: usize = 100;

/// Decode sanitized, envelope-extracted text as a fixed analysis shape.
///
/// Identity fields inside the decoded value are whatever the provider
/// asserted; callers overwrite them with authoritative values afterwards.
///
/// # Errors
///
/// Returns an error wrapping the underlying decode failure and a truncated
/// excerpt of the offending text when it is not valid JSON for the shape.
///
/// # Examples
///
/// ```
/// use chronicle_analysis::decode_payload;
/// use chronicle_core::OverallSentiment;
///
/// let sentiment: OverallSentiment =
///     decode_payload(r#"{"positivityScore": 0.8, "dominantEmotion": "Joy"}"#).unwrap();
/// assert_eq!(sentiment.dominant_emotion, "Joy");
/// ```
pub fn decode_payload<T: DeserializeOwned>(text: &str) -> Result<T, AnalysisError> {
    serde_json::from_str(text).map_err(|e| {
        let excerpt: String = text.chars().take(EXCERPT_LEN).collect();
        tracing::error!(
            error = %e,
            excerpt = %excerpt,
            "Failed to decode analysis payload"
        );
        AnalysisError::new(AnalysisErrorKind::SchemaDecode {
            message: e.to_string(),
            excerpt,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronicle_core::EpisodeAnalysis;

    #[test]
    fn decodes_valid_analysis_json() {
        let json = r#"{
            "sentiment": {"positivityScore": 0.6, "dominantEmotion": "Hope"},
            "themes": [{"theme": "friendship", "prominence": 0.9}]
        }"#;
        let analysis: EpisodeAnalysis = decode_payload(json).unwrap();
        assert_eq!(analysis.sentiment.dominant_emotion, "Hope");
        assert_eq!(analysis.themes.len(), 1);
    }

    #[test]
    fn invalid_json_carries_truncated_excerpt() {
        let garbage = "not json at all ".repeat(20);
        let err = decode_payload::<EpisodeAnalysis>(&garbage).unwrap_err();
        match err.kind {
            AnalysisErrorKind::SchemaDecode { excerpt, .. } => {
                assert_eq!(excerpt.chars().count(), EXCERPT_LEN);
            }
            other => panic!("unexpected kind: {:?}", other),
        }
    }

    #[test]
    fn wrong_shape_fails() {
        assert!(decode_payload::<EpisodeAnalysis>("[1, 2, 3]").is_err());
    }
}
