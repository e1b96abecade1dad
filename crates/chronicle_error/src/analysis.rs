//! Analysis pipeline error types.

/// Specific error conditions for analysis operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AnalysisErrorKind {
    /// Episode has no transcript to analyze
    #[display("Episode '{}' has no transcript", _0)]
    MissingTranscript(String),
    /// Trend analysis was requested over an empty set of analyses
    #[display("No episode analyses provided")]
    EmptyAnalyses,
    /// Provider text is not valid JSON for the requested schema
    #[display("Failed to decode analysis: {} (text: {}...)", message, excerpt)]
    SchemaDecode {
        /// Underlying decode failure
        message: String,
        /// Truncated excerpt of the offending text, for diagnostics
        excerpt: String,
    },
    /// Failed to serialize intermediate data while building a prompt
    #[display("Serialization error: {}", _0)]
    Serialization(String),
}

/// Error type for analysis operations.
///
/// # Examples
///
/// ```
/// use chronicle_error::{AnalysisError, AnalysisErrorKind};
///
/// let err = AnalysisError::new(AnalysisErrorKind::EmptyAnalyses);
/// assert!(format!("{}", err).contains("No episode analyses"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Analysis Error: {} at line {} in {}", kind, line, file)]
pub struct AnalysisError {
    /// The specific error condition
    pub kind: AnalysisErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl AnalysisError {
    /// Create a new AnalysisError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AnalysisErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
