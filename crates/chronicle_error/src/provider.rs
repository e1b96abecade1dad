//! Text-generation provider error types.

/// Specific error conditions for provider HTTP calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ProviderErrorKind {
    /// Transport-level failure before a response was received
    #[display("Request failed: {}", _0)]
    Http(String),
    /// Provider returned a non-success status
    #[display("API error: status {}, body: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw error body returned by the provider
        message: String,
    },
    /// Response body could not be decoded as the provider envelope
    #[display("Failed to parse response envelope: {}", _0)]
    Parse(String),
    /// Envelope decoded, but no assistant text was recoverable
    #[display("Provider returned no extractable text")]
    EmptyResponse,
    /// Invalid client configuration
    #[display("Invalid configuration: {}", _0)]
    InvalidConfiguration(String),
    /// Error converting between Chronicle and provider wire types
    #[display("Conversion error: {}", _0)]
    Conversion(String),
    /// Builder error when constructing requests
    #[display("Builder error: {}", _0)]
    Builder(String),
}

/// Provider error with source location tracking.
///
/// # Examples
///
/// ```
/// use chronicle_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::Api {
///     status: 429,
///     message: "rate limited".to_string(),
/// });
/// assert!(format!("{}", err).contains("429"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The specific error condition
    pub kind: ProviderErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
