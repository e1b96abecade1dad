//! Top-level error wrapper types.

use crate::{AnalysisError, ConfigError, ProviderError};
#[cfg(feature = "database")]
use crate::DatabaseError;

/// This is the foundation error enum. Each Chronicle crate contributes the
/// variant covering its own failure domain.
///
/// # Examples
///
/// ```
/// use chronicle_error::{ChronicleError, ConfigError};
///
/// let config_err = ConfigError::new("Missing field");
/// let err: ChronicleError = config_err.into();
/// assert!(format!("{}", err).contains("Config Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ChronicleErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Text-generation provider error
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Analysis pipeline error
    #[from(AnalysisError)]
    Analysis(AnalysisError),
    /// Database error
    #[cfg(feature = "database")]
    #[from(DatabaseError)]
    Database(DatabaseError),
}

/// Chronicle error with kind discrimination.
///
/// # Examples
///
/// ```
/// use chronicle_error::{ChronicleError, ChronicleResult, ConfigError};
///
/// fn might_fail() -> ChronicleResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Chronicle Error: {}", _0)]
pub struct ChronicleError(Box<ChronicleErrorKind>);

impl ChronicleError {
    /// Create a new error from a kind.
    pub fn new(kind: ChronicleErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ChronicleErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ChronicleErrorKind
impl<T> From<T> for ChronicleError
where
    T: Into<ChronicleErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Chronicle operations.
///
/// # Examples
///
/// ```
/// use chronicle_error::{ChronicleResult, ProviderError, ProviderErrorKind};
///
/// fn fetch_analysis() -> ChronicleResult<String> {
///     Err(ProviderError::new(ProviderErrorKind::Http("404 Not Found".to_string())))?
/// }
/// ```
pub type ChronicleResult<T> = std::result::Result<T, ChronicleError>;
