//! Error types for the Chronicle library.
//!
//! This crate provides the foundation error types used throughout the Chronicle
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use chronicle_error::{ChronicleResult, ConfigError};
//!
//! fn load_key() -> ChronicleResult<String> {
//!     Err(ConfigError::new("OPENAI_API_KEY not set"))?
//! }
//!
//! match load_key() {
//!     Ok(key) => println!("Got: {}", key),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod config;
#[cfg(feature = "database")]
mod database;
mod error;
mod provider;

pub use analysis::{AnalysisError, AnalysisErrorKind};
pub use config::ConfigError;
#[cfg(feature = "database")]
pub use database::{DatabaseError, DatabaseErrorKind};
pub use error::{ChronicleError, ChronicleErrorKind, ChronicleResult};
pub use provider::{ProviderError, ProviderErrorKind, ProviderResult};
