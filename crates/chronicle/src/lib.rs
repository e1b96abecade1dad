//! Chronicle - deep analysis of episodic narrative records.
//!
//! Chronicle stores episodes (title, season/number, transcript, cast lists)
//! and produces a structured deep analysis of each: sentiment, per-character
//! mood, relationship dynamics, themes, a narrative-arc breakdown, and
//! notable quoted moments. The analysis runs through a text-generation
//! provider and is persisted idempotently, one row per episode.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use chronicle::{
//!     analyst_from_config, create_episode_analysis, establish_connection,
//!     PostgresAnalysisRepository, PostgresEpisodeRepository, ProviderConfig,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     chronicle::init_tracing();
//!
//!     let config = ProviderConfig::from_env()?;
//!     let analyst = analyst_from_config(&config)?;
//!     let episodes = PostgresEpisodeRepository::new(establish_connection()?);
//!     let analyses = PostgresAnalysisRepository::new(establish_connection()?);
//!
//!     let result =
//!         create_episode_analysis(&episodes, analyst.as_ref(), &analyses, 42).await;
//!     println!("{:?}", result.is_success());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Chronicle is organized as a workspace with focused crates:
//!
//! - `chronicle_core` - domain data model (Episode, EpisodeAnalysis, ...)
//! - `chronicle_error` - error types
//! - `chronicle_interface` - trait seams (drivers, operations, repositories)
//! - `chronicle_models` - provider HTTP clients and envelope decoding
//! - `chronicle_analysis` - prompts, sanitization, schema mapping, orchestration
//! - `chronicle_database` - PostgreSQL persistence
//!
//! This crate (`chronicle`) re-exports everything for convenience and adds
//! the command/result boundary.

mod commands;
mod observability;
mod provider;

pub use commands::{create_episode_analysis, CreateEpisodeAnalysisResult, FieldErrors};
pub use observability::init_tracing;
pub use provider::analyst_from_config;

// Re-export the workspace crates
pub use chronicle_analysis::*;
pub use chronicle_core::*;
pub use chronicle_database::*;
pub use chronicle_error::*;
pub use chronicle_interface::*;
pub use chronicle_models::*;
