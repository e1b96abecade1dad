//! PostgreSQL integration for Chronicle.
//!
//! This crate provides database models, schema definitions, and repository
//! implementations for persisting episodes and their analyses.
//!
//! Each analysis row stores the nested substructures as independent jsonb
//! blobs plus scalar projection columns (positivity, intensity, complexity,
//! dominant emotion) duplicated out of the sentiment blob for indexed
//! filtering. The projections are recomputed from the sentiment value on
//! every write, so they never drift from the blob.
//!
//! # Example
//!
//! ```rust,ignore
//! use chronicle_database::{PostgresAnalysisRepository, establish_connection};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let conn = establish_connection()?;
//! let repo = PostgresAnalysisRepository::new(conn);
//! let analysis = repo.get_by_episode_id(42).await?;
//! # Ok(())
//! # }
//! ```

mod analysis_repository;
mod connection;
mod conversions;
mod episode_repository;
mod models;

// Public module for external access
pub mod schema;

pub use analysis_repository::PostgresAnalysisRepository;
pub use connection::establish_connection;
pub use episode_repository::PostgresEpisodeRepository;
pub use models::{
    EpisodeAnalysisRow, EpisodeRow, NewEpisodeAnalysisRow, NewEpisodeRow,
    UpdateEpisodeAnalysisRow, UpdateEpisodeRow,
};

use chronicle_error::DatabaseError;

/// Result type for database operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;
