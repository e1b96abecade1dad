//! Trait definitions for the Chronicle analysis pipeline and its collaborators.
//!
//! This crate holds the seams: the driver abstraction over text-generation
//! providers, the analysis operations themselves, and the repository
//! contracts consumed by the pipeline.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{AnalysisDriver, AnalysisProvider, AnalysisRepository, EpisodeRepository};
