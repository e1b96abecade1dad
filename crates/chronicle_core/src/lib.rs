//! Core data types for the Chronicle episode analysis library.
//!
//! This crate provides the domain model shared across all Chronicle crates:
//! episodes, the analysis structures produced by the pipeline, and the
//! generic request/response types spoken by provider drivers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod character;
mod episode;
mod message;
mod request;
mod role;
mod season;

pub use analysis::{
    CharacterMood, EmotionalMoment, EpisodeAnalysis, NarrativeArc, OverallSentiment,
    RelationshipDynamic, StoryBeat, ThemeAnalysis,
};
pub use character::{
    CharacterArc, CharacterDynamicsAnalysis, DefiningMoment, EmotionalPattern,
    PersonalityProfile, RelationshipProfile,
};
pub use episode::Episode;
pub use message::Message;
pub use request::{GenerateRequest, GenerateResponse};
pub use role::Role;
pub use season::{
    CharacterEvolution, CharacterJourney, EmotionalDataPoint, EmotionalTrajectory,
    RelationshipEvolution, RelationshipJourney, SeasonAnalysis, SeasonalTheme, SeasonalTrends,
};
