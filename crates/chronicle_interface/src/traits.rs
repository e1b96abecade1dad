//! Trait definitions for provider drivers, analysis operations, and repositories.

use async_trait::async_trait;
use chronicle_core::{
    CharacterDynamicsAnalysis, Episode, EpisodeAnalysis, GenerateRequest, GenerateResponse,
    SeasonAnalysis,
};
use chronicle_error::ChronicleResult;

/// Core trait implemented by every text-generation provider client.
///
/// A driver makes exactly one outbound call per `generate` invocation,
/// normalizes the provider's transport envelope into extracted text, and
/// performs no retries. Cancellation is cooperative: dropping the returned
/// future aborts the in-flight HTTP call.
#[async_trait]
pub trait AnalysisDriver: Send + Sync {
    /// Generate model output for a text conversation.
    async fn generate(&self, req: &GenerateRequest) -> ChronicleResult<GenerateResponse>;

    /// Provider name (e.g., "openai", "anthropic").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-5", "claude-3-5-sonnet-20241022").
    fn model_name(&self) -> &str;
}

/// The three deep-analysis operations, exposed uniformly regardless of
/// which provider backs them.
///
/// Every operation makes at most one outbound provider call and lets
/// failures propagate to the caller; mapping errors to user-facing results
/// is the command boundary's job. Dropping a returned future cancels the
/// outbound call; partial work is not rolled back.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Analyze a single episode. Requires a non-empty transcript.
    async fn analyze_episode(&self, episode: &Episode) -> ChronicleResult<EpisodeAnalysis>;

    /// Aggregate episode analyses into season-wide trends.
    ///
    /// `season` is authoritative when supplied; otherwise the season number
    /// is inferred from the first analysis title, defaulting to 0.
    async fn analyze_season_trends(
        &self,
        analyses: &[EpisodeAnalysis],
        season: Option<i32>,
    ) -> ChronicleResult<SeasonAnalysis>;

    /// Analyze one character's dynamics across multiple episodes.
    ///
    /// Episodes that never mention the character are filtered out; an empty
    /// result set is valid.
    async fn analyze_character_dynamics(
        &self,
        episodes: &[Episode],
        character_name: &str,
    ) -> ChronicleResult<CharacterDynamicsAnalysis>;
}

/// Contract for episode storage, consumed by the record-creation flow.
///
/// The analysis pipeline itself only ever calls `get_by_id`.
#[async_trait]
pub trait EpisodeRepository: Send + Sync {
    /// Create a new episode. Fails with a conflict when an episode with the
    /// same season and episode number already exists.
    async fn create(&self, episode: &Episode) -> ChronicleResult<Episode>;

    /// Retrieve an episode by id.
    async fn get_by_id(&self, id: i32) -> ChronicleResult<Option<Episode>>;

    /// Find an episode by season and episode number.
    async fn get_by_season_and_number(
        &self,
        season: i32,
        episode_number: i32,
    ) -> ChronicleResult<Option<Episode>>;

    /// Update an existing episode.
    async fn update(&self, episode: &Episode) -> ChronicleResult<Episode>;

    /// Delete an episode by id, cascading deletion of its analysis.
    /// Returns whether a row was deleted.
    async fn delete(&self, id: i32) -> ChronicleResult<bool>;

    /// List all episodes, optionally filtered by season.
    async fn list_all(&self, season: Option<i32>) -> ChronicleResult<Vec<Episode>>;
}

/// Contract for analysis storage: one row per episode, upsert semantics.
#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    /// Retrieve the analysis for an episode, joined with the owning
    /// episode's title.
    async fn get_by_episode_id(&self, episode_id: i32) -> ChronicleResult<Option<EpisodeAnalysis>>;

    /// Upsert keyed on `episode_id`: full replacement of any existing row.
    /// Returns the re-read, durable row rather than echoing the input.
    async fn save(
        &self,
        analysis: &EpisodeAnalysis,
        source: Option<&str>,
        version: Option<&str>,
    ) -> ChronicleResult<EpisodeAnalysis>;
}
