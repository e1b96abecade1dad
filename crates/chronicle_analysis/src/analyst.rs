//! The analysis orchestrator.

use crate::season::infer_season;
use crate::{mapper, prompt, quotes, sanitize};
use async_trait::async_trait;
use chrono::Utc;
use chronicle_core::{
    CharacterDynamicsAnalysis, Episode, EpisodeAnalysis, GenerateRequest, Message, SeasonAnalysis,
};
use chronicle_error::{AnalysisError, AnalysisErrorKind, ChronicleResult};
use chronicle_interface::{AnalysisDriver, AnalysisProvider};
use tracing::{debug, info, instrument};

/// Composes prompt construction, the provider call, sanitization, and
/// schema mapping for each analysis operation.
///
/// The analyst is generic over the driver, so the same orchestration runs
/// unchanged against either provider. Each operation makes exactly one
/// outbound call, performs no retries, and stamps caller-authoritative
/// identity onto the decoded result.
pub struct DeepAnalyst<D: AnalysisDriver> {
    driver: D,
}

impl<D: AnalysisDriver> DeepAnalyst<D> {
    /// Create a new analyst backed by the given driver.
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// The driver backing this analyst.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    async fn generate_text(&self, prompt: String) -> ChronicleResult<String> {
        let request = GenerateRequest {
            messages: vec![Message::user(prompt)],
            ..GenerateRequest::default()
        };
        let response = self.driver.generate(&request).await?;
        Ok(sanitize::sanitize_response(&response.text))
    }
}

#[async_trait]
impl<D: AnalysisDriver> AnalysisProvider for DeepAnalyst<D> {
    #[instrument(skip(self, episode), fields(title = %episode.title, provider = self.driver.provider_name()))]
    async fn analyze_episode(&self, episode: &Episode) -> ChronicleResult<EpisodeAnalysis> {
        info!("Starting deep analysis for episode");

        let prompt = prompt::episode_analysis_prompt(episode)?;
        let cleaned = self.generate_text(prompt).await?;

        let mut analysis: EpisodeAnalysis = mapper::decode_payload(&cleaned)?;
        analysis.episode_id = episode.id;
        analysis.title = episode.title.clone();
        analysis.analysis_date = Utc::now();

        if let Some(transcript) = episode.transcript_text.as_deref() {
            let violations = quotes::verify(&analysis, transcript);
            quotes::log_violations(&episode.title, &violations);
        }

        debug!(
            dominant_emotion = %analysis.sentiment.dominant_emotion,
            characters = analysis.character_moods.len(),
            "Episode analysis decoded"
        );
        Ok(analysis)
    }

    #[instrument(skip(self, analyses), fields(count = analyses.len()))]
    async fn analyze_season_trends(
        &self,
        analyses: &[EpisodeAnalysis],
        season: Option<i32>,
    ) -> ChronicleResult<SeasonAnalysis> {
        if analyses.is_empty() {
            return Err(AnalysisError::new(AnalysisErrorKind::EmptyAnalyses).into());
        }

        let season = season.unwrap_or_else(|| infer_season(&analyses[0].title));
        info!(season, "Analyzing season trends");

        let prompt = prompt::season_analysis_prompt(analyses, season)?;
        let cleaned = self.generate_text(prompt).await?;

        let mut analysis: SeasonAnalysis = mapper::decode_payload(&cleaned)?;
        analysis.season = season;
        Ok(analysis)
    }

    #[instrument(skip(self, episodes), fields(character = %character_name, count = episodes.len()))]
    async fn analyze_character_dynamics(
        &self,
        episodes: &[Episode],
        character_name: &str,
    ) -> ChronicleResult<CharacterDynamicsAnalysis> {
        info!("Analyzing character dynamics");

        let prompt = prompt::character_analysis_prompt(episodes, character_name)?;
        let cleaned = self.generate_text(prompt).await?;

        let mut analysis: CharacterDynamicsAnalysis = mapper::decode_payload(&cleaned)?;
        analysis.character_name = character_name.to_string();
        Ok(analysis)
    }
}
