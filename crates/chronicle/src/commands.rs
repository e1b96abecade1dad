//! The command/result boundary for analysis creation.
//!
//! Callers outside the pipeline get a tagged result value instead of raw
//! errors: every failure the pipeline can produce is caught here and mapped
//! to a failure kind with a human-readable message.

use chronicle_core::EpisodeAnalysis;
use chronicle_error::{AnalysisErrorKind, ChronicleError, ChronicleErrorKind, DatabaseErrorKind};
use chronicle_interface::{AnalysisProvider, AnalysisRepository, EpisodeRepository};
use std::collections::BTreeMap;
use tracing::{error, info, instrument};

/// Field name to error messages, for validation failures.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Outcome of an analysis-creation request.
///
/// Use the named constructors; they guarantee each variant carries exactly
/// the data that makes it meaningful.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateEpisodeAnalysisResult {
    /// The analysis was created and persisted
    Success(EpisodeAnalysis),
    /// A natural-key collision with an existing record
    Conflict {
        /// Id of the record already holding the key
        existing_id: i32,
        /// Human-readable conflict description
        message: String,
    },
    /// The request data failed validation
    ValidationFailed(FieldErrors),
    /// Anything unexpected: provider, decode, or storage failure
    InternalError(String),
}

impl CreateEpisodeAnalysisResult {
    /// A successful result carrying the durable analysis.
    pub fn success(analysis: EpisodeAnalysis) -> Self {
        Self::Success(analysis)
    }

    /// A conflict with an existing record.
    pub fn conflict(existing_id: i32, message: impl Into<String>) -> Self {
        Self::Conflict {
            existing_id,
            message: message.into(),
        }
    }

    /// A validation failure with a per-field error map.
    pub fn validation_failed(errors: FieldErrors) -> Self {
        Self::ValidationFailed(errors)
    }

    /// An internal failure with a human-readable message.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }

    /// Whether the operation succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Create (or refresh) the analysis for an episode.
///
/// Loads the episode, runs the deep analysis, and persists the result.
/// Never returns a raw error: every failure is mapped to a
/// [`CreateEpisodeAnalysisResult`] variant.
#[instrument(skip(episodes, analyst, analyses))]
pub async fn create_episode_analysis(
    episodes: &dyn EpisodeRepository,
    analyst: &dyn AnalysisProvider,
    analyses: &dyn AnalysisRepository,
    episode_id: i32,
) -> CreateEpisodeAnalysisResult {
    info!("Processing create-analysis request");

    let episode = match episodes.get_by_id(episode_id).await {
        Ok(Some(episode)) => episode,
        Ok(None) => {
            return CreateEpisodeAnalysisResult::validation_failed(field_error(
                "id",
                format!("No episode with id {}", episode_id),
            ));
        }
        Err(err) => return map_error(err),
    };

    let analysis = match analyst.analyze_episode(&episode).await {
        Ok(analysis) => analysis,
        Err(err) => return map_error(err),
    };

    match analyses.save(&analysis, None, None).await {
        Ok(saved) => CreateEpisodeAnalysisResult::success(saved),
        Err(err) => map_error(err),
    }
}

fn field_error(field: &str, message: String) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.insert(field.to_string(), vec![message]);
    errors
}

fn map_error(err: ChronicleError) -> CreateEpisodeAnalysisResult {
    error!(error = %err, "Episode analysis failed");

    match err.kind() {
        ChronicleErrorKind::Analysis(analysis_err) => match &analysis_err.kind {
            AnalysisErrorKind::MissingTranscript(title) => {
                CreateEpisodeAnalysisResult::validation_failed(field_error(
                    "transcriptText",
                    format!("Episode '{}' has no transcript", title),
                ))
            }
            AnalysisErrorKind::EmptyAnalyses => {
                CreateEpisodeAnalysisResult::validation_failed(field_error(
                    "analyses",
                    "No episode analyses provided".to_string(),
                ))
            }
            _ => internal(&err),
        },
        ChronicleErrorKind::Database(db_err) => match &db_err.kind {
            DatabaseErrorKind::Conflict {
                existing_id,
                message,
            } => CreateEpisodeAnalysisResult::conflict(*existing_id, message.clone()),
            _ => internal(&err),
        },
        _ => internal(&err),
    }
}

fn internal(err: &ChronicleError) -> CreateEpisodeAnalysisResult {
    CreateEpisodeAnalysisResult::internal_error(format!(
        "An error occurred while creating the episode analysis: {}",
        err
    ))
}
