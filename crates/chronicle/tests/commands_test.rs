// Tests for the command/result boundary.
//
// Repositories and the analyst are stubbed in memory; the point here is
// the mapping from pipeline outcomes to tagged result values.

use async_trait::async_trait;
use chronicle::{create_episode_analysis, CreateEpisodeAnalysisResult};
use chronicle_core::{
    CharacterDynamicsAnalysis, Episode, EpisodeAnalysis, SeasonAnalysis,
};
use chronicle_error::{
    AnalysisError, AnalysisErrorKind, ChronicleError, ChronicleResult, DatabaseError,
    DatabaseErrorKind, ProviderError, ProviderErrorKind,
};
use chronicle_interface::{AnalysisProvider, AnalysisRepository, EpisodeRepository};
use std::collections::HashMap;
use std::sync::Mutex;

struct InMemoryEpisodes {
    episodes: Mutex<HashMap<i32, Episode>>,
}

impl InMemoryEpisodes {
    fn with(episodes: Vec<Episode>) -> Self {
        Self {
            episodes: Mutex::new(episodes.into_iter().map(|e| (e.id, e)).collect()),
        }
    }
}

#[async_trait]
impl EpisodeRepository for InMemoryEpisodes {
    async fn create(&self, episode: &Episode) -> ChronicleResult<Episode> {
        self.episodes
            .lock()
            .unwrap()
            .insert(episode.id, episode.clone());
        Ok(episode.clone())
    }

    async fn get_by_id(&self, id: i32) -> ChronicleResult<Option<Episode>> {
        Ok(self.episodes.lock().unwrap().get(&id).cloned())
    }

    async fn get_by_season_and_number(
        &self,
        season: i32,
        episode_number: i32,
    ) -> ChronicleResult<Option<Episode>> {
        Ok(self
            .episodes
            .lock()
            .unwrap()
            .values()
            .find(|e| e.season == season && e.episode_number == episode_number)
            .cloned())
    }

    async fn update(&self, episode: &Episode) -> ChronicleResult<Episode> {
        self.episodes
            .lock()
            .unwrap()
            .insert(episode.id, episode.clone());
        Ok(episode.clone())
    }

    async fn delete(&self, id: i32) -> ChronicleResult<bool> {
        Ok(self.episodes.lock().unwrap().remove(&id).is_some())
    }

    async fn list_all(&self, season: Option<i32>) -> ChronicleResult<Vec<Episode>> {
        Ok(self
            .episodes
            .lock()
            .unwrap()
            .values()
            .filter(|e| season.is_none_or(|s| e.season == s))
            .cloned()
            .collect())
    }
}

#[derive(Default)]
struct InMemoryAnalyses {
    rows: Mutex<HashMap<i32, EpisodeAnalysis>>,
    fail_with_conflict: Option<(i32, String)>,
}

#[async_trait]
impl AnalysisRepository for InMemoryAnalyses {
    async fn get_by_episode_id(&self, episode_id: i32) -> ChronicleResult<Option<EpisodeAnalysis>> {
        Ok(self.rows.lock().unwrap().get(&episode_id).cloned())
    }

    async fn save(
        &self,
        analysis: &EpisodeAnalysis,
        _source: Option<&str>,
        _version: Option<&str>,
    ) -> ChronicleResult<EpisodeAnalysis> {
        if let Some((existing_id, message)) = &self.fail_with_conflict {
            return Err(DatabaseError::new(DatabaseErrorKind::Conflict {
                existing_id: *existing_id,
                message: message.clone(),
            })
            .into());
        }
        self.rows
            .lock()
            .unwrap()
            .insert(analysis.episode_id, analysis.clone());
        Ok(analysis.clone())
    }
}

enum AnalystScript {
    Succeed,
    Fail(fn() -> ChronicleError),
}

struct ScriptedAnalyst {
    script: AnalystScript,
}

#[async_trait]
impl AnalysisProvider for ScriptedAnalyst {
    async fn analyze_episode(&self, episode: &Episode) -> ChronicleResult<EpisodeAnalysis> {
        match &self.script {
            AnalystScript::Succeed => {
                let mut analysis = EpisodeAnalysis {
                    episode_id: episode.id,
                    title: episode.title.clone(),
                    ..EpisodeAnalysis::default()
                };
                analysis.sentiment.dominant_emotion = "Joy".to_string();
                Ok(analysis)
            }
            AnalystScript::Fail(make) => Err(make()),
        }
    }

    async fn analyze_season_trends(
        &self,
        _analyses: &[EpisodeAnalysis],
        _season: Option<i32>,
    ) -> ChronicleResult<SeasonAnalysis> {
        Ok(SeasonAnalysis::default())
    }

    async fn analyze_character_dynamics(
        &self,
        _episodes: &[Episode],
        character_name: &str,
    ) -> ChronicleResult<CharacterDynamicsAnalysis> {
        Ok(CharacterDynamicsAnalysis {
            character_name: character_name.to_string(),
            ..CharacterDynamicsAnalysis::default()
        })
    }
}

fn test_episode() -> Episode {
    Episode {
        id: 42,
        title: "S02E05 Test".to_string(),
        season: 2,
        episode_number: 5,
        transcript_text: Some("Finn: I'm scared.".to_string()),
        ..Episode::default()
    }
}

#[tokio::test]
async fn success_persists_and_returns_the_analysis() {
    let episodes = InMemoryEpisodes::with(vec![test_episode()]);
    let analyses = InMemoryAnalyses::default();
    let analyst = ScriptedAnalyst {
        script: AnalystScript::Succeed,
    };

    let result = create_episode_analysis(&episodes, &analyst, &analyses, 42).await;

    match result {
        CreateEpisodeAnalysisResult::Success(analysis) => {
            assert_eq!(analysis.episode_id, 42);
            assert_eq!(analysis.sentiment.dominant_emotion, "Joy");
        }
        other => panic!("expected success, got {:?}", other),
    }
    assert!(analyses
        .get_by_episode_id(42)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn unknown_episode_id_maps_to_validation_failure() {
    let episodes = InMemoryEpisodes::with(vec![]);
    let analyses = InMemoryAnalyses::default();
    let analyst = ScriptedAnalyst {
        script: AnalystScript::Succeed,
    };

    let result = create_episode_analysis(&episodes, &analyst, &analyses, 9000).await;

    match result {
        CreateEpisodeAnalysisResult::ValidationFailed(errors) => {
            assert!(errors.contains_key("id"));
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
}

#[tokio::test]
async fn missing_transcript_maps_to_field_error() {
    let episodes = InMemoryEpisodes::with(vec![test_episode()]);
    let analyses = InMemoryAnalyses::default();
    let analyst = ScriptedAnalyst {
        script: AnalystScript::Fail(|| {
            AnalysisError::new(AnalysisErrorKind::MissingTranscript(
                "S02E05 Test".to_string(),
            ))
            .into()
        }),
    };

    let result = create_episode_analysis(&episodes, &analyst, &analyses, 42).await;

    match result {
        CreateEpisodeAnalysisResult::ValidationFailed(errors) => {
            assert!(errors.contains_key("transcriptText"));
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
}

#[tokio::test]
async fn storage_conflict_maps_to_conflict_with_existing_identity() {
    let episodes = InMemoryEpisodes::with(vec![test_episode()]);
    let analyses = InMemoryAnalyses {
        fail_with_conflict: Some((7, "already analyzed".to_string())),
        ..InMemoryAnalyses::default()
    };
    let analyst = ScriptedAnalyst {
        script: AnalystScript::Succeed,
    };

    let result = create_episode_analysis(&episodes, &analyst, &analyses, 42).await;

    match result {
        CreateEpisodeAnalysisResult::Conflict {
            existing_id,
            message,
        } => {
            assert_eq!(existing_id, 7);
            assert_eq!(message, "already analyzed");
        }
        other => panic!("expected conflict, got {:?}", other),
    }
}

#[tokio::test]
async fn provider_failure_maps_to_internal_error() {
    let episodes = InMemoryEpisodes::with(vec![test_episode()]);
    let analyses = InMemoryAnalyses::default();
    let analyst = ScriptedAnalyst {
        script: AnalystScript::Fail(|| {
            ProviderError::new(ProviderErrorKind::Api {
                status: 503,
                message: "overloaded".to_string(),
            })
            .into()
        }),
    };

    let result = create_episode_analysis(&episodes, &analyst, &analyses, 42).await;

    match result {
        CreateEpisodeAnalysisResult::InternalError(message) => {
            assert!(message.contains("An error occurred"));
        }
        other => panic!("expected internal error, got {:?}", other),
    }
}
