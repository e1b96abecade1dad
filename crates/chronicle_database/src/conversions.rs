//! Conversions between domain types and database row models.

use crate::{
    EpisodeAnalysisRow, EpisodeRow, NewEpisodeAnalysisRow, NewEpisodeRow, UpdateEpisodeAnalysisRow,
    UpdateEpisodeRow,
};
use chronicle_core::{Episode, EpisodeAnalysis};
use chronicle_error::{DatabaseError, DatabaseErrorKind};
use chrono::Utc;

type Result<T> = std::result::Result<T, DatabaseError>;

fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value> {
    serde_json::to_value(value)
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Serialization(e.to_string())))
}

fn from_json<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Serialization(e.to_string())))
}

fn names_to_json(names: &[String]) -> Result<Option<serde_json::Value>> {
    if names.is_empty() {
        Ok(None)
    } else {
        to_json(&names).map(Some)
    }
}

fn names_from_json(value: Option<serde_json::Value>) -> Result<Vec<String>> {
    value.map_or_else(|| Ok(Vec::new()), from_json)
}

/// Convert an episode row into the domain model.
pub fn episode_from_row(row: EpisodeRow) -> Result<Episode> {
    Ok(Episode {
        id: row.id,
        title: row.title,
        season: row.season,
        episode_number: row.episode_number,
        synopsis: row.synopsis,
        transcript_text: row.transcript_text,
        major_characters: names_from_json(row.major_characters)?,
        minor_characters: names_from_json(row.minor_characters)?,
        locations: names_from_json(row.locations)?,
        dialogue_line_count: row.dialogue_line_count,
        created_at: row.created_at,
        last_modified_at: row.last_modified_at,
    })
}

/// Convert a domain episode into an insertable row.
pub fn episode_to_new_row(episode: &Episode) -> Result<NewEpisodeRow> {
    Ok(NewEpisodeRow {
        title: episode.title.clone(),
        season: episode.season,
        episode_number: episode.episode_number,
        synopsis: episode.synopsis.clone(),
        transcript_text: episode.transcript_text.clone(),
        major_characters: names_to_json(&episode.major_characters)?,
        minor_characters: names_to_json(&episode.minor_characters)?,
        locations: names_to_json(&episode.locations)?,
        dialogue_line_count: episode.dialogue_line_count,
        created_at: Utc::now(),
    })
}

/// Convert a domain episode into a full-replacement changeset.
pub fn episode_to_update_row(episode: &Episode) -> Result<UpdateEpisodeRow> {
    Ok(UpdateEpisodeRow {
        title: episode.title.clone(),
        season: episode.season,
        episode_number: episode.episode_number,
        synopsis: episode.synopsis.clone(),
        transcript_text: episode.transcript_text.clone(),
        major_characters: names_to_json(&episode.major_characters)?,
        minor_characters: names_to_json(&episode.minor_characters)?,
        locations: names_to_json(&episode.locations)?,
        dialogue_line_count: episode.dialogue_line_count,
        last_modified_at: Some(Utc::now()),
    })
}

/// Convert a domain analysis into an insertable row, serializing each
/// nested substructure to its own blob and recomputing the scalar
/// projections from the sentiment value so they stay in lockstep.
pub fn analysis_to_new_row(
    analysis: &EpisodeAnalysis,
    source: Option<&str>,
    version: Option<&str>,
) -> Result<NewEpisodeAnalysisRow> {
    Ok(NewEpisodeAnalysisRow {
        episode_id: analysis.episode_id,
        analysis_date: analysis.analysis_date,
        sentiment: to_json(&analysis.sentiment)?,
        positivity_score: analysis.sentiment.positivity_score,
        intensity_score: analysis.sentiment.intensity_score,
        complexity_score: analysis.sentiment.complexity_score,
        dominant_emotion: analysis.sentiment.dominant_emotion.clone(),
        character_moods: to_json(&analysis.character_moods)?,
        relationship_dynamics: to_json(&analysis.relationship_dynamics)?,
        themes: to_json(&analysis.themes)?,
        story_arc: to_json(&analysis.story_arc)?,
        key_moments: to_json(&analysis.key_moments)?,
        analysis_source: source.map(str::to_string),
        analysis_version: version.map(str::to_string),
        created_at: Utc::now(),
    })
}

/// Convert a domain analysis into a full-replacement changeset.
pub fn analysis_to_update_row(
    analysis: &EpisodeAnalysis,
    source: Option<&str>,
    version: Option<&str>,
) -> Result<UpdateEpisodeAnalysisRow> {
    Ok(UpdateEpisodeAnalysisRow {
        episode_id: analysis.episode_id,
        analysis_date: analysis.analysis_date,
        sentiment: to_json(&analysis.sentiment)?,
        positivity_score: analysis.sentiment.positivity_score,
        intensity_score: analysis.sentiment.intensity_score,
        complexity_score: analysis.sentiment.complexity_score,
        dominant_emotion: analysis.sentiment.dominant_emotion.clone(),
        character_moods: to_json(&analysis.character_moods)?,
        relationship_dynamics: to_json(&analysis.relationship_dynamics)?,
        themes: to_json(&analysis.themes)?,
        story_arc: to_json(&analysis.story_arc)?,
        key_moments: to_json(&analysis.key_moments)?,
        analysis_source: source.map(str::to_string),
        analysis_version: version.map(str::to_string),
        updated_at: Some(Utc::now()),
    })
}

/// Reconstruct a domain analysis from a row joined with the owning
/// episode's title.
pub fn analysis_from_row(row: EpisodeAnalysisRow, title: String) -> Result<EpisodeAnalysis> {
    Ok(EpisodeAnalysis {
        episode_id: row.episode_id,
        title,
        analysis_date: row.analysis_date,
        sentiment: from_json(row.sentiment)?,
        character_moods: from_json(row.character_moods)?,
        relationship_dynamics: from_json(row.relationship_dynamics)?,
        themes: from_json(row.themes)?,
        story_arc: from_json(row.story_arc)?,
        key_moments: from_json(row.key_moments)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronicle_core::{CharacterMood, RelationshipDynamic, StoryBeat, ThemeAnalysis};

    fn sample_analysis() -> EpisodeAnalysis {
        let mut analysis = EpisodeAnalysis {
            episode_id: 7,
            title: "S01E03 The Cave".to_string(),
            ..EpisodeAnalysis::default()
        };
        analysis.sentiment.positivity_score = 0.62;
        analysis.sentiment.intensity_score = 0.81;
        analysis.sentiment.complexity_score = 0.44;
        analysis.sentiment.dominant_emotion = "Wonder".to_string();
        analysis.sentiment.emotional_tags = vec!["eerie".to_string(), "hopeful".to_string()];
        analysis.character_moods.insert(
            "Marceline".to_string(),
            CharacterMood {
                overall_mood: "wistful".to_string(),
                positivity_score: 0.5,
                signature_lines: vec!["I remember this place.".to_string()],
                ..CharacterMood::default()
            },
        );
        analysis.relationship_dynamics.push(RelationshipDynamic {
            character1: "Finn".to_string(),
            character2: "Marceline".to_string(),
            harmony_score: -0.2,
            ..RelationshipDynamic::default()
        });
        analysis.themes.push(ThemeAnalysis {
            theme: "memory".to_string(),
            prominence: 0.9,
            ..ThemeAnalysis::default()
        });
        analysis.story_arc.arc_type = "descent".to_string();
        analysis.story_arc.story_beats.push(StoryBeat {
            beat_type: "setup".to_string(),
            emotional_intensity: 0.3,
            approximate_timestamp: 10,
            ..StoryBeat::default()
        });
        analysis
    }

    fn row_from_new(new_row: NewEpisodeAnalysisRow) -> EpisodeAnalysisRow {
        EpisodeAnalysisRow {
            id: 1,
            episode_id: new_row.episode_id,
            analysis_date: new_row.analysis_date,
            sentiment: new_row.sentiment,
            positivity_score: new_row.positivity_score,
            intensity_score: new_row.intensity_score,
            complexity_score: new_row.complexity_score,
            dominant_emotion: new_row.dominant_emotion,
            character_moods: new_row.character_moods,
            relationship_dynamics: new_row.relationship_dynamics,
            themes: new_row.themes,
            story_arc: new_row.story_arc,
            key_moments: new_row.key_moments,
            analysis_source: new_row.analysis_source,
            analysis_version: new_row.analysis_version,
            created_at: new_row.created_at,
            updated_at: None,
        }
    }

    #[test]
    fn analysis_round_trips_losslessly_through_blobs() {
        let analysis = sample_analysis();
        let new_row = analysis_to_new_row(&analysis, Some("openai"), Some("v1")).unwrap();
        let restored =
            analysis_from_row(row_from_new(new_row), analysis.title.clone()).unwrap();

        assert_eq!(restored, analysis);
    }

    #[test]
    fn scalar_projections_stay_in_lockstep_with_sentiment_blob() {
        let analysis = sample_analysis();
        let row = analysis_to_new_row(&analysis, None, None).unwrap();

        assert_eq!(row.positivity_score, analysis.sentiment.positivity_score);
        assert_eq!(row.intensity_score, analysis.sentiment.intensity_score);
        assert_eq!(row.complexity_score, analysis.sentiment.complexity_score);
        assert_eq!(row.dominant_emotion, analysis.sentiment.dominant_emotion);

        // And the blob agrees with the projections.
        assert_eq!(row.sentiment["positivityScore"], 0.62);
        assert_eq!(row.sentiment["dominantEmotion"], "Wonder");
    }

    #[test]
    fn bounded_scores_survive_the_blob_cycle_unclamped() {
        let mut analysis = sample_analysis();
        analysis.relationship_dynamics[0].harmony_score = -1.0;
        analysis.story_arc.satisfaction_score = 1.0;

        let new_row = analysis_to_new_row(&analysis, None, None).unwrap();
        let restored =
            analysis_from_row(row_from_new(new_row), analysis.title.clone()).unwrap();

        assert_eq!(restored.relationship_dynamics[0].harmony_score, -1.0);
        assert_eq!(restored.story_arc.satisfaction_score, 1.0);
    }

    #[test]
    fn episode_round_trips_through_row() {
        let episode = Episode {
            id: 3,
            title: "S01E03 The Cave".to_string(),
            season: 1,
            episode_number: 3,
            major_characters: vec!["Finn".to_string(), "Jake".to_string()],
            ..Episode::default()
        };

        let new_row = episode_to_new_row(&episode).unwrap();
        let row = EpisodeRow {
            id: episode.id,
            title: new_row.title,
            season: new_row.season,
            episode_number: new_row.episode_number,
            synopsis: new_row.synopsis,
            transcript_text: new_row.transcript_text,
            major_characters: new_row.major_characters,
            minor_characters: new_row.minor_characters,
            locations: new_row.locations,
            dialogue_line_count: new_row.dialogue_line_count,
            created_at: new_row.created_at,
            last_modified_at: None,
        };

        let restored = episode_from_row(row).unwrap();
        assert_eq!(restored.title, episode.title);
        assert_eq!(restored.major_characters, episode.major_characters);
        assert!(restored.minor_characters.is_empty());
    }
}
