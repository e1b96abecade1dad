//! Database row models for episodes and analyses.

use crate::schema::{episode_analyses, episodes};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// A stored episode.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = episodes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EpisodeRow {
    pub id: i32,
    pub title: String,
    pub season: i32,
    pub episode_number: i32,
    pub synopsis: Option<String>,
    pub transcript_text: Option<String>,
    pub major_characters: Option<serde_json::Value>,
    pub minor_characters: Option<serde_json::Value>,
    pub locations: Option<serde_json::Value>,
    pub dialogue_line_count: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub last_modified_at: Option<DateTime<Utc>>,
}

/// New episode for insertion.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = episodes)]
pub struct NewEpisodeRow {
    pub title: String,
    pub season: i32,
    pub episode_number: i32,
    pub synopsis: Option<String>,
    pub transcript_text: Option<String>,
    pub major_characters: Option<serde_json::Value>,
    pub minor_characters: Option<serde_json::Value>,
    pub locations: Option<serde_json::Value>,
    pub dialogue_line_count: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Full-replacement changeset for an episode update.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = episodes)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateEpisodeRow {
    pub title: String,
    pub season: i32,
    pub episode_number: i32,
    pub synopsis: Option<String>,
    pub transcript_text: Option<String>,
    pub major_characters: Option<serde_json::Value>,
    pub minor_characters: Option<serde_json::Value>,
    pub locations: Option<serde_json::Value>,
    pub dialogue_line_count: Option<i32>,
    pub last_modified_at: Option<DateTime<Utc>>,
}

/// A stored episode analysis.
///
/// Nested substructures live in jsonb blob columns; the four scalar
/// projection columns are duplicated out of the sentiment blob to support
/// indexed filtering without deserializing it.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = episode_analyses)]
#[diesel(belongs_to(EpisodeRow, foreign_key = episode_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EpisodeAnalysisRow {
    pub id: i32,
    pub episode_id: i32,
    pub analysis_date: DateTime<Utc>,
    pub sentiment: serde_json::Value,
    pub positivity_score: f64,
    pub intensity_score: f64,
    pub complexity_score: f64,
    pub dominant_emotion: String,
    pub character_moods: serde_json::Value,
    pub relationship_dynamics: serde_json::Value,
    pub themes: serde_json::Value,
    pub story_arc: serde_json::Value,
    pub key_moments: serde_json::Value,
    pub analysis_source: Option<String>,
    pub analysis_version: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// New analysis row for insertion.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = episode_analyses)]
pub struct NewEpisodeAnalysisRow {
    pub episode_id: i32,
    pub analysis_date: DateTime<Utc>,
    pub sentiment: serde_json::Value,
    pub positivity_score: f64,
    pub intensity_score: f64,
    pub complexity_score: f64,
    pub dominant_emotion: String,
    pub character_moods: serde_json::Value,
    pub relationship_dynamics: serde_json::Value,
    pub themes: serde_json::Value,
    pub story_arc: serde_json::Value,
    pub key_moments: serde_json::Value,
    pub analysis_source: Option<String>,
    pub analysis_version: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Full-replacement changeset for an analysis update.
///
/// `treat_none_as_null` so a replacement with no source/version clears the
/// old metadata instead of silently keeping it.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = episode_analyses)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateEpisodeAnalysisRow {
    pub episode_id: i32,
    pub analysis_date: DateTime<Utc>,
    pub sentiment: serde_json::Value,
    pub positivity_score: f64,
    pub intensity_score: f64,
    pub complexity_score: f64,
    pub dominant_emotion: String,
    pub character_moods: serde_json::Value,
    pub relationship_dynamics: serde_json::Value,
    pub themes: serde_json::Value,
    pub story_arc: serde_json::Value,
    pub key_moments: serde_json::Value,
    pub analysis_source: Option<String>,
    pub analysis_version: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}
