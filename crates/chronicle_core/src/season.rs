//! Season-level aggregate analysis, derived from multiple episode analyses.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Season-wide trend analysis aggregated over episode analyses.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeasonAnalysis {
    /// Season number (caller-authoritative)
    pub season: i32,
    /// Season-wide emotional trends
    pub trends: SeasonalTrends,
    /// Character growth arcs across the season
    pub character_growth: CharacterEvolution,
    /// How key relationships evolved
    pub relationship_changes: RelationshipEvolution,
    /// Major recurring themes
    pub major_themes: Vec<SeasonalTheme>,
    /// The emotional trajectory of the season
    pub emotional_arc: EmotionalTrajectory,
}

/// Aggregate emotional trends over a season.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeasonalTrends {
    /// Mean positivity across episodes, 0 to 1
    pub average_positivity: f64,
    /// How much emotions fluctuate, 0 to 1
    pub emotional_variance: f64,
    /// Dominant tone of the season
    pub dominant_tone: String,
    /// Recurring elements across episodes
    pub recurring_elements: Vec<String>,
    /// Emotion name to occurrence count
    pub emotion_frequency: BTreeMap<String, i32>,
}

/// Character journeys across a season, keyed by character name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterEvolution {
    /// Per-character journey descriptions
    pub character_journeys: BTreeMap<String, CharacterJourney>,
}

/// One character's arc across the season.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterJourney {
    /// State at the start of the season
    pub starting_state: String,
    /// State at the end of the season
    pub ending_state: String,
    /// Key developments along the way
    pub key_developments: Vec<String>,
    /// How much the character evolved, 0 to 1
    pub growth_score: f64,
    /// Narrative description of the growth
    pub growth_description: String,
}

/// Relationship evolution across a season.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelationshipEvolution {
    /// The relationships that changed meaningfully
    pub significant_relationships: Vec<RelationshipJourney>,
}

/// How one relationship changed over the season.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelationshipJourney {
    /// e.g. "Finn & Jake"
    pub relationship: String,
    /// Dynamic at the start of the season
    pub starting_dynamic: String,
    /// Dynamic at the end of the season
    pub ending_dynamic: String,
    /// Episodes or events where the dynamic turned
    pub turning_points: Vec<String>,
    /// Stable vs volatile, 0 to 1
    pub stability_score: f64,
}

/// A theme recurring across the season.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeasonalTheme {
    /// Theme name
    pub theme: String,
    /// Prominence across the season, 0 to 1
    pub prominence: f64,
    /// Episodes where the theme is central
    pub key_episodes: Vec<String>,
    /// How the theme developed
    pub thematic_evolution: String,
}

/// The per-episode emotional trajectory of a season.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmotionalTrajectory {
    /// One data point per episode, in airing order
    pub data_points: Vec<EmotionalDataPoint>,
    /// "ascending", "descending", "cyclical", "stable"
    pub overall_shape: String,
    /// Narrative of the emotional journey
    pub description: String,
}

/// One episode's position on the season's emotional trajectory.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmotionalDataPoint {
    /// Episode number within the season
    pub episode_number: i32,
    /// Positivity, 0 to 1
    pub positivity_score: f64,
    /// Intensity, 0 to 1
    pub intensity_score: f64,
    /// Dominant emotion of the episode
    pub dominant_emotion: String,
}
