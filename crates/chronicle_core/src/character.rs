//! Cross-episode character-focused analysis.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Deep character analysis aggregated across multiple episodes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterDynamicsAnalysis {
    /// The analyzed character (caller-authoritative)
    pub character_name: String,
    /// Personality profile and core traits
    pub personality: PersonalityProfile,
    /// Emotional patterns and tendencies
    pub emotional_patterns: EmotionalPattern,
    /// Relationships keyed by the other character's name
    pub relationships: BTreeMap<String, RelationshipProfile>,
    /// The character's overall arc
    pub overall_arc: CharacterArc,
    /// Moments that defined the character
    pub defining_moments: Vec<DefiningMoment>,
}

/// Personality profile of a character.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalityProfile {
    /// Core personality traits
    pub core_traits: Vec<String>,
    /// Emotion name to tendency score, each 0 to 1
    pub emotional_tendencies: BTreeMap<String, f64>,
    /// What drives the character
    pub motivation_description: String,
    /// Behaviors the character repeats
    pub recurring_behaviors: Vec<String>,
    /// How the character handles stress
    pub coping_mechanisms: String,
}

/// Emotional patterns of a character.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmotionalPattern {
    /// Emotion name to frequency, each 0 to 1
    pub emotion_frequency: BTreeMap<String, f64>,
    /// What sets the character off
    pub emotional_triggers: Vec<String>,
    /// "wide", "narrow", "volatile"
    pub emotional_range: String,
    /// Emotional maturity, 0 to 1
    pub emotional_maturity: f64,
}

/// The character's relationship with one other character.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelationshipProfile {
    /// Nature of the relationship
    pub relationship_nature: String,
    /// How important this relationship is, 0 to 1
    pub importance_score: f64,
    /// Typical interaction patterns
    pub common_interaction_patterns: Vec<String>,
    /// "equal", "mentor-student", ...
    pub power_dynamic: String,
    /// How the pair resolves conflicts
    pub conflict_resolution_style: String,
}

/// The character's arc across the analyzed episodes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterArc {
    /// Overall journey description
    pub arc_description: String,
    /// Major turning points
    pub major_turning_points: Vec<String>,
    /// How the character changed
    pub growth_summary: String,
    /// Consistent vs contradictory, 0 to 1
    pub consistency_score: f64,
}

/// A single defining moment for the character.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DefiningMoment {
    /// Episode where the moment happened
    pub episode_title: String,
    /// What happened
    pub moment_description: String,
    /// How it affected the character
    pub impact: String,
    /// Traits the moment revealed
    pub revealed_traits: Vec<String>,
}
