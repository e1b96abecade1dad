//! The structured analysis produced for a single episode.
//!
//! These shapes mirror the JSON the provider is instructed to emit, so they
//! deserialize directly from sanitized provider output. Every field the
//! provider fills carries `#[serde(default)]` — partial output fails only
//! when the JSON itself is malformed, not on benign omissions. Identity
//! fields (`episode_id`, `title`, `analysis_date`) are overwritten by the
//! schema mapper with caller-authoritative values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Deep analysis of one episode, one-to-one with the episode by `episode_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EpisodeAnalysis {
    /// Owning episode id (caller-authoritative)
    pub episode_id: i32,
    /// Episode title (caller-authoritative)
    pub title: String,
    /// When this analysis was created or refreshed
    pub analysis_date: DateTime<Utc>,
    /// Overall emotional sentiment
    pub sentiment: OverallSentiment,
    /// Per-character mood, keyed by character name
    pub character_moods: BTreeMap<String, CharacterMood>,
    /// Pairwise relationship dynamics
    pub relationship_dynamics: Vec<RelationshipDynamic>,
    /// Major themes and their emotional weight
    pub themes: Vec<ThemeAnalysis>,
    /// Narrative arc breakdown
    pub story_arc: NarrativeArc,
    /// Notable emotional moments
    pub key_moments: Vec<EmotionalMoment>,
}

impl Default for EpisodeAnalysis {
    fn default() -> Self {
        Self {
            episode_id: 0,
            title: String::new(),
            analysis_date: Utc::now(),
            sentiment: OverallSentiment::default(),
            character_moods: BTreeMap::new(),
            relationship_dynamics: Vec::new(),
            themes: Vec::new(),
            story_arc: NarrativeArc::default(),
            key_moments: Vec::new(),
        }
    }
}

/// Overall emotional sentiment of an episode.
///
/// Scores are contract-bounded to [0, 1]; out-of-range values are a
/// producer violation and are never clamped here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverallSentiment {
    /// Positivity, 0 to 1
    pub positivity_score: f64,
    /// How emotionally charged, 0 to 1
    pub intensity_score: f64,
    /// Emotional complexity, 0 to 1
    pub complexity_score: f64,
    /// Dominant emotion label
    pub dominant_emotion: String,
    /// Brief description of overall tone
    pub tone_description: String,
    /// Emotional tags, e.g. "bittersweet", "triumphant"
    pub emotional_tags: Vec<String>,
}

impl Default for OverallSentiment {
    fn default() -> Self {
        Self {
            positivity_score: 0.0,
            intensity_score: 0.0,
            complexity_score: 0.0,
            dominant_emotion: "Neutral".to_string(),
            tone_description: String::new(),
            emotional_tags: Vec::new(),
        }
    }
}

/// Mood profile of a single character within one episode.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterMood {
    /// Overall mood description
    pub overall_mood: String,
    /// Positivity, 0 to 1
    pub positivity_score: f64,
    /// Emotion name to score, each 0 to 1
    pub emotion_breakdown: BTreeMap<String, f64>,
    /// How the character changed over the episode
    pub character_growth: String,
    /// Significant actions taken
    pub significant_actions: Vec<String>,
    /// Verbatim transcript lines that define the character
    pub signature_lines: Vec<String>,
}

/// Dynamic between a pair of characters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelationshipDynamic {
    /// First character
    pub character1: String,
    /// Second character
    pub character2: String,
    /// friendship, rivalry, romantic, mentor-student, ...
    pub relationship_type: String,
    /// -1 (conflict) to 1 (harmony)
    pub harmony_score: f64,
    /// Description of the dynamic
    pub dynamic_description: String,
    /// Key interactions between the pair
    pub key_interactions: Vec<String>,
    /// How the relationship changed
    pub evolution: String,
}

/// A theme and its emotional weight.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeAnalysis {
    /// Theme name, e.g. "friendship", "loss"
    pub theme: String,
    /// How prominent in the episode, 0 to 1
    pub prominence: f64,
    /// Emotional tone of the theme
    pub emotional_tone: String,
    /// Moments where the theme surfaces
    pub related_moments: Vec<String>,
}

/// The narrative arc of an episode.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NarrativeArc {
    /// "hero's journey", "tragedy", "comedy", ...
    pub arc_type: String,
    /// Ordered story beats
    pub story_beats: Vec<StoryBeat>,
    /// How satisfying the resolution was, 0 to 1
    pub satisfaction_score: f64,
    /// Description of the emotional progression
    pub emotional_journey: String,
}

/// A single beat within the narrative arc.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoryBeat {
    /// setup, conflict, climax, resolution, ...
    pub beat_type: String,
    /// What happens
    pub description: String,
    /// Emotional intensity, 0 to 1
    pub emotional_intensity: f64,
    /// Position within the episode, 0 to 100
    pub approximate_timestamp: i32,
    /// Verbatim quote that defines this beat
    pub key_dialogue: String,
}

/// A notable emotional moment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmotionalMoment {
    /// What happened
    pub description: String,
    /// Impact, 0 to 1
    pub impact_score: f64,
    /// Characters involved
    pub characters_involved: Vec<String>,
    /// Emotion type
    pub emotion_type: String,
    /// Why the moment matters
    pub significance: String,
    /// Verbatim quotes that make the moment impactful
    pub notable_quotes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_round_trips_through_json() {
        let mut analysis = EpisodeAnalysis {
            episode_id: 7,
            title: "S01E01 Pilot".to_string(),
            ..EpisodeAnalysis::default()
        };
        analysis.sentiment.positivity_score = 0.82;
        analysis.sentiment.intensity_score = 0.4;
        analysis.sentiment.complexity_score = 0.55;
        analysis.sentiment.dominant_emotion = "Joy".to_string();
        analysis.character_moods.insert(
            "Finn".to_string(),
            CharacterMood {
                overall_mood: "upbeat".to_string(),
                positivity_score: 0.9,
                ..CharacterMood::default()
            },
        );

        let json = serde_json::to_string(&analysis).unwrap();
        let decoded: EpisodeAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, analysis);
        assert_eq!(decoded.sentiment.positivity_score, 0.82);
    }

    #[test]
    fn bounded_scores_survive_encode_decode_unclamped() {
        let beat = StoryBeat {
            beat_type: "climax".to_string(),
            emotional_intensity: 0.97,
            approximate_timestamp: 85,
            ..StoryBeat::default()
        };
        let json = serde_json::to_string(&beat).unwrap();
        let decoded: StoryBeat = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.emotional_intensity, 0.97);
        assert_eq!(decoded.approximate_timestamp, 85);
    }

    #[test]
    fn partial_provider_output_fills_defaults() {
        let json = r#"{"sentiment": {"positivityScore": 0.5, "dominantEmotion": "Wonder"}}"#;
        let decoded: EpisodeAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(decoded.sentiment.dominant_emotion, "Wonder");
        assert!(decoded.themes.is_empty());
        assert!(decoded.story_arc.story_beats.is_empty());
    }

    #[test]
    fn wire_field_names_are_camel_case() {
        let sentiment = OverallSentiment::default();
        let json = serde_json::to_string(&sentiment).unwrap();
        assert!(json.contains("positivityScore"));
        assert!(json.contains("toneDescription"));
        assert!(json.contains("emotionalTags"));
    }
}
