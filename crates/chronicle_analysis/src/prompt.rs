//! Prompt construction for the three analysis operations.
//!
//! Builders are pure string-construction functions: they embed the raw
//! transcript(s) verbatim, state the analytical dimensions to cover, embed
//! a literal example of the target JSON shape with placeholder value
//! ranges, and instruct the provider to emit only that JSON.

use chronicle_core::{Episode, EpisodeAnalysis};
use chronicle_error::{AnalysisError, AnalysisErrorKind};
use serde::Serialize;

/// Cap on extracted dialogue lines per episode, to bound prompt size.
const CHARACTER_LINES_PER_EPISODE: usize = 50;

/// Build the single-episode analysis prompt.
///
/// # Errors
///
/// Fails when the episode has no transcript (or only whitespace).
pub fn episode_analysis_prompt(episode: &Episode) -> Result<String, AnalysisError> {
    let transcript = episode
        .transcript_text
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            AnalysisError::new(AnalysisErrorKind::MissingTranscript(episode.title.clone()))
        })?;

    Ok(format!(
        r#"
You are analyzing the episode '{title}' ({code}).

Transcript:
{transcript}

Please provide a deep analysis of this episode focusing on:
1. Overall emotional sentiment and tone
2. Character moods and development (INCLUDING their most impactful dialogue)
3. Relationship dynamics between characters
4. Major themes and their emotional weight
5. The narrative arc and emotional journey (INCLUDING key dialogue at story beats)
6. Key emotional moments (INCLUDING the specific quotes that make them impactful)

Analyze the emotional complexity, not just positive/negative. Consider:
- Character growth and change
- Relationship evolution
- Thematic depth
- Emotional nuance (bittersweet moments, complex feelings)
- How characters cope with challenges
- Power dynamics and how they shift
- The specific dialogue that reveals character

IMPORTANT QUOTES POLICY: for each character's signatureLines, each story
beat's keyDialogue, and each key moment's notableQuotes, use verbatim
lines from the transcript. Never invent dialogue.

Format your response as JSON matching this structure:
{{
  "sentiment": {{
    "positivityScore": 0.0-1.0,
    "intensityScore": 0.0-1.0,
    "complexityScore": 0.0-1.0,
    "dominantEmotion": "string",
    "toneDescription": "brief description of overall tone",
    "emotionalTags": ["tag1", "tag2"]
  }},
  "characterMoods": {{
    "CharacterName": {{
      "overallMood": "description",
      "positivityScore": 0.0-1.0,
      "emotionBreakdown": {{
        "joy": 0.0-1.0,
        "sadness": 0.0-1.0,
        "anger": 0.0-1.0,
        "fear": 0.0-1.0,
        "surprise": 0.0-1.0
      }},
      "characterGrowth": "how the character changed",
      "significantActions": ["action1", "action2"],
      "signatureLines": ["exact quote 1", "exact quote 2", "exact quote 3"]
    }}
  }},
  "relationshipDynamics": [
    {{
      "character1": "Name1",
      "character2": "Name2",
      "relationshipType": "friendship/rivalry/etc",
      "harmonyScore": -1.0 to 1.0,
      "dynamicDescription": "description",
      "keyInteractions": ["interaction1"],
      "evolution": "how relationship changed"
    }}
  ],
  "themes": [
    {{
      "theme": "theme name",
      "prominence": 0.0-1.0,
      "emotionalTone": "tone",
      "relatedMoments": ["moment1"]
    }}
  ],
  "storyArc": {{
    "arcType": "hero's journey/tragedy/etc",
    "storyBeats": [
      {{
        "beatType": "setup/conflict/climax/resolution",
        "description": "what happens",
        "emotionalIntensity": 0.0-1.0,
        "approximateTimestamp": 0-100,
        "keyDialogue": "the exact quote that defines this story beat"
      }}
    ],
    "satisfactionScore": 0.0-1.0,
    "emotionalJourney": "description of emotional progression"
  }},
  "keyMoments": [
    {{
      "description": "what happened",
      "impactScore": 0.0-1.0,
      "charactersInvolved": ["Name1"],
      "emotionType": "emotion",
      "significance": "why it matters",
      "notableQuotes": ["exact quote 1", "exact quote 2"]
    }}
  ]
}}

Pay attention to subtext and implied emotions.
Respond ONLY with valid JSON, no additional text or markdown formatting."#,
        title = episode.title,
        code = episode.episode_code(),
        transcript = transcript,
    ))
}

/// Compact projection of one episode analysis, embedded in the season
/// prompt to bound its size.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EpisodeSummary {
    title: String,
    dominant_emotion: String,
    positivity_score: f64,
    intensity_score: f64,
    themes: String,
    key_relationships: Vec<String>,
}

impl EpisodeSummary {
    fn from_analysis(analysis: &EpisodeAnalysis) -> Self {
        Self {
            title: analysis.title.clone(),
            dominant_emotion: analysis.sentiment.dominant_emotion.clone(),
            positivity_score: analysis.sentiment.positivity_score,
            intensity_score: analysis.sentiment.intensity_score,
            themes: analysis
                .themes
                .iter()
                .map(|t| t.theme.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            key_relationships: analysis
                .relationship_dynamics
                .iter()
                .map(|r| format!("{}-{}: {:.2}", r.character1, r.character2, r.harmony_score))
                .collect(),
        }
    }
}

/// Build the season trend-analysis prompt from per-episode summaries.
///
/// # Errors
///
/// Fails when the summaries cannot be serialized.
pub fn season_analysis_prompt(
    analyses: &[EpisodeAnalysis],
    season: i32,
) -> Result<String, AnalysisError> {
    let summaries: Vec<EpisodeSummary> =
        analyses.iter().map(EpisodeSummary::from_analysis).collect();

    let summary_json = serde_json::to_string_pretty(&summaries)
        .map_err(|e| AnalysisError::new(AnalysisErrorKind::Serialization(e.to_string())))?;

    Ok(format!(
        r#"
You are analyzing Season {season} based on individual episode analyses.

Episode summaries:
{summary_json}

Analyze the season-wide patterns:
1. Overall emotional trends and how they evolve
2. Character growth arcs across the season
3. How key relationships evolved
4. Major recurring themes and their development
5. The emotional trajectory of the season

Consider:
- How early episodes compare to later ones
- Character development patterns
- Relationship stability or volatility
- Thematic consistency or evolution
- Overall emotional arc of the season

Format as JSON:
{{
  "trends": {{
    "averagePositivity": 0.0-1.0,
    "emotionalVariance": 0.0-1.0,
    "dominantTone": "description",
    "recurringElements": ["element1"],
    "emotionFrequency": {{"emotion": count}}
  }},
  "characterGrowth": {{
    "characterJourneys": {{
      "CharacterName": {{
        "startingState": "description",
        "endingState": "description",
        "keyDevelopments": ["development1"],
        "growthScore": 0.0-1.0,
        "growthDescription": "how they grew"
      }}
    }}
  }},
  "relationshipChanges": {{
    "significantRelationships": [
      {{
        "relationship": "Character1 & Character2",
        "startingDynamic": "description",
        "endingDynamic": "description",
        "turningPoints": ["episode or event"],
        "stabilityScore": 0.0-1.0
      }}
    ]
  }},
  "majorThemes": [
    {{
      "theme": "theme name",
      "prominence": 0.0-1.0,
      "keyEpisodes": ["episode1"],
      "thematicEvolution": "how theme developed"
    }}
  ],
  "emotionalArc": {{
    "dataPoints": [
      {{
        "episodeNumber": 1,
        "positivityScore": 0.0-1.0,
        "intensityScore": 0.0-1.0,
        "dominantEmotion": "emotion"
      }}
    ],
    "overallShape": "ascending/descending/cyclical/stable",
    "description": "narrative of emotional journey"
  }}
}}

Respond ONLY with valid JSON."#,
    ))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CharacterTranscript {
    title: String,
    transcript: String,
}

/// Build the cross-episode character-analysis prompt.
///
/// Episodes that never mention the character are dropped; the rest are
/// pre-filtered to the character's own lines to bound prompt size.
///
/// # Errors
///
/// Fails when the transcript excerpts cannot be serialized.
pub fn character_analysis_prompt(
    episodes: &[Episode],
    character_name: &str,
) -> Result<String, AnalysisError> {
    let relevant: Vec<CharacterTranscript> = episodes
        .iter()
        .filter(|e| {
            e.transcript_text
                .as_deref()
                .is_some_and(|t| t.contains(character_name))
        })
        .map(|e| CharacterTranscript {
            title: e.title.clone(),
            transcript: extract_character_lines(
                e.transcript_text.as_deref().unwrap_or_default(),
                character_name,
            ),
        })
        .collect();

    let transcripts_json = serde_json::to_string_pretty(&relevant)
        .map_err(|e| AnalysisError::new(AnalysisErrorKind::Serialization(e.to_string())))?;

    Ok(format!(
        r#"
You are analyzing the character '{character_name}' across multiple episodes.

Episodes and relevant dialogue:
{transcripts_json}

Provide a deep character analysis including:
1. Personality profile and core traits
2. Emotional patterns and tendencies
3. Key relationships and how they function
4. Character arc and development
5. Defining moments

Consider:
- How the character typically responds to challenges
- Their emotional range and maturity
- Relationship patterns and dynamics
- Growth or lack thereof
- What drives and motivates them

Format as JSON:
{{
  "personality": {{
    "coreTraits": ["trait1"],
    "emotionalTendencies": {{"emotion": 0.0-1.0}},
    "motivationDescription": "what drives them",
    "recurringBehaviors": ["behavior1"],
    "copingMechanisms": "how they handle stress"
  }},
  "emotionalPatterns": {{
    "emotionFrequency": {{"emotion": 0.0-1.0}},
    "emotionalTriggers": ["trigger1"],
    "emotionalRange": "wide/narrow/volatile",
    "emotionalMaturity": 0.0-1.0
  }},
  "relationships": {{
    "OtherCharacterName": {{
      "relationshipNature": "description",
      "importanceScore": 0.0-1.0,
      "commonInteractionPatterns": ["pattern1"],
      "powerDynamic": "equal/mentor-student/etc",
      "conflictResolutionStyle": "how they resolve conflicts"
    }}
  }},
  "overallArc": {{
    "arcDescription": "overall journey",
    "majorTurningPoints": ["event1"],
    "growthSummary": "how they changed",
    "consistencyScore": 0.0-1.0
  }},
  "definingMoments": [
    {{
      "episodeTitle": "title",
      "momentDescription": "what happened",
      "impact": "how it affected them",
      "revealedTraits": ["trait1"]
    }}
  ]
}}

Respond ONLY with valid JSON."#,
    ))
}

/// Extract lines where the character speaks, capped to bound prompt size.
///
/// A line is attributed by a case-insensitive `"Name:"` prefix match.
fn extract_character_lines(transcript: &str, character_name: &str) -> String {
    let prefix = format!("{}:", character_name);

    transcript
        .lines()
        .filter(|line| {
            line.get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(&prefix))
        })
        .take(CHARACTER_LINES_PER_EPISODE)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode_with_transcript(transcript: &str) -> Episode {
        Episode {
            id: 1,
            title: "S01E01 Pilot".to_string(),
            season: 1,
            episode_number: 1,
            transcript_text: Some(transcript.to_string()),
            ..Episode::default()
        }
    }

    #[test]
    fn episode_prompt_embeds_transcript_verbatim() {
        let episode = episode_with_transcript("Finn: I'm scared.\nJake: Me too, man.");
        let prompt = episode_analysis_prompt(&episode).unwrap();
        assert!(prompt.contains("Finn: I'm scared.\nJake: Me too, man."));
        assert!(prompt.contains("'S01E01 Pilot' (S01E01)"));
        assert!(prompt.contains("Respond ONLY with valid JSON"));
        assert!(prompt.contains("\"positivityScore\": 0.0-1.0"));
    }

    #[test]
    fn episode_prompt_requires_transcript() {
        let mut episode = episode_with_transcript("");
        let err = episode_analysis_prompt(&episode).unwrap_err();
        assert!(matches!(err.kind, AnalysisErrorKind::MissingTranscript(_)));

        episode.transcript_text = None;
        assert!(episode_analysis_prompt(&episode).is_err());

        episode.transcript_text = Some("   \n ".to_string());
        assert!(episode_analysis_prompt(&episode).is_err());
    }

    #[test]
    fn season_prompt_embeds_compact_summaries() {
        let mut analysis = EpisodeAnalysis {
            title: "S02E01".to_string(),
            ..EpisodeAnalysis::default()
        };
        analysis.sentiment.dominant_emotion = "Joy".to_string();
        analysis.relationship_dynamics.push(chronicle_core::RelationshipDynamic {
            character1: "Finn".to_string(),
            character2: "Jake".to_string(),
            harmony_score: 0.75,
            ..Default::default()
        });

        let prompt = season_analysis_prompt(&[analysis], 2).unwrap();
        assert!(prompt.contains("Season 2"));
        assert!(prompt.contains("Finn-Jake: 0.75"));
        assert!(prompt.contains("\"dominantEmotion\": \"Joy\""));
    }

    #[test]
    fn character_prompt_filters_to_mentioning_episodes() {
        let with_finn = episode_with_transcript("Finn: Hello!\nJake: Hi.");
        let without = Episode {
            title: "No Finn Here".to_string(),
            transcript_text: Some("Jake: All alone.".to_string()),
            ..Episode::default()
        };

        let prompt = character_analysis_prompt(&[with_finn, without], "Finn").unwrap();
        assert!(prompt.contains("Finn: Hello!"));
        assert!(!prompt.contains("No Finn Here"));
    }

    #[test]
    fn character_lines_match_case_insensitively_and_cap() {
        let transcript = (0..80)
            .map(|i| format!("FINN: line {}", i))
            .collect::<Vec<_>>()
            .join("\n");

        let lines = extract_character_lines(&transcript, "Finn");
        assert_eq!(lines.lines().count(), CHARACTER_LINES_PER_EPISODE);
        assert!(lines.starts_with("FINN: line 0"));
    }

    #[test]
    fn character_lines_require_prefix_position() {
        let transcript = "Narrator: Finn: is mentioned here\nFinn: actual line";
        let lines = extract_character_lines(transcript, "Finn");
        assert_eq!(lines, "Finn: actual line");
    }
}
