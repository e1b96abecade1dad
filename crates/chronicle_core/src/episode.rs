//! The episodic narrative record consumed by the analysis pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single episode with metadata and an optional transcript.
///
/// Episodes are owned by the record-creation flow; the analysis pipeline
/// consumes them read-only and only ever requires the transcript and
/// identity fields.
///
/// # Examples
///
/// ```
/// use chronicle_core::Episode;
///
/// let episode = Episode {
///     id: 42,
///     title: "S02E05 Test".to_string(),
///     season: 2,
///     episode_number: 5,
///     transcript_text: Some("Finn: I'm scared.".to_string()),
///     ..Episode::default()
/// };
///
/// assert_eq!(episode.episode_code(), "S02E05");
/// assert!(episode.has_transcript());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Episode {
    /// Unique identifier
    pub id: i32,
    /// Episode title
    pub title: String,
    /// Season number
    pub season: i32,
    /// Episode number within the season
    pub episode_number: i32,
    /// Short synopsis
    pub synopsis: Option<String>,
    /// Full episode transcript; analysis requires this to be non-empty
    pub transcript_text: Option<String>,
    /// Major cast, in billing order
    pub major_characters: Vec<String>,
    /// Minor cast, in billing order
    pub minor_characters: Vec<String>,
    /// Locations featured in the episode
    pub locations: Vec<String>,
    /// Number of dialogue lines in the transcript, if counted
    pub dialogue_line_count: Option<i32>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub last_modified_at: Option<DateTime<Utc>>,
}

impl Default for Episode {
    fn default() -> Self {
        Self {
            id: 0,
            title: String::new(),
            season: 0,
            episode_number: 0,
            synopsis: None,
            transcript_text: None,
            major_characters: Vec::new(),
            minor_characters: Vec::new(),
            locations: Vec::new(),
            dialogue_line_count: None,
            created_at: Utc::now(),
            last_modified_at: None,
        }
    }
}

impl Episode {
    /// The "S02E05"-style code derived from season and episode number.
    pub fn episode_code(&self) -> String {
        format!("S{:02}E{:02}", self.season, self.episode_number)
    }

    /// Whether a non-empty transcript is attached.
    pub fn has_transcript(&self) -> bool {
        self.transcript_text
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }
}
