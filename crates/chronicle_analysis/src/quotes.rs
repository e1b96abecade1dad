//! Quality gate for the verbatim-quote contract.
//!
//! The prompt instructs the provider that every quote field must be a
//! literal substring of the source transcript. This module checks that
//! contract after decoding and reports violations at WARN; it never fails
//! the pipeline, since providers routinely normalize whitespace in ways
//! that would make a hard rejection brittle.

use chronicle_core::EpisodeAnalysis;
use tracing::warn;

/// A quote that is not a literal substring of the source transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteViolation {
    /// Where the quote came from, e.g. `characterMoods.Finn.signatureLines`
    pub context: String,
    /// The offending quote
    pub quote: String,
}

/// Check every quote field of an analysis against the source transcript.
///
/// Empty quote fields are fine; only populated quotes are checked.
///
/// # Examples
///
/// ```
/// use chronicle_analysis::quotes;
/// use chronicle_core::EpisodeAnalysis;
///
/// let analysis = EpisodeAnalysis::default();
/// assert!(quotes::verify(&analysis, "Finn: Hello!").is_empty());
/// ```
pub fn verify(analysis: &EpisodeAnalysis, transcript: &str) -> Vec<QuoteViolation> {
    let mut violations = Vec::new();

    for (name, mood) in &analysis.character_moods {
        for quote in &mood.signature_lines {
            check(
                transcript,
                quote,
                format!("characterMoods.{}.signatureLines", name),
                &mut violations,
            );
        }
    }

    for (index, beat) in analysis.story_arc.story_beats.iter().enumerate() {
        check(
            transcript,
            &beat.key_dialogue,
            format!("storyArc.storyBeats[{}].keyDialogue", index),
            &mut violations,
        );
    }

    for (index, moment) in analysis.key_moments.iter().enumerate() {
        for quote in &moment.notable_quotes {
            check(
                transcript,
                quote,
                format!("keyMoments[{}].notableQuotes", index),
                &mut violations,
            );
        }
    }

    violations
}

/// Log each violation at WARN with its context.
pub fn log_violations(title: &str, violations: &[QuoteViolation]) {
    for violation in violations {
        warn!(
            title = %title,
            context = %violation.context,
            quote = %violation.quote,
            "Quote is not a verbatim substring of the transcript"
        );
    }
}

fn check(transcript: &str, quote: &str, context: String, violations: &mut Vec<QuoteViolation>) {
    let quote = quote.trim();
    if quote.is_empty() {
        return;
    }
    if !transcript.contains(quote) {
        violations.push(QuoteViolation {
            context,
            quote: quote.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronicle_core::{CharacterMood, EmotionalMoment, StoryBeat};

    const TRANSCRIPT: &str = "Finn: I'm scared.\nJake: Me too, man.";

    #[test]
    fn verbatim_quotes_pass() {
        let mut analysis = EpisodeAnalysis::default();
        analysis.character_moods.insert(
            "Finn".to_string(),
            CharacterMood {
                signature_lines: vec!["I'm scared.".to_string()],
                ..CharacterMood::default()
            },
        );
        analysis.story_arc.story_beats.push(StoryBeat {
            key_dialogue: "Me too, man.".to_string(),
            ..StoryBeat::default()
        });

        assert!(verify(&analysis, TRANSCRIPT).is_empty());
    }

    #[test]
    fn invented_quotes_are_flagged_with_context() {
        let mut analysis = EpisodeAnalysis::default();
        analysis.key_moments.push(EmotionalMoment {
            notable_quotes: vec!["We'll be fine.".to_string()],
            ..EmotionalMoment::default()
        });

        let violations = verify(&analysis, TRANSCRIPT);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].context, "keyMoments[0].notableQuotes");
        assert_eq!(violations[0].quote, "We'll be fine.");
    }

    #[test]
    fn empty_quote_fields_are_ignored() {
        let mut analysis = EpisodeAnalysis::default();
        analysis.story_arc.story_beats.push(StoryBeat::default());

        assert!(verify(&analysis, TRANSCRIPT).is_empty());
    }
}
