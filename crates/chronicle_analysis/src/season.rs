//! Season-number inference from episode titles.

use regex::Regex;
use std::sync::OnceLock;

static SEASON_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Infer a season number from a title containing an "S02"-style marker.
///
/// This is the fallback when no explicit season is supplied to trend
/// analysis; it returns 0 when no marker is found, so callers that know the
/// season should pass it explicitly.
///
/// # Examples
///
/// ```
/// use chronicle_analysis::infer_season;
///
/// assert_eq!(infer_season("S02E05 Test"), 2);
/// assert_eq!(infer_season("Untitled"), 0);
/// ```
pub fn infer_season(title: &str) -> i32 {
    let pattern = SEASON_PATTERN
        .get_or_init(|| Regex::new(r"[Ss](\d{1,2})").expect("season pattern is valid"));

    pattern
        .captures(title)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_standard_episode_codes() {
        assert_eq!(infer_season("S01E01 Pilot"), 1);
        assert_eq!(infer_season("S02E05 Test"), 2);
        assert_eq!(infer_season("s10e12 finale"), 10);
    }

    #[test]
    fn marker_anywhere_in_title_matches() {
        assert_eq!(infer_season("The Finale (S03)"), 3);
    }

    #[test]
    fn defaults_to_zero_without_marker() {
        assert_eq!(infer_season("Untitled Special"), 0);
        assert_eq!(infer_season(""), 0);
        assert_eq!(infer_season("Stakes"), 0);
    }
}
