//! Cleanup of provider formatting artifacts.
//!
//! Providers sometimes wrap their JSON in markdown code fences despite being
//! told not to. Sanitization strips leading/trailing fence markers (with an
//! optional language hint) and trims, leaving interior content untouched.

/// Strip code-fence delimiters and surrounding whitespace from raw provider
/// text.
///
/// Idempotent: applying it twice yields the same result as once. Fences are
/// stripped until none remain at either boundary, so the output never
/// starts or ends with a fence marker.
///
/// # Examples
///
/// ```
/// use chronicle_analysis::sanitize_response;
///
/// let fenced = "```json\n{\"a\": 1}\n```";
/// assert_eq!(sanitize_response(fenced), "{\"a\": 1}");
/// assert_eq!(sanitize_response("{\"a\": 1}"), "{\"a\": 1}");
/// ```
pub fn sanitize_response(raw: &str) -> String {
    let mut text = raw.trim();

    loop {
        let before = text;

        if let Some(rest) = text.strip_prefix("```") {
            // Drop an optional language hint directly after the fence.
            let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
            text = rest.trim_start();
        }

        if let Some(rest) = text.strip_suffix("```") {
            text = rest.trim_end();
        }

        if text == before {
            break;
        }
    }

    text.trim().to_string()
}
