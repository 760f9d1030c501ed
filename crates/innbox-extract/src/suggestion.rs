//! Implicit-suggestion classification.
//!
//! Flags high-rating reviews that still embed an improvement request
//! ("great stay, but the wifi could be better"). Deliberately conservative:
//! a missed suggestion is preferred over flagging a neutral review.

use once_cell::sync::Lazy;
use regex::Regex;

/// Hard veto: an explicit "no issues / no problems" never counts as a
/// suggestion, whatever else the text says.
static NEGATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"no (issues?|problems?)").unwrap());

/// Suggestion markers, evaluated in order: direct lexical markers,
/// contrastive markers followed by an improvement-related term, and
/// "recommend" gated to suggestion-shaped continuations.
static SUGGESTION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\bwish\b").unwrap(),
        Regex::new(r"\bit would be better if\b").unwrap(),
        Regex::new(r"\bit would help if\b").unwrap(),
        Regex::new(r"\bif only\b").unwrap(),
        Regex::new(r"\bexcept that\b").unwrap(),
        Regex::new(r"\bbut\b.*(could|should|would|wasn't|isn't|not|problem|issue|improve|change)")
            .unwrap(),
        Regex::new(
            r"\bhowever\b.*(could|should|would|wasn't|isn't|not|problem|issue|improve|change)",
        )
        .unwrap(),
        Regex::new(
            r"\brecommend (that|to|you|adding|changing|improving|fixing|making|doing|considering|trying)\b",
        )
        .unwrap(),
    ]
});

/// Whether a review with the given rating embeds an implicit suggestion.
///
/// `rating` is the literal captured digit string; an unparsable or absent
/// rating counts as 0 and therefore never flags. Only ratings ≥ 4 are
/// evaluated at all — low ratings are explicit, not implicit.
pub fn has_suggestion(rating: Option<&str>, text: &str) -> bool {
    let rating: f64 = rating.and_then(|r| r.parse().ok()).unwrap_or(0.0);
    if rating < 4.0 {
        return false;
    }

    let text = text.to_lowercase();
    if NEGATION.is_match(&text) {
        return false;
    }
    SUGGESTION_PATTERNS.iter().any(|re| re.is_match(&text))
}
