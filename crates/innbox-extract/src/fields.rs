//! Independent single-pass field extractors.
//!
//! Each extractor runs one ordered table of patterns against the subject or
//! body and returns `Option` — "no match" is a first-class outcome, never an
//! error. Cascades are explicit pattern tables evaluated to first success.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Fields derived from one raw message. Each is independently optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub customer_name: Option<String>,
    /// Literal digit string as captured — out-of-range values are preserved.
    pub rating: Option<String>,
    pub place: Option<String>,
    pub review_text: Option<String>,
    pub dates: Option<String>,
    pub review_link: Option<String>,
}

/// Run every field extractor over one message's subject and body.
pub fn extract_fields(subject: Option<&str>, body: Option<&str>) -> ExtractedFields {
    let subject = subject.unwrap_or("");
    let body = body.unwrap_or("");
    ExtractedFields {
        customer_name: customer_name(subject),
        rating: rating(body),
        place: place(body),
        review_text: review_text(body),
        dates: dates(body),
        review_link: review_link(body),
    }
}

// ── Customer name ───────────────────────────────────────────────────────

static NAME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)(\w+)\s+wrote\s+you\s+a\s+review").unwrap(),
        Regex::new(r"(?i)(\w+)\s+left\s+a\s+\d+-star\s+review").unwrap(),
    ]
});

/// Customer name from the subject line.
pub fn customer_name(subject: &str) -> Option<String> {
    first_capture(&NAME_PATTERNS, subject)
}

// ── Rating ──────────────────────────────────────────────────────────────

static RATING_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)(\d+)-star\s+review").unwrap(),
        Regex::new(r"(?i)RATED THEIR STAY (\d+) STARS").unwrap(),
    ]
});

/// Star rating from the body, returned verbatim — no range validation.
pub fn rating(body: &str) -> Option<String> {
    first_capture(&RATING_PATTERNS, body)
}

// ── Place ───────────────────────────────────────────────────────────────

static QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]+)""#).unwrap());

/// Place name: the first double-quoted substring in the body.
pub fn place(body: &str) -> Option<String> {
    QUOTED
        .captures(body)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}

// ── Review text ─────────────────────────────────────────────────────────

/// Marker appended by the platform's machine translation; review text is
/// truncated at it.
const TRANSLATION_MARKER: &str = "Automatically translated from original message";

/// Candidate patterns, in priority order. The first match wins and its
/// capture is cleaned by [`clean_review_block`]. The trailing-paragraph
/// pattern is expressed with a literal `\n\n` prefix group rather than a
/// lookbehind (the regex engine has none).
static REVIEW_TEXT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?is)Booker\s*(?:=20)?\s*\n+([\s\S]+)").unwrap(),
        Regex::new(r"(?is)OVERALL RATING\s*\d+\s*\n([^\n]+)").unwrap(),
        Regex::new(r"(?is)OVERALL RATING \d+\s*([^\n]+)").unwrap(),
        Regex::new(r#"(?is)\n\n([^"\n]{5,})\n*$"#).unwrap(),
        Regex::new(r#"(?is)review(?:\s*text)?[:\-\s]+"?([^\n"]+)"?"#).unwrap(),
        Regex::new(r#"(?is)comment[:\-\s]+"?([^\n"]+)"?"#).unwrap(),
        Regex::new(r"(?is)(?:review|feedback|comment)[^\n]*\n([^\n]{10,})").unwrap(),
        Regex::new(r#"(?is)FEEDBACK FROM THEIR STAY.*?"([^"]+)","#).unwrap(),
        Regex::new(r#"(?is)"([^"]{10,})""#).unwrap(),
    ]
});

static QUOTED_LONG: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]{10,})""#).unwrap());

/// Review text: first matching cascade pattern, cleaned; else the longest
/// quoted substring (≥ 10 chars); else the longest blank-line-delimited
/// paragraph (> 10 chars); else absent.
pub fn review_text(body: &str) -> Option<String> {
    let mut text = REVIEW_TEXT_PATTERNS.iter().find_map(|re| {
        re.captures(body)
            .and_then(|cap| cap.get(1))
            .map(|m| clean_review_block(m.as_str()))
    });

    if text.as_deref().map_or(true, str::is_empty) {
        text = longest(
            QUOTED_LONG
                .captures_iter(body)
                .filter_map(|cap| cap.get(1))
                .map(|m| m.as_str()),
        );
    }
    if text.as_deref().map_or(true, str::is_empty) {
        text = longest(
            body.split("\n\n")
                .map(str::trim)
                .filter(|p| p.chars().count() > 10),
        );
    }

    text.filter(|t| !t.is_empty())
}

/// Clean a captured review block: skip leading blank or `=20` lines (a
/// quoted-printable soft-break artifact), collect contiguous content lines
/// until the next blank or placeholder line, join with single spaces, and
/// truncate at the translation-disclaimer marker.
fn clean_review_block(block: &str) -> String {
    let mut lines = Vec::new();
    let mut started = false;
    for line in block.lines() {
        let line = line.trim();
        if !started {
            if !line.is_empty() && line != "=20" {
                started = true;
                lines.push(line);
            }
        } else {
            if line.is_empty() || line == "=20" {
                break;
            }
            lines.push(line);
        }
    }

    let mut text = lines.join(" ").trim().to_string();
    if let Some(idx) = text.find(TRANSLATION_MARKER) {
        text = text[..idx].trim_end().to_string();
    }
    text
}

/// First-longest element by character count (ties keep the earliest).
fn longest<'a>(candidates: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut best: Option<&str> = None;
    for candidate in candidates {
        if best.map_or(true, |b| candidate.chars().count() > b.chars().count()) {
            best = Some(candidate);
        }
    }
    best.map(|s| s.to_string())
}

// ── Dates ───────────────────────────────────────────────────────────────

static DATE_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+\s+\d+\s*[–-]\s*\d+(?:,\s*\d{4})?)").unwrap());

/// Stay date range, e.g. "Jun 10 – 12" or "Jun 10 - 12, 2025".
pub fn dates(body: &str) -> Option<String> {
    DATE_RANGE
        .captures(body)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}

// ── Review link ─────────────────────────────────────────────────────────

static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());

/// Canonical review link: the first URL containing "review"
/// (case-insensitive); else the first URL in body order; else absent.
pub fn review_link(body: &str) -> Option<String> {
    let urls: Vec<&str> = URL.find_iter(body).map(|m| m.as_str()).collect();
    urls.iter()
        .find(|url| url.to_lowercase().contains("review"))
        .or_else(|| urls.first())
        .map(|url| url.to_string())
}

fn first_capture(patterns: &[Regex], text: &str) -> Option<String> {
    patterns.iter().find_map(|re| {
        re.captures(text)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().to_string())
    })
}
