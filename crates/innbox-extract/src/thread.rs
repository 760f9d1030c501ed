//! Thread segmentation — recovers customer-authored text from bodies
//! dominated by platform boilerplate.
//!
//! Favors precision over recall: an unmatched boilerplate variant shows up
//! as a false positive, and a genuine message under the length floor is
//! dropped.

use once_cell::sync::Lazy;
use regex::Regex;

/// Separator used when serializing accepted segments into one string.
pub const THREAD_SEPARATOR: &str = "\n\n---\n\n";

/// Coarse block boundaries: blank-line runs or line-initial reply headers.
static BLOCK_SPLIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)(?:\n\s*\n|^On .+wrote:|^From:|^Sent:|^To:|^Subject:|^Date:)").unwrap()
});

/// Promotional lead-in sentence the platform prepends to the genuine text.
const LEAD_IN_PATTERN: &str = r"^[A-Za-z]+ had great things to say about their stay[—-]read on for a snapshot of what they loved most\. Now that you and your guest have both written reviews, we've posted them to your Airbnb profiles\.\s*-*";

/// Catalog of boilerplate phrases: promotional banners, footer and address
/// text, social links, calls to action, bare links, tracking pixels. Any
/// hit disqualifies a sub-block. Tuned against one booking-platform
/// notification template; other senders are untested.
const BOILERPLATE_PATTERNS: &[&str] = &[
    LEAD_IN_PATTERN,
    r"read on for a snapshot",
    r"keep hosting 5-star stays",
    r"get more 5-star reviews",
    r"add details guests will love",
    r"connect with other hosts",
    r"visit the airbnb community center",
    r"airbnb, inc\.",
    r"888 brannan st",
    r"san francisco, ca",
    r"write a response",
    r"overlook lux dome",
    r"looked like the photos",
    r"proactive",
    r"peaceful",
    r"special thanks",
    r"now that you and your guest have both written reviews",
    r"we've posted them to your airbnb profiles",
    r"https://",
    r"facebook.com/airbnb",
    r"instagram.com/airbnb",
    r"twitter.com/airbnb",
    r"10 min read",
    r"6 min read",
    r"%opentrack%",
];

static BOILERPLATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("(?i){}", BOILERPLATE_PATTERNS.join("|"))).unwrap());

static LEAD_IN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("(?i){}", LEAD_IN_PATTERN)).unwrap());

/// Split phrase marking the end of boilerplate inside a block; only the
/// text after it is customer-authored.
const SPLIT_PHRASE: &str =
    "Now that you and your guest have both written reviews, we've posted them to your Airbnb profiles.";

/// Sub-block boundaries inside a coarse block.
static SUB_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n---|\n").unwrap());

/// All-caps rating announcement line, e.g. "ALICE RATED THEIR STAY 5 STARS!".
static RATED_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[A-Z ]+RATED THEIR STAY \d STARS!?$").unwrap());

/// Quoting markers, reply headers, and sign-off phrases that disqualify a
/// block from being a genuine message when they start it.
static SIGNOFF_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(on |from:|sent:|to:|subject:|date:|>|---|--|regards,|best,|cheers|thank you|sincerely|kind regards|warm regards|with appreciation|with gratitude|respectfully|faithfully|truly|appreciatively|cordially|love|take care|see you|goodbye|bye|ps|p.s.)").unwrap()
});

static URL_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://").unwrap());

static SENTENCE_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]").unwrap());

/// First URL matching the message-thread shape, used as a fallback when no
/// genuine text survives.
static THREAD_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https://www\.airbnb\.com/messages/thread/\d+").unwrap());

/// Reconstruct the ordered customer-authored segments of one body.
///
/// Returns the accepted segments in body order, or a single-element
/// sequence holding a thread URL when nothing genuine survives, or `None`.
/// The result is never `Some` of an empty sequence.
pub fn extract_thread(body: &str) -> Option<Vec<String>> {
    if body.is_empty() {
        return None;
    }

    let mut messages = Vec::new();
    for block in BLOCK_SPLIT.split(body) {
        let cleaned = clean_block(block);
        if is_genuine(&cleaned) {
            messages.push(cleaned);
        }
    }

    if messages.is_empty() {
        return THREAD_URL
            .find(body)
            .map(|m| vec![m.as_str().to_string()]);
    }
    Some(messages)
}

/// Serialize an extracted thread with the fixed separator.
pub fn serialize_thread(thread: &[String]) -> String {
    thread.join(THREAD_SEPARATOR)
}

/// Strip the lead-in, cut at the split phrase, drop boilerplate sub-blocks,
/// and re-join what survives with single spaces.
fn clean_block(block: &str) -> String {
    let mut block = LEAD_IN.replace(block.trim(), "").trim().to_string();

    if let Some(idx) = block.find(SPLIT_PHRASE) {
        block = block[idx + SPLIT_PHRASE.len()..]
            .trim_start_matches([' ', '-', '–', '—'])
            .to_string();
    }

    let survivors: Vec<&str> = SUB_SPLIT
        .split(&block)
        .map(str::trim)
        .filter(|sub| {
            !sub.is_empty() && !BOILERPLATE.is_match(sub) && !RATED_LINE.is_match(sub)
        })
        .collect();

    survivors.join(" ").trim().to_string()
}

fn is_genuine(block: &str) -> bool {
    block.chars().count() > 30
        && !BOILERPLATE.is_match(block)
        && !SIGNOFF_START.is_match(block)
        && !URL_START.is_match(block)
        && SENTENCE_PUNCT.is_match(block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genuine_message_survives() {
        let body = "We had a wonderful time at the cottage, everything was spotless!\n\nWrite a response";
        let thread = extract_thread(body).unwrap();
        assert_eq!(thread.len(), 1);
        assert!(thread[0].starts_with("We had a wonderful time"));
    }

    #[test]
    fn test_signoff_phrase_thank_you_rejected() {
        // "thank you" is in the sign-off catalog even when it opens a
        // genuine-looking message.
        let body = "Thank you so much for having us, the cottage was wonderful and cozy!";
        assert_eq!(extract_thread(body), None);
    }

    #[test]
    fn test_boilerplate_only_body_is_absent() {
        let body = "Keep hosting 5-star stays\n\nGet more 5-star reviews\n\nAirbnb, Inc.\n888 Brannan St\nSan Francisco, CA";
        assert_eq!(extract_thread(body), None);
    }

    #[test]
    fn test_thread_url_fallback() {
        let body = "Write a response\n\nhttps://www.airbnb.com/messages/thread/12345\n\nVisit the Airbnb Community Center";
        let thread = extract_thread(body).unwrap();
        assert_eq!(
            thread,
            vec!["https://www.airbnb.com/messages/thread/12345".to_string()]
        );
    }

    #[test]
    fn test_split_phrase_keeps_trailing_text() {
        let body = "Now that you and your guest have both written reviews, we've posted them to your Airbnb profiles. — We loved every minute of the stay, what a view from the porch!";
        let thread = extract_thread(body).unwrap();
        assert_eq!(
            thread,
            vec!["We loved every minute of the stay, what a view from the porch!".to_string()]
        );
    }

    #[test]
    fn test_rated_line_sub_block_is_dropped() {
        let body = "ALICE RATED THEIR STAY 5 STARS!\nThe host was lovely and the check-in went smoothly, thanks again.";
        let thread = extract_thread(body).unwrap();
        assert_eq!(thread.len(), 1);
        assert!(thread[0].starts_with("The host was lovely"));
    }

    #[test]
    fn test_signoff_start_rejected() {
        let body = "Regards, Alice from the booking last weekend. It was truly great.";
        assert_eq!(extract_thread(body), None);
    }

    #[test]
    fn test_short_message_under_floor_rejected() {
        assert_eq!(extract_thread("Great stay, thanks!"), None);
    }

    #[test]
    fn test_message_without_sentence_punctuation_rejected() {
        assert_eq!(
            extract_thread("a block of text that is long enough but never terminates"),
            None
        );
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(extract_thread(""), None);
    }

    #[test]
    fn test_serialize_thread_separator() {
        let thread = vec!["first".to_string(), "second".to_string()];
        assert_eq!(serialize_thread(&thread), "first\n\n---\n\nsecond");
    }

    #[test]
    fn test_multiple_segments_preserve_order() {
        let body = "The first night was absolutely magical, we watched the sunset.\n\nThe second day we hiked the coastal trail, unforgettable!";
        let thread = extract_thread(body).unwrap();
        assert_eq!(thread.len(), 2);
        assert!(thread[0].contains("first night"));
        assert!(thread[1].contains("second day"));
    }
}
