//! Pipeline wiring: archive → extraction → classification → keywords →
//! assembly.
//!
//! Extraction itself is pure; this module is the only place the stages are
//! sequenced. Records come out in archive order — downstream consumers
//! assume positional stability.

use std::path::Path;

use tracing::info;

use innbox_core::{Error, RawMessage, Result};
use innbox_extract::{fields, record, suggestion, thread, Record};
use innbox_keywords::KeywordRanker;

/// Per-record keyword parameters (language, max phrase length, top-K).
const KEYWORD_LANG: &str = "en";
const KEYWORD_MAX_NGRAM: usize = 2;
const KEYWORD_TOP_K: usize = 5;

/// Corpus-level keyword parameters.
const GLOBAL_KEYWORD_TOP_K: usize = 20;

/// Process an archive referenced by path. Rejects anything that is not an
/// mbox archive — tabular formats are handled elsewhere, not here.
pub fn process_archive(path: &Path, ranker: &dyn KeywordRanker) -> Result<Vec<Record>> {
    require_mbox(path)?;
    process_mbox(path, ranker)
}

/// Process an mbox archive without an extension check — used for uploads,
/// where the format was already decided from the client's filename.
pub fn process_mbox(path: &Path, ranker: &dyn KeywordRanker) -> Result<Vec<Record>> {
    let messages = innbox_mbox::read_mbox(path)?;
    info!("Extracting {} messages from {}", messages.len(), path.display());
    Ok(messages
        .iter()
        .map(|raw| process_message(raw, ranker))
        .collect())
}

/// Run the full extraction pipeline over one raw message.
pub fn process_message(raw: &RawMessage, ranker: &dyn KeywordRanker) -> Record {
    let extracted = fields::extract_fields(raw.subject.as_deref(), raw.body.as_deref());
    let thread = thread::extract_thread(raw.body.as_deref().unwrap_or(""));

    // Keywords and the suggestion classifier both run over the review text
    // when one was found, the whole body otherwise.
    let text = extracted
        .review_text
        .as_deref()
        .or(raw.body.as_deref())
        .unwrap_or("");
    let has_suggestion = suggestion::has_suggestion(extracted.rating.as_deref(), text);
    let keywords = ranker
        .rank(text, KEYWORD_LANG, KEYWORD_MAX_NGRAM, KEYWORD_TOP_K)
        .into_iter()
        .map(|(phrase, _)| phrase)
        .collect();

    record::assemble(raw, extracted, thread, keywords, has_suggestion)
}

/// Corpus-level keywords over every message body in an archive.
pub fn archive_keywords(path: &Path, ranker: &dyn KeywordRanker) -> Result<Vec<(String, f64)>> {
    require_mbox(path)?;
    let messages = innbox_mbox::read_mbox(path)?;
    let bodies: Vec<String> = messages.into_iter().filter_map(|m| m.body).collect();
    Ok(innbox_keywords::corpus_keywords(
        ranker,
        &bodies,
        KEYWORD_LANG,
        KEYWORD_MAX_NGRAM,
        GLOBAL_KEYWORD_TOP_K,
    ))
}

fn require_mbox(path: &Path) -> Result<()> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if ext.eq_ignore_ascii_case("mbox") {
        Ok(())
    } else {
        Err(Error::Unsupported(format!(
            "not an mbox archive: {}",
            path.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use innbox_keywords::StatisticalRanker;

    #[test]
    fn test_non_mbox_path_rejected() {
        let err = process_archive(Path::new("reviews.csv"), &StatisticalRanker::new()).unwrap_err();
        assert!(matches!(err, Error::Unsupported(_)));
    }

    #[test]
    fn test_process_message_populates_record() {
        let raw = RawMessage {
            subject: Some("Alice wrote you a review".to_string()),
            body: Some(
                "Alice left a 5-star review for \"Seaside Cottage\".\n\n\
                 ALICE RATED THEIR STAY 5 STARS!\n\n\
                 OVERALL RATING 5\n\
                 The cottage was spotless and the porch view made our week.\n\n\
                 https://www.airbnb.com/users/show/review/123\n"
                    .to_string(),
            ),
            ..Default::default()
        };
        let record = process_message(&raw, &StatisticalRanker::new());
        assert_eq!(record.customer_name.as_deref(), Some("Alice"));
        assert_eq!(record.rating.as_deref(), Some("5"));
        assert_eq!(record.place.as_deref(), Some("Seaside Cottage"));
        assert_eq!(
            record.review_text.as_deref(),
            Some("The cottage was spotless and the porch view made our week.")
        );
        assert!(record.review_link.as_deref().unwrap().contains("review"));
        assert!(!record.keywords.is_empty());
        assert!(!record.has_suggestion);
    }

    #[test]
    fn test_record_order_matches_message_order() {
        let ranker = StatisticalRanker::new();
        let first = RawMessage {
            subject: Some("Alice wrote you a review".to_string()),
            ..Default::default()
        };
        let second = RawMessage {
            subject: Some("Bob wrote you a review".to_string()),
            ..Default::default()
        };
        let records: Vec<Record> = [&first, &second]
            .iter()
            .map(|raw| process_message(raw, &ranker))
            .collect();
        assert_eq!(records[0].customer_name.as_deref(), Some("Alice"));
        assert_eq!(records[1].customer_name.as_deref(), Some("Bob"));
    }
}
