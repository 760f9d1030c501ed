//! Statistical keyword ranking — stopword-filtered n-gram frequency.
//!
//! Candidate phrases are runs of 1..=max_ngram adjacent tokens that neither
//! start nor end with a stopword. Scoring is frequency times phrase length,
//! so a repeated two-word phrase outranks its constituent words; ties break
//! toward earlier first occurrence so output order is deterministic.

use std::collections::HashMap;

use crate::KeywordRanker;

const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of",
    "with", "by", "from", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "do", "does", "did", "will", "would", "could",
    "should", "may", "might", "shall", "can", "this", "that", "these", "those",
    "it", "its", "he", "she", "they", "we", "you", "i", "his", "her", "their",
    "my", "your", "our", "not", "no", "so", "if", "as", "up", "out", "about",
    "into", "over", "after", "than", "then", "just", "also", "very", "quite",
    "rather", "some", "any", "each", "all", "more", "most", "such", "only",
    "same", "other", "own",
];

/// Bundled frequency-based ranker. Stateless; safe to share.
#[derive(Debug, Default, Clone)]
pub struct StatisticalRanker;

impl StatisticalRanker {
    pub fn new() -> Self {
        Self
    }
}

impl KeywordRanker for StatisticalRanker {
    /// Rank candidate phrases for `text`. Every language code currently
    /// selects the English stopword catalog — the only template family the
    /// upstream heuristics target.
    fn rank(&self, text: &str, _lang: &str, max_ngram: usize, top_k: usize) -> Vec<(String, f64)> {
        if text.is_empty() || max_ngram == 0 || top_k == 0 {
            return Vec::new();
        }

        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Vec::new();
        }

        // phrase -> (frequency, first occurrence, word count)
        let mut stats: HashMap<String, (usize, usize, usize)> = HashMap::new();
        let mut order = 0usize;
        for start in 0..tokens.len() {
            for len in 1..=max_ngram.min(tokens.len() - start) {
                let ngram = &tokens[start..start + len];
                if is_stopword(&ngram[0]) || is_stopword(&ngram[len - 1]) {
                    continue;
                }
                let phrase = ngram.join(" ");
                let entry = stats.entry(phrase).or_insert((0, order, len));
                entry.0 += 1;
                order += 1;
            }
        }

        let mut ranked: Vec<(String, f64, usize)> = stats
            .into_iter()
            .map(|(phrase, (freq, first, words))| {
                (phrase, (freq * words) as f64, first)
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.2.cmp(&b.2))
        });

        ranked
            .into_iter()
            .take(top_k)
            .map(|(phrase, score, _)| (phrase, score))
            .collect()
    }
}

/// Lower-cased word tokens, punctuation stripped, short and numeric tokens
/// dropped.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| c.is_whitespace() || ",.;:!?()[]{}\"/\\".contains(c))
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric() && c != '\''))
        .filter(|word| word.len() >= 2 && !word.chars().all(|c| c.is_ascii_digit()))
        .map(|word| word.to_string())
        .collect()
}

fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}
