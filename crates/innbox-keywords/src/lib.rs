//! Innbox Keywords — the keyword-ranking collaborator.
//!
//! The extraction pipeline consumes keyword ranking as a black box: given a
//! text, a language code, a maximum phrase length, and a top-K count, the
//! collaborator returns phrases ordered by descending relevance. The
//! [`KeywordRanker`] trait is that contract; [`StatisticalRanker`] is the
//! bundled implementation so the binary is self-contained.

pub mod ranker;

pub use ranker::StatisticalRanker;

/// Collaborator contract for keyword ranking.
///
/// Returns `(phrase, relevance)` pairs, relevance-descending, at most
/// `top_k` of them. Consumers use only the ordered phrases; the score is
/// carried for corpus-level reporting.
pub trait KeywordRanker: Send + Sync {
    fn rank(&self, text: &str, lang: &str, max_ngram: usize, top_k: usize) -> Vec<(String, f64)>;
}

/// Rank keywords over a whole corpus of texts at once.
pub fn corpus_keywords(
    ranker: &dyn KeywordRanker,
    texts: &[String],
    lang: &str,
    max_ngram: usize,
    top_k: usize,
) -> Vec<(String, f64)> {
    let joined = texts.join(" ");
    ranker.rank(&joined, lang, max_ngram, top_k)
}
