use crate::index::InvertedIndex;
use crate::tokenizer::Tokenizer;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Maximum number of documents returned per query.
pub const RESULT_LIMIT: usize = 10;

/// Compute a TF-IDF weight per distinct query term.
///
/// Terms absent from the index get weight 0.0 but are still recorded, so a
/// caller can see which parts of the query were no-ops. Callers must ensure
/// the index holds at least one document before calling.
pub fn query_weights(
    query: &str,
    index: &InvertedIndex,
    tokenizer: &Tokenizer,
) -> BTreeMap<String, f64> {
    let term_counts = tokenizer.analyze_with_frequencies(query);
    let total_docs = index.total_documents() as f64;

    let mut weights = BTreeMap::new();
    for (term, count) in term_counts {
        let doc_freq = index.doc_frequency(&term);
        let weight = if doc_freq == 0 {
            0.0
        } else {
            // idf is exactly 0 for a term present in every document.
            let idf = (total_docs / doc_freq as f64).log10();
            let tf = 1.0 + (count as f64).log10();
            tf * idf
        };
        weights.insert(term, weight);
    }

    weights
}

/// Ranked search result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub doc_id: String,
    pub score: f64,
}

impl ScoredDocument {
    pub fn new(doc_id: String, score: f64) -> Self {
        Self { doc_id, score }
    }
}

/// Score documents by cosine similarity against the query weights.
///
/// Accumulates `weight * tf` over the posting lists of every query term
/// with nonzero weight, normalizes each accumulated score by the document's
/// norm, and returns the top documents sorted by score descending with ties
/// broken by document id ascending.
pub fn rank_documents(
    weights: &BTreeMap<String, f64>,
    index: &InvertedIndex,
) -> Vec<ScoredDocument> {
    let mut scores: HashMap<&str, f64> = HashMap::new();

    for (term, weight) in weights {
        if *weight == 0.0 {
            continue;
        }
        if let Some(postings) = index.postings(term) {
            for posting in postings {
                let doc_tf = 1.0 + (posting.count as f64).log10();
                *scores.entry(posting.doc_id.as_str()).or_insert(0.0) += weight * doc_tf;
            }
        }
    }

    let mut scored_docs: Vec<ScoredDocument> = scores
        .into_iter()
        .filter(|(_, score)| *score != 0.0)
        .filter_map(|(doc_id, score)| {
            // Zero-token documents carry no norm; they can never match a
            // query term, so a missing norm here is skipped, not an error.
            index
                .norm(doc_id)
                .map(|norm| ScoredDocument::new(doc_id.to_string(), score / norm))
        })
        .collect();

    scored_docs.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.doc_id.cmp(&b.doc_id))
    });

    scored_docs.truncate(RESULT_LIMIT);
    scored_docs
}
