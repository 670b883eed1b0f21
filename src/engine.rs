use crate::document::Document;
use crate::index::{IndexStats, InvertedIndex};
use crate::ranking::{query_weights, rank_documents, ScoredDocument};
use crate::tokenizer::Tokenizer;
use thiserror::Error;

/// Errors surfaced by the query path.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Querying an empty corpus would divide by zero inside the IDF
    /// computation, so it fails fast instead.
    #[error("cannot query an empty corpus")]
    EmptyCorpus,
}

/// Main search engine: a tokenizer plus an index built once from the full
/// corpus. Queries never mutate it, so a shared reference is all the read
/// path needs.
pub struct SearchEngine {
    tokenizer: Tokenizer,
    index: InvertedIndex,
}

impl SearchEngine {
    /// Build the engine from the full document set. Runs once per corpus;
    /// there is no incremental insertion or removal afterwards.
    pub fn build(documents: &[Document]) -> Self {
        let tokenizer = Tokenizer::new();
        let index = InvertedIndex::build(documents, &tokenizer);
        Self { tokenizer, index }
    }

    /// Rank the corpus against a query, best match first.
    ///
    /// Returns at most `ranking::RESULT_LIMIT` documents; only documents
    /// with a nonzero score appear, so a query of unknown or ubiquitous
    /// terms yields an empty list rather than an error.
    pub fn search(&self, query: &str) -> Result<Vec<ScoredDocument>, SearchError> {
        if self.index.total_documents() == 0 {
            return Err(SearchError::EmptyCorpus);
        }

        let weights = query_weights(query, &self.index, &self.tokenizer);
        let results = rank_documents(&weights, &self.index);
        tracing::debug!(query, results = results.len(), "ranked query");
        Ok(results)
    }

    /// Get index statistics.
    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }
}
