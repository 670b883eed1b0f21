use crate::document::Document;
use crate::tokenizer::Tokenizer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry in a term's posting list: the document and the term's raw
/// occurrence count within it. Always at most one posting per document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: String,
    pub count: usize,
}

/// Inverted index: term -> posting list, plus the per-document cosine
/// normalization norms and the corpus size.
///
/// Built exactly once from the full corpus and read-only afterwards, so it
/// can be shared freely across query calls.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, Vec<Posting>>,
    norms: HashMap<String, f64>,
    doc_count: usize,
}

impl InvertedIndex {
    /// Build the index from the full document set.
    ///
    /// Document ids are assumed unique. A document with no extractable
    /// tokens still counts toward the corpus size but gets no norm entry,
    /// keeping a zero out of every later division.
    pub fn build(documents: &[Document], tokenizer: &Tokenizer) -> Self {
        let mut postings: HashMap<String, Vec<Posting>> = HashMap::new();
        let mut norms = HashMap::new();

        for doc in documents {
            let term_counts = tokenizer.analyze_with_frequencies(&doc.text);
            if term_counts.is_empty() {
                tracing::debug!(doc_id = %doc.id, "document produced no tokens, skipping norm");
                continue;
            }

            let mut length = 0.0_f64;
            for (term, count) in term_counts {
                // Log-scaled term frequency; count >= 1 for any term present.
                let tf = 1.0 + (count as f64).log10();
                length += tf * tf;
                postings
                    .entry(term)
                    .or_insert_with(Vec::new)
                    .push(Posting {
                        doc_id: doc.id.clone(),
                        count,
                    });
            }
            // The norm folds in tf weights only; idf is not part of it, so
            // this is not a true cosine norm of the document's tf-idf
            // vector. Ranking depends on this exact form.
            norms.insert(doc.id.clone(), length.sqrt());
        }

        tracing::info!(
            documents = documents.len(),
            terms = postings.len(),
            "built inverted index"
        );

        Self {
            postings,
            norms,
            doc_count: documents.len(),
        }
    }

    /// Get a term's posting list.
    pub fn postings(&self, term: &str) -> Option<&[Posting]> {
        self.postings.get(term).map(|p| p.as_slice())
    }

    /// Number of documents containing a term (for IDF calculation).
    pub fn doc_frequency(&self, term: &str) -> usize {
        self.postings.get(term).map(|p| p.len()).unwrap_or(0)
    }

    /// A document's normalization norm, absent for zero-token documents.
    pub fn norm(&self, doc_id: &str) -> Option<f64> {
        self.norms.get(doc_id).copied()
    }

    /// Total number of documents in the corpus, zero-token ones included.
    pub fn total_documents(&self) -> usize {
        self.doc_count
    }

    /// Get index statistics.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            total_documents: self.doc_count,
            total_terms: self.postings.len(),
            avg_docs_per_term: if self.postings.is_empty() {
                0.0
            } else {
                self.postings.values().map(|p| p.len()).sum::<usize>() as f64
                    / self.postings.len() as f64
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IndexStats {
    pub total_documents: usize,
    pub total_terms: usize,
    pub avg_docs_per_term: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<Document> {
        vec![
            Document::new("a.txt".to_string(), "cat dog cat".to_string()),
            Document::new("b.txt".to_string(), "dog dog dog".to_string()),
        ]
    }

    #[test]
    fn test_build_postings() {
        let index = InvertedIndex::build(&corpus(), &Tokenizer::new());

        let cat = index.postings("cat").unwrap();
        assert_eq!(cat.len(), 1);
        assert_eq!(cat[0].doc_id, "a.txt");
        assert_eq!(cat[0].count, 2);

        let dog = index.postings("dog").unwrap();
        assert_eq!(dog.len(), 2);

        assert_eq!(index.doc_frequency("cat"), 1);
        assert_eq!(index.doc_frequency("dog"), 2);
        assert_eq!(index.doc_frequency("zzz"), 0);
        assert_eq!(index.total_documents(), 2);
    }

    #[test]
    fn test_posting_unique_per_document() {
        let docs = vec![Document::new(
            "a.txt".to_string(),
            "rust rust rust rust".to_string(),
        )];
        let index = InvertedIndex::build(&docs, &Tokenizer::new());

        let rust = index.postings("rust").unwrap();
        assert_eq!(rust.len(), 1);
        assert_eq!(rust[0].count, 4);
    }

    #[test]
    fn test_norm_uses_tf_weights() {
        let index = InvertedIndex::build(&corpus(), &Tokenizer::new());

        // a.txt: cat appears twice, dog once.
        let tf_cat = 1.0 + 2.0_f64.log10();
        let expected = (tf_cat * tf_cat + 1.0).sqrt();
        let norm = index.norm("a.txt").unwrap();
        assert!((norm - expected).abs() < 1e-12);
    }

    #[test]
    fn test_zero_token_document_has_no_norm() {
        let docs = vec![
            Document::new("empty.txt".to_string(), "!!! ???".to_string()),
            Document::new("a.txt".to_string(), "cat".to_string()),
        ];
        let index = InvertedIndex::build(&docs, &Tokenizer::new());

        assert!(index.norm("empty.txt").is_none());
        assert!(index.norm("a.txt").is_some());
        // The empty document still counts toward the corpus size.
        assert_eq!(index.total_documents(), 2);
    }

    #[test]
    fn test_stats() {
        let index = InvertedIndex::build(&corpus(), &Tokenizer::new());
        let stats = index.stats();
        assert_eq!(stats.total_documents, 2);
        assert_eq!(stats.total_terms, 2);
        assert!((stats.avg_docs_per_term - 1.5).abs() < 1e-12);
    }
}
