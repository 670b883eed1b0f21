// Re-export main components
pub mod document;
pub mod engine;
pub mod index;
pub mod ranking;
pub mod tokenizer;

// Re-export commonly used types
pub use document::{load_directory, Document};
pub use engine::{SearchEngine, SearchError};
pub use index::InvertedIndex;
pub use ranking::{ScoredDocument, RESULT_LIMIT};
pub use tokenizer::Tokenizer;

// Re-export error types
pub use anyhow::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
