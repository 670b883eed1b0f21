use regex::Regex;
use std::collections::BTreeMap;

lazy_static::lazy_static! {
    /// Maximal runs of word characters (letters, digits, underscore).
    static ref WORD: Regex = Regex::new(r"\w+").expect("valid regex");
}

pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalize text into word tokens, lowercased, in original order.
    /// Punctuation and whitespace are separators and are discarded.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        WORD.find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Analyze and count raw term frequencies.
    ///
    /// Returns an ordered map so that callers folding term weights into
    /// floating-point sums always visit terms in the same order.
    pub fn analyze_with_frequencies(&self, text: &str) -> BTreeMap<String, usize> {
        let mut frequencies = BTreeMap::new();
        for token in self.analyze(text) {
            *frequencies.entry(token).or_insert(0) += 1;
        }
        frequencies
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
