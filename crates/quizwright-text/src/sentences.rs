//! Regex sentence splitting for the heuristic tier.

use once_cell::sync::Lazy;
use regex::Regex;

/// Sentence-final punctuation followed by whitespace.
static BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Split text into trimmed sentences, keeping the final punctuation.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in BOUNDARY.find_iter(text) {
        // Punctuation is one ASCII byte, so m.start() + 1 is a char boundary.
        let s = text[start..m.start() + 1].trim();
        if !s.is_empty() {
            sentences.push(s);
        }
        start = m.end();
    }
    // Remainder
    let s = text[start..].trim();
    if !s.is_empty() {
        sentences.push(s);
    }
    sentences
}

/// Number of whitespace-delimited tokens.
pub fn word_count(sentence: &str) -> usize {
    sentence.split_whitespace().count()
}

/// Whether a sentence has enough tokens to be worth quizzing on.
pub fn is_quizzable(sentence: &str, min_tokens: usize) -> bool {
    word_count(sentence) >= min_tokens
}
