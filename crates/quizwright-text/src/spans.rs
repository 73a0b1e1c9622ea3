//! Answer-span selection: which part of a sentence to ask about.
//!
//! Parser tier prefers named entities, then the longest noun chunk, then the
//! first noun. Heuristic tier prefers runs of capitalized words, then any
//! reasonably long word.

use once_cell::sync::Lazy;
use regex::Regex;

use quizwright_lexicon::LinguisticBackend;

/// Consecutive capitalized words of at least four letters each.
static CAPITALIZED_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][A-Za-z]{3,}(?:\s+[A-Z][A-Za-z]{3,})*\b").unwrap());

/// Alphabetic words of at least four letters.
static LONG_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Za-z]{4,}\b").unwrap());

/// Pick the answer span for a multiple-choice question.
///
/// Candidates are tried in preference order and the first one that is not
/// degenerate (see [`is_degenerate_answer`]) wins.
pub fn select_answer(backend: &LinguisticBackend, sentence: &str) -> Option<String> {
    answer_candidates(backend, sentence)
        .into_iter()
        .find(|span| !is_degenerate_answer(sentence, span))
}

/// All answer candidates for a sentence, most preferred first, trimmed and non-empty.
pub fn answer_candidates(backend: &LinguisticBackend, sentence: &str) -> Vec<String> {
    let candidates: Vec<String> = match backend.parser() {
        Some(parser) => {
            let mut chunks = parser.noun_chunks(sentence);
            // Stable sort: equal lengths keep first-occurrence order.
            chunks.sort_by_key(|c| std::cmp::Reverse(c.trim().chars().count()));
            let nouns = parser
                .tokens(sentence)
                .into_iter()
                .filter(|t| t.pos.is_nominal())
                .map(|t| t.text);
            parser
                .entities(sentence)
                .into_iter()
                .chain(chunks)
                .chain(nouns)
                .collect()
        }
        None => CAPITALIZED_RUN
            .find_iter(sentence)
            .chain(LONG_WORD.find_iter(sentence))
            .map(|m| m.as_str().to_string())
            .collect(),
    };

    candidates
        .into_iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect()
}

/// A span equal (ignoring case) to one of the sentence's first two tokens
/// makes a "The ___" style question and is rejected.
pub fn is_degenerate_answer(sentence: &str, span: &str) -> bool {
    let span = span.trim().to_lowercase();
    sentence
        .split_whitespace()
        .take(2)
        .map(|t| t.trim_matches(|c: char| c.is_ascii_punctuation()).to_lowercase())
        .any(|t| t == span)
}

/// Pick the span a false true/false statement replaces.
///
/// Parser tier: first entity, else first noun chunk. Heuristic tier: first
/// capitalized run.
pub fn swap_target(backend: &LinguisticBackend, sentence: &str) -> Option<String> {
    let target = match backend.parser() {
        Some(parser) => parser
            .entities(sentence)
            .into_iter()
            .chain(parser.noun_chunks(sentence))
            .map(|s| s.trim().to_string())
            .find(|s| !s.is_empty()),
        None => CAPITALIZED_RUN
            .find(sentence)
            .map(|m| m.as_str().trim().to_string()),
    };
    target.filter(|t| !t.is_empty())
}
