//! Distractor synthesis: plausible wrong options for an answer.
//!
//! Lexical-network neighbours of the answer come first. Document keywords
//! and noun chunks fill the rest, and as a last resort any unused keyword is
//! taken even when it overlaps the answer.

use quizwright_lexicon::LexicalNetwork;
use quizwright_text::edit::contains_case_insensitive;
use quizwright_text::PreprocessedState;

/// Up to `count` distractors for `answer`; never includes the answer itself.
pub fn make_distractors(
    lexicon: Option<&dyn LexicalNetwork>,
    answer: &str,
    state: &PreprocessedState,
    count: usize,
) -> Vec<String> {
    let answer = answer.trim();
    if count == 0 || answer.is_empty() {
        return Vec::new();
    }
    let mut picked = Picked::new(answer, count);

    // Lexical neighbours of the answer's first word
    if let Some(lexicon) = lexicon {
        let key = lookup_key(answer);
        if !key.is_empty() {
            for term in lexicon.related_terms(&key, None) {
                if !term.trim().eq_ignore_ascii_case(&key) {
                    picked.push(&term);
                }
            }
            if picked.is_full() {
                return picked.into_inner();
            }
        }
    }

    // Document keywords, then noun chunks, that don't overlap the answer
    for candidate in state.keywords.iter().chain(&state.noun_chunks) {
        if picked.is_full() {
            break;
        }
        if !contains_case_insensitive(answer, candidate) {
            picked.push(candidate);
        }
    }

    // Anything left over
    for keyword in &state.keywords {
        if picked.is_full() {
            break;
        }
        picked.push(keyword);
    }

    picked.into_inner()
}

/// Lowercased first token of the answer, stripped of edge punctuation.
fn lookup_key(answer: &str) -> String {
    answer
        .split_whitespace()
        .next()
        .unwrap_or("")
        .trim_matches(|c: char| c.is_ascii_punctuation())
        .to_lowercase()
}

/// Ordered, case-insensitively distinct selection bounded by `count`.
struct Picked {
    answer: String,
    count: usize,
    items: Vec<String>,
    seen: Vec<String>,
}

impl Picked {
    fn new(answer: &str, count: usize) -> Self {
        Self {
            answer: answer.to_lowercase(),
            count,
            items: Vec::with_capacity(count),
            seen: Vec::with_capacity(count),
        }
    }

    fn push(&mut self, candidate: &str) {
        let candidate = candidate.trim();
        if candidate.is_empty() || self.is_full() {
            return;
        }
        let key = candidate.to_lowercase();
        if key == self.answer || self.seen.contains(&key) {
            return;
        }
        self.seen.push(key);
        self.items.push(candidate.to_string());
    }

    fn is_full(&self) -> bool {
        self.items.len() >= self.count
    }

    fn into_inner(self) -> Vec<String> {
        self.items
    }
}
