//! Text normalization: raw text → sentences, noun chunks, keywords.

use serde::Serialize;
use tracing::debug;

use quizwright_core::QuizConfig;
use quizwright_lexicon::LinguisticBackend;

use crate::keywords::{heuristic_keywords, parsed_keywords};
use crate::sentences::{is_quizzable, split_sentences};

/// Per-document material for question synthesis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PreprocessedState {
    /// Candidate sentences in document order.
    pub sentences: Vec<String>,
    /// Noun phrases in document order (parser tier only).
    pub noun_chunks: Vec<String>,
    /// Keywords, most frequent first.
    pub keywords: Vec<String>,
}

impl PreprocessedState {
    /// Weak topic label: the most frequent keyword, or empty.
    pub fn topic(&self) -> &str {
        self.keywords.first().map(String::as_str).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Produces `PreprocessedState` using whichever backend was configured.
#[derive(Debug, Clone)]
pub struct Preprocessor {
    backend: LinguisticBackend,
    min_sentence_tokens: usize,
    max_keywords: usize,
}

impl Preprocessor {
    pub fn new(backend: LinguisticBackend, config: &QuizConfig) -> Self {
        Self {
            backend,
            min_sentence_tokens: config.min_sentence_tokens,
            max_keywords: config.max_keywords,
        }
    }

    pub fn backend(&self) -> &LinguisticBackend {
        &self.backend
    }

    /// Preprocess text. Absent or blank input yields an empty state.
    pub fn preprocess(&self, text: Option<&str>) -> PreprocessedState {
        let text = match text.map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => return PreprocessedState::default(),
        };

        let state = match self.backend.parser() {
            Some(parser) => PreprocessedState {
                sentences: self.keep_quizzable(parser.sentences(text)),
                noun_chunks: parser
                    .noun_chunks(text)
                    .into_iter()
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty())
                    .collect(),
                keywords: parsed_keywords(&parser.tokens(text), self.max_keywords),
            },
            None => PreprocessedState {
                sentences: self.keep_quizzable(split_sentences(text)),
                noun_chunks: Vec::new(),
                keywords: heuristic_keywords(text, self.max_keywords),
            },
        };

        debug!(
            "Preprocessed {} chars: {} sentences, {} noun chunks, {} keywords ({} tier)",
            text.len(),
            state.sentences.len(),
            state.noun_chunks.len(),
            state.keywords.len(),
            self.backend.tier()
        );
        state
    }

    fn keep_quizzable<S: AsRef<str>>(&self, sentences: Vec<S>) -> Vec<String> {
        sentences
            .iter()
            .map(|s| s.as_ref().trim())
            .filter(|s| is_quizzable(s, self.min_sentence_tokens))
            .map(str::to_string)
            .collect()
    }
}
