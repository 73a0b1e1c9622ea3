//! Quiz assembly: runs the builders over every sentence, shuffles,
//! deduplicates by question text and truncates to the requested count.

use std::collections::HashSet;
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use quizwright_core::QuizConfig;
use quizwright_lexicon::{create_backend, DocumentParser, LinguisticBackend};
use quizwright_text::{normalize_question, PreprocessedState, Preprocessor};

use crate::builders::{build_mcq, build_tf};
use crate::distractors::make_distractors;
use crate::item::QuizItem;

/// Heuristic quiz generator bound to one linguistic backend.
///
/// Holds no per-call state; share one instance across threads.
#[derive(Debug, Clone)]
pub struct QuizGenerator {
    preprocessor: Preprocessor,
    config: QuizConfig,
}

impl QuizGenerator {
    pub fn new(backend: LinguisticBackend, config: QuizConfig) -> Self {
        Self {
            preprocessor: Preprocessor::new(backend, &config),
            config,
        }
    }

    /// Build the backend from configuration (see [`create_backend`]).
    pub fn from_config(config: QuizConfig, parser: Option<Arc<dyn DocumentParser>>) -> Self {
        let backend = create_backend(&config, parser);
        info!("Quiz generator ready ({} tier)", backend.tier());
        Self::new(backend, config)
    }

    /// Generator with no linguistic resources and default settings.
    pub fn heuristic() -> Self {
        Self::new(LinguisticBackend::Heuristic, QuizConfig::default())
    }

    pub fn backend(&self) -> &LinguisticBackend {
        self.preprocessor.backend()
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn preprocess(&self, text: Option<&str>) -> PreprocessedState {
        self.preprocessor.preprocess(text)
    }

    pub fn make_distractors(&self, answer: &str, state: &PreprocessedState, count: usize) -> Vec<String> {
        make_distractors(self.backend().lexicon(), answer, state, count)
    }

    pub fn build_mcq<R: Rng + ?Sized>(
        &self,
        sentence: &str,
        state: &PreprocessedState,
        rng: &mut R,
    ) -> Option<QuizItem> {
        build_mcq(self.backend(), &self.config, sentence, state, rng)
    }

    pub fn build_tf<R: Rng + ?Sized>(
        &self,
        sentence: &str,
        state: &PreprocessedState,
        false_probability: f64,
        rng: &mut R,
    ) -> QuizItem {
        build_tf(self.backend(), &self.config, sentence, state, false_probability, rng)
    }

    /// Generate up to `requested_count` questions with a fresh random source.
    ///
    /// The source is seeded from `config.seed`, else from the text's content
    /// hash when `config.deterministic` is set, else from entropy.
    pub fn create_quiz(&self, text: Option<&str>, requested_count: usize) -> Vec<QuizItem> {
        let mut rng = match (self.config.seed, self.config.deterministic) {
            (Some(seed), _) => ChaCha8Rng::seed_from_u64(seed),
            (None, true) => ChaCha8Rng::seed_from_u64(content_seed(text.unwrap_or(""))),
            (None, false) => ChaCha8Rng::from_entropy(),
        };
        self.create_quiz_with_rng(text, requested_count, &mut rng)
    }

    /// Generate up to `requested_count` questions drawing from `rng`.
    pub fn create_quiz_with_rng<R: Rng + ?Sized>(
        &self,
        text: Option<&str>,
        requested_count: usize,
        rng: &mut R,
    ) -> Vec<QuizItem> {
        if requested_count == 0 {
            return Vec::new();
        }
        let state = self.preprocess(text);
        if state.is_empty() {
            debug!("No quizzable sentences in input");
            return Vec::new();
        }

        let mut pool: Vec<QuizItem> = Vec::new();
        for sentence in &state.sentences {
            match self.build_mcq(sentence, &state, rng) {
                Some(item) => pool.push(item),
                None => debug!("No multiple-choice item for: {}", sentence),
            }
            if rng.gen::<f64>() < self.config.tf_probability {
                pool.push(self.build_tf(sentence, &state, self.config.false_probability, rng));
            }
        }
        pool.shuffle(rng);

        let pool_size = pool.len();
        let mut seen: HashSet<String> = HashSet::new();
        let quiz: Vec<QuizItem> = pool
            .into_iter()
            .filter(|item| seen.insert(normalize_question(item.question_text())))
            .take(requested_count)
            .collect();

        debug!(
            "Assembled {} of {} requested questions from {} sentences ({} candidates)",
            quiz.len(),
            requested_count,
            state.sentences.len(),
            pool_size
        );
        quiz
    }
}

/// SHA-256 of the text, hex encoded.
pub fn content_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Seed derived from the first 64 bits of the content hash.
pub fn content_seed(text: &str) -> u64 {
    u64::from_str_radix(&content_hash(text)[..16], 16).unwrap_or_default()
}

/// Generate a quiz with no linguistic resources and default settings.
pub fn create_quiz(text: Option<&str>, requested_count: usize) -> Vec<QuizItem> {
    QuizGenerator::heuristic().create_quiz(text, requested_count)
}
