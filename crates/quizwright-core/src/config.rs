//! Quiz generation configuration.
//!
//! Loaded from an optional JSON file, then overridden by `QUIZWRIGHT_*`
//! environment variables. Every field has a default, so a partial file
//! (or none at all) is valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};

pub const DEFAULT_QUESTION_COUNT: usize = 10;
pub const DEFAULT_BLANK_MARKER: &str = "______";
pub const DEFAULT_MAX_KEYWORDS: usize = 50;
pub const DEFAULT_MAX_OPTIONS: usize = 6;

/// Tunables for the heuristic quiz pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Number of questions when the caller does not ask for a specific count.
    pub default_question_count: usize,
    /// Draw threshold of the true/false builder. A draw below it keeps the
    /// sentence unaltered and yields a `True` item.
    pub false_probability: f64,
    /// Per-sentence chance of also attempting a true/false item.
    pub tf_probability: f64,
    /// Distractors requested for each multiple-choice item.
    pub mcq_distractors: usize,
    /// Distractors requested when looking for a true/false swap.
    pub tf_distractors: usize,
    /// Upper bound on multiple-choice options, correct answer included.
    pub max_options: usize,
    /// Minimum whitespace-delimited tokens for a sentence to be quizzable.
    pub min_sentence_tokens: usize,
    /// Cap on the ranked keyword list.
    pub max_keywords: usize,
    /// Placeholder that replaces the answer span in a multiple-choice question.
    pub blank_marker: String,
    /// Fixed seed for every generation call.
    pub seed: Option<u64>,
    /// Derive the seed from the input text so the same text yields the same quiz.
    pub deterministic: bool,
    /// Thesaurus JSON file backing the lexical tier.
    pub lexicon_path: Option<PathBuf>,
    /// Capacity of the lexical lookup cache.
    pub lexicon_cache_size: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            default_question_count: DEFAULT_QUESTION_COUNT,
            false_probability: 0.5,
            tf_probability: 0.5,
            mcq_distractors: 3,
            tf_distractors: 5,
            max_options: DEFAULT_MAX_OPTIONS,
            min_sentence_tokens: 5,
            max_keywords: DEFAULT_MAX_KEYWORDS,
            blank_marker: DEFAULT_BLANK_MARKER.into(),
            seed: None,
            deterministic: false,
            lexicon_path: None,
            lexicon_cache_size: 1024,
        }
    }
}

impl QuizConfig {
    /// Load config from file, falling back to defaults, then apply env overrides.
    pub fn load(config_path: Option<&Path>) -> Self {
        let mut config = match config_path {
            Some(path) => match std::fs::read_to_string(path) {
                Ok(s) => match serde_json::from_str::<QuizConfig>(&s) {
                    Ok(c) => {
                        info!("Loaded quiz config from {}", path.display());
                        c
                    }
                    Err(e) => {
                        warn!("Invalid quiz config {}: {}. Using defaults.", path.display(), e);
                        Self::default()
                    }
                },
                Err(e) => {
                    warn!("Cannot read quiz config {}: {}. Using defaults.", path.display(), e);
                    Self::default()
                }
            },
            None => Self::default(),
        };
        config.apply_env();
        config
    }

    /// Override fields from `QUIZWRIGHT_*` environment variables.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("QUIZWRIGHT_LEXICON").filter(|p| !p.trim().is_empty()) {
            self.lexicon_path = Some(PathBuf::from(path));
        }
        if let Some(seed) = lookup("QUIZWRIGHT_SEED").and_then(|s| s.trim().parse().ok()) {
            self.seed = Some(seed);
        }
        if let Some(flag) = lookup("QUIZWRIGHT_DETERMINISTIC") {
            self.deterministic = matches!(flag.trim().to_lowercase().as_str(), "1" | "true" | "yes");
        }
        if let Some(count) = lookup("QUIZWRIGHT_QUESTION_COUNT").and_then(|s| s.trim().parse().ok()) {
            self.default_question_count = count;
        }
    }

    /// Reject settings the pipeline cannot honor.
    pub fn validate(&self) -> Result<()> {
        for (name, p) in [
            ("false_probability", self.false_probability),
            ("tf_probability", self.tf_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(Error::Config(format!("{} must be within [0, 1], got {}", name, p)));
            }
        }
        if !(2..=DEFAULT_MAX_OPTIONS).contains(&self.max_options) {
            return Err(Error::Config(format!(
                "max_options must be between 2 and {}, got {}",
                DEFAULT_MAX_OPTIONS, self.max_options
            )));
        }
        if self.min_sentence_tokens == 0 {
            return Err(Error::Config("min_sentence_tokens must be positive".into()));
        }
        if self.blank_marker.trim().is_empty() {
            return Err(Error::Config("blank_marker must not be blank".into()));
        }
        Ok(())
    }

    /// Save config to disk as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        info!("Saved quiz config to {}", path.display());
        Ok(())
    }
}
