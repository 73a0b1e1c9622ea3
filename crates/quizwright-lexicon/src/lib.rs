//! Quizwright Lexicon — linguistic backends for the quiz pipeline.
//!
//! Provides the `DocumentParser` and `LexicalNetwork` traits. A lexical
//! network is loaded from a thesaurus JSON file when one is configured;
//! parsers are supplied by the embedding application. Whatever is missing
//! degrades the `LinguisticBackend` to a weaker tier and the pipeline falls
//! back to regex heuristics and document keywords.

pub mod backend;
pub mod cache;
pub mod network;
pub mod parser;
pub mod thesaurus;

pub use backend::LinguisticBackend;
pub use cache::{CachedLexicon, LookupCache};
pub use network::{LexicalNetwork, NoopLexicon, Sense};
pub use parser::{DocumentParser, ParsedToken, PartOfSpeech};
pub use thesaurus::ThesaurusLexicon;

use std::sync::Arc;

use quizwright_core::QuizConfig;

/// Build the strongest backend available from configuration and an optional parser.
///
/// Loads the thesaurus at `config.lexicon_path` (if set) behind a lookup
/// cache. Missing resources are logged once here and never again per call.
pub fn create_backend(
    config: &QuizConfig,
    parser: Option<Arc<dyn DocumentParser>>,
) -> LinguisticBackend {
    let lexicon: Option<Arc<dyn LexicalNetwork>> = match &config.lexicon_path {
        Some(path) => match ThesaurusLexicon::load(path) {
            Ok(thesaurus) => {
                tracing::info!(
                    "Using thesaurus lexicon from {} ({} headwords)",
                    path.display(),
                    thesaurus.len()
                );
                Some(Arc::new(CachedLexicon::new(
                    Arc::new(thesaurus),
                    config.lexicon_cache_size,
                )))
            }
            Err(e) => {
                tracing::warn!(
                    "Lexical network unavailable: {}. Distractors will come from document keywords.",
                    e
                );
                None
            }
        },
        None => {
            tracing::warn!("No lexicon configured. Distractors will come from document keywords.");
            None
        }
    };

    match &parser {
        Some(p) => tracing::info!("Using document parser '{}'", p.name()),
        None => tracing::warn!("No document parser available. Using heuristic sentence splitting."),
    }

    let backend = LinguisticBackend::from_parts(parser, lexicon);
    tracing::info!("Linguistic backend tier: {}", backend.tier());
    backend
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizwright_core::CapabilityTier;

    #[test]
    fn test_create_backend_without_resources_is_heuristic() {
        let backend = create_backend(&QuizConfig::default(), None);
        assert_eq!(backend.tier(), CapabilityTier::Heuristic);
    }

    #[test]
    fn test_create_backend_with_missing_file_degrades() {
        let config = QuizConfig {
            lexicon_path: Some("/nonexistent/thesaurus.json".into()),
            ..Default::default()
        };
        let backend = create_backend(&config, None);
        assert_eq!(backend.tier(), CapabilityTier::Heuristic);
    }

    #[test]
    fn test_create_backend_with_thesaurus_is_lexical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("thesaurus.json");
        std::fs::write(&path, r#"{"cell": [{"pos": "noun", "hypernyms": ["compartment"]}]}"#)
            .unwrap();
        let config = QuizConfig {
            lexicon_path: Some(path),
            ..Default::default()
        };
        let backend = create_backend(&config, None);
        assert_eq!(backend.tier(), CapabilityTier::Lexical);
        let lexicon = backend.lexicon().unwrap();
        assert_eq!(lexicon.related_terms("cell", None), vec!["compartment"]);
    }
}
