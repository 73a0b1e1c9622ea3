//! Capability-tagged linguistic backend.

use std::sync::Arc;

use quizwright_core::CapabilityTier;

use crate::network::{LexicalNetwork, NoopLexicon};
use crate::parser::DocumentParser;

/// The linguistic resources available to one generator.
///
/// Built once at startup and shared read-only. The pipeline branches on the
/// variant instead of probing for resources on every call.
#[derive(Clone, Default)]
pub enum LinguisticBackend {
    /// Parser plus lexical network (the network may be a `NoopLexicon`).
    Full {
        parser: Arc<dyn DocumentParser>,
        lexicon: Arc<dyn LexicalNetwork>,
    },
    /// Lexical network only; text handling is heuristic.
    Lexical { lexicon: Arc<dyn LexicalNetwork> },
    /// Nothing loaded.
    #[default]
    Heuristic,
}

impl LinguisticBackend {
    /// Pick the variant matching whatever resources are present.
    ///
    /// A lexicon that reports itself unavailable counts as absent.
    pub fn from_parts(
        parser: Option<Arc<dyn DocumentParser>>,
        lexicon: Option<Arc<dyn LexicalNetwork>>,
    ) -> Self {
        let lexicon = lexicon.filter(|l| l.is_available());
        match (parser, lexicon) {
            (Some(parser), lexicon) => Self::Full {
                parser,
                lexicon: lexicon.unwrap_or_else(|| Arc::new(NoopLexicon::new())),
            },
            (None, Some(lexicon)) => Self::Lexical { lexicon },
            (None, None) => Self::Heuristic,
        }
    }

    pub fn tier(&self) -> CapabilityTier {
        match self {
            Self::Full { .. } => CapabilityTier::Full,
            Self::Lexical { .. } => CapabilityTier::Lexical,
            Self::Heuristic => CapabilityTier::Heuristic,
        }
    }

    pub fn parser(&self) -> Option<&dyn DocumentParser> {
        match self {
            Self::Full { parser, .. } => Some(parser.as_ref()),
            _ => None,
        }
    }

    /// The lexical network, if one with data is loaded.
    pub fn lexicon(&self) -> Option<&dyn LexicalNetwork> {
        match self {
            Self::Full { lexicon, .. } | Self::Lexical { lexicon } if lexicon.is_available() => {
                Some(lexicon.as_ref())
            }
            _ => None,
        }
    }
}

impl std::fmt::Debug for LinguisticBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Full { parser, lexicon } => f
                .debug_struct("Full")
                .field("parser", &parser.name())
                .field("lexicon", &lexicon.is_available())
                .finish(),
            Self::Lexical { .. } => f.write_str("Lexical"),
            Self::Heuristic => f.write_str("Heuristic"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Sense;
    use crate::parser::{ParsedToken, PartOfSpeech};

    struct NullParser;

    impl DocumentParser for NullParser {
        fn name(&self) -> &str {
            "null"
        }
        fn sentences(&self, _text: &str) -> Vec<String> {
            Vec::new()
        }
        fn tokens(&self, _text: &str) -> Vec<ParsedToken> {
            Vec::new()
        }
        fn noun_chunks(&self, _text: &str) -> Vec<String> {
            Vec::new()
        }
        fn entities(&self, _text: &str) -> Vec<String> {
            Vec::new()
        }
    }

    struct Tiny;

    impl LexicalNetwork for Tiny {
        fn senses(&self, _word: &str, _pos: Option<PartOfSpeech>) -> Vec<Sense> {
            vec![Sense::default()]
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_from_parts_tiers() {
        let parser: Arc<dyn DocumentParser> = Arc::new(NullParser);
        let lexicon: Arc<dyn LexicalNetwork> = Arc::new(Tiny);

        let full = LinguisticBackend::from_parts(Some(parser.clone()), Some(lexicon.clone()));
        assert_eq!(full.tier(), CapabilityTier::Full);
        assert!(full.parser().is_some());
        assert!(full.lexicon().is_some());

        let parser_only = LinguisticBackend::from_parts(Some(parser), None);
        assert_eq!(parser_only.tier(), CapabilityTier::Full);
        assert!(parser_only.lexicon().is_none());

        let lexical = LinguisticBackend::from_parts(None, Some(lexicon));
        assert_eq!(lexical.tier(), CapabilityTier::Lexical);
        assert!(lexical.parser().is_none());

        let noop: Arc<dyn LexicalNetwork> = Arc::new(NoopLexicon::new());
        let heuristic = LinguisticBackend::from_parts(None, Some(noop));
        assert_eq!(heuristic.tier(), CapabilityTier::Heuristic);
        assert_eq!(format!("{:?}", heuristic), "Heuristic");
    }

    #[test]
    fn test_default_is_heuristic() {
        let backend = LinguisticBackend::default();
        assert_eq!(backend.tier(), CapabilityTier::Heuristic);
        assert!(backend.parser().is_none());
        assert!(backend.lexicon().is_none());
    }
}
