//! Lexical network trait and implementations.
//!
//! The `LexicalNetwork` trait abstracts over synonym/hypernym lookup.
//! Implementations:
//! - `ThesaurusLexicon`: headwords loaded from a JSON thesaurus file
//! - `CachedLexicon`: memoizing wrapper around any other network
//! - `NoopLexicon`: returns nothing (distractors fall back to document keywords)

use serde::{Deserialize, Serialize};

use crate::parser::PartOfSpeech;

/// One word sense: its synonyms and the lemmas of its broader terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sense {
    pub pos: Option<PartOfSpeech>,
    pub synonyms: Vec<String>,
    pub hypernyms: Vec<String>,
}

impl Sense {
    /// Whether this sense applies to a lookup restricted to `pos`.
    /// Untagged senses match every lookup; proper nouns look up as nouns.
    pub fn matches(&self, pos: Option<PartOfSpeech>) -> bool {
        let normalize = |p: PartOfSpeech| match p {
            PartOfSpeech::ProperNoun => PartOfSpeech::Noun,
            other => other,
        };
        match (self.pos, pos) {
            (Some(mine), Some(wanted)) => normalize(mine) == normalize(wanted),
            _ => true,
        }
    }
}

/// Trait for synonym/hypernym databases.
pub trait LexicalNetwork: Send + Sync {
    /// All senses of `word` (lowercase headword), optionally restricted by part of speech.
    fn senses(&self, word: &str, pos: Option<PartOfSpeech>) -> Vec<Sense>;

    /// Check if the network has any data to offer.
    fn is_available(&self) -> bool;

    /// Synonyms then hypernym lemmas of every sense, in sense order.
    fn related_terms(&self, word: &str, pos: Option<PartOfSpeech>) -> Vec<String> {
        self.senses(word, pos)
            .into_iter()
            .flat_map(|sense| sense.synonyms.into_iter().chain(sense.hypernyms))
            .collect()
    }
}

/// Placeholder network that knows no words.
#[derive(Debug, Default)]
pub struct NoopLexicon;

impl NoopLexicon {
    pub fn new() -> Self {
        Self
    }
}

impl LexicalNetwork for NoopLexicon {
    fn senses(&self, _word: &str, _pos: Option<PartOfSpeech>) -> Vec<Sense> {
        Vec::new()
    }

    fn is_available(&self) -> bool {
        false
    }
}
