//! Document parser trait.
//!
//! A parser gives the full tier its sentence boundaries, noun chunks,
//! named entities and lemmas. Quizwright ships no parser of its own; an
//! embedding application plugs one in through this trait.

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    #[serde(alias = "n")]
    Noun,
    #[serde(alias = "propn")]
    ProperNoun,
    #[serde(alias = "v")]
    Verb,
    #[serde(alias = "adj", alias = "a")]
    Adjective,
    #[serde(alias = "adv", alias = "r")]
    Adverb,
    Other,
}

impl PartOfSpeech {
    /// Nouns and proper nouns.
    pub fn is_nominal(self) -> bool {
        matches!(self, Self::Noun | Self::ProperNoun)
    }
}

/// One token as reported by a parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedToken {
    pub text: String,
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub is_stop: bool,
}

impl ParsedToken {
    pub fn new(text: impl Into<String>, lemma: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos,
            is_stop: false,
        }
    }

    pub fn stop(mut self) -> Self {
        self.is_stop = true;
        self
    }

    /// Token consists only of alphabetic characters.
    pub fn is_alpha(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_alphabetic)
    }
}

/// Full linguistic parse of free text.
///
/// Implementations must be immutable after construction: a single parser
/// is shared by every concurrent generation call.
pub trait DocumentParser: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Sentence segmentation, in document order.
    fn sentences(&self, text: &str) -> Vec<String>;

    /// Tokens with lemma, tag and stopword flag, in document order.
    fn tokens(&self, text: &str) -> Vec<ParsedToken>;

    /// Noun-phrase chunks, in document order.
    fn noun_chunks(&self, text: &str) -> Vec<String>;

    /// Named-entity spans, in document order.
    fn entities(&self, text: &str) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_aliases() {
        let pos: PartOfSpeech = serde_json::from_str("\"n\"").unwrap();
        assert_eq!(pos, PartOfSpeech::Noun);
        let pos: PartOfSpeech = serde_json::from_str("\"propn\"").unwrap();
        assert!(pos.is_nominal());
        let pos: PartOfSpeech = serde_json::from_str("\"adj\"").unwrap();
        assert!(!pos.is_nominal());
    }

    #[test]
    fn test_token_alpha() {
        assert!(ParsedToken::new("cell", "cell", PartOfSpeech::Noun).is_alpha());
        assert!(!ParsedToken::new("3rd", "3rd", PartOfSpeech::Other).is_alpha());
        assert!(!ParsedToken::new(".", ".", PartOfSpeech::Other).is_alpha());
        assert!(ParsedToken::new("the", "the", PartOfSpeech::Other).stop().is_stop);
    }
}
