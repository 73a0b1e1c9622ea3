//! Linguistic capability tiers.

use serde::{Deserialize, Serialize};

/// Level of linguistic support available to the quiz pipeline.
///
/// Ordered from weakest to strongest so callers can compare tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapabilityTier {
    /// Regex sentence splitting and capitalization heuristics only.
    Heuristic,
    /// Heuristic text handling plus synonym/hypernym lookup.
    Lexical,
    /// Full parser (sentences, entities, noun chunks, lemmas) plus lexicon.
    Full,
}

impl std::fmt::Display for CapabilityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Heuristic => write!(f, "heuristic"),
            Self::Lexical => write!(f, "lexical"),
            Self::Full => write!(f, "full"),
        }
    }
}
