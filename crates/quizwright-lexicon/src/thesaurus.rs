//! Thesaurus file lexicon.
//!
//! File format: a JSON object mapping headwords to their senses:
//!
//! ```json
//! { "cell": [ { "pos": "noun", "synonyms": ["cellular_telephone"], "hypernyms": ["compartment"] } ] }
//! ```
//!
//! Headwords are lowercased and underscores in lemma names (WordNet style)
//! become spaces at load time.

use std::collections::HashMap;
use std::path::Path;

use quizwright_core::{Error, Result};

use crate::network::{LexicalNetwork, Sense};
use crate::parser::PartOfSpeech;

/// In-memory synonym/hypernym table.
#[derive(Debug, Default)]
pub struct ThesaurusLexicon {
    entries: HashMap<String, Vec<Sense>>,
}

impl ThesaurusLexicon {
    /// Load a thesaurus JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Lexicon(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_json(&raw)
            .map_err(|e| Error::Lexicon(format!("invalid thesaurus {}: {}", path.display(), e)))
    }

    /// Parse thesaurus JSON text.
    pub fn from_json(raw: &str) -> Result<Self> {
        let parsed: HashMap<String, Vec<Sense>> = serde_json::from_str(raw)?;
        Ok(Self::from_entries(parsed))
    }

    /// Build from already-parsed entries, normalizing headwords and lemmas.
    ///
    /// Headwords that collide after lowercasing are merged in sorted order of
    /// their original spelling, so sense order never depends on input order.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<Sense>)>,
    {
        let mut entries: Vec<(String, Vec<Sense>)> = entries.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        let mut normalized: HashMap<String, Vec<Sense>> = HashMap::with_capacity(entries.len());
        for (word, senses) in entries {
            let key = word.trim().to_lowercase();
            if key.is_empty() {
                continue;
            }
            let senses = senses.into_iter().map(normalize_sense);
            normalized.entry(key).or_default().extend(senses);
        }
        Self {
            entries: normalized,
        }
    }

    /// Number of headwords.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize_sense(sense: Sense) -> Sense {
    let clean = |lemmas: Vec<String>| -> Vec<String> {
        lemmas
            .into_iter()
            .map(|l| l.replace('_', " ").trim().to_string())
            .filter(|l| !l.is_empty())
            .collect()
    };
    Sense {
        pos: sense.pos,
        synonyms: clean(sense.synonyms),
        hypernyms: clean(sense.hypernyms),
    }
}

impl LexicalNetwork for ThesaurusLexicon {
    fn senses(&self, word: &str, pos: Option<PartOfSpeech>) -> Vec<Sense> {
        self.entries
            .get(&word.trim().to_lowercase())
            .map(|senses| senses.iter().filter(|s| s.matches(pos)).cloned().collect())
            .unwrap_or_default()
    }

    fn is_available(&self) -> bool {
        !self.entries.is_empty()
    }
}
