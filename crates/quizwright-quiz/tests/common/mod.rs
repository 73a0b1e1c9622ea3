//! Shared fixtures for the pipeline tests: a table-driven parser stand-in
//! and a small thesaurus.

#![allow(dead_code)]

use std::sync::Arc;

use quizwright_lexicon::{DocumentParser, LexicalNetwork, ParsedToken, PartOfSpeech, ThesaurusLexicon};

pub const BIOLOGY: &str = "The mitochondria is the powerhouse of the cell. \
    Photosynthesis occurs in the chloroplast of plant cells. \
    DNA carries genetic information in all living organisms.";

pub const LONG_BIOLOGY: &str = "The mitochondria is the powerhouse of the cell. \
    Photosynthesis occurs in the chloroplast of plant cells. \
    DNA carries genetic information in all living organisms. \
    Ribosomes assemble proteins from amino acids in the cytoplasm. \
    The Golgi Apparatus packages proteins for transport out of the cell. \
    Charles Darwin described natural selection after visiting the Galapagos Islands.";

const STOPWORDS: &[&str] = &["the", "is", "of", "in", "all", "from", "for", "out", "after"];

/// Parser that recognizes a fixed vocabulary of entities, noun chunks and nouns.
pub struct TableParser {
    pub entities: Vec<&'static str>,
    pub chunks: Vec<&'static str>,
    pub nouns: Vec<&'static str>,
}

impl TableParser {
    pub fn biology() -> Self {
        Self {
            entities: vec!["DNA"],
            chunks: vec![
                "The mitochondria",
                "the powerhouse",
                "the cell",
                "Photosynthesis",
                "the chloroplast",
                "plant cells",
                "genetic information",
                "all living organisms",
            ],
            nouns: vec![
                "mitochondria",
                "powerhouse",
                "cell",
                "photosynthesis",
                "chloroplast",
                "plant",
                "cells",
                "dna",
                "information",
                "organisms",
            ],
        }
    }

    /// Table entries present in `text`, in order of first appearance.
    fn found(table: &[&'static str], text: &str) -> Vec<String> {
        let mut hits: Vec<(usize, &str)> = table
            .iter()
            .filter_map(|entry| text.find(entry).map(|at| (at, *entry)))
            .collect();
        hits.sort_by_key(|(at, _)| *at);
        hits.into_iter().map(|(_, entry)| entry.to_string()).collect()
    }
}

impl DocumentParser for TableParser {
    fn name(&self) -> &str {
        "table"
    }

    fn sentences(&self, text: &str) -> Vec<String> {
        text.split_inclusive('.')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn tokens(&self, text: &str) -> Vec<ParsedToken> {
        text.split_whitespace()
            .map(|raw| raw.trim_matches(|c: char| c.is_ascii_punctuation()))
            .filter(|word| !word.is_empty())
            .map(|word| {
                let lower = word.to_lowercase();
                let pos = if self.nouns.contains(&lower.as_str()) {
                    PartOfSpeech::Noun
                } else {
                    PartOfSpeech::Other
                };
                let token = ParsedToken::new(word, lower.clone(), pos);
                if STOPWORDS.contains(&lower.as_str()) {
                    token.stop()
                } else {
                    token
                }
            })
            .collect()
    }

    fn noun_chunks(&self, text: &str) -> Vec<String> {
        Self::found(&self.chunks, text)
    }

    fn entities(&self, text: &str) -> Vec<String> {
        Self::found(&self.entities, text)
    }
}

pub fn biology_parser() -> Arc<dyn DocumentParser> {
    Arc::new(TableParser::biology())
}

pub fn biology_thesaurus() -> Arc<dyn LexicalNetwork> {
    let lexicon = ThesaurusLexicon::from_json(
        r#"{
            "powerhouse": [{"pos": "noun", "synonyms": ["dynamo", "generator"], "hypernyms": ["engine"]}],
            "photosynthesis": [{"pos": "noun", "hypernyms": ["biological process", "synthesis"]}],
            "genetic": [{"pos": "adj", "synonyms": ["hereditary", "inherited", "transmitted"]}]
        }"#,
    )
    .unwrap();
    Arc::new(lexicon)
}
