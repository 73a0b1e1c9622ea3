//! Document keyword ranking.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use quizwright_lexicon::ParsedToken;

/// Lowercase alphabetic runs longer than three letters.
static HEURISTIC_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-z]{4,}\b").unwrap());

/// Rank terms by descending frequency, ties in first-occurrence order.
pub fn rank_by_frequency<I, S>(terms: I, max: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();
    for term in terms {
        let term = term.into();
        let count = counts.entry(term.clone()).or_insert(0);
        if *count == 0 {
            first_seen.push(term);
        }
        *count += 1;
    }

    // Stable sort keeps first-occurrence order among equal counts.
    first_seen.sort_by(|a, b| counts[b].cmp(&counts[a]));
    first_seen.truncate(max);
    first_seen
}

/// Heuristic keywords: lowercase alphabetic tokens of length > 3 by raw frequency.
pub fn heuristic_keywords(text: &str, max: usize) -> Vec<String> {
    let lower = text.to_lowercase();
    rank_by_frequency(HEURISTIC_WORD.find_iter(&lower).map(|m| m.as_str()), max)
}

/// Parser keywords: lemmatized, lowercased, non-stopword nouns and proper nouns.
pub fn parsed_keywords(tokens: &[ParsedToken], max: usize) -> Vec<String> {
    let lemmas = tokens
        .iter()
        .filter(|t| t.pos.is_nominal() && !t.is_stop && t.is_alpha())
        .map(|t| {
            let lemma = if t.lemma.trim().is_empty() { &t.text } else { &t.lemma };
            lemma.trim().to_lowercase()
        });
    rank_by_frequency(lemmas, max)
}
