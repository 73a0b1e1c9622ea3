//! Small string edits shared by the item builders.

use regex::{NoExpand, RegexBuilder};

/// Replace the first case-insensitive occurrence of `needle` in `haystack`.
///
/// An occurrence must not sit inside a longer word: a needle that starts or
/// ends with a word character is anchored on a word boundary at that end.
/// Returns `None` when `needle` is blank or does not occur.
pub fn replace_first_case_insensitive(
    haystack: &str,
    needle: &str,
    replacement: &str,
) -> Option<String> {
    if needle.trim().is_empty() {
        return None;
    }
    let re = RegexBuilder::new(&word_pattern(needle))
        .case_insensitive(true)
        .build()
        .ok()?;
    if !re.is_match(haystack) {
        return None;
    }
    Some(re.replacen(haystack, 1, NoExpand(replacement)).into_owned())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Escaped `needle`, with `\b` on each end that begins or ends in a word character.
fn word_pattern(needle: &str) -> String {
    let mut pattern = regex::escape(needle);
    if needle.chars().next().is_some_and(is_word_char) {
        pattern.insert_str(0, r"\b");
    }
    if needle.chars().last().is_some_and(is_word_char) {
        pattern.push_str(r"\b");
    }
    pattern
}

/// Whether `needle` occurs in `haystack`, ignoring case.
pub fn contains_case_insensitive(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Key used to detect duplicate questions: trimmed and lowercased.
pub fn normalize_question(question: &str) -> String {
    question.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_first_only() {
        let out = replace_first_case_insensitive("DNA and dna", "dna", "______").unwrap();
        assert_eq!(out, "______ and dna");
    }

    #[test]
    fn test_replace_escapes_regex_and_replacement() {
        let out = replace_first_case_insensitive("Cost is $5 (approx.)", "(approx.)", "$1").unwrap();
        assert_eq!(out, "Cost is $5 $1");
    }

    #[test]
    fn test_replace_skips_matches_inside_words() {
        let out = replace_first_case_insensitive(
            "Cellphones and cell towers carry radio signals.",
            "cell",
            "______",
        )
        .unwrap();
        assert_eq!(out, "Cellphones and ______ towers carry radio signals.");
        assert!(replace_first_case_insensitive("Cellphones ring.", "cell", "x").is_none());
        // Edge punctuation is not a word character, so no boundary is needed there
        let out = replace_first_case_insensitive("Version (beta) ships", "(beta)", "x").unwrap();
        assert_eq!(out, "Version x ships");
    }

    #[test]
    fn test_replace_missing() {
        assert!(replace_first_case_insensitive("cell wall", "nucleus", "x").is_none());
        assert!(replace_first_case_insensitive("cell wall", "  ", "x").is_none());
    }

    #[test]
    fn test_contains_and_normalize() {
        assert!(contains_case_insensitive("Plant Cells", "cells"));
        assert_eq!(normalize_question("  What IS this? "), "what is this?");
    }
}
