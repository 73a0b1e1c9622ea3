//! Quiz item value type and its wire format.
//!
//! Wire shape (what the web layer and the grading endpoint exchange):
//! `{ "type": "mcq"|"tf", "question", "options"?, "correct_answer", "answer", "topic" }`.
//! `answer` duplicates `correct_answer` for older clients.

use serde::{Deserialize, Serialize, Serializer};

use quizwright_core::config::DEFAULT_MAX_OPTIONS;
use quizwright_core::{Error, Result};

pub const TRUE: &str = "True";
pub const FALSE: &str = "False";

/// Question format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuizKind {
    #[serde(rename = "mcq")]
    MultipleChoice,
    #[serde(rename = "tf")]
    TrueFalse,
}

/// One generated question. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "QuizItemWire")]
pub struct QuizItem {
    kind: QuizKind,
    question_text: String,
    options: Vec<String>,
    correct_answer: String,
    topic: String,
}

impl QuizItem {
    /// Build a multiple-choice item.
    ///
    /// Options must be non-empty, pairwise distinct, between 2 and 6 of
    /// them, and include `correct_answer`.
    pub fn multiple_choice(
        question_text: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
        topic: impl Into<String>,
    ) -> Result<Self> {
        let question_text = question_text.into();
        let correct_answer = correct_answer.into();
        if question_text.trim().is_empty() {
            return Err(Error::InvalidInput("question text is empty".into()));
        }
        if !(2..=DEFAULT_MAX_OPTIONS).contains(&options.len()) {
            return Err(Error::InvalidInput(format!(
                "multiple-choice items need 2 to {} options, got {}",
                DEFAULT_MAX_OPTIONS,
                options.len()
            )));
        }
        if options.iter().any(|o| o.trim().is_empty()) {
            return Err(Error::InvalidInput("options must not be blank".into()));
        }
        for (i, option) in options.iter().enumerate() {
            if options[..i].contains(option) {
                return Err(Error::InvalidInput(format!("duplicate option '{}'", option)));
            }
        }
        if !options.contains(&correct_answer) {
            return Err(Error::InvalidInput(format!(
                "correct answer '{}' is not among the options",
                correct_answer
            )));
        }
        Ok(Self {
            kind: QuizKind::MultipleChoice,
            question_text,
            options,
            correct_answer,
            topic: topic.into(),
        })
    }

    /// Build a true/false item; `truth` is whether the statement is correct.
    pub fn true_false(statement: impl Into<String>, truth: bool, topic: impl Into<String>) -> Self {
        Self {
            kind: QuizKind::TrueFalse,
            question_text: statement.into(),
            options: Vec::new(),
            correct_answer: if truth { TRUE } else { FALSE }.to_string(),
            topic: topic.into(),
        }
    }

    pub fn kind(&self) -> QuizKind {
        self.kind
    }

    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    /// Options of a multiple-choice item; empty for true/false.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Grade a submitted answer: trimmed, case-insensitive match.
    pub fn is_correct(&self, given: &str) -> bool {
        given.trim().to_lowercase() == self.correct_answer.trim().to_lowercase()
    }
}

/// Transport form of `QuizItem`.
#[derive(Debug, Serialize, Deserialize)]
struct QuizItemWire {
    #[serde(rename = "type", default)]
    kind: Option<QuizKind>,
    question: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    options: Vec<String>,
    #[serde(default)]
    correct_answer: Option<String>,
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    topic: String,
}

impl TryFrom<QuizItemWire> for QuizItem {
    type Error = String;

    fn try_from(wire: QuizItemWire) -> std::result::Result<Self, Self::Error> {
        let correct = wire
            .correct_answer
            .or(wire.answer)
            .ok_or_else(|| "missing correct_answer".to_string())?;
        let kind = wire.kind.unwrap_or(if wire.options.is_empty() {
            QuizKind::TrueFalse
        } else {
            QuizKind::MultipleChoice
        });
        match kind {
            QuizKind::MultipleChoice => {
                QuizItem::multiple_choice(wire.question, wire.options, correct, wire.topic)
                    .map_err(|e| e.to_string())
            }
            QuizKind::TrueFalse => match correct.trim().to_lowercase().as_str() {
                "true" => Ok(QuizItem::true_false(wire.question, true, wire.topic)),
                "false" => Ok(QuizItem::true_false(wire.question, false, wire.topic)),
                other => Err(format!("true/false answer must be True or False, got '{}'", other)),
            },
        }
    }
}

impl Serialize for QuizItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        QuizItemWire {
            kind: Some(self.kind),
            question: self.question_text.clone(),
            options: self.options.clone(),
            correct_answer: Some(self.correct_answer.clone()),
            answer: Some(self.correct_answer.clone()),
            topic: self.topic.clone(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_mcq_invariants() {
        assert!(QuizItem::multiple_choice("q ______", opts(&["a", "b"]), "a", "t").is_ok());
        assert!(QuizItem::multiple_choice("q", opts(&["a"]), "a", "t").is_err());
        assert!(QuizItem::multiple_choice("q", opts(&["a", "a"]), "a", "t").is_err());
        assert!(QuizItem::multiple_choice("q", opts(&["a", "b"]), "c", "t").is_err());
        assert!(QuizItem::multiple_choice("q", opts(&["a", " "]), "a", "t").is_err());
        assert!(QuizItem::multiple_choice(" ", opts(&["a", "b"]), "a", "t").is_err());
        let seven = opts(&["1", "2", "3", "4", "5", "6", "7"]);
        assert!(QuizItem::multiple_choice("q", seven, "1", "t").is_err());
    }

    #[test]
    fn test_mcq_wire_shape() {
        let item = QuizItem::multiple_choice(
            "The ______ is the powerhouse of the cell.",
            opts(&["chloroplast", "mitochondria"]),
            "mitochondria",
            "cell",
        )
        .unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "mcq");
        assert_eq!(json["question"], "The ______ is the powerhouse of the cell.");
        assert_eq!(json["options"][1], "mitochondria");
        assert_eq!(json["correct_answer"], "mitochondria");
        assert_eq!(json["answer"], "mitochondria");
        assert_eq!(json["topic"], "cell");

        let back: QuizItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_tf_wire_shape_omits_options() {
        let item = QuizItem::true_false("DNA carries genetic information.", false, "");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "tf");
        assert_eq!(json["correct_answer"], "False");
        assert!(json.get("options").is_none());
    }

    #[test]
    fn test_deserialize_legacy_answer_field() {
        let item: QuizItem =
            serde_json::from_str(r#"{"question": "Cells divide.", "answer": "true"}"#).unwrap();
        assert_eq!(item.kind(), QuizKind::TrueFalse);
        assert_eq!(item.correct_answer(), "True");

        let bad = serde_json::from_str::<QuizItem>(r#"{"type": "tf", "question": "x", "answer": "maybe"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_is_correct() {
        let item = QuizItem::true_false("Cells divide.", true, "");
        assert!(item.is_correct("  true "));
        assert!(!item.is_correct("False"));
    }
}
