//! Grading of submitted answers against generated items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use quizwright_core::{Error, Result};

use crate::item::QuizItem;

/// Points per correct answer.
pub const POINTS_PER_CORRECT: u32 = 10;
/// Scores below this ratio flag the quiz topic for review.
pub const LOW_SCORE_RATIO: f64 = 0.5;
/// Incorrect answers echoed back in a report.
pub const INCORRECT_PREVIEW_LEN: usize = 10;

/// One wrong answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncorrectAnswer {
    pub question: String,
    pub given: String,
    pub correct: String,
    pub time: DateTime<Utc>,
}

/// Outcome of grading one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeReport {
    pub total: usize,
    pub correct: usize,
    pub points_awarded: u32,
    pub low_score: bool,
    /// Topic to revisit, set only for low scores.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weak_topic: Option<String>,
    pub incorrect_count: usize,
    /// The most recent incorrect answers, oldest first.
    pub incorrect_preview: Vec<IncorrectAnswer>,
}

/// Grade `answers` positionally against `quiz`.
///
/// Comparison is trimmed and case-insensitive. `topic_hint` overrides the
/// topic reported for a low score; otherwise the first item's topic is used.
pub fn grade(quiz: &[QuizItem], answers: &[String], topic_hint: Option<&str>) -> Result<GradeReport> {
    if quiz.is_empty() || answers.is_empty() {
        return Err(Error::InvalidInput("quiz and answers are required".into()));
    }
    if quiz.len() != answers.len() {
        return Err(Error::InvalidInput(format!(
            "quiz has {} questions but {} answers were given",
            quiz.len(),
            answers.len()
        )));
    }

    let now = Utc::now();
    let mut correct = 0usize;
    let mut incorrect: Vec<IncorrectAnswer> = Vec::new();
    for (item, given) in quiz.iter().zip(answers) {
        if item.is_correct(given) {
            correct += 1;
        } else {
            incorrect.push(IncorrectAnswer {
                question: item.question_text().to_string(),
                given: given.clone(),
                correct: item.correct_answer().to_string(),
                time: now,
            });
        }
    }

    let total = quiz.len();
    let low_score = (correct as f64 / total as f64) < LOW_SCORE_RATIO;
    let weak_topic = if low_score {
        topic_hint
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .or_else(|| Some(quiz[0].topic().trim()).filter(|t| !t.is_empty()))
            .map(str::to_string)
    } else {
        None
    };

    let incorrect_count = incorrect.len();
    let preview_start = incorrect_count.saturating_sub(INCORRECT_PREVIEW_LEN);
    let report = GradeReport {
        total,
        correct,
        points_awarded: correct as u32 * POINTS_PER_CORRECT,
        low_score,
        weak_topic,
        incorrect_count,
        incorrect_preview: incorrect.split_off(preview_start),
    };
    info!(
        "Graded quiz: {}/{} correct, {} points, low_score={}",
        report.correct, report.total, report.points_awarded, report.low_score
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz() -> Vec<QuizItem> {
        vec![
            QuizItem::multiple_choice(
                "The ______ is the powerhouse of the cell.",
                vec!["chloroplast".into(), "Mitochondria".into()],
                "Mitochondria",
                "cell",
            )
            .unwrap(),
            QuizItem::true_false("DNA carries genetic information.", true, "cell"),
            QuizItem::true_false("Ribosomes store DNA.", false, "cell"),
        ]
    }

    fn answers(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_grade_all_correct() {
        let report = grade(&quiz(), &answers(&[" mitochondria", "TRUE", "false"]), None).unwrap();
        assert_eq!(report.correct, 3);
        assert_eq!(report.points_awarded, 30);
        assert!(!report.low_score);
        assert_eq!(report.weak_topic, None);
        assert!(report.incorrect_preview.is_empty());
    }

    #[test]
    fn test_grade_low_score_reports_topic() {
        let report = grade(&quiz(), &answers(&["chloroplast", "False", "false"]), None).unwrap();
        assert_eq!(report.correct, 1);
        assert!(report.low_score);
        assert_eq!(report.weak_topic.as_deref(), Some("cell"));
        assert_eq!(report.incorrect_count, 2);
        assert_eq!(report.incorrect_preview[0].given, "chloroplast");
        assert_eq!(report.incorrect_preview[0].correct, "Mitochondria");

        let report =
            grade(&quiz(), &answers(&["x", "x", "x"]), Some("  Organelles ")).unwrap();
        assert_eq!(report.weak_topic.as_deref(), Some("Organelles"));
    }

    #[test]
    fn test_grade_rejects_bad_input() {
        assert!(matches!(grade(&[], &[], None), Err(Error::InvalidInput(_))));
        assert!(grade(&quiz(), &answers(&["True"]), None).is_err());
    }

    #[test]
    fn test_preview_keeps_latest() {
        let quiz: Vec<QuizItem> = (0..12)
            .map(|i| QuizItem::true_false(format!("Statement {}.", i), true, ""))
            .collect();
        let wrong = vec!["False".to_string(); 12];
        let report = grade(&quiz, &wrong, None).unwrap();
        assert_eq!(report.incorrect_count, 12);
        assert_eq!(report.incorrect_preview.len(), INCORRECT_PREVIEW_LEN);
        assert_eq!(report.incorrect_preview[0].question, "Statement 2.");
        assert_eq!(report.weak_topic, None);
    }
}
