//! Quizwright Quiz — multiple-choice and true/false questions from study text.
//!
//! Sentences come out of `quizwright_text` preprocessing; each one is turned
//! into a fill-in-the-blank multiple-choice item and, with some probability,
//! a true/false item. Distractors come from the lexical network when one is
//! loaded and from the document's own keywords otherwise.
//!
//! Also carries the surrounding plumbing a quiz service needs: grading of
//! submitted answers and normalization of externally generated items.

pub mod assembler;
pub mod builders;
pub mod distractors;
pub mod grading;
pub mod import;
pub mod item;

pub use assembler::{content_hash, create_quiz, QuizGenerator};
pub use builders::{build_mcq, build_tf};
pub use distractors::make_distractors;
pub use grading::{grade, GradeReport, IncorrectAnswer};
pub use import::import_items;
pub use item::{QuizItem, QuizKind};
