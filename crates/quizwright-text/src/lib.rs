//! Quizwright Text — turns study text into quizzable material.
//!
//! Splits text into candidate sentences, ranks document keywords, and picks
//! the span of a sentence worth asking about. Each step has a parser-backed
//! path and a regex path; which one runs is fixed by the `LinguisticBackend`.

pub mod edit;
pub mod keywords;
pub mod preprocess;
pub mod sentences;
pub mod spans;

pub use edit::{normalize_question, replace_first_case_insensitive};
pub use preprocess::{PreprocessedState, Preprocessor};
pub use spans::{select_answer, swap_target};
