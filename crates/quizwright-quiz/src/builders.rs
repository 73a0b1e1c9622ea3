//! Item builders: one sentence → one multiple-choice or true/false item.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use quizwright_core::QuizConfig;
use quizwright_lexicon::LinguisticBackend;
use quizwright_text::{replace_first_case_insensitive, select_answer, swap_target, PreprocessedState};

use crate::distractors::make_distractors;
use crate::item::QuizItem;

/// Build a fill-in-the-blank multiple-choice item, or `None` when the
/// sentence has no usable answer or too few distinct options.
pub fn build_mcq<R: Rng + ?Sized>(
    backend: &LinguisticBackend,
    config: &QuizConfig,
    sentence: &str,
    state: &PreprocessedState,
    rng: &mut R,
) -> Option<QuizItem> {
    let answer = select_answer(backend, sentence)?;
    let question = replace_first_case_insensitive(sentence, &answer, &config.blank_marker)?;

    let distractors = make_distractors(backend.lexicon(), &answer, state, config.mcq_distractors);
    let mut options: Vec<String> = Vec::with_capacity(distractors.len() + 1);
    for option in std::iter::once(answer.clone()).chain(distractors) {
        if !option.is_empty() && !options.contains(&option) {
            options.push(option);
        }
    }
    options.truncate(config.max_options);
    if options.len() < 2 {
        debug!("Too few options for '{}' in: {}", answer, sentence);
        return None;
    }
    options.shuffle(rng);

    QuizItem::multiple_choice(question, options, answer, state.topic()).ok()
}

/// Build a true/false item. Always succeeds: whenever a safe alteration
/// cannot be made the unaltered sentence is returned as a `True` item.
///
/// A draw below `false_probability` also keeps the sentence unaltered.
pub fn build_tf<R: Rng + ?Sized>(
    backend: &LinguisticBackend,
    config: &QuizConfig,
    sentence: &str,
    state: &PreprocessedState,
    false_probability: f64,
    rng: &mut R,
) -> QuizItem {
    let truthful = || QuizItem::true_false(sentence, true, state.topic());

    if rng.gen::<f64>() < false_probability {
        return truthful();
    }
    let Some(target) = swap_target(backend, sentence) else {
        return truthful();
    };
    let distractors = make_distractors(backend.lexicon(), &target, state, config.tf_distractors);
    let Some(replacement) = distractors.choose(rng) else {
        return truthful();
    };
    match replace_first_case_insensitive(sentence, &target, replacement) {
        Some(altered) if altered != sentence => {
            QuizItem::true_false(altered, false, state.topic())
        }
        _ => truthful(),
    }
}
