//! Normalization of quiz items produced outside the heuristic pipeline,
//! e.g. by a hosted language model that answers with loosely formatted JSON.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use quizwright_core::config::DEFAULT_MAX_OPTIONS;

use crate::item::QuizItem;

/// Topic assigned when an item does not name one.
pub const DEFAULT_TOPIC: &str = "General";

static FENCED_ARRAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)```json\s*(\[.*?\])\s*```").unwrap());
static BARE_ARRAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)(\[.*\])").unwrap());

/// Pull a JSON array out of free-form text: a fenced ```json block first,
/// then the outermost bracketed span.
pub fn extract_json_array(raw: &str) -> Option<&str> {
    FENCED_ARRAY
        .captures(raw)
        .or_else(|| BARE_ARRAY.captures(raw))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
}

/// Parse and clean externally generated multiple-choice items.
///
/// Invalid JSON or malformed entries are dropped, never reported as errors.
pub fn import_items(raw: &str, limit: usize) -> Vec<QuizItem> {
    let Some(array) = extract_json_array(raw) else {
        debug!("No JSON array found in generator output");
        return Vec::new();
    };
    let values: Vec<Value> = match serde_json::from_str(array) {
        Ok(v) => v,
        Err(e) => {
            warn!("Generator output is not a JSON array: {}", e);
            return Vec::new();
        }
    };

    let total = values.len();
    let items: Vec<QuizItem> = values.iter().filter_map(clean_item).take(limit).collect();
    debug!("Imported {} of {} generated items", items.len(), total);
    items
}

fn clean_item(value: &Value) -> Option<QuizItem> {
    let question = text_field(value.get("question"))?;
    let correct = text_field(value.get("correct_answer"))?;
    let topic = text_field(value.get("topic")).unwrap_or_else(|| DEFAULT_TOPIC.to_string());

    let mut options: Vec<String> = Vec::new();
    for option in value.get("options")?.as_array()? {
        if let Some(o) = text_field(Some(option)) {
            if !options.contains(&o) {
                options.push(o);
            }
        }
    }
    if options.is_empty() {
        return None;
    }
    if !options.contains(&correct) {
        options.push(correct.clone());
    }

    // Cap the option list without ever dropping the correct answer
    let mut others_left = DEFAULT_MAX_OPTIONS - 1;
    options.retain(|o| {
        if *o == correct {
            true
        } else if others_left > 0 {
            others_left -= 1;
            true
        } else {
            false
        }
    });

    QuizItem::multiple_choice(question, options, correct, topic).ok()
}

/// Trimmed, non-empty string form of a scalar JSON value.
fn text_field(value: Option<&Value>) -> Option<String> {
    let text = match value? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    Some(text).filter(|t| !t.is_empty())
}
