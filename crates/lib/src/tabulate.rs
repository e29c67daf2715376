//! # Quiz Tabulation
//!
//! Converts the generation stage's raw payload into flat [`QuizRow`]s for
//! display or export. The payload comes from the model and is untrusted:
//! it is validated structurally here, and any violation fails the whole
//! tabulation rather than producing a partial table.

use crate::errors::GenerateError;
use crate::types::QuizRow;
use serde_json::Value;

/// Parses a raw quiz payload into one [`QuizRow`] per question entry.
///
/// The payload must be a JSON object whose values are question objects with
/// a string `mcq`, a non-empty `options` object of label-to-text pairs, and
/// a string `correct`. Rows and joined choices both follow the key order of
/// the payload as received.
pub fn tabulate(raw_quiz_payload: &str) -> Result<Vec<QuizRow>, GenerateError> {
    let payload: Value = serde_json::from_str(raw_quiz_payload)
        .map_err(|e| GenerateError::PayloadParse(e.to_string()))?;
    let entries = payload
        .as_object()
        .ok_or_else(|| GenerateError::PayloadParse("expected a top-level JSON object".to_string()))?;

    let mut rows = Vec::with_capacity(entries.len());
    for (key, entry) in entries {
        rows.push(tabulate_entry(key, entry)?);
    }
    Ok(rows)
}

fn tabulate_entry(key: &str, entry: &Value) -> Result<QuizRow, GenerateError> {
    let violation = |field: &'static str| GenerateError::SchemaViolation {
        entry: key.to_string(),
        field,
    };

    let mcq = entry
        .get("mcq")
        .and_then(Value::as_str)
        .ok_or_else(|| violation("mcq"))?;

    let options = entry
        .get("options")
        .and_then(Value::as_object)
        .filter(|options| !options.is_empty())
        .ok_or_else(|| violation("options"))?;

    let mut joined = Vec::with_capacity(options.len());
    for (label, choice) in options {
        let choice = choice.as_str().ok_or_else(|| violation("options"))?;
        joined.push(format!("{label}: {choice}"));
    }

    let correct = entry
        .get("correct")
        .and_then(Value::as_str)
        .ok_or_else(|| violation("correct"))?;

    Ok(QuizRow {
        mcq: mcq.to_string(),
        choices: joined.join(" | "),
        correct: correct.to_string(),
    })
}
