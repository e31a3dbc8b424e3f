//! Prompt templates
//!
//! Each template interpolates caller data verbatim and closes with the exact
//! JSON shape the model must answer with.

use serde_json::Value;

/// Render a request value as it reads inside a template string: strings
/// as-is, `null`, numbers and booleans as their literal text, arrays as
/// comma-joined items and objects as `[object Object]`.
pub fn interpolate(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => interpolate(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
        other => other.to_string(),
    }
}

pub fn resume_prompt(text: &str) -> String {
    format!(
        "Extract candidate details from this text:\n\
         {text}\n\
         Respond ONLY in JSON:\n\
         {{\"name\":\"...\",\"email\":\"...\",\"phone\":\"...\"}}"
    )
}

pub fn question_prompt(level: &str) -> String {
    format!(
        "Generate a {level} full-stack (React/Node) interview question must be able to answer within less time and question is must be two lines.\n\
         Respond ONLY in JSON:\n\
         {{\"question\":\"...\",\"answer\":\"...\"}}"
    )
}

pub fn evaluation_prompt(question: &str, user_answer: &str, correct_answer: &str) -> String {
    format!(
        "Evaluate candidate's answer.\n\
         Q: {question}\n\
         User: {user_answer}\n\
         Correct: {correct_answer}\n\
         Respond ONLY in JSON:\n\
         {{\"isCorrect\": true/false, \"feedback\":\"...\", \"score\": number}}"
    )
}

/// The candidate object is embedded as compact JSON.
pub fn summary_prompt(candidate: &Value) -> String {
    format!(
        "Write a short hiring summary for this candidate based on their interview performance:\n\
         {candidate}\n\
         Respond ONLY in JSON:\n\
         {{\"summary\":\"...\", \"finalScore\": number}}"
    )
}
