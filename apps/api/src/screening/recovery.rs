//! Response Recoverer: turns a model's free-text reply into an `AnalysisRecord`.
//!
//! Models often wrap the requested JSON in prose or markdown fences, so the reply
//! goes through two explicit stages instead of direct deserialization:
//!
//! 1. `isolate_json`: trim, then slice from the first `{` to the last `}`.
//! 2. `parse_record`: parse the slice as a loosely-typed JSON value and read
//!    `score`, `skills` and `summary` field by field, defaulting whatever is
//!    missing.
//!
//! Braces in prose surrounding the object defeat the slice. That is accepted:
//! the parse then fails and the candidate text is returned for diagnosis.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use crate::screening::models::AnalysisRecord;

#[derive(Debug, Error)]
pub enum RecoveryError {
    #[error("Failed to parse JSON: {source}")]
    JsonParse {
        source: serde_json::Error,
        raw: String,
    },

    #[error("Error processing response: expected a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// Recovers a record from a raw model reply. Never fails: recovery errors are
/// returned as a record with `success: false`.
pub fn recover(reply: &str) -> AnalysisRecord {
    match parse_record(isolate_json(reply)) {
        Ok(record) => record,
        Err(err) => {
            warn!("Could not recover analysis from model reply: {err}");
            let raw_reply = match &err {
                RecoveryError::JsonParse { raw, .. } => Some(raw.clone()),
                RecoveryError::NotAnObject(_) => None,
            };
            AnalysisRecord {
                raw_reply,
                ..AnalysisRecord::failed(err.to_string())
            }
        }
    }
}

/// Best-effort slice of the JSON object inside `reply`. Returns the trimmed
/// reply unchanged when there are no braces to cut at.
pub fn isolate_json(reply: &str) -> &str {
    let mut text = reply.trim();

    if !text.starts_with('{') {
        if let Some(start) = text.find('{') {
            text = &text[start..];
        }
    }

    if !text.ends_with('}') {
        if let Some(end) = text.rfind('}') {
            text = &text[..=end];
        }
    }

    text
}

pub fn parse_record(candidate: &str) -> Result<AnalysisRecord, RecoveryError> {
    let value: Value =
        serde_json::from_str(candidate).map_err(|source| RecoveryError::JsonParse {
            source,
            raw: candidate.to_string(),
        })?;

    let object = value
        .as_object()
        .ok_or_else(|| RecoveryError::NotAnObject(json_kind(&value)))?;

    Ok(AnalysisRecord::succeeded(
        read_score(object),
        read_skills(object),
        read_summary(object),
    ))
}

/// Integers as-is, floats rounded, numeric strings parsed; anything else is 0.
fn read_score(object: &Map<String, Value>) -> i64 {
    match object.get("score") {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.round() as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f.round() as i64))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

/// An object keeps its labels; an array is labelled `skill1..skillN`.
fn read_skills(object: &Map<String, Value>) -> BTreeMap<String, String> {
    match object.get("skills") {
        Some(Value::Object(skills)) => skills
            .iter()
            .map(|(label, name)| (label.clone(), value_text(name)))
            .collect(),
        Some(Value::Array(skills)) => skills
            .iter()
            .enumerate()
            .map(|(i, name)| (format!("skill{}", i + 1), value_text(name)))
            .collect(),
        _ => BTreeMap::new(),
    }
}

fn read_summary(object: &Map<String, Value>) -> String {
    match object.get("summary") {
        None | Some(Value::Null) => String::new(),
        Some(value) => value_text(value),
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
