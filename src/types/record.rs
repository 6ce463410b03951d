use serde::{Deserialize, Deserializer, Serialize};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::types::Error;

pub const UNTITLED_MEETING: &str = "Untitled Meeting";

/// Deserialized from an `actionItems` entry
#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct ActionItem {
    pub task: String,
   #[serde(deserialize_with = "optional_text")]
    pub assignee: Option<String>,
   #[serde(rename = "dueDate", deserialize_with = "optional_text")]
    pub due_date: Option<String>,
}

/// Deserialized from a `decisions` entry
#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct Decision {
    pub decision: String,
   #[serde(deserialize_with = "optional_text")]
    pub context: Option<String>,
}

/// Deserialized from a `deadlines` entry
#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct Deadline {
    pub item: String,
   #[serde(deserialize_with = "optional_text")]
    pub date: Option<String>,
   #[serde(deserialize_with = "optional_text")]
    pub owner: Option<String>,
}

/// A summary record after validation: the summary is known to be non-blank,
/// every list field is present, blank optional strings are `None`.
#[derive(Debug,Clone,Default,PartialEq)]
pub struct ValidatedSummary {
    pub meeting_title: String,
    pub meeting_date: Option<String>,
    pub meeting_type: Option<String>,
    pub participants: Vec<String>,
    pub location: Option<String>,
    pub tags: Vec<String>,
    pub summary: String,
    pub action_items: Vec<ActionItem>,
    pub decisions: Vec<Decision>,
    pub deadlines: Vec<Deadline>,
    pub extracted_participants: Vec<String>,
}

/// Checks a raw summary record as handed over by the persistence layer.
///
/// Fails with `Error::InvalidInput` when `raw` is not a JSON object or when
/// `summary` is missing, not a string, or blank. Every other field falls back
/// to a default instead of failing.
pub fn validate_summary_data(raw: &Value) -> Result<ValidatedSummary, Error> {
    let record = raw
        .as_object()
        .ok_or_else(|| Error::InvalidInput("data is required".to_string()))?;

    let summary = record
        .get("summary")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|summary| !summary.is_empty())
        .ok_or_else(|| Error::InvalidInput("summary text is required".to_string()))?;

    let mut action_items: Vec<ActionItem> = object_list(record, "actionItems");
    for item in action_items.iter_mut() {
        item.assignee = non_blank(item.assignee.take());
        item.due_date = non_blank(item.due_date.take());
    }

    let mut decisions: Vec<Decision> = object_list(record, "decisions");
    for item in decisions.iter_mut() {
        item.context = non_blank(item.context.take());
    }

    let mut deadlines: Vec<Deadline> = object_list(record, "deadlines");
    for item in deadlines.iter_mut() {
        item.date = non_blank(item.date.take());
        item.owner = non_blank(item.owner.take());
    }

    Ok(ValidatedSummary {
        meeting_title: string_field(record, "meetingTitle").unwrap_or_else(|| UNTITLED_MEETING.to_string()),
        meeting_date: string_field(record, "meetingDate"),
        meeting_type: string_field(record, "meetingType"),
        participants: string_list(record, "participants"),
        location: string_field(record, "location"),
        tags: string_list(record, "tags"),
        summary: summary.to_string(),
        action_items,
        decisions,
        deadlines,
        extracted_participants: string_list(record, "extractedParticipants"),
    })
}

/// a non-blank string value; anything else reads as absent
fn string_field(record: &Map<String, Value>, key: &str) -> Option<String> {
    non_blank(record.get(key).and_then(Value::as_str).map(str::to_string))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

/// string elements of an array field; non-arrays read as empty
fn string_list(record: &Map<String, Value>, key: &str) -> Vec<String> {
    match record.get(key) {
        Some(Value::Array(values)) => values
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Optional detail fields accept any JSON value; only strings are kept, so a
/// wrongly typed detail reads as absent instead of discarding its item.
fn optional_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;

    match value {
        Value::String(text) => Ok(Some(text)),
        Value::Null => Ok(None),
        other => {
            tracing::warn!(value = %other, "ignoring non-string detail");
            Ok(None)
        }
    }
}

/// object elements of an array field, malformed entries are skipped
fn object_list<T: DeserializeOwned>(record: &Map<String, Value>, key: &str) -> Vec<T> {
    let values = match record.get(key) {
        Some(Value::Array(values)) => values,
        _ => return Vec::new(),
    };

    let mut items = Vec::with_capacity(values.len());

    for (index, value) in values.iter().enumerate() {
        if !value.is_object() {
            tracing::warn!(field = key, index, "skipping list entry that is not an object");
            continue;
        }

        match T::deserialize(value) {
            Ok(item) => items.push(item),
            Err(e) => tracing::warn!(field = key, index, error = %e, "skipping malformed list entry"),
        }
    }

    items
}
