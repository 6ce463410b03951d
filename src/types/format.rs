//! Text and label helpers shared by the template builder and both renderers.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub const NOT_SPECIFIED: &str = "Not specified";

const DATE_TIME_FORMAT: &str = "%B %-d, %Y at %I:%M %p";
const DATE_FORMAT: &str = "%B %-d, %Y";

/// `(stored value, display label)` for every meeting type the UI offers
const MEETING_TYPE_LABELS: [(&str, &str); 9] = [
    ("team", "Team Meeting"),
    ("one-on-one", "1-on-1"),
    ("client", "Client Meeting"),
    ("standup", "Standup"),
    ("project-review", "Project Review"),
    ("brainstorm", "Brainstorming"),
    ("interview", "Interview"),
    ("training", "Training"),
    ("other", "Other"),
];

/// removes control characters and U+FFFD, then trims
///
/// Tab, line feed and carriage return survive so body text keeps its line
/// structure. Applying it twice yields the same string as applying it once.
pub fn sanitize_text(text: &str) -> String {
    text.chars()
        .filter(|ch| !is_stripped(*ch))
        .collect::<String>()
        .trim()
        .to_string()
}

pub(crate) fn is_stripped(ch: char) -> bool {
    matches!(ch, '\u{0}'..='\u{8}' | '\u{B}'..='\u{C}' | '\u{E}'..='\u{1F}' | '\u{7F}' | '\u{FFFD}')
}

/// long US date with time, e.g. `January 15, 2024 at 02:30 PM`
///
/// Absent or blank values read `Not specified`; anything that does not parse
/// is returned unchanged.
pub fn format_date(value: Option<&str>) -> String {
    format_with(value, DATE_TIME_FORMAT)
}

/// long US date without time, e.g. `January 15, 2024`
pub fn format_date_only(value: Option<&str>) -> String {
    format_with(value, DATE_FORMAT)
}

fn format_with(value: Option<&str>, pattern: &str) -> String {
    let value = match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => return NOT_SPECIFIED.to_string(),
    };

    match parse_timestamp(value.trim()) {
        Some(timestamp) => timestamp.format(pattern).to_string(),
        None => value.to_string(),
    }
}

/// offset-bearing timestamps are shown in UTC, naive ones as written
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc).naive_utc());
    }

    // postgres text form, e.g. `2024-01-15 14:30:00+00`
    if let Ok(timestamp) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(timestamp.with_timezone(&Utc).naive_utc());
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(timestamp);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// display label for a stored meeting type
pub fn meeting_type_label(value: Option<&str>) -> String {
    let raw = match value.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return NOT_SPECIFIED.to_string(),
    };

    MEETING_TYPE_LABELS
        .iter()
        .find(|(key, _)| *key == raw)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| raw.to_string())
}
