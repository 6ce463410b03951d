use crate::types::{
    format_date,
    meeting_type_label,
    ActionItem,
    Deadline,
    Decision,
    ValidatedSummary,
    NOT_SPECIFIED,
};

/// Renderer-agnostic meeting notes, built once per export and never mutated.
#[derive(Debug,Clone,PartialEq)]
pub struct MeetingNotesTemplate {
    pub title: String,
    pub date: String,
    pub meeting_type: String,
    pub participants: Vec<String>,
    pub location: String,
    pub tags: Vec<String>,
    pub summary: String,
    pub action_items: Vec<ActionItem>,
    pub decisions: Vec<Decision>,
    pub deadlines: Vec<Deadline>,
}

/// label / value pair of the "Meeting Information" block
#[derive(Debug,Clone,PartialEq)]
pub struct InfoRow {
    pub label: &'static str,
    pub value: String,
}

impl MeetingNotesTemplate {
    /// Date & Time, Type and Location always; Participants and Tags only when
    /// the lists are non-empty. Blank values read "Not specified".
    pub fn info_rows(&self) -> Vec<InfoRow> {
        let mut rows = vec![
            InfoRow::new("Date & Time", &self.date),
            InfoRow::new("Type", &self.meeting_type),
            InfoRow::new("Location", &self.location),
        ];

        if !self.participants.is_empty() {
            rows.push(InfoRow::new("Participants", &self.participants.join(", ")));
        }

        if !self.tags.is_empty() {
            rows.push(InfoRow::new("Tags", &self.tags.join(", ")));
        }

        rows
    }

    /// non-blank summary lines, trimmed
    pub fn summary_paragraphs(&self) -> Vec<String> {
        self.summary
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl InfoRow {
    fn new(label: &'static str, value: &str) -> Self {
        let value = if value.trim().is_empty() { NOT_SPECIFIED.to_string() } else { value.to_string() };
        InfoRow { label, value }
    }
}

/// Normalizes validated data into the template.
///
/// Participants are the manual list as given, followed by every extracted
/// name that is not already present. Names are compared trimmed and
/// case-insensitively so "alice" from the transcript does not duplicate a
/// manually entered "Alice".
pub fn build_template(data: ValidatedSummary) -> MeetingNotesTemplate {
    let ValidatedSummary {
        meeting_title,
        meeting_date,
        meeting_type,
        participants,
        location,
        tags,
        summary,
        action_items,
        decisions,
        deadlines,
        extracted_participants,
    } = data;

    MeetingNotesTemplate {
        title: meeting_title,
        date: format_date(meeting_date.as_deref()),
        meeting_type: meeting_type_label(meeting_type.as_deref()),
        participants: merge_participants(participants, extracted_participants),
        location: location.unwrap_or_else(|| NOT_SPECIFIED.to_string()),
        tags,
        summary,
        action_items,
        decisions,
        deadlines,
    }
}

fn merge_participants(manual: Vec<String>, extracted: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = manual.iter().map(|name| participant_key(name)).collect();
    let mut merged = manual;

    for name in extracted {
        let key = participant_key(&name);
        if !seen.contains(&key) {
            seen.push(key);
            merged.push(name);
        }
    }

    merged
}

fn participant_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::validate_summary_data;
    use serde_json::json;

    fn template(raw: serde_json::Value) -> MeetingNotesTemplate {
        build_template(validate_summary_data(&raw).unwrap())
    }

    #[test]
    fn manual_participants_come_first_without_duplicates() {
        let notes = template(json!({
            "summary": "x",
            "participants": ["Alice"],
            "extractedParticipants": ["Alice", "Bob"],
        }));
        assert_eq!(notes.participants, vec!["Alice", "Bob"]);
    }

    #[test]
    fn participant_matching_ignores_case_and_padding() {
        let notes = template(json!({
            "summary": "x",
            "participants": ["Alice", "Dana"],
            "extractedParticipants": ["alice ", "Carol", "DANA", "carol"],
        }));
        assert_eq!(notes.participants, vec!["Alice", "Dana", "Carol"]);
    }

    #[test]
    fn fills_display_defaults() {
        let notes = template(json!({ "summary": "x" }));

        assert_eq!(notes.title, "Untitled Meeting");
        assert_eq!(notes.date, NOT_SPECIFIED);
        assert_eq!(notes.meeting_type, NOT_SPECIFIED);
        assert_eq!(notes.location, NOT_SPECIFIED);
    }

    #[test]
    fn formats_date_and_type() {
        let notes = template(json!({
            "summary": "x",
            "meetingDate": "2024-01-15T14:30:00Z",
            "meetingType": "project-review",
            "location": "Room 4",
        }));

        assert_eq!(notes.date, "January 15, 2024 at 02:30 PM");
        assert_eq!(notes.meeting_type, "Project Review");
        assert_eq!(notes.location, "Room 4");
    }

    #[test]
    fn info_rows_include_optional_lists_only_when_present() {
        let bare = template(json!({ "summary": "x" }));
        let labels: Vec<_> = bare.info_rows().iter().map(|row| row.label).collect();
        assert_eq!(labels, vec!["Date & Time", "Type", "Location"]);

        let full = template(json!({ "summary": "x", "participants": ["A", "B"], "tags": ["q3"] }));
        let rows = full.info_rows();
        assert_eq!(rows[3], InfoRow { label: "Participants", value: "A, B".into() });
        assert_eq!(rows[4], InfoRow { label: "Tags", value: "q3".into() });
    }

    #[test]
    fn summary_paragraphs_skip_blank_lines() {
        let notes = template(json!({ "summary": "First point\n\n   \n  Second point  \r\nThird" }));
        assert_eq!(notes.summary_paragraphs(), vec!["First point", "Second point", "Third"]);
    }
}
