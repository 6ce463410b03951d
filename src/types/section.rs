//! The ordered section script both renderers walk.
//!
//! PDF and Word output only differ in how a section is drawn, never in which
//! sections appear, their order, item numbering or which details an item
//! carries. Those decisions live here.

use crate::types::{InfoRow, MeetingNotesTemplate, NOT_SPECIFIED};

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum ItemKind {
    ActionItems,
    Decisions,
    Deadlines,
}

impl ItemKind {
    pub fn heading(&self) -> &'static str {
        match self {
            ItemKind::ActionItems => "Action Items",
            ItemKind::Decisions => "Key Decisions",
            ItemKind::Deadlines => "Deadlines",
        }
    }
}

/// one labelled detail of a list item, e.g. `Due: Friday`
#[derive(Debug,Clone,PartialEq)]
pub struct Detail {
    pub label: &'static str,
    pub value: String,
}

impl Detail {
    fn new(label: &'static str, value: &str) -> Self {
        Detail { label, value: value.to_string() }
    }
}

impl std::fmt::Display for Detail {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// numbered entry of an item section
#[derive(Debug,Clone,PartialEq)]
pub struct ListItem {
    /// `"{n}. {text}"`, numbering starts at 1
    pub lead: String,
    pub details: Vec<Detail>,
}

impl ListItem {
    /// details joined with `separator`, `None` when the item has none
    pub fn details_joined(&self, separator: &str) -> Option<String> {
        if self.details.is_empty() {
            return None;
        }

        Some(self.details
            .iter()
            .map(Detail::to_string)
            .collect::<Vec<String>>()
            .join(separator))
    }
}

#[derive(Debug,Clone,PartialEq)]
pub enum Section {
    Information(Vec<InfoRow>),
    Summary(Vec<String>),
    Items { kind: ItemKind, items: Vec<ListItem> },
}

impl Section {
    pub fn heading(&self) -> &'static str {
        match self {
            Section::Information(_) => "Meeting Information",
            Section::Summary(_) => "Summary",
            Section::Items { kind, .. } => kind.heading(),
        }
    }
}

impl MeetingNotesTemplate {
    /// Meeting Information, Summary, then Action Items, Key Decisions and
    /// Deadlines, each of the last three only when it has at least one item.
    pub fn sections(&self) -> Vec<Section> {
        let mut sections = vec![
            Section::Information(self.info_rows()),
            Section::Summary(self.summary_paragraphs()),
        ];

        let action_items = self.action_items.iter().map(|item| {
            let mut details = Vec::new();
            if let Some(assignee) = &item.assignee {
                details.push(Detail::new("Assignee", assignee));
            }
            if let Some(due) = &item.due_date {
                details.push(Detail::new("Due", due));
            }
            (item.task.as_str(), details)
        });
        push_items(&mut sections, ItemKind::ActionItems, action_items);

        let decisions = self.decisions.iter().map(|item| {
            let details: Vec<Detail> = item.context
                .iter()
                .map(|context| Detail::new("Context", context))
                .collect();
            (item.decision.as_str(), details)
        });
        push_items(&mut sections, ItemKind::Decisions, decisions);

        let deadlines = self.deadlines.iter().map(|item| {
            let mut details = vec![Detail::new("Date", item.date.as_deref().unwrap_or(NOT_SPECIFIED))];
            if let Some(owner) = &item.owner {
                details.push(Detail::new("Owner", owner));
            }
            (item.item.as_str(), details)
        });
        push_items(&mut sections, ItemKind::Deadlines, deadlines);

        sections
    }
}

fn push_items<'a>(sections: &mut Vec<Section>, kind: ItemKind, entries: impl Iterator<Item = (&'a str, Vec<Detail>)>) {
    let items: Vec<ListItem> = entries
        .enumerate()
        .map(|(index, (text, details))| ListItem {
            lead: format!("{}. {}", index + 1, text),
            details,
        })
        .collect();

    if !items.is_empty() {
        sections.push(Section::Items { kind, items });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{build_template, validate_summary_data};
    use serde_json::json;

    fn sections(raw: serde_json::Value) -> Vec<Section> {
        build_template(validate_summary_data(&raw).unwrap()).sections()
    }

    fn headings(sections: &[Section]) -> Vec<&'static str> {
        sections.iter().map(Section::heading).collect()
    }

    #[test]
    fn empty_item_sections_are_omitted() {
        let script = sections(json!({ "summary": "Only a summary" }));
        assert_eq!(headings(&script), vec!["Meeting Information", "Summary"]);
    }

    #[test]
    fn sections_keep_a_fixed_order() {
        let script = sections(json!({
            "summary": "x",
            "deadlines": [{ "item": "Launch", "date": "May 1" }],
            "actionItems": [{ "task": "Write plan" }],
        }));
        assert_eq!(headings(&script), vec!["Meeting Information", "Summary", "Action Items", "Deadlines"]);
    }

    #[test]
    fn items_are_numbered_with_details() {
        let script = sections(json!({
            "summary": "x",
            "actionItems": [
                { "task": "Write plan", "assignee": "Alice", "dueDate": "Friday" },
                { "task": "Review", "dueDate": "Monday" },
                { "task": "Celebrate" },
            ],
        }));

        let Section::Items { kind, items } = &script[2] else { panic!("expected items") };
        assert_eq!(*kind, ItemKind::ActionItems);
        assert_eq!(items[0].lead, "1. Write plan");
        assert_eq!(items[0].details_joined(" | ").as_deref(), Some("Assignee: Alice | Due: Friday"));
        assert_eq!(items[1].details_joined(", ").as_deref(), Some("Due: Monday"));
        assert_eq!(items[2].lead, "3. Celebrate");
        assert_eq!(items[2].details_joined(" | "), None);
    }

    #[test]
    fn decisions_and_deadlines_details() {
        let script = sections(json!({
            "summary": "x",
            "decisions": [{ "decision": "Ship v2", "context": "after QA" }, { "decision": "Hire" }],
            "deadlines": [{ "item": "Launch", "owner": "Bo" }],
        }));

        let Section::Items { items: decisions, .. } = &script[2] else { panic!("expected decisions") };
        assert_eq!(decisions[0].details_joined(" | ").as_deref(), Some("Context: after QA"));
        assert!(decisions[1].details.is_empty());

        let Section::Items { items: deadlines, .. } = &script[3] else { panic!("expected deadlines") };
        assert_eq!(deadlines[0].lead, "1. Launch");
        assert_eq!(deadlines[0].details_joined(" | ").as_deref(), Some("Date: Not specified | Owner: Bo"));
    }
}
