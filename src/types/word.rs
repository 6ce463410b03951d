//! Word export: a flat block model of the meeting notes and its
//! WordprocessingML serialization.

use serde_json::Value;

use crate::types::{
    build_template,
    docx_package::escape_xml,
    format::is_stripped,
    sanitize_text,
    validate_summary_data,
    DocumentMetadata,
    DocxPackage,
    Error,
    InfoRow,
    MeetingNotesTemplate,
    Section,
};

/// spacing values are in twentieths of a point
#[derive(Debug,Clone,Copy,Default,PartialEq,Eq)]
pub struct Spacing {
    pub before: u32,
    pub after: u32,
}

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum ParagraphStyle {
    Title,
    Heading1,
}

impl ParagraphStyle {
    /// style id as declared in styles.xml
    pub fn style_id(&self) -> &'static str {
        match self {
            ParagraphStyle::Title => "Title",
            ParagraphStyle::Heading1 => "Heading1",
        }
    }
}

#[derive(Debug,Clone,PartialEq)]
pub struct Run {
    pub text: String,
    pub bold: bool,
}

impl Run {
    pub fn plain(text: &str) -> Self {
        Run { text: text.to_string(), bold: false }
    }

    pub fn bold(text: &str) -> Self {
        Run { text: text.to_string(), bold: true }
    }
}

#[derive(Debug,Clone,PartialEq)]
pub struct Paragraph {
    pub style: Option<ParagraphStyle>,
    pub centered: bool,
    pub spacing: Spacing,
    pub runs: Vec<Run>,
}

impl Paragraph {
    fn body(runs: Vec<Run>) -> Self {
        Paragraph {
            style: None,
            centered: false,
            spacing: Spacing { before: 0, after: 100 },
            runs,
        }
    }

    fn heading(text: &str, before: u32) -> Self {
        Paragraph {
            style: Some(ParagraphStyle::Heading1),
            centered: false,
            spacing: Spacing { before, after: 200 },
            runs: vec![Run::plain(text)],
        }
    }

    /// concatenated run text
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// two-column label / value table, 30% / 70% of the text width
#[derive(Debug,Clone,PartialEq)]
pub struct InfoTable {
    pub rows: Vec<InfoRow>,
}

#[derive(Debug,Clone,PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    Table(InfoTable),
}

/// The Word rendition of one set of meeting notes. Building it does no I/O;
/// `to_bytes()` packages it as a `.docx` file.
#[derive(Debug,Clone,PartialEq)]
pub struct WordDocument {
    pub title: String,
    pub metadata: DocumentMetadata,
    pub blocks: Vec<Block>,
}

/// A4 text width with one inch margins, in twips
const TEXT_WIDTH: u32 = 9026;
const LABEL_COLUMN: u32 = TEXT_WIDTH * 3 / 10;

impl WordDocument {
    /// Title paragraph, then every section of the script as a Heading1
    /// followed by its body: the info table, one paragraph per summary line,
    /// or one paragraph per item with a bold lead and its details inline.
    pub fn from_template(template: &MeetingNotesTemplate, metadata: DocumentMetadata) -> Self {
        let mut blocks = vec![Block::Paragraph(Paragraph {
            style: Some(ParagraphStyle::Title),
            centered: true,
            spacing: Spacing { before: 0, after: 400 },
            runs: vec![Run::plain(&template.title)],
        })];

        for section in template.sections() {
            let before = if matches!(section, Section::Information(_)) { 200 } else { 400 };
            blocks.push(Block::Paragraph(Paragraph::heading(section.heading(), before)));

            match section {
                Section::Information(rows) => blocks.push(Block::Table(InfoTable { rows })),
                Section::Summary(paragraphs) => {
                    for paragraph in paragraphs {
                        blocks.push(Block::Paragraph(Paragraph::body(vec![Run::plain(&paragraph)])));
                    }
                },
                Section::Items { items, .. } => {
                    for item in items {
                        let mut runs = vec![Run::bold(&item.lead)];
                        if let Some(details) = item.details_joined(", ") {
                            runs.push(Run::plain(&format!(" ({details})")));
                        }
                        blocks.push(Block::Paragraph(Paragraph::body(runs)));
                    }
                }
            }
        }

        WordDocument {
            title: template.title.clone(),
            metadata,
            blocks,
        }
    }

    /// text of every Heading1 paragraph, in document order
    pub fn headings(&self) -> Vec<String> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Paragraph(paragraph) if paragraph.style == Some(ParagraphStyle::Heading1) => Some(paragraph.text()),
                _ => None,
            })
            .collect()
    }

    /// serializes `word/document.xml`
    pub fn to_document_xml(&self) -> String {
        let mut xml = String::new();

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#);
        xml.push_str("<w:body>");

        for block in &self.blocks {
            match block {
                Block::Paragraph(paragraph) => write_paragraph(&mut xml, paragraph),
                Block::Table(table) => write_table(&mut xml, table),
            }
        }

        xml.push_str("<w:sectPr>");
        xml.push_str(r#"<w:pgSz w:w="11906" w:h="16838"/>"#);
        xml.push_str(r#"<w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="708" w:footer="708" w:gutter="0"/>"#);
        xml.push_str("</w:sectPr>");
        xml.push_str("</w:body>");
        xml.push_str("</w:document>");

        xml
    }

    /// packages the document as `.docx` bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        let title = sanitize_text(&self.title);
        let bytes = DocxPackage::new(&title, &self.metadata).write(&self.to_document_xml())?;
        tracing::debug!(blocks = self.blocks.len(), bytes = bytes.len(), "packaged word document");
        Ok(bytes)
    }
}

fn write_paragraph(xml: &mut String, paragraph: &Paragraph) {
    xml.push_str("<w:p>");
    xml.push_str("<w:pPr>");

    if let Some(style) = paragraph.style {
        xml.push_str(&format!(r#"<w:pStyle w:val="{}"/>"#, style.style_id()));
    }

    xml.push_str(&format!(
        r#"<w:spacing w:before="{}" w:after="{}"/>"#,
        paragraph.spacing.before, paragraph.spacing.after
    ));

    if paragraph.centered {
        xml.push_str(r#"<w:jc w:val="center"/>"#);
    }

    xml.push_str("</w:pPr>");

    for run in &paragraph.runs {
        write_run(xml, run);
    }

    xml.push_str("</w:p>");
}

fn write_run(xml: &mut String, run: &Run) {
    let text = escape_xml(&strip_controls(&run.text));
    if text.is_empty() {
        return;
    }

    xml.push_str("<w:r>");

    if run.bold {
        xml.push_str("<w:rPr><w:b/></w:rPr>");
    }

    // Write text with xml:space="preserve" for leading/trailing spaces
    if text.starts_with(' ') || text.ends_with(' ') {
        xml.push_str(r#"<w:t xml:space="preserve">"#);
    } else {
        xml.push_str("<w:t>");
    }
    xml.push_str(&text);
    xml.push_str("</w:t>");

    xml.push_str("</w:r>");
}

fn write_table(xml: &mut String, table: &InfoTable) {
    xml.push_str("<w:tbl>");

    xml.push_str("<w:tblPr>");
    xml.push_str(r#"<w:tblW w:w="5000" w:type="pct"/>"#);
    xml.push_str("<w:tblBorders>");
    for edge in ["top", "left", "bottom", "right", "insideH", "insideV"] {
        xml.push_str(&format!(r#"<w:{edge} w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#));
    }
    xml.push_str("</w:tblBorders>");
    xml.push_str(r#"<w:tblLook w:val="04A0" w:firstRow="0" w:lastRow="0" w:firstColumn="1" w:lastColumn="0" w:noHBand="0" w:noVBand="1"/>"#);
    xml.push_str("</w:tblPr>");

    xml.push_str("<w:tblGrid>");
    xml.push_str(&format!(r#"<w:gridCol w:w="{}"/>"#, LABEL_COLUMN));
    xml.push_str(&format!(r#"<w:gridCol w:w="{}"/>"#, TEXT_WIDTH - LABEL_COLUMN));
    xml.push_str("</w:tblGrid>");

    for row in &table.rows {
        xml.push_str("<w:tr>");
        write_cell(xml, 1500, Run::bold(row.label));
        write_cell(xml, 3500, Run::plain(&row.value));
        xml.push_str("</w:tr>");
    }

    xml.push_str("</w:tbl>");
}

/// `width` in fiftieths of a percent
fn write_cell(xml: &mut String, width: u32, run: Run) {
    xml.push_str("<w:tc>");
    xml.push_str(&format!(r#"<w:tcPr><w:tcW w:w="{}" w:type="pct"/></w:tcPr>"#, width));
    // a cell must hold at least one paragraph
    write_paragraph(xml, &Paragraph {
        style: None,
        centered: false,
        spacing: Spacing::default(),
        runs: vec![run],
    });
    xml.push_str("</w:tc>");
}

/// like `sanitize_text` but keeps surrounding spaces
fn strip_controls(text: &str) -> String {
    if sanitize_text(text).is_empty() {
        return String::new();
    }

    text.chars().filter(|ch| !is_stripped(*ch)).collect()
}

/// validates a raw summary record and builds its Word rendition with the
/// default metadata; serialize it with `WordDocument::to_bytes()`
pub fn generate_word_document(raw: &Value) -> Result<WordDocument, Error> {
    let template = build_template(validate_summary_data(raw)?);
    Ok(WordDocument::from_template(&template, DocumentMetadata::default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(raw: Value) -> WordDocument {
        generate_word_document(&raw).unwrap()
    }

    #[test]
    fn starts_with_a_centred_title() {
        let doc = document(json!({ "meetingTitle": "Q3 planning", "summary": "x" }));

        let Block::Paragraph(title) = &doc.blocks[0] else { panic!("expected title paragraph") };
        assert_eq!(title.style, Some(ParagraphStyle::Title));
        assert!(title.centered);
        assert_eq!(title.text(), "Q3 planning");
    }

    #[test]
    fn summary_only_has_two_headings() {
        let doc = document(json!({ "summary": "First\n\nSecond" }));

        assert_eq!(doc.headings(), vec!["Meeting Information", "Summary"]);
        assert!(matches!(doc.blocks[2], Block::Table(_)));
        // title, heading, table, heading, two summary paragraphs
        assert_eq!(doc.blocks.len(), 6);
    }

    #[test]
    fn info_table_defaults_blank_values() {
        let doc = document(json!({ "summary": "x", "tags": ["ops"] }));

        let Block::Table(table) = &doc.blocks[2] else { panic!("expected table") };
        let values: Vec<(&str, &str)> = table.rows.iter().map(|row| (row.label, row.value.as_str())).collect();
        assert_eq!(values, vec![
            ("Date & Time", "Not specified"),
            ("Type", "Not specified"),
            ("Location", "Not specified"),
            ("Tags", "ops"),
        ]);
    }

    #[test]
    fn items_get_a_bold_lead_and_inline_details() {
        let doc = document(json!({
            "summary": "x",
            "actionItems": [{ "task": "Email client", "assignee": "Sam", "dueDate": "Tue" }],
            "decisions": [{ "decision": "Freeze scope" }],
        }));

        assert_eq!(doc.headings(), vec!["Meeting Information", "Summary", "Action Items", "Key Decisions"]);

        let items: Vec<&Paragraph> = doc.blocks.iter().filter_map(|block| match block {
            Block::Paragraph(p) if p.runs.first().map_or(false, |run| run.bold) => Some(p),
            _ => None,
        }).collect();

        assert_eq!(items[0].runs, vec![Run::bold("1. Email client"), Run::plain(" (Assignee: Sam, Due: Tue)")]);
        assert_eq!(items[1].runs, vec![Run::bold("1. Freeze scope")]);
    }

    #[test]
    fn document_xml_escapes_and_preserves_spaces() {
        let doc = document(json!({
            "meetingTitle": "R&D <sync>",
            "summary": "x",
            "actionItems": [{ "task": "Fix \"quotes\"", "dueDate": "Fri" }],
        }));
        let xml = doc.to_document_xml();

        assert!(xml.contains("R&amp;D &lt;sync&gt;"));
        assert!(xml.contains("Fix &quot;quotes&quot;"));
        assert!(xml.contains(r#"<w:t xml:space="preserve"> (Due: Fri)</w:t>"#));
        assert!(xml.contains(r#"<w:pStyle w:val="Title"/>"#));
        assert!(xml.contains(r#"<w:jc w:val="center"/>"#));
    }

    #[test]
    fn control_characters_never_reach_the_xml() {
        let doc = document(json!({ "meetingTitle": "Bell\u{7}Title", "summary": "a\u{1b}b" }));
        let xml = doc.to_document_xml();

        assert!(xml.contains("BellTitle"));
        assert!(xml.contains("<w:t>ab</w:t>"));
        assert!(!xml.contains('\u{7}'));
    }

    #[test]
    fn noncharacters_never_reach_the_xml() {
        let doc = document(json!({ "meetingTitle": "Retro\u{FFFF}", "summary": "bad\u{FFFE}char" }));
        let xml = doc.to_document_xml();

        assert!(xml.contains("<w:t>badchar</w:t>"));
        assert!(xml.contains("<w:t>Retro</w:t>"));
        assert!(!xml.contains('\u{FFFE}'));
        assert!(!xml.contains('\u{FFFF}'));
    }

    #[test]
    fn decisions_omitted_when_empty() {
        let doc = document(json!({ "summary": "x", "decisions": [] }));
        assert!(!doc.to_document_xml().contains("Key Decisions"));
    }
}
