use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde_json::Value;

use crate::types::{
    build_template,
    validate_summary_data,
    Error,
    ExportConfig,
    PdfDoc,
    WordDocument,
};

const DEFAULT_FILE_STEM: &str = "meeting-notes";

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum ExportFormat {
    Pdf,
    Word,
}

impl ExportFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Word => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        }
    }

    /// file extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Word => "docx",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "word" | "docx" => Ok(ExportFormat::Word),
            other => Err(Error::InvalidInput(format!("unsupported export format `{other}`"))),
        }
    }
}

/// a finished export, ready to be written or served
#[derive(Debug,Clone)]
pub struct ExportArtifact {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub file_name: String,
}

impl ExportArtifact {
    /// writes the bytes to `dir/file_name` and returns the full path
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, Error> {
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

/// `"{title}-{id}.{ext}"`, falling back to `meeting-notes` for a missing or
/// blank title; every character outside `[A-Za-z0-9.-]` becomes `-`
pub fn export_file_name(title: Option<&str>, id: &str, format: ExportFormat) -> String {
    let stem = title
        .filter(|title| !title.trim().is_empty())
        .unwrap_or(DEFAULT_FILE_STEM);

    format!("{}-{}.{}", stem, id, format.extension())
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() || ch == '.' || ch == '-' { ch } else { '-' })
        .collect()
}

/// Validates `raw`, renders it in `format` and names the result after the
/// record's title and `id`.
pub fn export_summary(raw: &Value, id: &str, format: ExportFormat, config: &ExportConfig) -> Result<ExportArtifact, Error> {
    let template = build_template(validate_summary_data(raw)?);

    tracing::debug!(id, format = format.extension(), "exporting summary");

    let bytes = match format {
        ExportFormat::Pdf => PdfDoc::new(config.clone()).render(&template)?.bytes,
        ExportFormat::Word => WordDocument::from_template(&template, config.metadata.clone()).to_bytes()?,
    };

    // the file name follows the title as entered, not the display default
    let title = raw.get("meetingTitle").and_then(Value::as_str);

    Ok(ExportArtifact {
        bytes,
        content_type: format.content_type(),
        file_name: export_file_name(title, id, format),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn file_names_replace_unsafe_characters() {
        assert_eq!(export_file_name(Some("Q3 Planning / Budget"), "42", ExportFormat::Pdf), "Q3-Planning---Budget-42.pdf");
        assert_eq!(export_file_name(Some("Réunion"), "a_b", ExportFormat::Word), "R-union-a-b.docx");
    }

    #[test]
    fn file_names_default_the_stem() {
        assert_eq!(export_file_name(None, "7", ExportFormat::Pdf), "meeting-notes-7.pdf");
        assert_eq!(export_file_name(Some("  "), "7", ExportFormat::Word), "meeting-notes-7.docx");
    }

    #[test]
    fn parses_format_names() {
        assert_eq!("PDF".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
        assert_eq!("word".parse::<ExportFormat>().unwrap(), ExportFormat::Word);
        assert_eq!("docx".parse::<ExportFormat>().unwrap(), ExportFormat::Word);
        assert!(matches!("odt".parse::<ExportFormat>(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn exports_carry_content_type_and_name() {
        let raw = json!({ "meetingTitle": "Daily standup", "summary": "All green." });
        let config = ExportConfig::default();

        let pdf = export_summary(&raw, "s1", ExportFormat::Pdf, &config).unwrap();
        assert_eq!(pdf.content_type, "application/pdf");
        assert_eq!(pdf.file_name, "Daily-standup-s1.pdf");
        assert!(pdf.bytes.starts_with(b"%PDF"));

        let word = export_summary(&raw, "s1", ExportFormat::Word, &config).unwrap();
        assert_eq!(word.content_type, ExportFormat::Word.content_type());
        assert_eq!(word.file_name, "Daily-standup-s1.docx");
        assert!(word.bytes.starts_with(b"PK"));
    }

    #[test]
    fn invalid_records_produce_no_artifact() {
        let result = export_summary(&json!({ "summary": "" }), "x", ExportFormat::Word, &ExportConfig::default());
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn writes_into_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let raw = json!({ "summary": "Notes" });

        let artifact = export_summary(&raw, "9", ExportFormat::Pdf, &ExportConfig::default()).unwrap();
        let path = artifact.write_to(dir.path()).unwrap();

        assert_eq!(path.file_name().unwrap(), "meeting-notes-9.pdf");
        assert_eq!(std::fs::read(&path).unwrap(), artifact.bytes);
    }
}
