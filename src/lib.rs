//! # Introduction
//!
//! SummerEase turns a summarized meeting record (the JSON produced by the summarizer: title,
//! date, participants, summary text, action items, decisions and deadlines) into a downloadable
//! document. Two formats are supported: a paginated PDF built on top of pdf_writer (Typst) and
//! a Word `.docx` package. Both renditions are driven by the same section script, so they always
//! show the same sections in the same order.
//!
//! Pipeline:
//! - validate the raw record (`types::validate_summary_data`)
//! - normalize it into a renderer-agnostic `types::MeetingNotesTemplate`
//! - render it with `types::PdfDoc` or `types::WordDocument`
//! - wrap the bytes in an `types::ExportArtifact` with content type and file name
//!
//! Feature Road Map:
//! - [X] Times Roman / Times Bold with AFM metrics
//! - [X] Greedy word wrap and automatic page breaks
//! - [X] Meeting information, summary, action item, decision and deadline sections
//! - [X] Word export with title, headings and information table
//! - [ ] Fonts beyond WinAnsi (embedded TrueType)
//! - [ ] Page numbers
//!
//! ## Links
//! PDF Writer:
//!
//! - <https://github.com/typst/pdf-writer>
//!
//! ## Who should use this crate?
//! **Use cases**
//! - Export endpoints of the meeting notes service
//! - Batch conversion of stored summaries through the `summerease-export` binary
//!
//! **Skip cases**
//! - Text outside the Windows-1252 character set in PDF output
//! - Rich formatting inside the summary text
//!
//! # Basic Usage
//! The main entry point is `export_summary()`, which validates the record, renders it and names
//! the result. Invalid records fail with `Error::InvalidInput` before anything is rendered.
//!
//! ### Simple export
//! ```
//! use summerease::types::{ExportConfig, ExportFormat};
//!
//! let record = serde_json::json!({
//!     "meetingTitle": "Sprint review",
//!     "summary": "Demoed the new importer.\nAgreed to cut the release on Friday.",
//!     "actionItems": [{ "task": "Tag the release", "assignee": "Ana" }]
//! });
//!
//! let artifact = summerease::export_summary(&record, "42", ExportFormat::Pdf, &ExportConfig::default()).unwrap();
//!
//! assert_eq!(artifact.file_name, "Sprint-review-42.pdf");
//! assert_eq!(artifact.content_type, "application/pdf");
//! assert!(artifact.bytes.starts_with(b"%PDF"));
//! ```
pub mod traits;
pub mod types;

pub use types::{
    export_summary,
    generate_pdf,
    generate_word_document,
    Error,
};
