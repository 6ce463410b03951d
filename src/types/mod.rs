mod artifact;
mod config;
mod docx_package;
mod error;
mod font;
mod font_reference;
mod format;
mod page;
mod pdf_doc;
mod record;
mod section;
mod template;
mod text;
mod word;
mod writer;

pub use artifact::{ export_file_name, export_summary, ExportArtifact, ExportFormat };
pub use config::{ DocumentMetadata, ExportConfig, PageSettings };
pub use docx_package::DocxPackage;
pub use error::{ Error, Result };
pub use font::{ win_ansi_code, StandardFont };
pub use font_reference::{ FontReference, FontSet };
pub use format::{
    format_date,
    format_date_only,
    meeting_type_label,
    sanitize_text,
    NOT_SPECIFIED
};
pub use page::{ Page, PageContent };
pub use pdf_doc::{ generate_pdf, generate_pdf_with, validate_pdf_bytes, PdfDoc, RenderedPdf };
pub use record::{
    validate_summary_data,
    ActionItem,
    Deadline,
    Decision,
    ValidatedSummary,
    UNTITLED_MEETING
};
pub use section::{ Detail, ItemKind, ListItem, Section };
pub use template::{ build_template, InfoRow, MeetingNotesTemplate };
pub use text::{ wrap_text, Color, TextBlock };
pub use word::{
    generate_word_document,
    Block,
    InfoTable,
    Paragraph,
    ParagraphStyle,
    Run,
    Spacing,
    WordDocument
};
pub use writer::{ Writer, BODY_SIZE, HEADING_SIZE, SUB_HEADING_SIZE };
