use chrono::{Datelike, Timelike, Utc};
use pdf_writer::{ Date, Finish, Name, Pdf, Rect, Ref, TextStr };
use serde_json::Value;

use crate::types::{
    build_template,
    sanitize_text,
    validate_summary_data,
    Error,
    ExportConfig,
    FontSet,
    MeetingNotesTemplate,
    Section,
    Writer,
    UNTITLED_MEETING,
};

/// indentation of the detail line under a numbered item
const DETAIL_INDENT: f32 = 20.0;

/// anything shorter cannot be a complete PDF file
const MIN_PDF_LEN: usize = 100;

/// # PDF export of meeting notes
/// Lays a `MeetingNotesTemplate` out on A4 pages with the standard Times
/// faces and serializes it through pdf_writer.
/// ```
/// use summerease::types::{build_template, validate_summary_data, ExportConfig, PdfDoc};
///
/// let raw = serde_json::json!({ "meetingTitle": "Kickoff", "summary": "We agreed on scope." });
/// let template = build_template(validate_summary_data(&raw).unwrap());
/// let rendered = PdfDoc::new(ExportConfig::default()).render(&template).unwrap();
/// assert!(rendered.bytes.starts_with(b"%PDF"));
/// assert_eq!(rendered.page_count(), 1);
/// ```
#[derive(Debug,Clone,Default)]
pub struct PdfDoc {
    pub config: ExportConfig,
}

/// serialized document plus the layout bookkeeping that produced it
#[derive(Debug,Clone)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    /// lines drawn on each page, in page order
    pub lines_per_page: Vec<usize>,
}

impl RenderedPdf {
    pub fn page_count(&self) -> usize {
        self.lines_per_page.len()
    }
}

impl PdfDoc {
    pub fn new(config: ExportConfig) -> Self {
        PdfDoc { config }
    }

    /// Entry point: declares fonts, drives the `Writer` through the section
    /// script and finishes the file. The output is checked before it is
    /// returned; a file that fails the check is never handed out.
    pub fn render(&self, template: &MeetingNotesTemplate) -> Result<RenderedPdf, Error> {
        let mut pdf = Pdf::new();
        let mut alloc = Ref::new(1);

        let page_tree_id = alloc.bump();
        let catalog_id = alloc.bump();
        let info_id = alloc.bump();
        let fonts = FontSet::times(alloc.bump(), alloc.bump());

        for font_ref in fonts.iter() {
            pdf.type1_font(font_ref.id)
                .base_font(Name(font_ref.font.base_name()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        let mut write_head = Writer::new(alloc, fonts, self.config.page.clone())?;
        PdfDoc::render_template(&mut write_head, template)?;

        let (_, fonts, pages) = write_head.finish();
        let page_settings = &self.config.page;
        let page_ids: Vec<Ref> = pages.iter().map(|page| page.page_id).collect();
        let lines_per_page: Vec<usize> = pages.iter().map(|page| page.line_count).collect();

        for page in pages {
            let content_id = page.content.content_id;
            pdf.stream(content_id, &page.content.content.finish());

            let mut pdf_page = pdf.page(page.page_id);
            pdf_page.media_box(Rect::new(0.0, 0.0, page_settings.width, page_settings.height));
            pdf_page.parent(page_tree_id);
            pdf_page.contents(content_id);

            {
                let mut resources = pdf_page.resources();
                let mut font_dict = resources.fonts();
                for ref_obj in fonts.iter() {
                    font_dict.pair(ref_obj.label, ref_obj.id);
                }
            }

            pdf_page.finish();
        }

        // Write the root of the page tree.
        pdf.pages(page_tree_id)
            .kids(page_ids.iter().copied())
            .count(page_ids.len() as i32);

        // Write the document catalog.
        pdf.catalog(catalog_id).pages(page_tree_id);

        self.write_info(&mut pdf, info_id, template);

        let bytes = pdf.finish();
        validate_pdf_bytes(&bytes)?;

        tracing::debug!(pages = page_ids.len(), bytes = bytes.len(), "rendered pdf");

        Ok(RenderedPdf { bytes, lines_per_page })
    }

    /// Title, then every section of the script under its sub-heading
    fn render_template(write_head: &mut Writer, template: &MeetingNotesTemplate) -> Result<(), Error> {
        write_head.add_heading(&template.title)?;

        for section in template.sections() {
            write_head.add_sub_heading(section.heading())?;

            match section {
                Section::Information(rows) => {
                    for row in rows {
                        write_head.add_line(&format!("{}: {}", row.label, row.value), 0.0)?;
                    }
                },
                Section::Summary(paragraphs) => {
                    for paragraph in paragraphs {
                        write_head.add_line(&paragraph, 0.0)?;
                    }
                },
                Section::Items { items, .. } => {
                    for item in items {
                        write_head.add_line(&item.lead, 0.0)?;
                        if let Some(details) = item.details_joined(" | ") {
                            write_head.add_line(&details, DETAIL_INDENT)?;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    fn write_info(&self, pdf: &mut Pdf, info_id: Ref, template: &MeetingNotesTemplate) {
        let title = match sanitize_text(&template.title) {
            title if title.is_empty() => UNTITLED_MEETING.to_string(),
            title => title,
        };

        let now = Utc::now();
        let timestamp = Date::new(now.year() as u16)
            .month(now.month() as u8)
            .day(now.day() as u8)
            .hour(now.hour() as u8)
            .minute(now.minute() as u8)
            .second(now.second() as u8)
            .utc_offset_hour(0)
            .utc_offset_minute(0);

        let metadata = &self.config.metadata;
        pdf.document_info(info_id)
            .title(TextStr(&title))
            .author(TextStr(&metadata.author))
            .creator(TextStr(&metadata.creator))
            .producer(TextStr(&metadata.producer))
            .creation_date(timestamp)
            .modified_date(timestamp);
    }
}

/// rejects empty, undersized or mis-signed output
pub fn validate_pdf_bytes(bytes: &[u8]) -> Result<(), Error> {
    if bytes.is_empty() {
        return Err(Error::ExportGeneration("empty PDF bytes".to_string()));
    }

    if bytes.len() < MIN_PDF_LEN {
        return Err(Error::ExportGeneration(format!("PDF file is too small to be valid ({} bytes)", bytes.len())));
    }

    if !bytes.starts_with(b"%PDF") {
        return Err(Error::ExportGeneration("invalid PDF signature".to_string()));
    }

    Ok(())
}

/// validates a raw summary record and renders it with the default settings
pub fn generate_pdf(raw: &Value) -> Result<Vec<u8>, Error> {
    generate_pdf_with(raw, &ExportConfig::default())
}

pub fn generate_pdf_with(raw: &Value, config: &ExportConfig) -> Result<Vec<u8>, Error> {
    let template = build_template(validate_summary_data(raw)?);
    Ok(PdfDoc::new(config.clone()).render(&template)?.bytes)
}
