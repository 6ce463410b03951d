use pdf_writer::{ Ref, Str };

use crate::types::{
    sanitize_text,
    Color,
    Error,
    FontSet,
    Page,
    PageSettings,
    StandardFont,
    TextBlock
};

pub const HEADING_SIZE: f32 = 16.0;
pub const SUB_HEADING_SIZE: f32 = 13.0;
pub const BODY_SIZE: f32 = 11.0;

const HEADING_COLOR: Color = Color(0.2, 0.5, 0.3);
const SUB_HEADING_COLOR: Color = Color(0.3, 0.3, 0.3);

/// extra space below headings and sub-headings
const HEADING_SPACING: f32 = 10.0;
const SUB_HEADING_SPACING: f32 = 8.0;

/// a new page starts once the cursor drops below `margin + BREAK_ALLOWANCE`
const BREAK_ALLOWANCE: f32 = 50.0;

/// the rendering engine
/// contains
/// - page references
/// - ref allocator
/// - the font set pages draw with
/// - page geometry
/// - the vertical cursor
///
/// One `Writer` belongs to exactly one export. `y` is the baseline of the
/// next line and only moves down the page; it is never below the bottom
/// margin when a line is drawn because every line checks for a page break
/// first.
pub struct Writer {
    pub y: f32,
    alloc: Ref,
    pub current_page: usize,
    pub fonts: FontSet,
    pub pages: Vec<Page>,
    pub settings: PageSettings,
}

impl Writer {
    /// takes over the ref allocator and opens the first page; fails with
    /// `Error::InvalidInput` for a page that has no room between its margins
    pub fn new(alloc: Ref, fonts: FontSet, settings: PageSettings) -> Result<Self, Error> {
        settings.validate()?;

        let mut writer = Writer {
            y: settings.top(),
            alloc,
            current_page: 0,
            fonts,
            pages: Vec::with_capacity(1),
            settings,
        };

        writer.new_page();
        Ok(writer)
    }

    /// get a new reference for indirect object
    pub fn bump(&mut self) -> Ref {
        self.alloc.bump()
    }

    /// scrolls the writer down the page
    pub fn feed(&mut self, num: f32) {
        self.y -= num;
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn needs_page_break(&self) -> bool {
        self.y < self.settings.margin + BREAK_ALLOWANCE
    }

    /// appends a page, makes it current and moves the cursor to its top
    pub fn new_page(&mut self) {
        let page_id = self.bump();
        let content_id = self.bump();

        self.pages.push(Page::new(page_id, content_id));
        self.current_page = self.pages.len() - 1;
        self.y = self.settings.top();

        tracing::trace!(page = self.pages.len(), "started page");
    }

    /// bold, coloured document title; returns the height of the drawn lines
    pub fn add_heading(&mut self, text: &str) -> Result<f32, Error> {
        self.add_titled(text, HEADING_SIZE, HEADING_COLOR, HEADING_SPACING)
    }

    /// bold, grey section heading; returns the height of the drawn lines
    pub fn add_sub_heading(&mut self, text: &str) -> Result<f32, Error> {
        self.add_titled(text, SUB_HEADING_SIZE, SUB_HEADING_COLOR, SUB_HEADING_SPACING)
    }

    fn add_titled(&mut self, text: &str, size: f32, color: Color, spacing: f32) -> Result<f32, Error> {
        let sanitized = sanitize_text(text);
        if sanitized.is_empty() {
            return Ok(0.0);
        }

        let block = TextBlock::new()
            .with_font_size(size)
            .and_font(StandardFont::TimesBold)
            .and_color(color)
            .and_leading(5.0)
            .wrapped(&sanitized, self.settings.writeable_width())?;

        self.write(&block)?;
        self.feed(spacing);

        Ok(block.height())
    }

    /// body text at `margin + indent`, wrapped to the space left of the right
    /// margin; returns the height consumed, 0 for blank text
    pub fn add_line(&mut self, text: &str, indent: f32) -> Result<f32, Error> {
        let sanitized = sanitize_text(text);
        if sanitized.is_empty() {
            return Ok(0.0);
        }

        let block = TextBlock::new()
            .with_font_size(BODY_SIZE)
            .and_indent(indent)
            .wrapped(&sanitized, self.settings.writeable_width() - indent)?;

        self.write(&block)?;

        Ok(block.height())
    }

    /// does the heavy lifting of rendering the `TextBlock` to the current page
    ///
    /// The page-break check runs before every line, so a wrapped block may
    /// continue on the next page but never runs past the bottom margin.
    pub fn write(&mut self, text_block: &TextBlock) -> Result<(), Error> {
        // a page must exist by now
        debug_assert!(!self.pages.is_empty());

        let label = self.fonts.get(text_block.font).label;
        let x = self.settings.margin + text_block.indent;
        let Color(r, g, b) = text_block.color;

        for line in text_block.lines.iter() {
            if line.is_empty() {
                continue;
            }

            let encoded = text_block.font.encode(line)?;

            // a fresh page always takes at least one line
            if self.needs_page_break() && self.pages[self.current_page].line_count > 0 {
                self.new_page();
            }

            debug_assert!(self.y >= self.settings.margin);

            let page = &mut self.pages[self.current_page];
            let target = &mut page.content.content;

            target.set_fill_rgb(r, g, b);
            target.begin_text();
            target.set_font(label, text_block.font_size);
            target.next_line(x, self.y);
            target.show(Str(&encoded));
            target.end_text();

            page.line_count += 1;
            self.y -= text_block.line_height();
        }

        Ok(())
    }

    /// hands back the allocator and the finished pages
    pub fn finish(self) -> (Ref, FontSet, Vec<Page>) {
        (self.alloc, self.fonts, self.pages)
    }
}
