use pdf_writer::{ Content, Ref };

/// container for pdf_writer page references
pub struct Page {
    pub page_id: Ref,
    pub content: PageContent,
    /// lines of text drawn onto this page so far
    pub line_count: usize,
}

/// each page gets a single `Content` object
pub struct PageContent {
    pub content_id: Ref,
    pub content: Content
}

impl Page {
    pub fn new(page_id: Ref, content_id: Ref) -> Self {
        Page {
            page_id,
            content: PageContent {
                content_id,
                content: Content::new(),
            },
            line_count: 0,
        }
    }
}
