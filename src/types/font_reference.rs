use pdf_writer::{ Name, Ref };

use crate::types::StandardFont;

/// a font dictionary declared in the document and the resource name pages use for it
#[derive(Debug,Clone,Copy)]
pub struct FontReference {
    pub id: Ref,
    pub label: Name<'static>,
    pub font: StandardFont,
}

/// regular and bold faces of one family
#[derive(Debug,Clone,Copy)]
pub struct FontSet {
    pub regular: FontReference,
    pub bold: FontReference,
}

impl FontSet {
    /// Times-Roman as `/F1`, Times-Bold as `/F2`
    pub fn times(regular_id: Ref, bold_id: Ref) -> Self {
        FontSet {
            regular: FontReference { id: regular_id, label: Name(b"F1"), font: StandardFont::TimesRoman },
            bold: FontReference { id: bold_id, label: Name(b"F2"), font: StandardFont::TimesBold },
        }
    }

    /// the reference drawing `font`, falls back to the regular face
    pub fn get(&self, font: StandardFont) -> &FontReference {
        if self.bold.font == font { &self.bold } else { &self.regular }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FontReference> {
        [&self.regular, &self.bold].into_iter()
    }
}
