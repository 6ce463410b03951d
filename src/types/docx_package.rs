//! OOXML packaging for the Word export.
//!
//! A `.docx` file is a zip archive holding the document body plus the
//! content type map, relationship parts, core properties and style sheet
//! every consumer expects to find next to it.

use std::io::{Cursor, Write};

use chrono::{SecondsFormat, Utc};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::types::{DocumentMetadata, Error};

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/><Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/></Types>"#;

const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/></Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#;

/// Normal body text plus the Title and Heading1 paragraph styles
const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:eastAsia="Calibri" w:cs="Calibri"/><w:sz w:val="22"/><w:szCs w:val="22"/></w:rPr></w:rPrDefault><w:pPrDefault><w:pPr><w:spacing w:after="0" w:line="276" w:lineRule="auto"/></w:pPr></w:pPrDefault></w:docDefaults><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style><w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:rPr><w:sz w:val="56"/><w:szCs w:val="56"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:keepNext/><w:outlineLvl w:val="0"/></w:pPr><w:rPr><w:b/><w:bCs/><w:color w:val="2E74B5"/><w:sz w:val="32"/><w:szCs w:val="32"/></w:rPr></w:style></w:styles>"#;

/// Writes the parts of one `.docx` into an in-memory zip archive
pub struct DocxPackage<'a> {
    title: &'a str,
    metadata: &'a DocumentMetadata,
}

impl<'a> DocxPackage<'a> {
    pub fn new(title: &'a str, metadata: &'a DocumentMetadata) -> Self {
        DocxPackage { title, metadata }
    }

    /// packages `document_xml` as `word/document.xml` and returns the archive
    pub fn write(&self, document_xml: &str) -> Result<Vec<u8>, Error> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

        write_file(&mut zip, "[Content_Types].xml", CONTENT_TYPES_XML)?;
        write_file(&mut zip, "_rels/.rels", ROOT_RELS_XML)?;
        write_file(&mut zip, "docProps/core.xml", &self.core_xml())?;
        write_file(&mut zip, "word/document.xml", document_xml)?;
        write_file(&mut zip, "word/styles.xml", STYLES_XML)?;
        write_file(&mut zip, "word/_rels/document.xml.rels", DOCUMENT_RELS_XML)?;

        let bytes = zip.finish()?.into_inner();
        if bytes.is_empty() {
            return Err(Error::ExportGeneration("empty Word document".to_string()));
        }

        Ok(bytes)
    }

    /// title, creator and timestamps; `lastModifiedBy` carries the creator app
    pub fn core_xml(&self) -> String {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let mut xml = String::new();

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);
        xml.push_str(&format!("<dc:title>{}</dc:title>", escape_xml(self.title)));
        xml.push_str(&format!("<dc:creator>{}</dc:creator>", escape_xml(&self.metadata.author)));
        xml.push_str(&format!("<cp:lastModifiedBy>{}</cp:lastModifiedBy>", escape_xml(&self.metadata.creator)));
        xml.push_str(&format!(r#"<dcterms:created xsi:type="dcterms:W3CDTF">{now}</dcterms:created>"#));
        xml.push_str(&format!(r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{now}</dcterms:modified>"#));
        xml.push_str("</cp:coreProperties>");

        xml
    }
}

fn write_file(zip: &mut ZipWriter<Cursor<Vec<u8>>>, path: &str, content: &str) -> Result<(), Error> {
    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(path, options)?;
    zip.write_all(content.as_bytes())?;

    Ok(())
}

/// escapes markup characters and drops every char XML 1.0 cannot carry at all
pub(crate) fn escape_xml(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());

    for ch in s.chars().filter(|ch| is_xml_char(*ch)) {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }

    escaped
}

/// the `Char` production of XML 1.0
fn is_xml_char(ch: char) -> bool {
    matches!(ch,
        '\u{9}' | '\u{A}' | '\u{D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}
