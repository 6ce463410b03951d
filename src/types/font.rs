use crate::traits::TextMeasurer;
use crate::types::Error;

/// Times-Roman advance widths for 0x20..=0x7E (WinAnsiEncoding), 1/1000 em
const TIMES_ROMAN: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278, // ' '..'/'
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444, // '0'..'?'
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722, // '@'..'O'
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500, // 'P'..'_'
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500, // '`'..'o'
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,      // 'p'..'~'
];

/// Times-Bold advance widths for 0x20..=0x7E (WinAnsiEncoding), 1/1000 em
const TIMES_BOLD: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];

/// Times-Roman advance widths for 0x80..=0xFF (WinAnsiEncoding), 1/1000 em;
/// the five codes cp1252 leaves unassigned are 0 and never looked up
const TIMES_ROMAN_HIGH: [u16; 128] = [
    500, 0, 333, 500, 444, 1000, 500, 500, 333, 1000, 556, 333, 889, 0, 611, 0,       // 0x80..0x8F
    0, 333, 333, 444, 444, 350, 500, 1000, 333, 980, 389, 333, 722, 0, 444, 722,      // 0x90..0x9F
    250, 333, 500, 500, 500, 500, 200, 500, 333, 760, 276, 500, 564, 333, 760, 333,   // 0xA0..0xAF
    400, 564, 300, 300, 333, 500, 453, 250, 333, 300, 310, 500, 750, 750, 750, 444,   // 0xB0..0xBF
    722, 722, 722, 722, 722, 722, 889, 667, 611, 611, 611, 611, 333, 333, 333, 333,   // 0xC0..0xCF
    722, 722, 722, 722, 722, 722, 722, 564, 722, 722, 722, 722, 722, 722, 556, 500,   // 0xD0..0xDF
    444, 444, 444, 444, 444, 444, 667, 444, 444, 444, 444, 444, 278, 278, 278, 278,   // 0xE0..0xEF
    500, 500, 500, 500, 500, 500, 500, 564, 500, 500, 500, 500, 500, 500, 500, 500,   // 0xF0..0xFF
];

/// Times-Bold advance widths for 0x80..=0xFF (WinAnsiEncoding), 1/1000 em
const TIMES_BOLD_HIGH: [u16; 128] = [
    500, 0, 333, 500, 500, 1000, 500, 500, 333, 1000, 556, 333, 1000, 0, 667, 0,
    0, 333, 333, 500, 500, 350, 500, 1000, 333, 1000, 389, 333, 722, 0, 444, 722,
    250, 333, 500, 500, 500, 500, 220, 500, 333, 747, 300, 500, 570, 333, 747, 333,
    400, 570, 300, 300, 333, 556, 540, 250, 333, 300, 330, 500, 750, 750, 750, 500,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 389, 389, 389, 389,
    722, 722, 778, 778, 778, 778, 778, 570, 778, 722, 722, 722, 722, 722, 611, 556,
    500, 500, 500, 500, 500, 500, 722, 444, 444, 444, 444, 444, 278, 278, 278, 278,
    500, 556, 500, 500, 500, 500, 500, 570, 500, 556, 556, 556, 556, 500, 556, 500,
];

/// The two standard Type1 faces the exporter draws with. Both are built into
/// every PDF viewer, so nothing has to be embedded beyond the font dictionary.
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash)]
pub enum StandardFont {
    TimesRoman,
    TimesBold,
}

impl StandardFont {
    /// PostScript base font name
    pub fn base_name(&self) -> &'static [u8] {
        match self {
            StandardFont::TimesRoman => b"Times-Roman",
            StandardFont::TimesBold => b"Times-Bold",
        }
    }

    /// encodes `text` as WinAnsiEncoding bytes for a content stream
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, Error> {
        text.chars()
            .map(|ch| win_ansi_code(ch).ok_or_else(|| Error::Measurement { ch, font: self.font_name() }))
            .collect()
    }
}

impl TextMeasurer for StandardFont {
    fn font_name(&self) -> &'static str {
        match self {
            StandardFont::TimesRoman => "Times-Roman",
            StandardFont::TimesBold => "Times-Bold",
        }
    }

    fn glyph_width(&self, ch: char) -> Option<u16> {
        let code = win_ansi_code(ch)?;

        let (low, high) = match self {
            StandardFont::TimesRoman => (&TIMES_ROMAN, &TIMES_ROMAN_HIGH),
            StandardFont::TimesBold => (&TIMES_BOLD, &TIMES_BOLD_HIGH),
        };

        match code {
            0x20..=0x7E => low.get((code - 0x20) as usize).copied(),
            0x80..=0xFF => high.get((code - 0x80) as usize).copied(),
            _ => None,
        }
    }
}

/// maps a char onto its WinAnsiEncoding (cp1252) code, `None` when unmapped
pub fn win_ansi_code(ch: char) -> Option<u8> {
    let code = match ch {
        ' '..='~' => ch as u8,
        '\u{A0}'..='\u{FF}' => ch as u32 as u8,
        '\u{20AC}' => 0x80,
        '\u{201A}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201E}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02C6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8A,
        '\u{2039}' => 0x8B,
        '\u{0152}' => 0x8C,
        '\u{017D}' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{02DC}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9A,
        '\u{203A}' => 0x9B,
        '\u{0153}' => 0x9C,
        '\u{017E}' => 0x9E,
        '\u{0178}' => 0x9F,
        _ => return None,
    };

    Some(code)
}
