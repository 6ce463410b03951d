
use crate::{
    traits::TextMeasurer,
    types::{
        sanitize_text,
        Error,
        StandardFont
    }
};

/// RGB fill colour, components in `0.0..=1.0`
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Color(pub f32, pub f32, pub f32);

impl Color {
    pub const BLACK: Color = Color(0.0, 0.0, 0.0);
}

/// block level container of already wrapped lines, handed to `Writer::write()`
/// ```
/// use summerease::types::{Color, StandardFont, TextBlock};
///
/// let block = TextBlock::new()
///     .with_font_size(13.0)
///     .and_font(StandardFont::TimesBold)
///     .and_color(Color(0.3, 0.3, 0.3))
///     .and_indent(20.0);
/// assert_eq!(block.line_height(), 16.0);
/// ```
#[derive(Debug,Clone,PartialEq)]
pub struct TextBlock {
    pub lines: Vec<String>,
    pub font: StandardFont,
    pub font_size: f32,
    pub color: Color,
    pub indent: f32,
    /// vertical advance per line on top of `font_size`
    pub leading: f32,
}

impl TextBlock {
    /// default settings:
    /// - Font size: 11.0
    /// - Font: Times-Roman
    /// - Colour: black
    /// - Indentation: 0.0
    /// - Leading: 3.0
    pub fn new() -> Self {
        TextBlock::default()
    }

    /// builder function setting font size
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// builder function setting the face
    pub fn and_font(mut self, font: StandardFont) -> Self {
        self.font = font;
        self
    }

    /// builder function setting the fill colour
    pub fn and_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// builder function setting block indentation
    pub fn and_indent(mut self, indent: f32) -> Self {
        self.indent = indent;
        self
    }

    /// builder function setting the extra space between lines
    pub fn and_leading(mut self, leading: f32) -> Self {
        self.leading = leading;
        self
    }

    /// wraps `text` into the block's lines against `max_width`
    pub fn wrapped(mut self, text: &str, max_width: f32) -> Result<Self, Error> {
        self.lines = wrap_text(text, max_width, &self.font, self.font_size)?;
        Ok(self)
    }

    pub fn line_height(&self) -> f32 {
        self.font_size + self.leading
    }

    /// vertical space the block consumes once written
    pub fn height(&self) -> f32 {
        self.lines.len() as f32 * self.line_height()
    }
}

impl Default for TextBlock {
    fn default() -> Self {
        TextBlock {
            lines: Vec::new(),
            font: StandardFont::TimesRoman,
            font_size: 11.0,
            color: Color::BLACK,
            indent: 0.0,
            leading: 3.0,
        }
    }
}

/// Greedy word wrap.
///
/// Words are split on any whitespace and packed onto the current line while
/// the measured width of `line + " " + word` stays within `max_width`. Words
/// are never hyphenated: a word wider than `max_width` sits alone on its own
/// line. Always returns at least one line, which is empty for blank input.
pub fn wrap_text<M: TextMeasurer + ?Sized>(text: &str, max_width: f32, measurer: &M, font_size: f32) -> Result<Vec<String>, Error> {
    let sanitized = sanitize_text(text);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in sanitized.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate = format!("{current} {word}");

        if measurer.text_width(&candidate, font_size)? > max_width {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }

    // single over-wide words still have to be measurable
    if lines.is_empty() && !current.is_empty() {
        measurer.text_width(&current, font_size)?;
    }

    lines.push(current);

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::FixedWidth;
    use proptest::prelude::*;

    // FixedWidth at size 10 makes every glyph 5 units wide

    #[test]
    fn packs_words_greedily() {
        // "one two" = 35, "one two three" = 65
        let lines = wrap_text("one two three", 40.0, &FixedWidth, 10.0).unwrap();
        assert_eq!(lines, vec!["one two", "three"]);
    }

    #[test]
    fn exact_fit_stays_on_the_line() {
        let lines = wrap_text("one two", 35.0, &FixedWidth, 10.0).unwrap();
        assert_eq!(lines, vec!["one two"]);
    }

    #[test]
    fn over_wide_word_gets_its_own_line() {
        let lines = wrap_text("a extraordinarily b", 20.0, &FixedWidth, 10.0).unwrap();
        assert_eq!(lines, vec!["a", "extraordinarily", "b"]);
    }

    #[test]
    fn degenerate_input_yields_one_empty_line() {
        assert_eq!(wrap_text("", 100.0, &FixedWidth, 10.0).unwrap(), vec![String::new()]);
        assert_eq!(wrap_text(" \t\n ", 100.0, &FixedWidth, 10.0).unwrap(), vec![String::new()]);
        assert_eq!(wrap_text("\x07", 100.0, &FixedWidth, 10.0).unwrap(), vec![String::new()]);
    }

    #[test]
    fn collapses_runs_of_whitespace() {
        let lines = wrap_text("  one\t\ttwo \n three ", 1000.0, &FixedWidth, 10.0).unwrap();
        assert_eq!(lines, vec!["one two three"]);
    }

    #[test]
    fn measurement_failures_propagate() {
        assert!(matches!(
            wrap_text("ok caf\u{e9}", 1000.0, &FixedWidth, 10.0),
            Err(Error::Measurement { ch: '\u{e9}', .. })
        ));
        assert!(wrap_text("\u{e9}", 1000.0, &FixedWidth, 10.0).is_err());
    }

    #[test]
    fn works_with_real_font_metrics() {
        let font = StandardFont::TimesRoman;
        let text = "The team agreed to ship the quarterly report after legal review and a final pass on the numbers";
        let lines = wrap_text(text, 200.0, &font, 11.0).unwrap();
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(font.text_width(line, 11.0).unwrap() <= 200.0);
        }
    }

    #[test]
    fn block_height_counts_lines() {
        let block = TextBlock::new().with_font_size(10.0).and_font(StandardFont::TimesRoman);
        let block = block.wrapped("one two three", 50.0).unwrap();
        assert_eq!(block.height(), block.lines.len() as f32 * 13.0);
    }

    proptest! {
        #[test]
        fn lines_fit_unless_single_word(words in proptest::collection::vec("[a-z]{1,12}", 0..40), width in 20.0f32..200.0) {
            let text = words.join(" ");
            let lines = wrap_text(&text, width, &FixedWidth, 10.0).unwrap();

            prop_assert!(!lines.is_empty());
            let joined = lines.join(" ");
            prop_assert_eq!(joined.trim(), text.as_str());

            for line in &lines {
                if line.contains(' ') {
                    prop_assert!(FixedWidth.text_width(line, 10.0).unwrap() <= width);
                }
            }
        }
    }
}
