use crate::types::Error;

/// Text measurement capability used by line wrapping.
///
/// Implementors provide glyph advance widths in thousandths of an em, the unit
/// used by AFM metric files. The width of a run at a given size is then
/// `sum(glyph widths) / 1000 * font_size`.
pub trait TextMeasurer {
    /// name reported in measurement errors
    fn font_name(&self) -> &'static str;

    /// advance width of `ch` in 1/1000 em, `None` when the font cannot encode it
    fn glyph_width(&self, ch: char) -> Option<u16>;

    /// width of `text` at `font_size`; fails on the first unmeasurable glyph
    fn text_width(&self, text: &str, font_size: f32) -> Result<f32, Error> {
        let mut total: u32 = 0;

        for ch in text.chars() {
            match self.glyph_width(ch) {
                Some(width) => total += width as u32,
                None => return Err(Error::Measurement { ch, font: self.font_name() }),
            }
        }

        Ok(total as f32 / 1000.0 * font_size)
    }
}
