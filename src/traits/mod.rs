mod text_measurer;

pub use text_measurer::TextMeasurer;

#[cfg(test)]
pub(crate) use text_measurer::tests::FixedWidth;
