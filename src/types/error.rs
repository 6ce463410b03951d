use core::fmt;
use derive_more::From;

/// Errors surfaced by the export pipeline.
///
/// `InvalidInput` is always raised before any rendering starts; the remaining
/// variants mean the document could not be produced and no partial artifact
/// was returned.
#[derive(Debug,From)]
pub enum Error {
    /// malformed or incomplete summary record
    InvalidInput(String),
    /// the renderer finished but produced empty, undersized or corrupt output
    ExportGeneration(String),
    /// a glyph the font cannot measure or encode
    Measurement { ch: char, font: &'static str },
   #[from]
    Io(std::io::Error),
   #[from]
    Zip(zip::result::ZipError),
   #[from]
    Json(serde_json::Error),
}

impl Error {
    /// `true` for errors caused by the caller's data rather than by the pipeline
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Zip(e) => Some(e),
            Error::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidInput(msg) => write!(f, "invalid summary data: {msg}"),
            Error::ExportGeneration(msg) => write!(f, "export generation failed: {msg}"),
            Error::Measurement { ch, font } => write!(f, "cannot measure {ch:?} (U+{:04X}) with {font}", *ch as u32),
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Zip(e) => write!(f, "zip error: {e}"),
            Error::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_is_a_client_error() {
        assert!(Error::InvalidInput("summary text is required".into()).is_client_error());
        assert!(!Error::ExportGeneration("empty".into()).is_client_error());
        assert!(!Error::Measurement { ch: '\u{1F600}', font: "Times-Roman" }.is_client_error());
    }

    #[test]
    fn malformed_config_is_not_a_client_error() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err().into();
        assert!(matches!(err, Error::Json(_)));
        assert!(!err.is_client_error());
        assert!(err.to_string().starts_with("json error: "));
    }

    #[test]
    fn io_errors_convert() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::Other, "disk").into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "io error: disk");
    }
}
