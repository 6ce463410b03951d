use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::Error;

/// Export settings. Every field has a default, so a config file only needs
/// the values it wants to change.
/// ```
/// use summerease::types::ExportConfig;
///
/// let config: ExportConfig = serde_json::from_str(r#"{ "page": { "margin": 72.0 } }"#).unwrap();
/// assert_eq!(config.page.margin, 72.0);
/// assert_eq!(config.page.width, 595.0);
/// ```
#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub page: PageSettings,
    pub metadata: DocumentMetadata,
}

impl ExportConfig {
    /// parses a JSON config; missing keys keep their defaults
    pub fn from_json(text: &str) -> Result<Self, Error> {
        let config: ExportConfig = serde_json::from_str(text)?;
        config.page.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path)?;
        let config = ExportConfig::from_json(&text)?;

        tracing::debug!(path = %path.display(), "loaded export config");
        Ok(config)
    }
}

/// page geometry in PDF units (1/72 inch)
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct PageSettings {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl Default for PageSettings {
    /// A4 portrait with 50 unit margins
    fn default() -> Self {
        PageSettings {
            width: 595.0,
            height: 842.0,
            margin: 50.0,
        }
    }
}

impl PageSettings {
    /// horizontal space between the margins
    pub fn writeable_width(&self) -> f32 {
        self.width - (self.margin * 2.0)
    }

    /// baseline of the first line on a fresh page
    pub fn top(&self) -> f32 {
        self.height - self.margin
    }

    /// Rejects geometry that leaves no room between the margins. Every value
    /// must be finite and the margin non-negative.
    pub fn validate(&self) -> Result<(), Error> {
        let finite = [self.width, self.height, self.margin].iter().all(|value| value.is_finite());

        if !finite || self.margin < 0.0 {
            return Err(Error::InvalidInput(format!(
                "page size {}x{} with margin {} is not a usable geometry",
                self.width, self.height, self.margin
            )));
        }

        if self.writeable_width() <= 0.0 || self.top() <= self.margin {
            return Err(Error::InvalidInput(format!(
                "margin {} leaves no room on a {}x{} page",
                self.margin, self.width, self.height
            )));
        }

        Ok(())
    }
}

/// fixed strings written into the document information of every export
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct DocumentMetadata {
    pub author: String,
    pub creator: String,
    pub producer: String,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        DocumentMetadata {
            author: "SummerEase Meeting Notes".to_string(),
            creator: "SummerEase Meeting Notes Summarizer".to_string(),
            producer: "SummerEase".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a4_layout() {
        let page = PageSettings::default();
        assert_eq!(page.writeable_width(), 495.0);
        assert_eq!(page.top(), 792.0);
    }

    #[test]
    fn empty_config_is_default() {
        let config: ExportConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ExportConfig::default());
    }

    #[test]
    fn partial_metadata_keeps_other_defaults() {
        let config: ExportConfig = serde_json::from_str(r#"{ "metadata": { "author": "Ops" } }"#).unwrap();
        assert_eq!(config.metadata.author, "Ops");
        assert_eq!(config.metadata.producer, "SummerEase");
    }

    #[test]
    fn rejects_pages_without_room() {
        for (width, height, margin) in [(595.0, 90.0, 50.0), (80.0, 842.0, 50.0), (595.0, 842.0, -1.0), (f32::NAN, 842.0, 50.0)] {
            let page = PageSettings { width, height, margin };
            assert!(matches!(page.validate(), Err(Error::InvalidInput(_))), "{page:?}");
        }
        assert!(PageSettings::default().validate().is_ok());
    }

    #[test]
    fn from_json_reports_syntax_and_geometry_errors() {
        assert!(matches!(ExportConfig::from_json("{ page"), Err(Error::Json(_))));
        assert!(matches!(
            ExportConfig::from_json(r#"{ "page": { "height": 60.0 } }"#),
            Err(Error::InvalidInput(_))
        ));
        assert_eq!(ExportConfig::from_json("{}").unwrap(), ExportConfig::default());
    }

    #[test]
    fn loads_from_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        std::fs::write(&path, r#"{ "metadata": { "producer": "Ops" } }"#).unwrap();

        assert_eq!(ExportConfig::load(&path).unwrap().metadata.producer, "Ops");
        assert!(matches!(ExportConfig::load(&dir.path().join("missing.json")), Err(Error::Io(_))));
    }
}
