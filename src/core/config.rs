//! Configuration for the OCR stage.
//!
//! The configuration is a plain serde-enabled struct so it can live inside a
//! larger pipeline configuration file. `validate` should be called before the
//! stage is constructed; the stage constructor does so itself.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during configuration validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The render scale factor must be greater than 0.
    #[error("scale factor must be greater than 0")]
    InvalidScale,

    /// Error indicating that a configuration is invalid.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// A message describing the configuration error.
        message: String,
    },
}

/// How recognition languages are chosen for each region.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageSelection {
    /// Detect the script per region and pick a matching installed pack.
    Auto,
    /// Force an explicit ordered set of language tags.
    ///
    /// Multiple tags are handed to the engine joined with `+`.
    Explicit(Vec<String>),
    /// Let the engine use its built-in default.
    #[default]
    EngineDefault,
}

impl LanguageSelection {
    /// Builds a selection from a raw tag list.
    ///
    /// The sentinel tag `auto` selects per-region script detection and an
    /// empty list selects the engine default, mirroring the flat list form
    /// such options commonly take in pipeline configuration files.
    pub fn from_tags(tags: Vec<String>) -> Self {
        if tags.iter().any(|tag| tag == "auto") {
            Self::Auto
        } else if tags.is_empty() {
            Self::EngineDefault
        } else {
            Self::Explicit(tags)
        }
    }
}

/// Configuration for the Tesseract CLI OCR stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TessCliConfig {
    /// The engine executable to invoke. Resolved through `PATH` when not an
    /// absolute path.
    #[serde(default = "default_tesseract_cmd")]
    pub tesseract_cmd: String,

    /// Language selection applied to every recognition call.
    #[serde(default)]
    pub lang: LanguageSelection,

    /// Optional override directory for the engine's language data.
    #[serde(default)]
    pub tessdata_dir: Option<PathBuf>,

    /// When false the stage is a pure passthrough and never touches the
    /// engine.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Resolution multiplier used when rendering regions for recognition.
    ///
    /// The default of 3 approximates 216 dpi from the 72 dpi page baseline,
    /// trading recognition accuracy against rendering and engine cost.
    #[serde(default = "default_scale")]
    pub scale: u32,
}

fn default_tesseract_cmd() -> String {
    "tesseract".to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_scale() -> u32 {
    3
}

impl Default for TessCliConfig {
    fn default() -> Self {
        Self {
            tesseract_cmd: default_tesseract_cmd(),
            lang: LanguageSelection::default(),
            tessdata_dir: None,
            enabled: default_enabled(),
            scale: default_scale(),
        }
    }
}

impl TessCliConfig {
    /// Validates the configuration.
    ///
    /// # Returns
    ///
    /// A Result indicating success or a ConfigError if validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scale == 0 {
            return Err(ConfigError::InvalidScale);
        }
        if self.tesseract_cmd.trim().is_empty() {
            return Err(ConfigError::InvalidConfig {
                message: "tesseract_cmd is empty".to_string(),
            });
        }
        if let LanguageSelection::Explicit(tags) = &self.lang {
            if tags.is_empty() {
                return Err(ConfigError::InvalidConfig {
                    message: "explicit language selection contains no tags".to_string(),
                });
            }
            if tags.iter().any(|tag| tag.trim().is_empty()) {
                return Err(ConfigError::InvalidConfig {
                    message: "explicit language selection contains a blank tag".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tags() {
        assert_eq!(
            LanguageSelection::from_tags(vec!["auto".into()]),
            LanguageSelection::Auto
        );
        assert_eq!(
            LanguageSelection::from_tags(vec!["eng".into(), "auto".into()]),
            LanguageSelection::Auto
        );
        assert_eq!(
            LanguageSelection::from_tags(Vec::new()),
            LanguageSelection::EngineDefault
        );
        assert_eq!(
            LanguageSelection::from_tags(vec!["fra".into(), "deu".into()]),
            LanguageSelection::Explicit(vec!["fra".into(), "deu".into()])
        );
    }

    #[test]
    fn test_validate_defaults() {
        assert!(TessCliConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_scale() {
        let config = TessCliConfig {
            scale: 0,
            ..TessCliConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidScale)));
    }

    #[test]
    fn test_validate_rejects_empty_explicit_tags() {
        let config = TessCliConfig {
            lang: LanguageSelection::Explicit(Vec::new()),
            ..TessCliConfig::default()
        };
        assert!(config.validate().is_err());

        let config = TessCliConfig {
            lang: LanguageSelection::Explicit(vec!["eng".into(), " ".into()]),
            ..TessCliConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let config = TessCliConfig {
            tesseract_cmd: "/usr/bin/tesseract".to_string(),
            lang: LanguageSelection::Explicit(vec!["fra".into(), "eng".into()]),
            tessdata_dir: Some(PathBuf::from("/usr/share/tessdata")),
            enabled: true,
            scale: 4,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: TessCliConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.lang, config.lang);
        assert_eq!(back.scale, 4);
    }

    #[test]
    fn test_json_defaults() {
        let config: TessCliConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.tesseract_cmd, "tesseract");
        assert_eq!(config.lang, LanguageSelection::EngineDefault);
        assert!(config.enabled);
        assert_eq!(config.scale, 3);
    }
}
