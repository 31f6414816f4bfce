//! Error types for the OCR stage.
//!
//! The taxonomy separates fatal configuration failures (the engine binary is
//! missing or unusable, raised at stage construction) from per-region
//! failures (a single recognition call could not run). Detection
//! degradation and empty engine output are not errors and never appear here.

use thiserror::Error;

/// Errors produced by the OCR stage.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The engine binary is missing or its capability probe failed.
    ///
    /// Raised at stage construction; the stage cannot run OCR at all.
    #[error("ocr engine unavailable: {message}")]
    EngineUnavailable {
        /// Description of the failure with a remediation hint.
        message: String,
    },

    /// A configuration value is invalid.
    #[error("configuration: {message}")]
    Config {
        /// A message describing the configuration error.
        message: String,
    },

    /// The engine process could not be launched for one region.
    #[error("engine launch failed: {context}")]
    EngineLaunch {
        /// What was being launched, naming the region image.
        context: String,
        /// The underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// The engine ran but its recognition call failed.
    #[error("recognition failed: {context}")]
    Recognition {
        /// Description of the failure.
        context: String,
    },

    /// The page backend could not render a region.
    #[error("region render failed: {context}")]
    Render {
        /// Description of the failed render request.
        context: String,
        /// The underlying backend error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A rendered region image could not be written to disk.
    #[error("image write")]
    ImageWrite(#[source] image::ImageError),

    /// IO error.
    #[error("io")]
    Io(#[from] std::io::Error),
}

impl OcrError {
    /// Creates an `OcrError` for an unusable engine binary.
    ///
    /// The message names the configured binary path and tells the user how
    /// to fix the setup, since this error aborts stage construction.
    ///
    /// # Arguments
    ///
    /// * `binary` - The configured engine binary path.
    /// * `error` - The underlying probe or launch error.
    pub fn engine_unavailable(binary: &str, error: impl std::fmt::Display) -> Self {
        Self::EngineUnavailable {
            message: format!(
                "{error}. Install tesseract and make sure the `{binary}` binary is \
                 discoverable, or point `tesseract_cmd` in the OCR configuration at it."
            ),
        }
    }

    /// Creates an `OcrError` for a configuration problem.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates an `OcrError` for a failed engine launch.
    pub fn engine_launch(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::EngineLaunch {
            context: context.into(),
            source,
        }
    }

    /// Creates an `OcrError` for a failed recognition call.
    pub fn recognition(context: impl Into<String>) -> Self {
        Self::Recognition {
            context: context.into(),
        }
    }

    /// Creates an `OcrError` for a failed region render.
    pub fn render(
        context: impl Into<String>,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Render {
            context: context.into(),
            source: Box::new(error),
        }
    }
}

impl From<crate::core::config::ConfigError> for OcrError {
    fn from(error: crate::core::config::ConfigError) -> Self {
        Self::Config {
            message: error.to_string(),
        }
    }
}

impl From<image::ImageError> for OcrError {
    fn from(error: image::ImageError) -> Self {
        Self::ImageWrite(error)
    }
}
