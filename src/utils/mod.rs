//! Utility functions for the OCR stage.
//!
//! This module provides the small helpers used throughout the crate:
//! temporary image persistence, script label mapping, and logging setup.

pub mod image;
pub mod script;

pub use image::persist_region_image;
pub use script::map_script_label;

/// Initializes the tracing subscriber for logging.
///
/// This function sets up the tracing subscriber with environment filter and
/// formatting layer. It's typically called at the start of an application to
/// enable logging.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}
