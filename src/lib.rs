//! # doctess
//!
//! A Rust OCR stage for document-conversion pipelines that extracts text
//! from raster page regions by driving the Tesseract CLI and folding the
//! recognized cells back into page coordinates.
//!
//! ## Features
//!
//! - Engine capability probing (identity, installed language packs)
//! - Per-region script detection with installed-pack validation
//! - Full recognition through the engine's tab-separated report
//! - Inverse scale-and-offset mapping from engine pixel space to
//!   page-document space
//! - Lazy one-page-at-a-time stream processing
//!
//! The crate does not perform recognition itself and does not pick the
//! candidate regions; rasterization, region selection, and cell merging are
//! collaborator traits the host pipeline implements.
//!
//! ## Modules
//!
//! * [`core`] - Errors, configuration, and collaborator traits
//! * [`domain`] - Bounding boxes, cells, and pages
//! * [`engine`] - Engine invocation and report parsing
//! * [`pipeline`] - Coordinate normalization and the page orchestrator
//! * [`utils`] - Image persistence, script mapping, logging setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use doctess::prelude::*;
//!
//! /// Treats the full page as a single OCR candidate.
//! struct FullPageRegions;
//!
//! impl RegionProvider for FullPageRegions {
//!     fn regions_of(&self, _page: &Page) -> Vec<BoundingBox> {
//!         vec![BoundingBox::from_coords(0.0, 0.0, 595.0, 842.0)]
//!     }
//! }
//!
//! /// Appends OCR cells after the page's programmatic cells.
//! struct AppendCells;
//!
//! impl CellMerger for AppendCells {
//!     fn merge(&self, mut existing: Vec<TextCell>, ocr: Vec<OcrCell>) -> Vec<TextCell> {
//!         let offset = existing.len();
//!         existing.extend(ocr.into_iter().enumerate().map(|(i, cell)| TextCell {
//!             id: offset + i,
//!             text: cell.text,
//!             bbox: cell.bbox,
//!         }));
//!         existing
//!     }
//! }
//!
//! fn main() -> Result<(), OcrError> {
//!     let config = TessCliConfig {
//!         lang: LanguageSelection::Auto,
//!         ..TessCliConfig::default()
//!     };
//!     let stage = TessCliOcr::new(config, Box::new(FullPageRegions), Box::new(AppendCells))?;
//!
//!     let pages = vec![Page::new(0)];
//!     for page in stage.process(pages.into_iter()) {
//!         println!("page {} carries {} cells", page.number, page.cells.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## JSON Configuration
//!
//! [`TessCliConfig`](core::TessCliConfig) is serde-enabled, so the stage can
//! be configured from a pipeline configuration file:
//!
//! ```rust
//! use doctess::core::TessCliConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config: TessCliConfig = serde_json::from_str(
//!     r#"{
//!         "tesseract_cmd": "/usr/bin/tesseract",
//!         "lang": { "explicit": ["fra", "deu"] },
//!         "scale": 3
//!     }"#,
//! )?;
//! config.validate()?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod domain;
pub mod engine;
pub mod pipeline;
pub mod utils;

/// Prelude module for convenient imports.
///
/// Bring the essentials into scope with a single use statement:
///
/// ```rust
/// use doctess::prelude::*;
/// ```
///
/// Included items cover the common path: the stage itself, its
/// configuration, the collaborator traits a host pipeline implements, and
/// the data model flowing through them.
pub mod prelude {
    pub use crate::core::{
        CellMerger, LanguageSelection, OcrError, OcrVisualizer, PageBackend, RegionProvider,
        TessCliConfig,
    };
    pub use crate::domain::{BoundingBox, OcrCell, Page, TextCell};
    pub use crate::engine::EngineInfo;
    pub use crate::pipeline::TessCliOcr;
}
