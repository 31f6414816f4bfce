//! Traits defining the seams between the OCR stage and its collaborators.
//!
//! The stage deliberately does not know how pages are rasterized, where the
//! candidate regions come from, or how OCR cells are reconciled with the
//! programmatic cells already on a page. Each of those concerns arrives
//! through one of the traits below.

use image::RgbImage;

use crate::core::errors::OcrError;
use crate::domain::{BoundingBox, OcrCell, Page, TextCell};

/// Rendering backend of a single page.
pub trait PageBackend {
    /// Whether the backend can still serve render requests.
    ///
    /// Pages whose backend reports false pass through the OCR stage
    /// unchanged.
    fn is_valid(&self) -> bool;

    /// Renders a cropped page image covering `region` at `scale` times the
    /// nominal page resolution.
    ///
    /// # Arguments
    ///
    /// * `scale` - Resolution multiplier relative to the 72 dpi baseline.
    /// * `region` - Crop bounds in page-document coordinates.
    ///
    /// # Returns
    ///
    /// The rendered region image, or an error if the page cannot be
    /// rasterized.
    fn render_region(&self, scale: u32, region: &BoundingBox) -> Result<RgbImage, OcrError>;
}

/// Supplies the candidate OCR regions of a page.
pub trait RegionProvider {
    /// Returns the regions of `page` suspected to contain raster text, in
    /// page-document coordinates.
    fn regions_of(&self, page: &Page) -> Vec<BoundingBox>;
}

/// Reconciles OCR-derived cells with the cells already present on a page.
///
/// Overlap and deduplication policy lives entirely behind this trait.
pub trait CellMerger {
    /// Merges `ocr` cells into `existing` and returns the page's new cell
    /// list.
    fn merge(&self, existing: Vec<TextCell>, ocr: Vec<OcrCell>) -> Vec<TextCell>;
}

/// Debug hook observing each processed page.
///
/// Implementations typically draw the regions and cells onto the page image;
/// the hook has no effect on the emitted data.
pub trait OcrVisualizer {
    /// Called once per processed page with its candidate regions and the
    /// cells recognized in them.
    fn visualize(&self, page: &Page, regions: &[BoundingBox], cells: &[OcrCell]);
}
