//! Text cell types produced and consumed by the OCR stage.

use serde::{Deserialize, Serialize};

use super::geometry::BoundingBox;

/// A programmatically extracted text cell already present on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextCell {
    /// Cell index within the page.
    pub id: usize,
    /// The cell text.
    pub text: String,
    /// Cell bounds in page-document coordinates, top-left origin.
    pub bbox: BoundingBox,
}

/// A text cell recognized by the OCR engine.
///
/// The bounding box is always expressed in page-document coordinates, the
/// same space as the region the cell was recognized in. The `id` is the
/// row index within one region's recognition batch and is not unique across
/// the regions of a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrCell {
    /// Row index within the region's recognition batch.
    pub id: usize,
    /// The recognized text.
    pub text: String,
    /// Recognition confidence in `[0, 1]`.
    pub confidence: f32,
    /// Cell bounds in page-document coordinates, top-left origin.
    pub bbox: BoundingBox,
}

/// One usable record of the engine's tabular recognition report.
///
/// Offsets are pixels in the region-local upscaled image the engine was
/// invoked on; rows with blank text never make it into this type.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognizedRow {
    /// The recognized token text.
    pub text: String,
    /// Engine confidence in `[0, 100]`.
    pub conf: f32,
    /// Left pixel offset in the region image.
    pub left: f32,
    /// Top pixel offset in the region image.
    pub top: f32,
    /// Token width in pixels.
    pub width: f32,
    /// Token height in pixels.
    pub height: f32,
}
