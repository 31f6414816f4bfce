//! Coordinate normalization from engine space to page space.
//!
//! The engine reports pixel offsets in the region-local image, which was
//! rendered at `scale` times the nominal page resolution. Mapping back into
//! page-document coordinates is therefore an inverse scale followed by the
//! region's offset. The origin is top-left throughout; nothing is flipped or
//! rotated.

use crate::domain::{BoundingBox, OcrCell, RecognizedRow};

/// Builds a page-space OCR cell from one engine report row.
///
/// # Arguments
///
/// * `index` - The row's position within its region's batch; becomes the
///   cell id (unique per region, not per page).
/// * `row` - The engine report row in region-local pixel space.
/// * `scale` - The resolution multiplier the region was rendered at.
/// * `region` - The region bounds in page-document coordinates.
///
/// # Returns
///
/// The cell with its bounding box in page-document coordinates and its
/// confidence mapped into `[0, 1]`.
pub fn normalize_row(
    index: usize,
    row: &RecognizedRow,
    scale: u32,
    region: &BoundingBox,
) -> OcrCell {
    let scale = scale as f32;
    OcrCell {
        id: index,
        text: row.text.clone(),
        confidence: (row.conf / 100.0).clamp(0.0, 1.0),
        bbox: BoundingBox::from_coords(
            row.left / scale + region.l,
            row.top / scale + region.t,
            (row.left + row.width) / scale + region.l,
            (row.top + row.height) / scale + region.t,
        ),
    }
}
