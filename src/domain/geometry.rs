//! Geometric primitives for page-space OCR results.
//!
//! Every rectangle handled by this crate is axis-aligned with a top-left
//! origin. Page regions and cells use page-document coordinates (72 dpi
//! points); the engine reports pixel offsets in region-local upscaled space,
//! which the pipeline folds back into document coordinates before a
//! [`BoundingBox`] ever leaves it.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with a top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// X-coordinate of the left edge.
    pub l: f32,
    /// Y-coordinate of the top edge.
    pub t: f32,
    /// X-coordinate of the right edge.
    pub r: f32,
    /// Y-coordinate of the bottom edge.
    pub b: f32,
}

impl BoundingBox {
    /// Creates a bounding box from edge coordinates.
    ///
    /// # Arguments
    ///
    /// * `l` - The x-coordinate of the left edge.
    /// * `t` - The y-coordinate of the top edge.
    /// * `r` - The x-coordinate of the right edge.
    /// * `b` - The y-coordinate of the bottom edge.
    ///
    /// # Returns
    ///
    /// A new `BoundingBox` instance.
    pub fn from_coords(l: f32, t: f32, r: f32, b: f32) -> Self {
        Self { l, t, r, b }
    }

    /// Width of the box.
    #[inline]
    pub fn width(&self) -> f32 {
        self.r - self.l
    }

    /// Height of the box.
    #[inline]
    pub fn height(&self) -> f32 {
        self.b - self.t
    }

    /// Area of the box. Degenerate boxes report a zero or negative area.
    #[inline]
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }
}
