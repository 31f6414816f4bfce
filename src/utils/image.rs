//! Persistence of rendered region images.
//!
//! The engine is a separate process and reads its input from the
//! filesystem, so every rendered region is written to a scoped temporary
//! PNG. The handle returned here deletes the file when dropped, which keeps
//! the artifact's lifetime bound to one recognition call on every exit
//! path.

use image::RgbImage;
use tempfile::NamedTempFile;

use crate::core::OcrError;

/// Writes a rendered region image to a scoped temporary PNG file.
///
/// # Arguments
///
/// * `image` - The rendered region image.
///
/// # Returns
///
/// A handle to the temporary file. The file is removed when the handle is
/// dropped.
pub fn persist_region_image(image: &RgbImage) -> Result<NamedTempFile, OcrError> {
    let file = tempfile::Builder::new()
        .prefix("doctess-region-")
        .suffix(".png")
        .tempfile()?;
    image.save_with_format(file.path(), image::ImageFormat::Png)?;
    Ok(file)
}
