//! The page model the OCR stage operates on.

use std::sync::Arc;

use crate::core::traits::PageBackend;

use super::cell::TextCell;

/// One document page flowing through the pipeline.
///
/// A page carries its accumulated text cells and an optional handle to the
/// rendering backend that can produce cropped raster images of it. Pages
/// without a backend (or with an invalidated one) pass through the OCR stage
/// unchanged.
#[derive(Clone)]
pub struct Page {
    /// Zero-based page number within the document.
    pub number: usize,
    /// The page's text cells, programmatic and OCR-derived alike.
    pub cells: Vec<TextCell>,
    /// Handle to the page's rendering backend, if one is attached.
    pub backend: Option<Arc<dyn PageBackend>>,
}

impl Page {
    /// Creates an empty page with the given page number.
    pub fn new(number: usize) -> Self {
        Self {
            number,
            cells: Vec::new(),
            backend: None,
        }
    }

    /// Attaches a rendering backend to the page.
    pub fn with_backend(mut self, backend: Arc<dyn PageBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Seeds the page with programmatically extracted cells.
    pub fn with_cells(mut self, cells: Vec<TextCell>) -> Self {
        self.cells = cells;
        self
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("number", &self.number)
            .field("cells", &self.cells)
            .field("backend", &self.backend.as_ref().map(|_| "<backend>"))
            .finish()
    }
}
