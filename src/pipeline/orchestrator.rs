//! The per-page OCR orchestrator.
//!
//! [`TessCliOcr`] is the stage a document pipeline plugs in between page
//! parsing and layout analysis. It probes the engine once at construction,
//! then lazily transforms a stream of pages: for every candidate region of a
//! page it renders a cropped image, drives the engine over it, folds the
//! recognized rows back into page coordinates, and hands the accumulated
//! cells to the merge collaborator.
//!
//! Recognition is best-effort enrichment. A region whose render or
//! recognition fails is logged and skipped; the page keeps flowing with
//! whatever cells it already had.

use std::time::Instant;

use itertools::Itertools;
use tracing::{debug, info, warn};

use crate::core::{
    CellMerger, LanguageSelection, OcrError, OcrVisualizer, PageBackend, RegionProvider,
    TessCliConfig,
};
use crate::domain::{BoundingBox, OcrCell, Page};
use crate::engine::{self, EngineInfo, LanguageResolution};
use crate::utils::persist_region_image;

use super::normalize::normalize_row;
use super::stats::PageOcrStats;

/// The Tesseract CLI OCR stage.
///
/// Construction probes the engine (fatal on failure when enabled); the
/// resulting capability snapshot is immutable for the stage's lifetime.
/// Processing is synchronous and keeps at most one page of working state.
pub struct TessCliOcr {
    config: TessCliConfig,
    /// Present exactly when the stage is enabled.
    engine: Option<EngineInfo>,
    regions: Box<dyn RegionProvider>,
    merger: Box<dyn CellMerger>,
    visualizer: Option<Box<dyn OcrVisualizer>>,
}

impl TessCliOcr {
    /// Creates the stage and, when enabled, probes the engine.
    ///
    /// # Arguments
    ///
    /// * `config` - The stage configuration; validated here.
    /// * `regions` - Collaborator supplying candidate OCR regions per page.
    /// * `merger` - Collaborator reconciling OCR cells with page cells.
    ///
    /// # Returns
    ///
    /// The ready stage, or a fatal error when the configuration is invalid
    /// or the engine is unavailable.
    pub fn new(
        config: TessCliConfig,
        regions: Box<dyn RegionProvider>,
        merger: Box<dyn CellMerger>,
    ) -> Result<Self, OcrError> {
        config.validate()?;

        let engine = if config.enabled {
            let info = engine::probe(&config)?;
            info!(
                name = %info.identity.name,
                version = %info.identity.version,
                languages = info.packs.tags.len(),
                "ocr engine ready"
            );
            Some(info)
        } else {
            None
        };

        Ok(Self {
            config,
            engine,
            regions,
            merger,
            visualizer: None,
        })
    }

    /// Attaches a debug visualizer invoked after every processed page.
    pub fn with_visualizer(mut self, visualizer: Box<dyn OcrVisualizer>) -> Self {
        self.visualizer = Some(visualizer);
        self
    }

    /// The engine capability snapshot, when the stage is enabled.
    pub fn engine_info(&self) -> Option<&EngineInfo> {
        self.engine.as_ref()
    }

    /// Lazily transforms a stream of pages, merging OCR cells into each.
    ///
    /// Pages are pulled one at a time; the stage never buffers more than the
    /// page currently being worked on. Disabled stages and pages without a
    /// usable backend pass through unchanged.
    pub fn process<'a, I>(&'a self, pages: I) -> impl Iterator<Item = Page> + 'a
    where
        I: Iterator<Item = Page> + 'a,
    {
        pages.map(move |page| self.process_page(page))
    }

    fn process_page(&self, mut page: Page) -> Page {
        let Some(engine) = &self.engine else {
            return page;
        };
        let Some(backend) = page.backend.clone() else {
            return page;
        };
        if !backend.is_valid() {
            return page;
        }

        let started = Instant::now();
        let mut stats = PageOcrStats::default();
        let regions = self.regions.regions_of(&page);
        let mut ocr_cells: Vec<OcrCell> = Vec::new();

        for region in &regions {
            // Zero-area regions are never submitted to the engine.
            if region.area() <= 0.0 {
                continue;
            }
            stats.regions += 1;
            match self.recognize_region(engine, backend.as_ref(), region) {
                Ok(cells) => {
                    stats.cells += cells.len();
                    ocr_cells.extend(cells);
                }
                Err(err) => {
                    stats.skipped_regions += 1;
                    warn!(page = page.number, error = %err, "skipping unreadable region");
                }
            }
        }

        if let Some(visualizer) = &self.visualizer {
            visualizer.visualize(&page, &regions, &ocr_cells);
        }

        let existing = std::mem::take(&mut page.cells);
        page.cells = self.merger.merge(existing, ocr_cells);

        stats.elapsed = started.elapsed();
        debug!(
            page = page.number,
            regions = stats.regions,
            skipped = stats.skipped_regions,
            cells = stats.cells,
            elapsed_ms = stats.elapsed.as_millis() as u64,
            "page ocr finished"
        );
        page
    }

    /// Runs the engine over one region and returns its page-space cells.
    ///
    /// The rendered image lives in a scoped temporary file that is removed
    /// when this function returns, on success and on error alike.
    fn recognize_region(
        &self,
        engine: &EngineInfo,
        backend: &dyn PageBackend,
        region: &BoundingBox,
    ) -> Result<Vec<OcrCell>, OcrError> {
        let image = backend.render_region(self.config.scale, region)?;
        let artifact = persist_region_image(&image)?;

        let languages = self.resolve_languages(engine, artifact.path());
        let rows = engine::recognize(&self.config, artifact.path(), languages.as_deref())?;

        Ok(rows
            .iter()
            .enumerate()
            .map(|(index, row)| normalize_row(index, row, self.config.scale, region))
            .collect())
    }

    fn resolve_languages(&self, engine: &EngineInfo, image: &std::path::Path) -> Option<String> {
        match &self.config.lang {
            LanguageSelection::Auto => {
                match engine::detect_language(&self.config, image, &engine.packs) {
                    LanguageResolution::Resolved(tag) => Some(tag),
                    LanguageResolution::Unresolved => None,
                }
            }
            LanguageSelection::Explicit(tags) => Some(tags.iter().join("+")),
            LanguageSelection::EngineDefault => None,
        }
    }
}
