//! Per-page OCR statistics.

use std::time::Duration;

/// Counters collected while running OCR over one page.
///
/// Purely observational; the orchestrator logs them after each page.
#[derive(Debug, Clone, Default)]
pub struct PageOcrStats {
    /// Candidate regions submitted to the engine (zero-area regions are not
    /// counted, they are never submitted).
    pub regions: usize,
    /// Regions skipped because their recognition failed.
    pub skipped_regions: usize,
    /// OCR cells produced across all regions.
    pub cells: usize,
    /// Wall-clock time spent on the page's OCR.
    pub elapsed: Duration,
}
