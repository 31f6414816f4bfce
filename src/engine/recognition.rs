//! Full recognition calls and tabular report parsing.
//!
//! One call of [`recognize`] covers one rendered region image: build the
//! engine command, wait on the process, parse the tab-separated report into
//! [`RecognizedRow`]s. A region with no legible text yields an empty row set,
//! not an error.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::core::{OcrError, TessCliConfig};
use crate::domain::RecognizedRow;

/// Runs the engine in full-recognition mode against a region image.
///
/// # Arguments
///
/// * `config` - The stage configuration (binary path, tessdata override).
/// * `image` - Path to the rendered region image.
/// * `languages` - Language argument to force, already joined with `+` for
///   multi-language recognition, or `None` for the engine default.
///
/// # Returns
///
/// The usable rows of the engine's tabular report in engine order, or a
/// per-region error if the process could not be launched or exited
/// unsuccessfully.
pub fn recognize(
    config: &TessCliConfig,
    image: &Path,
    languages: Option<&str>,
) -> Result<Vec<RecognizedRow>, OcrError> {
    let mut cmd = Command::new(&config.tesseract_cmd);
    if let Some(languages) = languages {
        cmd.arg("-l").arg(languages);
    }
    if let Some(dir) = &config.tessdata_dir {
        cmd.arg("--tessdata-dir").arg(dir);
    }
    cmd.arg(image).arg("stdout").arg("tsv").stderr(Stdio::null());
    debug!(command = ?cmd, "running recognition");

    let output = cmd.output().map_err(|err| {
        OcrError::engine_launch(format!("recognition of {}", image.display()), err)
    })?;

    if !output.status.success() {
        return Err(OcrError::recognition(format!(
            "engine exited with {} for {}",
            output.status,
            image.display()
        )));
    }

    let report = String::from_utf8_lossy(&output.stdout);
    Ok(parse_tsv_report(&report))
}

/// Parses the engine's tab-separated recognition report.
///
/// The header line establishes the column positions; rows whose text column
/// is missing or blank after trimming are discarded, everything else is kept
/// in engine order. A report without the expected header yields no rows.
pub(crate) fn parse_tsv_report(report: &str) -> Vec<RecognizedRow> {
    let mut lines = report.lines().map(|line| line.trim_end_matches('\r'));
    let Some(header) = lines.next() else {
        return Vec::new();
    };

    let columns: Vec<&str> = header.split('\t').collect();
    let position = |name: &str| columns.iter().position(|column| *column == name);
    let (Some(text), Some(conf), Some(left), Some(top), Some(width), Some(height)) = (
        position("text"),
        position("conf"),
        position("left"),
        position("top"),
        position("width"),
        position("height"),
    ) else {
        return Vec::new();
    };

    lines
        .filter_map(|line| {
            let fields: Vec<&str> = line.split('\t').collect();
            let cell_text = fields.get(text)?;
            if cell_text.trim().is_empty() {
                return None;
            }
            let number = |index: usize| fields.get(index)?.trim().parse::<f32>().ok();
            Some(RecognizedRow {
                text: cell_text.to_string(),
                conf: number(conf)?,
                left: number(left)?,
                top: number(top)?,
                width: number(width)?,
                height: number(height)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext";

    fn row(left: u32, top: u32, width: u32, height: u32, conf: &str, text: &str) -> String {
        format!("5\t1\t1\t1\t1\t1\t{left}\t{top}\t{width}\t{height}\t{conf}\t{text}")
    }

    #[test]
    fn test_blank_rows_discarded() {
        let report = [
            HEADER.to_string(),
            row(10, 10, 100, 20, "95", "Hello"),
            row(0, 0, 200, 50, "-1", ""),
            row(120, 10, 80, 20, "91", "world"),
            row(0, 40, 200, 10, "-1", "   "),
            row(10, 40, 60, 20, "88", "again"),
        ]
        .join("\n");

        let rows = parse_tsv_report(&report);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].text, "Hello");
        assert_eq!(rows[1].text, "world");
        assert_eq!(rows[2].text, "again");
    }

    #[test]
    fn test_engine_order_preserved() {
        let report = [
            HEADER.to_string(),
            row(50, 0, 10, 10, "90", "b"),
            row(0, 0, 10, 10, "90", "a"),
        ]
        .join("\n");

        let rows = parse_tsv_report(&report);
        assert_eq!(rows[0].text, "b");
        assert_eq!(rows[1].text, "a");
    }

    #[test]
    fn test_row_fields_parsed() {
        let report = format!("{HEADER}\n{}", row(10, 12, 100, 20, "96.58", "word"));
        let rows = parse_tsv_report(&report);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].conf, 96.58);
        assert_eq!(rows[0].left, 10.0);
        assert_eq!(rows[0].top, 12.0);
        assert_eq!(rows[0].width, 100.0);
        assert_eq!(rows[0].height, 20.0);
    }

    #[test]
    fn test_header_only_report() {
        assert!(parse_tsv_report(HEADER).is_empty());
        assert!(parse_tsv_report(&format!("{HEADER}\n")).is_empty());
    }

    #[test]
    fn test_degenerate_reports() {
        assert!(parse_tsv_report("").is_empty());
        assert!(parse_tsv_report("not\ta\ttsv\theader\njunk").is_empty());
    }

    #[test]
    fn test_crlf_report() {
        let report = format!("{HEADER}\r\n{}\r\n", row(1, 2, 3, 4, "80", "x"));
        let rows = parse_tsv_report(&report);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text, "x");
    }
}
