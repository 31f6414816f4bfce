//! Per-region script detection.
//!
//! When language selection is automatic, the engine is first run in
//! orientation/script detection mode against the region image. The detected
//! script label is mapped to a language pack name and validated against the
//! installed packs. Every miss along the way degrades to
//! [`LanguageResolution::Unresolved`] with a warning; script detection never
//! fails a recognition call.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::core::TessCliConfig;
use crate::utils::map_script_label;

use super::capability::LanguagePacks;

/// Outcome of resolving a recognition language for one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageResolution {
    /// A detected, installed language tag to force on the recognition call.
    Resolved(String),
    /// No usable language; recognition proceeds with the engine default.
    Unresolved,
}

/// Detects the script of a region image and resolves it to an installed
/// language tag.
///
/// # Arguments
///
/// * `config` - The stage configuration naming the engine binary.
/// * `image` - Path to the rendered region image.
/// * `packs` - The installed language packs from the startup probe.
pub fn detect_language(
    config: &TessCliConfig,
    image: &Path,
    packs: &LanguagePacks,
) -> LanguageResolution {
    let mut cmd = Command::new(&config.tesseract_cmd);
    cmd.args(["--psm", "0", "-l", "osd"])
        .arg(image)
        .arg("stdout")
        .stderr(Stdio::null());
    debug!(command = ?cmd, "running script detection");

    let output = match cmd.output() {
        Ok(output) => output,
        Err(err) => {
            warn!(error = %err, "script detection could not run, continuing without a forced language");
            return LanguageResolution::Unresolved;
        }
    };

    let report = String::from_utf8_lossy(&output.stdout);
    resolve_from_report(&report, packs)
}

/// Resolves the detection report against the installed packs.
///
/// The report is a set of colon-delimited key/value lines; the value of the
/// `Script` key is mapped to a pack name and prefixed with the installation's
/// script namespace before the installed-pack check.
pub(crate) fn resolve_from_report(report: &str, packs: &LanguagePacks) -> LanguageResolution {
    let Some(raw_script) = script_value(report) else {
        warn!("engine could not detect the script of the region");
        return LanguageResolution::Unresolved;
    };

    let script = map_script_label(raw_script.trim());
    let tag = format!("{}{}", packs.script_prefix, script);
    if !packs.contains(&tag) {
        warn!(
            script = %script,
            language = %tag,
            "detected language is not installed and will be ignored"
        );
        return LanguageResolution::Unresolved;
    }

    debug!(script = %script, language = %tag, "using detected language");
    LanguageResolution::Resolved(tag)
}

fn script_value(report: &str) -> Option<&str> {
    report.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        (key.trim() == "Script").then_some(value)
    })
}
