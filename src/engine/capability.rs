//! Engine capability probing.
//!
//! Before any recognition runs, the stage queries the engine once for its
//! identity and for the set of installed language packs. The result is an
//! immutable [`EngineInfo`] snapshot owned by the stage; nothing in this
//! crate re-queries the engine afterwards.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::core::{OcrError, TessCliConfig};

/// Version string substituted when the engine's version report is
/// unparsable.
const UNKNOWN_VERSION: &str = "XXX";

/// Namespace marker used by script-specific language packs.
const SCRIPT_NAMESPACE: &str = "script/";

/// Name and version of the engine binary, as reported by its version query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineIdentity {
    /// The engine name, normally `tesseract`.
    pub name: String,
    /// The engine version, or a sentinel when the report was unparsable.
    pub version: String,
}

/// The set of language packs installed alongside the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePacks {
    /// Installed language tags in the order the engine reports them.
    pub tags: Vec<String>,
    /// Namespace prefix carried by script packs, or an empty string when the
    /// installation has none.
    pub script_prefix: String,
}

impl LanguagePacks {
    /// Whether `tag` names an installed pack.
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|installed| installed == tag)
    }
}

/// Immutable snapshot of the engine's capabilities.
///
/// Produced once by [`probe`] when the stage is constructed and passed by
/// reference to every later call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineInfo {
    /// The engine's identity.
    pub identity: EngineIdentity,
    /// The installed language packs.
    pub packs: LanguagePacks,
}

/// Probes the engine named by the configuration.
///
/// Runs the version query and the language listing exactly once. Any
/// failure, from an unresolvable binary to a query that cannot be launched,
/// is fatal and reported as [`OcrError::EngineUnavailable`] with a
/// remediation hint naming the configured binary.
///
/// # Arguments
///
/// * `config` - The stage configuration naming the engine binary.
///
/// # Returns
///
/// The engine's capability snapshot, or the fatal configuration error.
pub fn probe(config: &TessCliConfig) -> Result<EngineInfo, OcrError> {
    let binary = which::which(&config.tesseract_cmd)
        .map_err(|err| OcrError::engine_unavailable(&config.tesseract_cmd, err))?;

    let identity = query_identity(&config.tesseract_cmd, &binary)?;
    let packs = query_language_packs(&config.tesseract_cmd, &binary)?;
    debug!(
        name = %identity.name,
        version = %identity.version,
        packs = packs.tags.len(),
        script_prefix = %packs.script_prefix,
        "engine capability probe finished"
    );

    Ok(EngineInfo { identity, packs })
}

fn query_identity(configured: &str, binary: &Path) -> Result<EngineIdentity, OcrError> {
    let output = Command::new(binary)
        .arg("--version")
        .output()
        .map_err(|err| OcrError::engine_unavailable(configured, err))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    Ok(parse_version_report(&stdout, &stderr))
}

/// Parses the engine's version report into an identity.
///
/// Some builds of the engine print the version to stdout and others to
/// stderr, so both streams are considered: the first non-empty line wins and
/// splits on whitespace into name and version. An unparsable report yields
/// the sentinel identity instead of an error.
fn parse_version_report(stdout: &str, stderr: &str) -> EngineIdentity {
    let combined = if stdout.trim().is_empty() {
        stderr.trim()
    } else {
        stdout.trim()
    };
    let line = combined.lines().next().unwrap_or("").trim();

    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(name), Some(version)) => EngineIdentity {
            name: name.to_string(),
            version: version.to_string(),
        },
        _ => EngineIdentity {
            name: "tesseract".to_string(),
            version: UNKNOWN_VERSION.to_string(),
        },
    }
}

fn query_language_packs(configured: &str, binary: &Path) -> Result<LanguagePacks, OcrError> {
    let output = Command::new(binary)
        .arg("--list-langs")
        .output()
        .map_err(|err| OcrError::engine_unavailable(configured, err))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(parse_language_listing(&stdout))
}

/// Parses the engine's language listing.
///
/// The first line is a header and is discarded; every following non-empty
/// line is one installed tag, order preserved. The script namespace prefix
/// is derived from the tags themselves.
fn parse_language_listing(report: &str) -> LanguagePacks {
    let tags: Vec<String> = report
        .lines()
        .skip(1)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    let script_prefix = if tags.iter().any(|tag| tag.starts_with(SCRIPT_NAMESPACE)) {
        SCRIPT_NAMESPACE.to_string()
    } else {
        String::new()
    };

    LanguagePacks {
        tags,
        script_prefix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_from_stdout() {
        let identity = parse_version_report("tesseract 5.3.4\n leptonica-1.82.0\n", "");
        assert_eq!(identity.name, "tesseract");
        assert_eq!(identity.version, "5.3.4");
    }

    #[test]
    fn test_version_from_stderr() {
        let identity = parse_version_report("", "tesseract 4.1.1\n");
        assert_eq!(identity.name, "tesseract");
        assert_eq!(identity.version, "4.1.1");
    }

    #[test]
    fn test_version_sentinel_on_empty_report() {
        let identity = parse_version_report("", "  \n");
        assert_eq!(identity.name, "tesseract");
        assert_eq!(identity.version, "XXX");
    }

    #[test]
    fn test_version_sentinel_on_single_token() {
        let identity = parse_version_report("tesseract\n", "");
        assert_eq!(identity.version, "XXX");
    }

    #[test]
    fn test_language_listing_skips_header() {
        let packs =
            parse_language_listing("List of available languages in \"/tessdata/\" (3):\neng\nosd\nfra\n");
        assert_eq!(packs.tags, vec!["eng", "osd", "fra"]);
        assert_eq!(packs.script_prefix, "");
    }

    #[test]
    fn test_script_prefix_detected() {
        let packs = parse_language_listing("List of available languages (2):\neng\nscript/Latin\n");
        assert_eq!(packs.script_prefix, "script/");
        assert!(packs.contains("script/Latin"));
        assert!(!packs.contains("script/Cyrillic"));
    }

    #[test]
    fn test_empty_listing() {
        let packs = parse_language_listing("");
        assert!(packs.tags.is_empty());
        assert_eq!(packs.script_prefix, "");
    }
}
