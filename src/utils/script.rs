//! Mapping from detected script labels to language pack names.

/// Maps a script label reported by the engine's orientation/script detection
/// to the name used by the corresponding language pack.
///
/// Most scripts share their pack name; the few that do not are remapped
/// here. Unknown labels pass through unchanged and are caught later by the
/// installed-pack check.
pub fn map_script_label(script: &str) -> String {
    match script {
        "Katakana" | "Hiragana" => "Japanese".to_string(),
        "Han" => "HanS".to_string(),
        "Korean" => "Hangul".to_string(),
        other => other.to_string(),
    }
}
