//! Everything that talks to the external OCR engine.
//!
//! The engine is the Tesseract CLI, driven through four invocation modes:
//! version query and language listing (the startup [`capability`] probe),
//! orientation/script detection ([`script`]), and full recognition with a
//! tab-separated report ([`recognition`]). All calls are synchronous; each
//! one spawns the engine, waits on it, and parses what it wrote to stdout.

pub mod capability;
pub mod recognition;
pub mod script;

pub use capability::{probe, EngineIdentity, EngineInfo, LanguagePacks};
pub use recognition::recognize;
pub use script::{detect_language, LanguageResolution};
