/// FileTally Core — scanning, classification, and report rendering.
///
/// This crate contains all business logic with zero UI dependencies.
/// It is designed to be reusable across different frontends (GUI, CLI, TUI).
///
/// # Modules
///
/// - [`model`] — Scan result data model and the extension-splitting rule.
/// - [`scanner`] — Blocking recursive directory walk, plus a background
///   handle for frontends that keep an interactive thread responsive.
/// - [`analysis`] — Extension-to-category grouping and report rendering.
pub mod analysis;
pub mod model;
pub mod scanner;
