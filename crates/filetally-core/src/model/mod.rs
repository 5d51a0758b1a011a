/// Data model for FileTally scan results.
///
/// Re-exports the scan result aggregate and supporting types.
pub mod scan_result;

pub use scan_result::{extension_of, DirectoryEntry, ScanResult, UnreadableDir};
