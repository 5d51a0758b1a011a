/// Scan result aggregate — everything one directory walk produces.
///
/// A scan yields totals, a per-extension tally, and the immediate listing
/// of every visited directory keyed by its path. All of it is built once
/// during the walk and never mutated afterwards.
use compact_str::CompactString;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// Immediate contents of one visited directory.
///
/// Both lists hold names only (not full paths) and are sorted
/// lexicographically so repeated scans of the same tree are identical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Immediate subdirectory names.
    pub subdirs: Vec<CompactString>,
    /// Immediate file names.
    pub files: Vec<CompactString>,
}

impl DirectoryEntry {
    /// Number of immediate children (subdirectories plus files).
    pub fn item_count(&self) -> usize {
        self.subdirs.len() + self.files.len()
    }
}

/// A directory whose listing could not be opened (typically permissions).
///
/// Recorded per directory, never fatal: the directory still counts as
/// visited, with zero files.
#[derive(Debug, Clone)]
pub struct UnreadableDir {
    pub path: PathBuf,
    pub message: String,
}

/// The complete outcome of one directory scan.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// The root that was scanned, as given by the caller.
    pub root: PathBuf,

    /// Number of directories visited, the root included.
    /// Always >= 1 for a successful scan.
    pub folder_count: u64,

    /// Number of files seen across all visited directories.
    pub file_count: u64,

    /// Occurrences per extension. Keys are lowercase, include the leading
    /// dot, and `""` stands for extensionless files. A `BTreeMap` gives
    /// the mapping a single deterministic iteration order; the classifier
    /// emits pairs in exactly this order.
    pub extension_counts: BTreeMap<String, u64>,

    /// Immediate listing of every visited directory, keyed by its path.
    pub entries: HashMap<PathBuf, DirectoryEntry>,

    /// Directories whose listing failed. Each is still present in
    /// `entries` with an empty listing.
    pub unreadable: Vec<UnreadableDir>,
}

impl ScanResult {
    /// Listing for one visited directory, if it was part of the scan.
    pub fn entry(&self, path: &Path) -> Option<&DirectoryEntry> {
        self.entries.get(path)
    }
}

/// Derive the extension of a file name: the substring from the last `.`
/// to the end, lowercased, or `""` when no `.` is present.
///
/// Leading dots are not extension separators: `".bashrc"` has no
/// extension, `"..a.txt"` has `".txt"`, `"file."` has `"."`.
pub fn extension_of(file_name: &str) -> String {
    let stem_start = file_name.len() - file_name.trim_start_matches('.').len();
    match file_name[stem_start..].rfind('.') {
        Some(dot) => file_name[stem_start + dot..].to_lowercase(),
        None => String::new(),
    }
}
