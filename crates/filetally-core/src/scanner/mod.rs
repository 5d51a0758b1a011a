/// Scanner — one blocking recursive walk producing a [`ScanResult`].
///
/// The walk is synchronous and single-threaded: it blocks the calling
/// thread for its entire duration and has no progress stream and no
/// cancellation. [`start_scan`] wraps it in a named background thread for
/// frontends that must keep an interactive thread responsive; the channel
/// carries exactly one terminal message (the finished report or the fatal
/// error).
use crate::analysis::{self, CategoryGroup};
use crate::model::{extension_of, DirectoryEntry, ScanResult, UnreadableDir};

use compact_str::CompactString;
use crossbeam_channel::Receiver;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Fatal scan failures.
///
/// Listing failures *below* the root are not errors — they are recorded in
/// [`ScanResult::unreadable`] and traversal continues.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The root path does not exist or its listing cannot be opened.
    #[error("cannot scan {}: {}", .path.display(), .source)]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The root path exists but is not a directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Walk the tree rooted at `root_path`, visiting every directory exactly
/// once, and tally folders, files, and per-extension counts.
///
/// Breadth-first with an explicit queue. Symlinks are never followed: a
/// symlinked directory is listed as a file entry and not traversed.
pub fn scan(root_path: &Path) -> Result<ScanResult, ScanError> {
    let start = Instant::now();
    info!("Scanning {}", root_path.display());

    // `metadata` follows a symlinked root: the walk starts wherever the
    // caller points. Links *below* the root are never followed.
    let meta = fs::metadata(root_path).map_err(|source| ScanError::NotFound {
        path: root_path.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(ScanError::NotADirectory(root_path.to_path_buf()));
    }

    let mut result = ScanResult {
        root: root_path.to_path_buf(),
        ..ScanResult::default()
    };

    let mut queue: VecDeque<PathBuf> = VecDeque::new();
    queue.push_back(root_path.to_path_buf());

    while let Some(dir) = queue.pop_front() {
        let listing = match list_directory(&dir) {
            Ok(listing) => listing,
            Err(err) if dir == *root_path => {
                // The root itself must be listable. Fail before any
                // partial result is produced.
                return Err(ScanError::NotFound { path: dir, source: err });
            }
            Err(err) => {
                debug!("Skipping unreadable directory {}: {err}", dir.display());
                result.folder_count += 1;
                result.unreadable.push(UnreadableDir {
                    path: dir.clone(),
                    message: err.to_string(),
                });
                result.entries.insert(dir, DirectoryEntry::default());
                continue;
            }
        };

        result.folder_count += 1;
        for name in &listing.subdirs {
            queue.push_back(dir.join(name.as_str()));
        }
        for name in &listing.files {
            result.file_count += 1;
            *result.extension_counts.entry(extension_of(name)).or_insert(0) += 1;
        }
        result.entries.insert(dir, listing);
    }

    info!(
        "Scan complete: {} folders, {} files in {:?}",
        result.folder_count,
        result.file_count,
        start.elapsed()
    );
    Ok(result)
}

/// Read one directory's immediate contents, split into subdirectory and
/// file names, both sorted.
fn list_directory(dir: &Path) -> std::io::Result<DirectoryEntry> {
    let mut entry = DirectoryEntry::default();
    for dirent in fs::read_dir(dir)? {
        let dirent = match dirent {
            Ok(d) => d,
            // Entries that vanish mid-listing are dropped from the result.
            Err(_) => continue,
        };
        let name = CompactString::new(dirent.file_name().to_string_lossy());
        // `file_type` does not follow symlinks, so a symlinked directory
        // lands in `files` and is never traversed.
        let is_dir = dirent.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_dir {
            entry.subdirs.push(name);
        } else {
            entry.files.push(name);
        }
    }
    entry.subdirs.sort_unstable();
    entry.files.sort_unstable();
    Ok(entry)
}

/// Everything a frontend needs from one finished scan.
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// The raw scan data (tree listings, totals, per-extension counts).
    pub result: ScanResult,
    /// Extension counts grouped into categories.
    pub groups: Vec<CategoryGroup>,
    /// The rendered text block for the summary area.
    pub summary: String,
    /// Wall-clock duration of the scan + classification + rendering.
    pub duration: Duration,
}

/// Terminal message delivered by a background scan.
pub type ScanOutcome = Result<Box<ScanReport>, ScanError>;

/// Handle to a scan running on a background thread.
pub struct ScanHandle {
    /// Receiver for the single terminal message.
    pub outcome_rx: Receiver<ScanOutcome>,
    /// Join handle for the scan thread.
    _thread: Option<thread::JoinHandle<()>>,
}

/// Run the blocking scan, classification, and report rendering for `path`.
///
/// This is the unit of work [`start_scan`] moves off-thread; callers that
/// do not care about thread responsiveness (tests, a CLI) can call it
/// directly.
pub fn run_to_report(path: &Path) -> Result<ScanReport, ScanError> {
    let started = Instant::now();
    let result = scan(path)?;
    let groups = analysis::classify(&result.extension_counts);
    let summary = analysis::summary_text(&result, &groups);
    Ok(ScanReport {
        result,
        groups,
        summary,
        duration: started.elapsed(),
    })
}

/// Start a scan on a background thread.
///
/// Returns a `ScanHandle` whose channel delivers the finished report or
/// the fatal error — nothing else.
pub fn start_scan(path: PathBuf) -> ScanHandle {
    let (outcome_tx, outcome_rx) = crossbeam_channel::bounded::<ScanOutcome>(1);

    let thread = thread::Builder::new()
        .name("filetally-scanner".into())
        .spawn(move || {
            let outcome = run_to_report(&path).map(Box::new);
            // The receiver may be gone if the app quit mid-scan.
            let _ = outcome_tx.send(outcome);
        })
        .expect("failed to spawn scanner thread");

    ScanHandle {
        outcome_rx,
        _thread: Some(thread),
    }
}
