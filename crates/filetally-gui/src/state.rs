/// Application state management.
///
/// Centralises all mutable state that the UI reads and writes. The scan
/// thread communicates via a channel; state updates happen in
/// `process_scan_messages()` which runs once per frame and applies the
/// scan's single terminal message.
use compact_str::CompactString;
use crossbeam_channel::TryRecvError;
use filetally_core::model::ScanResult;
use filetally_core::scanner::{self, ScanHandle, ScanReport};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

/// The current phase of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    /// Idle — no scan in progress, possibly showing an error.
    Idle,
    /// Scanning — the background walk is running.
    Scanning,
    /// Scan complete — results are available.
    Results,
}

/// What a visible row points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Folder,
    File,
}

/// A row in the flattened visible-rows list for the virtualised tree view.
#[derive(Clone, Debug)]
pub struct VisibleRow {
    /// Full path of the folder or file.
    pub path: PathBuf,
    /// Display name (the root shows its own name, or the whole path for
    /// roots like `/`).
    pub name: CompactString,
    pub kind: RowKind,
    /// Nesting depth (0 = root).
    pub depth: u16,
    /// Whether this folder is currently expanded (meaningless for files).
    pub is_expanded: bool,
}

/// Maximum rows in the virtualised tree-view visible-rows list.
///
/// Each row owns a path allocation, so the cap keeps a fully-expanded
/// multi-million-entry tree from allocating without bound. Users can
/// collapse nodes to explore deeper subtrees.
pub const MAX_VISIBLE_ROWS: usize = 200_000;

/// All application state.
pub struct AppState {
    // ── Input ──────────────────────────────────────────
    /// Contents of the toolbar path box.
    pub path_input: String,

    // ── Scan ───────────────────────────────────────────
    pub phase: AppPhase,
    pub scan_handle: Option<ScanHandle>,
    /// Error message from the most recent failed scan.
    pub scan_error: Option<String>,
    pub scan_duration: Option<Duration>,

    // ── Results ────────────────────────────────────────
    /// The completed report (set once the scan finishes).
    pub report: Option<ScanReport>,
    pub visible_rows: Vec<VisibleRow>,
    pub selected_path: Option<PathBuf>,

    // ── UI state ───────────────────────────────────────
    pub show_about: bool,
    /// `true` = dark mode (default), `false` = light mode.
    pub dark_mode: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create initial application state.
    pub fn new() -> Self {
        Self {
            path_input: String::new(),
            phase: AppPhase::Idle,
            scan_handle: None,
            scan_error: None,
            scan_duration: None,
            report: None,
            visible_rows: Vec::new(),
            selected_path: None,
            show_about: false,
            dark_mode: true,
        }
    }

    /// Start a scan of `path` on the background thread.
    pub fn start_scan(&mut self, path: PathBuf) {
        // Reset scan state.
        self.phase = AppPhase::Scanning;
        self.scan_error = None;
        self.scan_duration = None;
        self.report = None;
        self.visible_rows.clear();
        self.selected_path = None;

        self.scan_handle = Some(scanner::start_scan(path));
    }

    /// Process the scan's terminal message, if it has arrived. Called once
    /// per frame.
    ///
    /// Returns `true` if state changed and the UI should repaint.
    pub fn process_scan_messages(&mut self) -> bool {
        let handle = match &self.scan_handle {
            Some(h) => h,
            None => return false,
        };

        match handle.outcome_rx.try_recv() {
            Ok(Ok(report)) => {
                self.scan_duration = Some(report.duration);
                self.build_initial_visible_rows(&report.result);
                self.report = Some(*report);
                self.phase = AppPhase::Results;
                self.scan_handle = None;
                true
            }
            Ok(Err(err)) => {
                warn!("Scan failed: {err}");
                self.scan_error = Some(err.to_string());
                self.phase = AppPhase::Idle;
                self.scan_handle = None;
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                // The thread died without sending — should not happen, but
                // the UI must not stay in Scanning forever if it does.
                warn!("Scanner thread exited without reporting");
                self.scan_error = Some("scanner thread exited without reporting".to_string());
                self.phase = AppPhase::Idle;
                self.scan_handle = None;
                true
            }
        }
    }

    /// Build the initial visible rows: the root expanded, its immediate
    /// children collapsed.
    fn build_initial_visible_rows(&mut self, result: &ScanResult) {
        self.visible_rows.clear();

        self.visible_rows.push(VisibleRow {
            name: CompactString::new(root_display_name(&result.root)),
            path: result.root.clone(),
            kind: RowKind::Folder,
            depth: 0,
            is_expanded: true,
        });

        let headroom = MAX_VISIBLE_ROWS.saturating_sub(self.visible_rows.len());
        self.visible_rows
            .extend(child_rows(result, &result.root, 1).into_iter().take(headroom));
    }

    /// Toggle expansion of the folder at the given row index.
    pub fn toggle_expand(&mut self, row_index: usize) {
        if let Some(ref report) = self.report {
            toggle_expand_inner(&mut self.visible_rows, row_index, &report.result);
        }
    }
}

/// Toggle-expand implementation operating on the visible_rows vec directly.
///
/// Free function to avoid a `&mut self` / `&self.report` borrow conflict.
fn toggle_expand_inner(
    visible_rows: &mut Vec<VisibleRow>,
    row_index: usize,
    result: &ScanResult,
) {
    let Some(row) = visible_rows.get(row_index) else {
        return;
    };
    if row.kind != RowKind::Folder {
        return; // files can't be expanded
    }

    if row.is_expanded {
        // COLLAPSE: remove all descendants (rows with depth > this row's
        // depth) that follow consecutively.
        let parent_depth = row.depth;
        let remove_start = row_index + 1;
        let mut remove_end = remove_start;
        while remove_end < visible_rows.len() && visible_rows[remove_end].depth > parent_depth {
            remove_end += 1;
        }
        visible_rows.drain(remove_start..remove_end);
        visible_rows[row_index].is_expanded = false;
    } else {
        // EXPAND: insert the folder's children immediately after this row.
        // Respect MAX_VISIBLE_ROWS: only add as many as headroom allows.
        let parent_path = row.path.clone();
        let children = child_rows(result, &parent_path, row.depth + 1);
        let insert_pos = row_index + 1;
        let headroom = MAX_VISIBLE_ROWS.saturating_sub(visible_rows.len());

        visible_rows.splice(
            insert_pos..insert_pos,
            children.into_iter().take(headroom),
        );
        visible_rows[row_index].is_expanded = true;
    }
}

/// Rows for one folder's immediate children: subfolders first, then files,
/// each list in its recorded (sorted) order.
fn child_rows(result: &ScanResult, dir: &Path, depth: u16) -> Vec<VisibleRow> {
    let Some(entry) = result.entry(dir) else {
        return Vec::new();
    };

    let mut rows = Vec::with_capacity(entry.item_count());
    for name in &entry.subdirs {
        rows.push(VisibleRow {
            path: dir.join(name.as_str()),
            name: name.clone(),
            kind: RowKind::Folder,
            depth,
            is_expanded: false,
        });
    }
    for name in &entry.files {
        rows.push(VisibleRow {
            path: dir.join(name.as_str()),
            name: name.clone(),
            kind: RowKind::File,
            depth,
            is_expanded: false,
        });
    }
    rows
}

/// Derive a display name for the scan root.
fn root_display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().to_string(),
        None => path.to_string_lossy().to_string(),
    }
}
