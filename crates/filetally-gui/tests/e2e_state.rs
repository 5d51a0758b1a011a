/// End-to-end tests for `AppState` — the GUI application state machine.
///
/// These tests exercise the real business-logic paths of `AppState`
/// without spinning up an egui window, keeping them fast and
/// deterministic.
///
/// **Scope:** all user-visible state transitions are covered:
///   - Scan lifecycle (start, completion, failure, re-scan reset)
///   - Visible-row seeding and expand/collapse
///
/// The real background scanner is used, so no mocking is needed.
use filetally_gui::state::{AppPhase, AppState, RowKind};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn touch(path: &Path) {
    fs::File::create(path).unwrap();
}

/// Build a minimal temp directory and return the `TempDir` guard:
///
/// ```text
/// root/
///   a.txt
///   b.bin
///   sub/
///     c.rs
/// ```
fn make_temp_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    touch(&tmp.path().join("a.txt"));
    touch(&tmp.path().join("b.bin"));
    let sub = tmp.path().join("sub");
    fs::create_dir_all(&sub).unwrap();
    touch(&sub.join("c.rs"));
    tmp
}

/// Pump `process_scan_messages()` until the phase leaves `Scanning` or the
/// deadline expires.
fn pump_until_done(state: &mut AppState) {
    let deadline = std::time::Instant::now() + Duration::from_secs(30);
    while state.phase == AppPhase::Scanning {
        assert!(
            std::time::Instant::now() < deadline,
            "scan did not complete within 30 seconds"
        );
        state.process_scan_messages();
        std::thread::sleep(Duration::from_millis(10));
    }
}

// ── Scan lifecycle ─────────────────────────────────────────────────────────────

/// A freshly created `AppState` must start in the `Idle` phase.
#[test]
fn new_state_is_idle() {
    let state = AppState::new();
    assert_eq!(state.phase, AppPhase::Idle);
    assert!(state.report.is_none());
    assert!(state.visible_rows.is_empty());
}

/// Dark mode is the startup default.
#[test]
fn default_state_is_dark_mode() {
    let state = AppState::new();
    assert!(state.dark_mode, "dark mode must be the default");
}

/// After `start_scan`, the phase must be `Scanning`.
#[test]
fn start_scan_sets_scanning_phase() {
    let tmp = make_temp_tree();
    let mut state = AppState::new();
    state.start_scan(tmp.path().to_path_buf());
    assert_eq!(state.phase, AppPhase::Scanning);
}

/// After the channel delivers the report, the phase must flip to `Results`
/// with the totals and the rendered summary available.
#[test]
fn scan_completes_and_report_is_available() {
    let tmp = make_temp_tree();
    let mut state = AppState::new();
    state.start_scan(tmp.path().to_path_buf());
    pump_until_done(&mut state);

    assert_eq!(state.phase, AppPhase::Results);
    assert!(state.scan_error.is_none());
    assert!(state.scan_duration.is_some());

    let report = state.report.as_ref().expect("report must be populated");
    assert_eq!(report.result.folder_count, 2);
    assert_eq!(report.result.file_count, 3);
    assert!(report.summary.starts_with("Total folders: 2\nTotal files: 3\n"));
}

/// A failed scan returns to `Idle` with the error message surfaced.
#[test]
fn failed_scan_returns_to_idle_with_error() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("does-not-exist");

    let mut state = AppState::new();
    state.start_scan(missing);
    pump_until_done(&mut state);

    assert_eq!(state.phase, AppPhase::Idle);
    assert!(state.report.is_none());
    let err = state.scan_error.as_ref().expect("error must be surfaced");
    assert!(err.contains("cannot scan"), "got: {err}");
}

/// Starting a second scan resets previous results and phase.
#[test]
fn start_scan_resets_previous_results() {
    let tmp = make_temp_tree();
    let mut state = AppState::new();

    // First scan.
    state.start_scan(tmp.path().to_path_buf());
    pump_until_done(&mut state);
    assert_eq!(state.phase, AppPhase::Results);
    assert!(state.report.is_some());

    // Second scan must reset state.
    state.start_scan(tmp.path().to_path_buf());
    assert_eq!(
        state.phase,
        AppPhase::Scanning,
        "phase must reset to Scanning on second start"
    );
    assert!(state.report.is_none(), "previous report must be cleared");
    assert!(state.visible_rows.is_empty());

    pump_until_done(&mut state);
    assert_eq!(state.phase, AppPhase::Results);
}

// ── Tree-view rows ─────────────────────────────────────────────────────────────

/// After completion, visible rows are seeded with the root expanded and
/// its immediate children collapsed, subfolders before files.
#[test]
fn visible_rows_seeded_root_expanded() {
    let tmp = make_temp_tree();
    let mut state = AppState::new();
    state.start_scan(tmp.path().to_path_buf());
    pump_until_done(&mut state);

    // root + sub + a.txt + b.bin
    assert_eq!(state.visible_rows.len(), 4);

    let root = &state.visible_rows[0];
    assert_eq!(root.depth, 0);
    assert_eq!(root.kind, RowKind::Folder);
    assert!(root.is_expanded);

    let names: Vec<&str> = state.visible_rows[1..]
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, vec!["sub", "a.txt", "b.bin"]);
    assert!(state.visible_rows[1..].iter().all(|r| r.depth == 1));
    assert_eq!(state.visible_rows[1].kind, RowKind::Folder);
    assert!(!state.visible_rows[1].is_expanded);
}

/// Expanding a folder inserts its children right after it.
#[test]
fn toggle_expand_adds_children() {
    let tmp = make_temp_tree();
    let mut state = AppState::new();
    state.start_scan(tmp.path().to_path_buf());
    pump_until_done(&mut state);

    let sub_idx = state
        .visible_rows
        .iter()
        .position(|r| r.name == "sub")
        .expect("sub row must exist");

    let rows_before = state.visible_rows.len();
    state.toggle_expand(sub_idx);

    assert_eq!(state.visible_rows.len(), rows_before + 1);
    assert!(state.visible_rows[sub_idx].is_expanded);
    let child = &state.visible_rows[sub_idx + 1];
    assert_eq!(child.name, "c.rs");
    assert_eq!(child.kind, RowKind::File);
    assert_eq!(child.depth, 2);
}

/// Collapsing an expanded folder removes its descendants.
#[test]
fn toggle_expand_collapse_removes_descendants() {
    let tmp = make_temp_tree();
    let mut state = AppState::new();
    state.start_scan(tmp.path().to_path_buf());
    pump_until_done(&mut state);

    let sub_idx = state
        .visible_rows
        .iter()
        .position(|r| r.name == "sub")
        .expect("sub row must exist");

    state.toggle_expand(sub_idx);
    let expanded_len = state.visible_rows.len();
    state.toggle_expand(sub_idx);

    assert_eq!(state.visible_rows.len(), expanded_len - 1);
    assert!(!state.visible_rows[sub_idx].is_expanded);
}

/// Collapsing the root removes everything below it.
#[test]
fn collapse_root_removes_all_children() {
    let tmp = make_temp_tree();
    let mut state = AppState::new();
    state.start_scan(tmp.path().to_path_buf());
    pump_until_done(&mut state);

    state.toggle_expand(0);
    assert_eq!(state.visible_rows.len(), 1, "only the root row remains");
    assert!(!state.visible_rows[0].is_expanded);

    // And expanding again restores the children.
    state.toggle_expand(0);
    assert_eq!(state.visible_rows.len(), 4);
}

/// Toggling a file row is a no-op.
#[test]
fn toggle_expand_on_file_is_noop() {
    let tmp = make_temp_tree();
    let mut state = AppState::new();
    state.start_scan(tmp.path().to_path_buf());
    pump_until_done(&mut state);

    let file_idx = state
        .visible_rows
        .iter()
        .position(|r| r.kind == RowKind::File)
        .expect("a file row must exist");

    let rows_before = state.visible_rows.len();
    state.toggle_expand(file_idx);
    assert_eq!(state.visible_rows.len(), rows_before);
}
