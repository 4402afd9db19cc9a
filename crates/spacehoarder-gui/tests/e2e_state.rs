/// End-to-end tests for `AppState` — open a directory, cache its layout.
///
/// These tests exercise the real scan + layout path without spinning up an
/// egui window, keeping them fast and deterministic.
///
/// **Scope:**
///   - Opening a root builds the tree and report
///   - The rectangle list is recomputed only on a viewport change or re-open
///   - Hit testing returns the innermost rectangle
///   - Config loading
///   - Status bar totals
use spacehoarder_core::scanner::ScanReport;
use spacehoarder_core::{TreemapConfig, Viewport};
use spacehoarder_gui::state::AppState;
use spacehoarder_gui::widgets::status_bar;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn write_bytes(path: &Path, n: usize) {
    let mut f = fs::File::create(path).unwrap();
    f.write_all(&vec![0u8; n]).unwrap();
}

/// Build a minimal temp directory and return the `TempDir` guard.
fn make_temp_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("a.txt"), 100);
    write_bytes(&tmp.path().join("b.bin"), 200);
    let sub = tmp.path().join("sub");
    fs::create_dir_all(&sub).unwrap();
    write_bytes(&sub.join("c.rs"), 300);
    tmp
}

// ── Open ──────────────────────────────────────────────────────────────────────

#[test]
fn new_state_has_nothing_to_draw() {
    let mut state = AppState::new(TreemapConfig::default());
    assert!(!state.ensure_layout(Viewport::new(700, 450)));
    assert!(state.rects().is_empty());
    assert_eq!(state.layout_passes, 0);
}

#[test]
fn open_builds_tree_and_report() {
    let tmp = make_temp_tree();
    let mut state = AppState::new(TreemapConfig::default());
    state.open(tmp.path().to_path_buf());

    let tree = state.tree.as_ref().expect("tree must be populated after open");
    assert_eq!(tree.size(), 600);
    let report = state.report.as_ref().unwrap();
    assert_eq!(report.files, 3);
    assert_eq!(report.dirs, 2);
    assert_eq!(state.root_path.as_deref(), Some(tmp.path()));
}

// ── Layout cache ──────────────────────────────────────────────────────────────

#[test]
fn layout_is_cached_per_viewport() {
    let tmp = make_temp_tree();
    let mut state = AppState::new(TreemapConfig::default());
    state.open(tmp.path().to_path_buf());

    assert!(state.ensure_layout(Viewport::new(700, 450)));
    // root + sub + 3 files
    assert_eq!(state.rects().len(), 5);
    assert!(!state.ensure_layout(Viewport::new(700, 450)));
    assert_eq!(state.layout_passes, 1);

    assert!(state.ensure_layout(Viewport::new(640, 480)));
    assert_eq!(state.layout_passes, 2);
    assert_eq!(state.rects()[0].w, 640);
}

#[test]
fn reopening_invalidates_the_cache() {
    let tmp = make_temp_tree();
    let other = TempDir::new().unwrap();
    write_bytes(&other.path().join("only.dat"), 50);

    let mut state = AppState::new(TreemapConfig::default());
    state.open(tmp.path().to_path_buf());
    state.ensure_layout(Viewport::new(700, 450));
    assert_eq!(state.rects().len(), 5);

    state.open(other.path().to_path_buf());
    assert!(state.rects().is_empty(), "stale rects must be dropped on open");
    assert!(state.ensure_layout(Viewport::new(700, 450)));
    assert_eq!(state.rects().len(), 2);
    assert_eq!(state.rects()[1].name, "only.dat");
}

#[test]
fn tiny_viewport_yields_no_rects() {
    let tmp = make_temp_tree();
    let mut state = AppState::new(TreemapConfig::default());
    state.open(tmp.path().to_path_buf());
    state.ensure_layout(Viewport::new(0, 0));
    assert!(state.rects().is_empty());
}

// ── Hit testing ───────────────────────────────────────────────────────────────

#[test]
fn rect_at_returns_innermost() {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("only.dat"), 50);
    let mut state = AppState::new(TreemapConfig::default());
    state.open(tmp.path().to_path_buf());
    state.ensure_layout(Viewport::new(200, 100));

    // Header band belongs to the root; the interior to the file.
    let header_hit = state.rect_at(50, 3).unwrap();
    assert!(header_hit.is_container);
    let inner_hit = state.rect_at(50, 50).unwrap();
    assert_eq!(inner_hit.name, "only.dat");
    assert!(state.rect_at(500, 500).is_none());
}

// ── Config ────────────────────────────────────────────────────────────────────

#[test]
fn load_config_defaults_without_file() {
    let config = spacehoarder_gui::load_config(None).unwrap();
    assert_eq!(config, TreemapConfig::default());
}

#[test]
fn load_config_reports_bad_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("bad.json");
    fs::write(&path, "{ not json").unwrap();
    let err = spacehoarder_gui::load_config(Some(&path)).unwrap_err();
    assert!(format!("{err:#}").contains("bad.json"));
}

#[test]
fn config_changes_layout_metrics() {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("only.dat"), 50);
    let config = TreemapConfig {
        font_size: 20,
        pad: 5,
        ..TreemapConfig::default()
    };
    let mut state = AppState::new(config);
    state.open(tmp.path().to_path_buf());
    state.ensure_layout(Viewport::new(200, 100));

    let file = &state.rects()[1];
    // header = 20 + 2 * 5 = 30
    assert_eq!((file.x, file.y, file.w, file.h), (5, 30, 190, 65));
}

// ── Status bar ────────────────────────────────────────────────────────────────

#[test]
fn summary_uses_readable_units() {
    let report = ScanReport {
        files: 1_204,
        dirs: 87,
        ..ScanReport::default()
    };
    assert_eq!(
        status_bar::summary(12_345_678_901, &report),
        "11.50 GB in 1,204 files, 87 folders"
    );
}

#[test]
fn summary_after_open() {
    let tmp = make_temp_tree();
    let mut state = AppState::new(TreemapConfig::default());
    state.open(tmp.path().to_path_buf());
    let text = status_bar::summary(
        state.tree.as_ref().unwrap().size(),
        state.report.as_ref().unwrap(),
    );
    assert_eq!(text, "600 B in 3 files, 2 folders");
}
