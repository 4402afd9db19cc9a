/// Application state management.
///
/// Owns the scanned tree and the rectangle list derived from it. The list
/// is only recomputed when the drawing area changes size or a new root is
/// opened; every other frame repaints the cached list.
use spacehoarder_core::scanner::{self, FsSource, ScanReport};
use spacehoarder_core::{layout, Entry, PlacedRect, TreemapConfig, Viewport};
use std::path::PathBuf;
use tracing::info;

/// All application state.
pub struct AppState {
    config: TreemapConfig,

    // ── Scan ───────────────────────────────────────────
    /// The directory currently shown, as picked by the user.
    pub root_path: Option<PathBuf>,
    /// Tree built from `root_path`.
    pub tree: Option<Entry>,
    /// Counters from the most recent scan.
    pub report: Option<ScanReport>,

    // ── Layout cache ───────────────────────────────────
    rects: Vec<PlacedRect>,
    /// Viewport the cached `rects` were computed for; `None` = stale.
    laid_out_for: Option<Viewport>,
    /// Number of layout computations so far.
    pub layout_passes: u64,
}

impl AppState {
    pub fn new(config: TreemapConfig) -> Self {
        Self {
            config,
            root_path: None,
            tree: None,
            report: None,
            rects: Vec::new(),
            laid_out_for: None,
            layout_passes: 0,
        }
    }

    pub fn config(&self) -> &TreemapConfig {
        &self.config
    }

    /// Scan `path` and make it the displayed root.
    pub fn open(&mut self, path: PathBuf) {
        info!("Opening {}", path.display());
        let (tree, report) = scanner::build_with_report(&path, &FsSource::new(), &self.config);
        self.tree = Some(tree);
        self.report = Some(report);
        self.root_path = Some(path);
        self.rects.clear();
        self.laid_out_for = None;
    }

    /// Recompute the rectangles if the viewport changed since the last pass.
    ///
    /// Returns `true` if a layout pass ran.
    pub fn ensure_layout(&mut self, viewport: Viewport) -> bool {
        if self.laid_out_for == Some(viewport) {
            return false;
        }
        let Some(tree) = &self.tree else {
            return false;
        };
        self.rects = layout(tree, viewport, &self.config);
        self.laid_out_for = Some(viewport);
        self.layout_passes += 1;
        true
    }

    /// Rectangles from the most recent layout pass, in paint order.
    pub fn rects(&self) -> &[PlacedRect] {
        &self.rects
    }

    /// The innermost rectangle under the point, if any.
    ///
    /// Rectangles are in pre-order, so the last hit is the deepest.
    pub fn rect_at(&self, x: i32, y: i32) -> Option<&PlacedRect> {
        self.rects.iter().rev().find(|r| r.contains(x, y))
    }
}
