/// Layout engine — turns an [`Entry`] tree into nested treemap rectangles.
///
/// The layout is a pure function of `(tree, viewport, config)`: no state is
/// carried between calls and every call allocates a fresh list, so it is
/// safe to call repeatedly (or from several threads) with the same tree.
///
/// Rectangles are emitted depth-first in pre-order: each directory comes
/// before its contents. Directories reserve a header band of
/// `font_size + 2 * pad` at the top and a `pad` border on the other sides;
/// their children share the interior.
pub mod rect;
mod splitter;

pub use rect::PlacedRect;

use crate::config::TreemapConfig;
use crate::model::Entry;
use splitter::Splitter;
use tracing::debug;

/// Target drawing area in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Compute the rectangles for `root` filling `viewport`.
///
/// Never fails: degenerate geometry (zero area, empty or all-zero groups)
/// just produces fewer rectangles, possibly none.
pub fn layout(root: &Entry, viewport: Viewport, config: &TreemapConfig) -> Vec<PlacedRect> {
    let width = i32::try_from(viewport.width).unwrap_or(i32::MAX);
    let height = i32::try_from(viewport.height).unwrap_or(i32::MAX);

    let mut splitter = Splitter::new(config);
    splitter.place_entry(root, 0, 0, width, height);

    debug!(
        "Laid out {} rects for {} at {}x{}",
        splitter.rects.len(),
        root.name(),
        viewport.width,
        viewport.height
    );
    splitter.rects
}
