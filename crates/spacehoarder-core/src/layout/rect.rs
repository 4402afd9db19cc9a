use crate::config::TreemapConfig;
use crate::model::Entry;
use compact_str::CompactString;

/// A rectangle in the treemap, ready for rendering and hit testing.
///
/// Coordinates are integer pixels relative to the viewport origin.
/// Every emitted rectangle has `w >= 0` and `h >= 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub name: CompactString,
    /// `depth % palette.len()` of the source entry.
    pub color_index: usize,
    /// Directories reserve a header band for their label; files do not.
    pub is_container: bool,
    /// Depth of the source entry. Rectangles are emitted in pre-order, so a
    /// rectangle's parent is the nearest earlier one at `depth - 1`.
    pub depth: u32,
}

impl PlacedRect {
    pub(crate) fn for_entry(entry: &Entry, x: i32, y: i32, w: i32, h: i32, palette_len: usize) -> Self {
        Self {
            x,
            y,
            w,
            h,
            name: CompactString::new(entry.name()),
            color_index: entry.depth() as usize % palette_len.max(1),
            is_container: entry.is_dir(),
            depth: entry.depth(),
        }
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[inline]
    pub fn area(&self) -> i64 {
        i64::from(self.w) * i64::from(self.h)
    }

    /// Half-open containment test: the right and bottom edges are outside.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Whether the rectangle is big enough to carry its name.
    pub fn shows_label(&self, config: &TreemapConfig) -> bool {
        let threshold = i64::from(config.label_threshold());
        i64::from(self.w.min(self.h)) > threshold
    }

    /// Text baseline origin: inset by `pad`, one font height below the top.
    pub fn label_anchor(&self, config: &TreemapConfig) -> (i32, i32) {
        let pad = i32::try_from(config.pad).unwrap_or(i32::MAX);
        let font = i32::try_from(config.font_size).unwrap_or(i32::MAX);
        (
            self.x.saturating_add(pad),
            self.y.saturating_add(font).saturating_add(pad),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(w: i32, h: i32) -> PlacedRect {
        PlacedRect::for_entry(&Entry::file("f", 1), 5, 7, w, h, 10)
    }

    #[test]
    fn test_label_threshold_uses_shorter_side() {
        let config = TreemapConfig::default(); // threshold 10
        assert!(rect(11, 11).shows_label(&config));
        assert!(!rect(10, 200).shows_label(&config));
        assert!(!rect(200, 10).shows_label(&config));
    }

    #[test]
    fn test_label_anchor() {
        let config = TreemapConfig::default();
        assert_eq!(rect(50, 50).label_anchor(&config), (6, 16));

        let huge = TreemapConfig {
            pad: u32::MAX,
            ..TreemapConfig::default()
        };
        assert_eq!(rect(50, 50).label_anchor(&huge), (i32::MAX, i32::MAX));
    }

    #[test]
    fn test_contains_is_half_open() {
        let r = rect(10, 10);
        assert!(r.contains(5, 7));
        assert!(r.contains(14, 16));
        assert!(!r.contains(15, 7));
        assert!(!r.contains(5, 17));
        assert_eq!(r.area(), 100);
    }
}
