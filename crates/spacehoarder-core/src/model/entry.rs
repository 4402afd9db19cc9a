/// A single file or directory in the size-annotated tree.
///
/// Entries are immutable once built. A directory owns its children directly
/// (`Vec<Entry>`), and its `size` is fixed at construction as the sum of its
/// children's sizes, so the invariant `dir.size == Σ child.size` holds for
/// every directory in every tree.
use compact_str::CompactString;

/// File vs directory, with the directory's children carried in the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory { children: Vec<Entry> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// File or directory name only (NOT the full path).
    name: CompactString,

    /// Logical size in bytes. For directories, the sum of all children.
    size: u64,

    /// Distance from the scan root (root = 0). Only used for colouring.
    depth: u32,

    kind: EntryKind,
}

impl Entry {
    /// Create a file entry at depth 0.
    pub fn file(name: impl Into<CompactString>, size: u64) -> Self {
        Self::new_file_at(name.into(), size, 0)
    }

    /// Create a directory entry at depth 0 from already-built children.
    ///
    /// Children are re-based to depth 1 (and their descendants accordingly),
    /// and sorted ascending by size when `sort_by_size` is set. The sort is
    /// stable, so equal sizes keep the order they were given in.
    pub fn directory(name: impl Into<CompactString>, children: Vec<Entry>, sort_by_size: bool) -> Self {
        let children = children.into_iter().map(|c| c.rebased(1)).collect();
        Self::new_dir_at(name.into(), 0, children, sort_by_size)
    }

    pub(crate) fn new_file_at(name: CompactString, size: u64, depth: u32) -> Self {
        Self {
            name,
            size,
            depth,
            kind: EntryKind::File,
        }
    }

    /// Assemble a directory whose children already carry `depth + 1`.
    pub(crate) fn new_dir_at(
        name: CompactString,
        depth: u32,
        mut children: Vec<Entry>,
        sort_by_size: bool,
    ) -> Self {
        debug_assert!(children.iter().all(|c| c.depth == depth + 1));
        if sort_by_size {
            children.sort_by_key(|c| c.size);
        }
        let size = children.iter().map(|c| c.size).sum();
        Self {
            name,
            size,
            depth,
            kind: EntryKind::Directory { children },
        }
    }

    fn rebased(mut self, depth: u32) -> Self {
        self.depth = depth;
        if let EntryKind::Directory { children } = &mut self.kind {
            let taken = std::mem::take(children);
            *children = taken.into_iter().map(|c| c.rebased(depth + 1)).collect();
        }
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    pub fn kind(&self) -> &EntryKind {
        &self.kind
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Directory { .. })
    }

    /// Direct children; always empty for files.
    pub fn children(&self) -> &[Entry] {
        match &self.kind {
            EntryKind::File => &[],
            EntryKind::Directory { children } => children,
        }
    }
}
