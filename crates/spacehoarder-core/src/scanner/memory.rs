/// In-memory [`ScanSource`] — a fake filesystem for tests and previews.
///
/// Paths are registered with `add_*` helpers; missing ancestor directories
/// are created on demand. Listing order is registration order, which lets
/// tests pin down exactly what order the builder sees.
use super::{EntryMeta, ScanSource};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
enum FakeNode {
    File { len: u64 },
    Dir { children: Vec<PathBuf>, readable: bool },
    Other,
    /// Listed by its parent but gone by the time it is stat-ed.
    Vanished,
}

#[derive(Debug, Clone)]
pub struct MemorySource {
    nodes: HashMap<PathBuf, FakeNode>,
}

impl MemorySource {
    /// Create a fake filesystem containing only the directory `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let mut nodes = HashMap::new();
        nodes.insert(
            root.into(),
            FakeNode::Dir {
                children: Vec::new(),
                readable: true,
            },
        );
        Self { nodes }
    }

    pub fn add_file(&mut self, path: impl AsRef<Path>, len: u64) {
        self.insert(path.as_ref(), FakeNode::File { len });
    }

    pub fn add_dir(&mut self, path: impl AsRef<Path>) {
        self.ensure_dir(path.as_ref());
    }

    /// Add a symlink, socket or other non-regular entry.
    pub fn add_other(&mut self, path: impl AsRef<Path>) {
        self.insert(path.as_ref(), FakeNode::Other);
    }

    /// Add an entry that shows up in its parent's listing but cannot be stat-ed.
    pub fn add_vanished(&mut self, path: impl AsRef<Path>) {
        self.insert(path.as_ref(), FakeNode::Vanished);
    }

    /// Make an existing (or new) directory fail to list.
    pub fn deny(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.ensure_dir(path);
        if let Some(FakeNode::Dir { readable, .. }) = self.nodes.get_mut(path) {
            *readable = false;
        }
    }

    fn insert(&mut self, path: &Path, node: FakeNode) {
        if let Some(parent) = path.parent() {
            self.ensure_dir(parent);
            self.link(parent, path);
        }
        self.nodes.insert(path.to_path_buf(), node);
    }

    /// Create `path` and any missing ancestors as readable directories.
    fn ensure_dir(&mut self, path: &Path) {
        if self.nodes.contains_key(path) {
            return;
        }
        if let Some(parent) = path.parent() {
            self.ensure_dir(parent);
            self.link(parent, path);
        }
        self.nodes.insert(
            path.to_path_buf(),
            FakeNode::Dir {
                children: Vec::new(),
                readable: true,
            },
        );
    }

    fn link(&mut self, parent: &Path, child: &Path) {
        if let Some(FakeNode::Dir { children, .. }) = self.nodes.get_mut(parent) {
            if !children.iter().any(|c| c == child) {
                children.push(child.to_path_buf());
            }
        }
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("{} does not exist", path.display()),
    )
}

impl ScanSource for MemorySource {
    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        match self.nodes.get(path) {
            Some(FakeNode::Dir {
                children,
                readable: true,
            }) => Ok(children.clone()),
            Some(FakeNode::Dir { readable: false, .. }) => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is not readable", path.display()),
            )),
            Some(FakeNode::File { .. }) | Some(FakeNode::Other) => Err(io::Error::new(
                io::ErrorKind::Other,
                format!("{} is not a directory", path.display()),
            )),
            Some(FakeNode::Vanished) | None => Err(not_found(path)),
        }
    }

    fn stat(&self, path: &Path) -> io::Result<EntryMeta> {
        match self.nodes.get(path) {
            Some(FakeNode::File { len }) => Ok(EntryMeta::File { len: *len }),
            Some(FakeNode::Dir { .. }) => Ok(EntryMeta::Directory),
            Some(FakeNode::Other) => Ok(EntryMeta::Other),
            Some(FakeNode::Vanished) | None => Err(not_found(path)),
        }
    }
}
