/// Real-filesystem [`ScanSource`] backed by `std::fs`.
///
/// Entries are stat-ed with `symlink_metadata`, so symbolic links are
/// reported as [`EntryMeta::Other`] and never followed. This keeps the
/// walk free of cycles and avoids double-counting linked trees.
use super::{EntryMeta, ScanSource};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl FsSource {
    pub fn new() -> Self {
        Self
    }
}

impl ScanSource for FsSource {
    /// List a directory, ordered by file name.
    ///
    /// `read_dir` order is platform- and filesystem-dependent; sorting by name
    /// makes two scans of an unchanged tree produce identical results.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(path)? {
            match entry {
                Ok(entry) => paths.push(entry.path()),
                Err(err) => {
                    tracing::debug!("Skipping unreadable entry in {}: {err}", path.display());
                }
            }
        }
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(paths)
    }

    fn stat(&self, path: &Path) -> io::Result<EntryMeta> {
        let meta = fs::symlink_metadata(path)?;
        let file_type = meta.file_type();
        Ok(if file_type.is_file() {
            EntryMeta::File { len: meta.len() }
        } else if file_type.is_dir() {
            EntryMeta::Directory
        } else {
            EntryMeta::Other
        })
    }
}
