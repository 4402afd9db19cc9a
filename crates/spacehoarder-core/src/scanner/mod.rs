/// Scanner module — builds the size-annotated [`Entry`] tree.
///
/// All filesystem access goes through the [`ScanSource`] capability:
/// - [`FsSource`] talks to the real filesystem via `std::fs`.
/// - [`MemorySource`] is an in-memory fake for tests and previews.
///
/// The builder itself never fails. A directory that cannot be listed, or an
/// entry that vanishes between listing and stat-ing, is logged and left out
/// of the tree; an unreadable root, or one that is neither a file nor a
/// directory, becomes an empty directory. Callers that
/// need to tell "empty" from "unreadable" can consult the [`ScanReport`].
pub mod fs;
pub mod memory;
pub mod report;

pub use fs::FsSource;
pub use memory::MemorySource;
pub use report::ScanReport;

use crate::config::TreemapConfig;
use crate::model::Entry;
use compact_str::CompactString;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// What a stat call reports about a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMeta {
    /// A regular file of `len` bytes.
    File { len: u64 },
    Directory,
    /// Anything else: symlinks, sockets, devices, pipes. Never included.
    Other,
}

/// Capability to inspect a filesystem-like hierarchy.
///
/// Errors are per path and non-fatal: the builder treats a failed
/// `list_dir` or `stat` as "this path is absent".
pub trait ScanSource {
    /// Full paths of the immediate children of the directory at `path`,
    /// in the order the builder should see them.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

    /// Kind and size of the entry at `path`.
    fn stat(&self, path: &Path) -> io::Result<EntryMeta>;
}

/// Build the entry tree rooted at `root`.
pub fn build<S: ScanSource + ?Sized>(root: &Path, source: &S, config: &TreemapConfig) -> Entry {
    build_with_report(root, source, config).0
}

/// Build the entry tree rooted at `root`, also returning scan counters.
pub fn build_with_report<S: ScanSource + ?Sized>(
    root: &Path,
    source: &S,
    config: &TreemapConfig,
) -> (Entry, ScanReport) {
    let start = Instant::now();
    let mut report = ScanReport::default();
    let name = CompactString::new(root_display_name(root));

    let entry = match source.stat(root) {
        Ok(EntryMeta::File { len }) => {
            report.files += 1;
            Entry::new_file_at(name, len, 0)
        }
        Ok(EntryMeta::Directory) => {
            match scan_dir(root, name.clone(), 0, source, config, &mut report) {
                Some(dir) => {
                    report.dirs += 1;
                    dir
                }
                None => {
                    report.skipped += 1;
                    Entry::new_dir_at(name, 0, Vec::new(), config.sort_by_size)
                }
            }
        }
        Ok(EntryMeta::Other) => {
            info!(
                "Scan root {} is neither a file nor a directory; nothing to scan",
                root.display()
            );
            report.ignored += 1;
            Entry::new_dir_at(name, 0, Vec::new(), config.sort_by_size)
        }
        Err(err) => {
            warn!("Cannot stat scan root {}: {err}", root.display());
            report.skipped += 1;
            Entry::new_dir_at(name, 0, Vec::new(), config.sort_by_size)
        }
    };

    report.duration = start.elapsed();
    info!(
        "Scanned {}: {} files, {} dirs, {} skipped, {} bytes in {:?}",
        root.display(),
        report.files,
        report.dirs,
        report.skipped,
        entry.size(),
        report.duration
    );
    (entry, report)
}

/// Recursively build the directory at `path`.
///
/// Returns `None` when the directory cannot be listed.
fn scan_dir<S: ScanSource + ?Sized>(
    path: &Path,
    name: CompactString,
    depth: u32,
    source: &S,
    config: &TreemapConfig,
    report: &mut ScanReport,
) -> Option<Entry> {
    let listing = match source.list_dir(path) {
        Ok(listing) => listing,
        Err(err) => {
            if depth == 0 {
                warn!("Cannot read scan root {}: {err}", path.display());
            } else {
                debug!("Skipping unreadable directory {}: {err}", path.display());
            }
            return None;
        }
    };

    let mut children = Vec::with_capacity(listing.len());
    for child_path in listing {
        let child_name = CompactString::new(entry_name(&child_path));
        match source.stat(&child_path) {
            Ok(EntryMeta::File { len }) => {
                report.files += 1;
                children.push(Entry::new_file_at(child_name, len, depth + 1));
            }
            Ok(EntryMeta::Directory) => {
                match scan_dir(&child_path, child_name, depth + 1, source, config, report) {
                    Some(dir) => {
                        report.dirs += 1;
                        children.push(dir);
                    }
                    None => report.skipped += 1,
                }
            }
            Ok(EntryMeta::Other) => {
                report.ignored += 1;
            }
            Err(err) => {
                // The entry may have been removed since the listing.
                debug!("Skipping {}: {err}", child_path.display());
                report.skipped += 1;
            }
        }
    }

    Some(Entry::new_dir_at(name, depth, children, config.sort_by_size))
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Derive a display name for the scan root.
///
/// For a folder this is its final component; for a path with none
/// (`/`, `C:\`) it is the path itself without trailing separators.
pub fn root_display_name(path: &Path) -> String {
    if let Some(name) = path.file_name() {
        name.to_string_lossy().into_owned()
    } else {
        let s = path.to_string_lossy();
        let trimmed = s.trim_end_matches(['/', '\\']);
        if trimmed.is_empty() {
            s.into_owned()
        } else {
            trimmed.to_string()
        }
    }
}
