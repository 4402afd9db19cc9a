/// Scan counters returned alongside the built tree.
///
/// The tree itself is the result; these are lightweight totals for status
/// display and for telling "genuinely empty" apart from "could not read".
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Regular files included in the tree.
    pub files: u64,
    /// Directories included in the tree, the root included.
    pub dirs: u64,
    /// Paths left out because they could not be listed or stat-ed.
    pub skipped: u64,
    /// Symlinks, sockets, devices and other non-regular entries left out.
    pub ignored: u64,
    /// Wall-clock time of the scan.
    pub duration: Duration,
}

impl ScanReport {
    /// `true` if at least one path was left out due to an access error.
    pub fn is_partial(&self) -> bool {
        self.skipped > 0
    }
}
