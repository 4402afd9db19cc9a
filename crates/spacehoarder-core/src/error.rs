/// Error types for the fallible edges of the core: loading configuration.
///
/// Scanning and layout never fail. Unreadable paths are skipped and
/// degenerate geometry produces no rectangles, so the only errors that
/// reach a caller come from reading and validating a config file.
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a [`TreemapConfig`](crate::config::TreemapConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON or has unexpected fields.
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A palette entry is not a six-digit hex colour.
    #[error("invalid colour {0:?}: expected six hex digits, e.g. \"fb4b2d\"")]
    InvalidColor(String),

    /// The palette has no colours, so no colour index could be resolved.
    #[error("palette must contain at least one colour")]
    EmptyPalette,

    /// `pad` or `font_size` is beyond the supported pixel range.
    #[error("{field} = {value} is too large (maximum {max})")]
    MetricTooLarge {
        field: &'static str,
        value: u32,
        max: u32,
    },
}
