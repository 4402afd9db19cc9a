/// SpaceHoarder GUI — egui-based desktop frontend.
///
/// This crate contains all UI code. Tree building and layout live in
/// `spacehoarder-core`; this crate only caches and paints the result.
pub mod app;
pub mod state;
pub mod widgets;

pub use app::{SpaceHoarderApp, SpaceHoarderState};

use anyhow::Context;
use spacehoarder_core::TreemapConfig;
use std::path::Path;

/// Load the treemap configuration, falling back to defaults when no file
/// is given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<TreemapConfig> {
    match path {
        Some(path) => TreemapConfig::load(path)
            .inspect_err(|e| tracing::warn!("Config load failed: {e}"))
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(TreemapConfig::default()),
    }
}
