/// SpaceHoarder Core — entry tree building and treemap layout.
///
/// This crate contains all business logic with zero UI dependencies.
/// Frontends hand it a root path and a viewport and get back a flat list of
/// rectangles to paint.
///
/// # Modules
///
/// - [`config`] — Palette, label metrics and sort policy as one explicit value.
/// - [`model`] — Immutable, size-annotated file/directory tree, plus size formatting.
/// - [`scanner`] — Builds the tree through a pluggable filesystem capability.
/// - [`layout`] — Recursive binary space partition into nested rectangles.
/// - [`error`] — Configuration errors.
pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod scanner;

pub use config::{Rgb, TreemapConfig};
pub use error::ConfigError;
pub use layout::{layout, PlacedRect, Viewport};
pub use model::{Entry, EntryKind};
