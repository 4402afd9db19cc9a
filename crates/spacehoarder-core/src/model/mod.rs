/// Data model for the SpaceHoarder entry tree.
pub mod entry;
pub mod size;

pub use entry::{Entry, EntryKind};
