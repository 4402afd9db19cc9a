/// UI widgets for SpaceHoarder.

pub mod status_bar;
pub mod toolbar;
pub mod treemap;
