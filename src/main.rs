//! SpaceHoarder — disk usage treemap.
//!
//! Thin binary entry point. All logic lives in the `spacehoarder-core`
//! and `spacehoarder-gui` crates.

use clap::Parser;
use std::path::PathBuf;

/// Visualise a directory as nested, size-proportional rectangles.
#[derive(Debug, Parser)]
#[command(name = "spacehoarder", version, about)]
struct Cli {
    /// Directory to open on start-up.
    path: Option<PathBuf>,

    /// JSON file with palette, font size, pad and sort settings.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let cli = Cli::parse();
    tracing::info!("SpaceHoarder starting");

    let config = spacehoarder_gui::load_config(cli.config.as_deref())?;

    // Scan the initial path *before* opening the window so the first
    // rendered frame already shows the treemap.
    let state = spacehoarder_gui::SpaceHoarderState::build(cli.path, config);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("SpaceHoarder")
            .with_inner_size([700.0, 450.0])
            .with_min_inner_size([200.0, 150.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SpaceHoarder",
        options,
        Box::new(|cc| {
            Ok(Box::new(spacehoarder_gui::SpaceHoarderApp::with_state(
                cc, state,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
