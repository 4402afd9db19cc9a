/// Main `eframe::App` implementation for SpaceHoarder.
///
/// Toolbar on top, status bar at the bottom, treemap in the middle.
use crate::state::AppState;
use crate::widgets;
use spacehoarder_core::TreemapConfig;
use std::path::PathBuf;

/// Pre-built application state.
///
/// Construct this **before** calling `eframe::run_native` so that the
/// initial scan of a path given on the command line completes before the
/// window is created, and the first frame already has something to draw.
pub struct SpaceHoarderState {
    pub(crate) inner: AppState,
}

impl SpaceHoarderState {
    /// Create the state and scan `initial_path` if one was given.
    pub fn build(initial_path: Option<PathBuf>, config: TreemapConfig) -> Self {
        let mut state = AppState::new(config);
        if let Some(path) = initial_path {
            state.open(path);
        }
        Self { inner: state }
    }
}

/// The SpaceHoarder application.
pub struct SpaceHoarderApp {
    state: AppState,
}

impl SpaceHoarderApp {
    /// Create a new application instance from pre-built state.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: SpaceHoarderState) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self { state: state.inner }
    }
}

impl eframe::App for SpaceHoarderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(32.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &mut self.state);
                ui.add_space(4.0);
            });

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(22.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state);
                ui.add_space(2.0);
            });

        // ── Central panel (Treemap) ───────────────────────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                widgets::treemap::treemap(ui, &mut self.state);
            });
    }
}
