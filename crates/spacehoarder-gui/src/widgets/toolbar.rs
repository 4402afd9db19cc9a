/// Top action bar -- open button and the path being shown.
use crate::state::AppState;
use egui::Ui;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        if ui
            .add(egui::Button::new("Open").min_size(egui::vec2(70.0, 24.0)))
            .on_hover_text("Pick a directory to visualise")
            .clicked()
        {
            if let Some(path) = rfd::FileDialog::new()
                .set_title("Pick a directory")
                .pick_folder()
            {
                state.open(path);
            }
        }

        ui.separator();

        let label = state
            .root_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        ui.add(egui::Label::new(label).truncate());
    });
}
