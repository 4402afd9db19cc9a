/// Bottom status bar -- scan totals and a partial-scan warning.
use crate::state::AppState;
use egui::Ui;
use spacehoarder_core::model::size::{format_count, format_size};
use spacehoarder_core::scanner::ScanReport;

/// Draw the status bar.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let (Some(tree), Some(report)) = (&state.tree, &state.report) else {
            ui.label(egui::RichText::new("Ready").color(ui.visuals().weak_text_color()));
            return;
        };

        ui.label(summary(tree.size(), report));
        ui.separator();
        ui.label(format!("scanned in {:.2?}", report.duration));

        if report.is_partial() {
            ui.separator();
            let skipped = format!("{} unreadable paths skipped", format_count(report.skipped));
            ui.label(egui::RichText::new(skipped).color(ui.visuals().warn_fg_color));
        }
    });
}

/// Totals line, e.g. `"11.50 GB in 1,204 files, 87 folders"`.
pub fn summary(total_bytes: u64, report: &ScanReport) -> String {
    format!(
        "{} in {} files, {} folders",
        format_size(total_bytes),
        format_count(report.files),
        format_count(report.dirs)
    )
}
