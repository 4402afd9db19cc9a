/// Treemap widget — paints the cached rectangle list.
///
/// Each rectangle is filled with its palette colour. Rectangles large
/// enough for text get their name drawn in black, clipped to the rectangle
/// minus one `pad` on the right and bottom so neighbouring labels never run
/// together. Hovering shows the name and kind of the innermost rectangle.
use crate::state::AppState;
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Ui, Vec2};
use spacehoarder_core::{PlacedRect, Rgb, Viewport};

/// Draw the treemap into all remaining space.
pub fn treemap(ui: &mut Ui, state: &mut AppState) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
    let bounds = response.rect;
    let origin = bounds.min;

    if state.tree.is_none() {
        painter.text(
            bounds.center(),
            Align2::CENTER_CENTER,
            "Open a directory to see where its space goes.",
            FontId::proportional(14.0),
            ui.visuals().weak_text_color(),
        );
        return;
    }

    let viewport = Viewport::new(bounds.width().max(0.0) as u32, bounds.height().max(0.0) as u32);
    state.ensure_layout(viewport);

    let config = state.config();
    let pad = config.pad as f32;
    let font = FontId::proportional(config.font_size as f32);

    for pr in state.rects() {
        let rect = to_screen(origin, pr);
        painter.rect_filled(rect, 0.0, to_color32(config.color(pr.color_index)));

        if pr.shows_label(config) {
            let clip = Rect::from_min_size(rect.min, rect.size() - Vec2::splat(pad));
            let (lx, ly) = pr.label_anchor(config);
            painter.with_clip_rect(clip.intersect(bounds)).text(
                origin + Vec2::new(lx as f32, ly as f32),
                Align2::LEFT_BOTTOM,
                pr.name.as_str(),
                font.clone(),
                Color32::BLACK,
            );
        }
    }

    let hovered = response.hover_pos().and_then(|pos| {
        let local = pos - origin;
        state.rect_at(local.x as i32, local.y as i32).cloned()
    });
    if let Some(pr) = hovered {
        let _ = response.on_hover_ui_at_pointer(|ui| {
            ui.label(egui::RichText::new(pr.name.as_str()).strong());
            ui.label(if pr.is_container { "Directory" } else { "File" });
        });
    }
}

fn to_screen(origin: Pos2, pr: &PlacedRect) -> Rect {
    Rect::from_min_size(
        origin + Vec2::new(pr.x as f32, pr.y as f32),
        Vec2::new(pr.w as f32, pr.h as f32),
    )
}

fn to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}
