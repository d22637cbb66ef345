use eframe::egui::{Align2, Color32, FontId, Rect, ScrollArea, Sense, Ui, pos2, vec2};

use crate::color::heat_color;
use crate::data::query::Heatmap;

const LABEL_WIDTH: f32 = 170.0;
const CELL_WIDTH: f32 = 36.0;
const CELL_HEIGHT: f32 = 20.0;

/// Paint a sport × year pivot as a colored grid with annotated cells.
pub fn heatmap(ui: &mut Ui, id: &str, hm: &Heatmap) {
    if hm.is_empty() {
        ui.label("No data for this selection.");
        return;
    }

    ScrollArea::horizontal().id_salt(id).show(ui, |ui: &mut Ui| {
        let size = vec2(
            LABEL_WIDTH + hm.years.len() as f32 * CELL_WIDTH,
            (hm.row_labels.len() + 1) as f32 * CELL_HEIGHT,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let origin = response.rect.min;

        let text_color = ui.visuals().text_color();
        let label_font = FontId::proportional(11.0);
        let cell_font = FontId::proportional(9.0);

        // Year header row.
        for (j, year) in hm.years.iter().enumerate() {
            painter.text(
                pos2(
                    origin.x + LABEL_WIDTH + (j as f32 + 0.5) * CELL_WIDTH,
                    origin.y + 0.5 * CELL_HEIGHT,
                ),
                Align2::CENTER_CENTER,
                year.to_string(),
                cell_font.clone(),
                text_color,
            );
        }

        let max = hm.max.max(1) as f32;
        for (i, sport) in hm.row_labels.iter().enumerate() {
            let y = origin.y + (i as f32 + 1.0) * CELL_HEIGHT;

            painter.text(
                pos2(origin.x + LABEL_WIDTH - 6.0, y + 0.5 * CELL_HEIGHT),
                Align2::RIGHT_CENTER,
                sport,
                label_font.clone(),
                text_color,
            );

            for (j, &value) in hm.cells[i].iter().enumerate() {
                let rect = Rect::from_min_size(
                    pos2(origin.x + LABEL_WIDTH + j as f32 * CELL_WIDTH, y),
                    vec2(CELL_WIDTH - 1.0, CELL_HEIGHT - 1.0),
                );
                painter.rect_filled(rect, 2.0, heat_color(value as f32 / max));
                if value > 0 {
                    painter.text(
                        rect.center(),
                        Align2::CENTER_CENTER,
                        value.to_string(),
                        cell_font.clone(),
                        Color32::from_gray(40),
                    );
                }
            }
        }

        // Cell tooltip.
        if let Some(pos) = response.hover_pos() {
            let col = ((pos.x - origin.x - LABEL_WIDTH) / CELL_WIDTH).floor() as isize;
            let row = ((pos.y - origin.y) / CELL_HEIGHT).floor() as isize - 1;
            if (0..hm.years.len() as isize).contains(&col)
                && (0..hm.row_labels.len() as isize).contains(&row)
            {
                let (row, col) = (row as usize, col as usize);
                response.on_hover_text(format!(
                    "{} · {}: {}",
                    hm.row_labels[row], hm.years[col], hm.cells[row][col]
                ));
            }
        }
    });
}
