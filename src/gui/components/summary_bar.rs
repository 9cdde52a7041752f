// src/gui/components/summary_bar.rs
//
// The two summary labels above the table. Both totals describe the
// filtered subset, never the full list.

use eframe::egui;

use crate::fmt::comma_separate;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label(format!(
            "Total Teams/Stadiums: {}",
            comma_separate(app.view.len() as u64)
        ));

        ui.separator();

        ui.label(format!(
            "Total Seating Capacity: {}",
            comma_separate(app.view.total_seating)
        ));

        ui.separator();

        ui.label(app.status.clone());
    });
}
