// src/gui/components/filter_panel.rs
//
// Left panel: one button per filter mode. The active mode renders as a
// selected label; clicking any mode re-fetches from the database and
// rebuilds the table (fresh snapshot every time).

use eframe::egui;

use crate::filter::FilterMode;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filters");

    ui.separator();

    let mut clicked: Option<FilterMode> = None;
    for mode in FilterMode::ALL {
        let selected = mode == app.mode;
        if ui.selectable_label(selected, mode.label()).clicked() && !selected {
            clicked = Some(mode);
        }
    }
    if let Some(mode) = clicked {
        app.set_mode(mode);
    }

    ui.separator();

    if ui.button("Reload").clicked() {
        logf!("UI: Manual reload");
        app.refresh();
    }
}
