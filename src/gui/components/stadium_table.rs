// src/gui/components/stadium_table.rs
//
// Draws the filtered record list. Purely a view over app.records via
// app.view.row_ix; a row click opens the detail dialog for that
// stadium.

use eframe::egui::{self, Align, Layout, RichText, Sense, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::fmt::comma_separate;
use crate::gui::app::App;
use crate::model::Record;

const HEADERS: &[&str] = &[
    "Team", "League", "Stadium", "Location",
    "Opened", "Capacity", "Typology", "Roof", "Surface", "CF Dist",
];

const WIDTHS: &[f32] = &[150.0, 70.0, 180.0, 160.0, 55.0, 70.0, 95.0, 85.0, 70.0, 60.0];

// Right-leaning columns: Opened, Capacity, CF Dist
const NUMERIC: &[usize] = &[4, 5, 9];

fn cells(r: &Record) -> [String; 10] {
    [
        r.team.name.clone(),
        s!(r.team.league.label()),
        r.stadium.name.clone(),
        r.stadium.location.clone(),
        r.stadium.year_opened.to_string(),
        comma_separate(r.stadium.seating_capacity as u64),
        s!(r.stadium.typology.label()),
        s!(r.stadium.roof.label()),
        s!(r.stadium.surface.label()),
        comma_separate(r.stadium.center_field_dist as u64),
    ]
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // Reserve space for the scroll bar instead of floating it over rows.
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let mut clicked_stadium: Option<u32> = None;

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .sense(Sense::click())
        .min_scrolled_height(0.0);
    for &w in WIDTHS {
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    table
        .header(24.0, |mut header| {
            for (ci, title) in HEADERS.iter().enumerate() {
                header.col(|ui| {
                    ui.scope(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        let label = RichText::new(*title).strong();
                        if NUMERIC.contains(&ci) {
                            ui.centered_and_justified(|ui| { ui.label(label); });
                        } else {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(label); });
                        }
                    });
                });
            }
        })
        .body(|body| {
            body.rows(20.0, app.view.len(), |mut row| {
                let row_idx = row.index();
                if let Some(record) = app.view.record(&app.records, row_idx) {
                    let data = cells(record);
                    for (ci, cell) in data.iter().enumerate() {
                        row.col(|ui| {
                            ui.scope(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                if NUMERIC.contains(&ci) {
                                    ui.centered_and_justified(|ui| { ui.label(cell.as_str()); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(cell.as_str()); });
                                }
                            });
                        });
                    }
                    if row.response().clicked() {
                        clicked_stadium = Some(record.stadium.id);
                    }
                }
            });
        });

    if let Some(id) = clicked_stadium {
        app.open_detail(id);
    }
}
