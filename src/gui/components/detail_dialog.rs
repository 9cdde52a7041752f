// src/gui/components/detail_dialog.rs
//
// Modal stadium/team detail. One dismiss action; closing just clears
// app.detail.

use eframe::egui::{self, Align2, RichText, Vec2};

use crate::gui::app::App;

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(text) = app.detail.clone() else { return };

    let mut open = true;
    let mut close_clicked = false;

    egui::Window::new("Stadium Details")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label(RichText::new(text).monospace());

            ui.separator();

            ui.vertical_centered(|ui| {
                if ui.button("Close").clicked() {
                    close_clicked = true;
                }
            });
        });

    if !open || close_clicked {
        app.detail = None;
    }
}
