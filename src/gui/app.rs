// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    db::{Database, DbError},
    filter::{FilterMode, RecordView},
    fmt,
    model::Record,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let db = Database::load()?;
    eframe::run_native(
        "Parkview",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(db)))),
    )?;
    Ok(())
}

pub struct App {
    pub db: Database,

    /// Which filter is active. Owned here, written only by button handlers.
    pub mode: FilterMode,

    // current snapshot + derived view (UI thread only)
    pub records: Vec<Record>,
    pub view: RecordView,

    /// Open detail dialog, if any (formatted block).
    pub detail: Option<String>,

    pub status: String,
}

impl App {
    pub fn new(db: Database) -> Self {
        logf!("Init: {} teams, {} stadiums", db.team_count(), db.stadium_count());

        let mut app = Self {
            db,
            mode: FilterMode::All,
            records: Vec::new(),
            view: RecordView::default(),
            detail: None,
            status: s!("Idle"),
        };
        app.refresh();
        app
    }

    /// Button handler: switch filter and rebuild.
    pub fn set_mode(&mut self, mode: FilterMode) {
        let prev = self.mode;
        self.mode = mode;
        logf!("UI: Filter switch {:?} → {:?}", prev, mode);
        self.refresh();
    }

    /// Re-fetch the full record list from the database and re-derive the
    /// filtered view. The store is the source of truth; nothing here
    /// mutates records in place.
    pub fn refresh(&mut self) {
        match self.db.teams_and_stadiums() {
            Ok(records) => {
                self.records = records;
                self.view = RecordView::build(&self.records, self.mode);
                self.status = format!("{}: {} record(s)", self.mode.label(), self.view.len());
            }
            Err(e) => {
                loge!("Refresh failed: {}", e);
                self.records.clear();
                self.view = RecordView::default();
                self.status = format!("Load failed: {}", e);
            }
        }
    }

    /// Row handler: resolve the clicked stadium and its team, open the
    /// detail dialog. NotFound goes to the status line, not a panic.
    pub fn open_detail(&mut self, stadium_id: u32) {
        match self.detail_text(stadium_id) {
            Ok(text) => {
                logd!("UI: Detail open (stadium {})", stadium_id);
                self.detail = Some(text);
            }
            Err(e) => {
                loge!("Detail lookup failed: {}", e);
                self.status = format!("Lookup failed: {}", e);
            }
        }
    }

    fn detail_text(&self, stadium_id: u32) -> Result<String, DbError> {
        let stadium = self.db.stadium_by_id(stadium_id)?;
        let team = self.db.team_by_id(stadium.team_id)?;
        Ok(fmt::detail_block(team, stadium))
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        eframe::egui::SidePanel::left("filters")
            .resizable(false)
            .show(ctx, |ui| {
                crate::gui::components::filter_panel::draw(ui, self);
            });

        eframe::egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::summary_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::stadium_table::draw(ui, self);
        });

        crate::gui::components::detail_dialog::draw(ctx, self);
    }
}
