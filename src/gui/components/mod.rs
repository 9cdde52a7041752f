// src/gui/components/mod.rs

pub mod detail_dialog;
pub mod filter_panel;
pub mod stadium_table;
pub mod summary_bar;
