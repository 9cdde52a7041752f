// src/lib.rs

#[macro_use]
pub mod macros;

#[macro_use]
pub mod log;

pub mod cli;
pub mod csv;
pub mod db;
pub mod filter;
pub mod fmt;
pub mod gui;
pub mod model;
pub mod store;
