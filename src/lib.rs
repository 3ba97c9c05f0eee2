pub mod app;
pub mod config;
pub mod event;
pub mod psi;
pub mod ui;
