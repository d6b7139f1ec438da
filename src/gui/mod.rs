//! Studio window: banner preview above the tabbed control panel

mod components;
mod constants;
mod manager;

pub use manager::run_gui;
