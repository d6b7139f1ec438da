pub mod control_panel;
pub mod controls;
