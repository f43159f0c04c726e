pub mod object_panel;
pub mod status_bar;
