pub mod footer_bar;
pub mod help_overlay;
pub mod output_panel;
pub mod status_bar;
pub mod tree_panel;
