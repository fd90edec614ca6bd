pub mod output_panel;
pub mod ui;

pub use output_panel::OutputPanel;
