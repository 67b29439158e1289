//! Render functions for the viewer panes

pub mod report;
pub mod source;
pub mod status;

pub use report::render_report_pane;
pub use source::render_source_pane;
pub use status::render_status_bar;
