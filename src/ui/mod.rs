//! Terminal viewer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]**: viewer state and keyboard event loop
//! - **[`panes`]**: stateless render functions (source, result, status bar)
//! - **[`theme`]**: color palette shared by the panes
//!
//! Construct an [`App`] from the scanned text and its [`AnalysisResult`] and
//! call [`App::run`] with a terminal.
//!
//! [`AnalysisResult`]: crate::scanner::AnalysisResult
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
