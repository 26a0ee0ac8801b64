//! Moviedb application crate - the interactive menu, CLI arguments and the
//! static website exporter. The `moviedb` binary in `main.rs` wires these to
//! the real store and OMDb client.

pub mod app;
pub mod cli;
pub mod export;
pub mod menu;

pub use app::App;
pub use cli::CliArgs;
pub use export::HtmlExporter;
pub use menu::{MenuChoice, MenuParseError};
