//! Terminal display sinks and logging setup.

mod console;
mod dashboard;
mod logging;

pub use console::LineSink;
pub use dashboard::{wait_for_quit_key, Palette, TerminalSink};
pub use logging::setup_logging;
