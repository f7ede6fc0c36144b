//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, InputMode, MessageStyle, run_tui};
