//! Interactive TUI interface
//!
//! Both players share one terminal; TAB hands the keyboard over.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, Statistics, run_tui};
