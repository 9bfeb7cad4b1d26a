//! Full-screen duel interface

mod app;
mod rendering;

pub use app::{App, BoardRow, InputMode, Message, MessageStyle, Statistics, run_tui};
