//! Core domain types for Wordle
//!
//! Words, per-letter feedback and the revealed display state. These types only
//! depend on `rustc-hash` and are fully testable in isolation.

mod display_state;
mod feedback;
mod word;

pub use display_state::{DisplayState, UNKNOWN_MARKER};
pub use feedback::{Feedback, LetterFeedback};
pub use word::{Word, WordError};
