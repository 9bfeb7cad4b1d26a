//! Wordle Duel
//!
//! A human and an AI take turns guessing the same hidden word. The AI keeps a
//! pool of candidate words consistent with every piece of feedback, its own
//! and the opponent's, and picks its next guess from that pool.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_duel::core::{Feedback, Word};
//!
//! let guess = Word::new("crate").unwrap();
//! let target = Word::new("crane").unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &target);
//! assert_eq!(feedback.to_emoji(), "🟩🟩🟩⬜🟩");
//! ```

// Core domain types
pub mod core;

// Command line configuration
pub mod config;

// Word lists
pub mod wordlists;

// Game session and guess validation
pub mod game;

// AI opponent
pub mod solver;

// Turn orchestration
pub mod duel;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
