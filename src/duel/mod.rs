//! Human versus AI duel
//!
//! Both sides guess the same hidden word and share one turn counter.

mod player;
mod turn_loop;

pub use player::{AiPlayer, ConsolePlayer, Move, Player, Side};
pub use turn_loop::{DuelOutcome, DuelResult, run_duel};
