//! Game session and guess validation

mod error;
mod session;

pub use error::GuessError;
pub use session::{Game, GuessOutcome};
