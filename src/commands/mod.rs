//! Command implementations

pub mod benchmark;
pub mod play;

pub use benchmark::{BenchmarkResult, run_benchmark, select_targets};
pub use play::{PlayOptions, run_play, session_rng};
