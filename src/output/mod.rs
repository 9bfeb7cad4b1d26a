//! Terminal output formatting
//!
//! Display utilities for duel status lines and command results.

pub mod display;
pub mod formatters;

pub use display::print_benchmark_result;
