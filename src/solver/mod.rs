//! AI opponent
//!
//! Tracks letter knowledge from every scored guess, filters the solutions pool
//! down to consistent candidates and selects the next guess.

pub mod constraints;
mod engine;
mod knowledge;
pub mod strategy;

pub use constraints::CandidateFilter;
pub use engine::Solver;
pub use knowledge::Knowledge;
pub use strategy::{DiversityStrategy, RandomStrategy, Strategy, StrategyType};
