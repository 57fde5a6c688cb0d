//! Genetic algorithm engine and its VRPTW binding.
//!
//! - [`Chromosome`] — permutation individual with a cached-fitness state machine
//! - [`GaProblem`]/[`Individual`] — engine traits
//! - [`operators`] — pure crossover and mutation on permutations
//! - [`decode`] — greedy permutation-to-routes decoder
//! - [`GaConfig`]/[`GaRunner`] — generational evolution loop
//! - [`VrptwGaProblem`] — routing problem bound to a cost model

mod chromosome;
mod config;
mod decode;
pub mod operators;
mod problem;
mod runner;
mod types;

pub use chromosome::{Chromosome, Fitness};
pub use config::GaConfig;
pub use decode::decode;
pub use problem::VrptwGaProblem;
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use types::{GaProblem, Individual};
