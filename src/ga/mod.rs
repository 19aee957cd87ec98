//! Genetic Algorithm framework and bulk assignment optimizer.
//!
//! A generic GA built on trait-based abstractions. Problems implement
//! [`GaProblem`], which specifies how to create, evaluate, crossover, and
//! mutate individuals. [`BedAssignmentProblem`] is the concrete problem
//! used for demand-to-resource assignment when the candidate space is too
//! large for the exact scheduler.
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, elitism, mutation, seed, return policy
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`GaResult`]: best individual plus per-generation history
//! - [`optimize_assignment`]: one-call bulk assignment over a [`ResourcePool`](crate::model::ResourcePool)
//!
//! # Determinism
//!
//! Runs are reproducible for a fixed [`GaConfig::seed`]. Unseeded runs
//! report the seed they drew in [`GaResult::seed`].
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod problem;
mod runner;
mod selection;
mod types;

pub use config::{GaConfig, ReturnPolicy};
pub use problem::{optimize_assignment, Allocation, BedAssignmentProblem, Candidate, OptimizerConfig};
pub use runner::{GaResult, GaRunner};
pub use selection::Selection;
pub use types::{GaProblem, Individual};
