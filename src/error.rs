//! Input and configuration errors.
//!
//! These are caller mistakes detected before any search starts. Search
//! outcomes (infeasibility, exhausted budgets, unassigned genes) are not
//! errors and never appear here.

use thiserror::Error;

/// Invalid configuration or malformed problem input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("population_size must be at least 1")]
    EmptyPopulation,

    #[error("elite_count must be in 1..population_size (got elite_count={elite_count}, population_size={population_size})")]
    InvalidEliteCount {
        elite_count: usize,
        population_size: usize,
    },

    #[error("mutation_rate must be in [0, 1] (got {0})")]
    InvalidMutationRate(f64),

    #[error("tournament size must be at least 1")]
    InvalidTournamentSize,

    #[error("duplicate demand id: {0}")]
    DuplicateDemand(String),

    #[error("demand {id} has zero duration")]
    ZeroDuration { id: String },

    #[error("demand {id} needs {duration} slots but only {slots} are available")]
    DurationExceedsHorizon {
        id: String,
        duration: u32,
        slots: usize,
    },

    #[error("demand {id} has invalid preference weight {weight}")]
    InvalidWeight { id: String, weight: f64 },
}
