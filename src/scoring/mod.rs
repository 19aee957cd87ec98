//! Fit scoring shared by the scheduler and the optimizer.
//!
//! - [`ScoringConfig`]: bonus and penalty constants
//! - [`FitScorer`]: pair and assignment-vector scores
//! - [`best_fit`]: greedy single-demand selection over free resources

mod config;
mod scorer;

pub use config::ScoringConfig;
pub use scorer::{best_fit, FitScorer};
