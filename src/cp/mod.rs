//! Constraint scheduling of demands onto staff and time slots.
//!
//! An exact depth-first backtracking solver for small demand sets (tens of
//! demands). Each demand needs one resource per required capability for a
//! window of consecutive slots; resources have a cumulative capacity and,
//! optionally, serve at most one demand per slot.
//!
//! # Key Components
//!
//! - [`SchedulerConfig`]: slot exclusivity and search budget
//! - [`BacktrackingScheduler`]: the solver
//! - [`ScheduleOutcome`] / [`ScheduleReport`]: result and statistics
//!
//! # Limitations
//!
//! Demands are branched on in input order and only a single forward check
//! prunes the search, so the worst case is exponential in the number of
//! demands, slots and interchangeable resources. Use
//! [`SchedulerConfig::max_nodes`] to bound it.
//!
//! # References
//!
//! Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach",
//! Ch. 6 (backtracking search with forward checking)

mod config;
mod ledger;
mod solver;

pub use config::SchedulerConfig;
pub use solver::{BacktrackingScheduler, ScheduleOutcome, ScheduleReport};
