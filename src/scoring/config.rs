//! Scoring constants.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Weights of the fit score.
///
/// The defaults keep capability fit dominant: a single missing capability
/// (`mismatch_penalty` = 100) outweighs 1000 grid units of distance at the
/// default `distance_weight` of 0.1.
///
/// # Defaults
///
/// ```
/// use u_allocate::scoring::ScoringConfig;
///
/// let config = ScoringConfig::default();
/// assert_eq!(config.match_bonus, 2.0);
/// assert_eq!(config.mismatch_penalty, 100.0);
/// assert_eq!(config.unassigned_penalty, -1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoringConfig {
    /// Reward per required capability the resource provides.
    pub match_bonus: f64,

    /// Penalty per grid unit of Manhattan distance.
    pub distance_weight: f64,

    /// Penalty per required capability the resource lacks.
    pub mismatch_penalty: f64,

    /// Score contribution of an unassigned demand (negative).
    pub unassigned_penalty: f64,

    /// Penalty per demand placed on a resource beyond its capacity.
    ///
    /// Only applies when scoring a whole assignment vector. 0.0 disables
    /// capacity accounting.
    pub overbooking_penalty: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            match_bonus: 2.0,
            distance_weight: 0.1,
            mismatch_penalty: 100.0,
            unassigned_penalty: -1.0,
            overbooking_penalty: 0.0,
        }
    }
}

impl ScoringConfig {
    /// Sets the bonus per provided capability.
    pub fn with_match_bonus(mut self, bonus: f64) -> Self {
        self.match_bonus = bonus;
        self
    }

    /// Sets the distance weight (clamped to >= 0).
    pub fn with_distance_weight(mut self, weight: f64) -> Self {
        self.distance_weight = weight.max(0.0);
        self
    }

    /// Sets the penalty per missing capability (clamped to >= 0).
    pub fn with_mismatch_penalty(mut self, penalty: f64) -> Self {
        self.mismatch_penalty = penalty.max(0.0);
        self
    }

    /// Sets the score of an unassigned demand.
    pub fn with_unassigned_penalty(mut self, penalty: f64) -> Self {
        self.unassigned_penalty = penalty;
        self
    }

    /// Sets the penalty per demand beyond capacity (clamped to >= 0).
    pub fn with_overbooking_penalty(mut self, penalty: f64) -> Self {
        self.overbooking_penalty = penalty.max(0.0);
        self
    }
}
