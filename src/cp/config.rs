//! Scheduler configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for [`BacktrackingScheduler`](super::BacktrackingScheduler).
///
/// # Defaults
///
/// ```
/// use u_allocate::cp::SchedulerConfig;
///
/// let config = SchedulerConfig::default();
/// assert!(!config.exclusive_slots);
/// assert!(config.max_nodes.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SchedulerConfig {
    /// A resource serves at most one demand in any time slot.
    ///
    /// Off by default: only cumulative capacity is enforced, so one staff
    /// member may be booked on overlapping demands as long as their total
    /// load fits.
    pub exclusive_slots: bool,

    /// Upper bound on explored search nodes (candidate start slots).
    ///
    /// `None` searches exhaustively. When the bound is hit the run ends
    /// with [`ScheduleOutcome::BudgetExhausted`](super::ScheduleOutcome::BudgetExhausted).
    pub max_nodes: Option<u64>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            exclusive_slots: false,
            max_nodes: None,
        }
    }
}

impl SchedulerConfig {
    /// Sets whether a resource serves one demand per slot.
    pub fn with_exclusive_slots(mut self, exclusive: bool) -> Self {
        self.exclusive_slots = exclusive;
        self
    }

    /// Sets the search node budget.
    pub fn with_max_nodes(mut self, limit: u64) -> Self {
        self.max_nodes = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = SchedulerConfig::default()
            .with_exclusive_slots(true)
            .with_max_nodes(500);
        assert!(config.exclusive_slots);
        assert_eq!(config.max_nodes, Some(500));
    }
}
