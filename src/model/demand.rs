//! Demand model.
//!
//! A demand is one request competing for resources: a patient needing a
//! bed, a surgery needing a team. Demands are immutable while a solver
//! runs.

use std::collections::BTreeSet;

use super::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A request with hard capability requirements and soft preferences.
///
/// # Examples
///
/// ```
/// use u_allocate::model::Demand;
///
/// let op = Demand::new("op1")
///     .requires("surgeon")
///     .requires("anesthetist")
///     .with_duration(2);
/// assert_eq!(op.required, vec!["surgeon", "anesthetist"]);
/// assert_eq!(op.duration, 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Demand {
    pub id: String,
    /// Required capability tags, in the order they are staffed.
    pub required: Vec<String>,
    /// Multiplier on the proximity term of the fit score.
    pub weight: f64,
    pub location: Coord,
    /// Consecutive time slots consumed.
    pub duration: u32,
    /// Queue priority, higher first. Filled in by triage.
    pub priority: f64,
    /// Free-form facts, e.g. symptoms and inferred conclusions.
    pub facts: BTreeSet<String>,
}

impl Demand {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            required: Vec::new(),
            weight: 1.0,
            location: Coord::default(),
            duration: 1,
            priority: 0.0,
            facts: BTreeSet::new(),
        }
    }

    /// Adds a required capability. Duplicates are ignored.
    pub fn requires(mut self, tag: impl Into<String>) -> Self {
        self.add_requirement(tag);
        self
    }

    /// Adds a required capability; returns `false` if it was already present.
    pub fn add_requirement(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.required.contains(&tag) {
            return false;
        }
        self.required.push(tag);
        true
    }

    /// Sets the duration in slots.
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the proximity weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the location.
    pub fn at(mut self, location: Coord) -> Self {
        self.location = location;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = priority;
        self
    }

    /// Adds a known fact.
    pub fn with_fact(mut self, fact: impl Into<String>) -> Self {
        self.facts.insert(fact.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let d = Demand::new("p1");
        assert!(d.required.is_empty());
        assert_eq!(d.duration, 1);
        assert!((d.weight - 1.0).abs() < 1e-12);
        assert!(d.facts.is_empty());
    }

    #[test]
    fn test_requirements_dedup_keep_order() {
        let d = Demand::new("op")
            .requires("surgeon")
            .requires("anesthetist")
            .requires("surgeon");
        assert_eq!(d.required, vec!["surgeon", "anesthetist"]);
    }
}
