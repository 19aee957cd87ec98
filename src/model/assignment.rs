//! Scheduler output.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where and when a single demand was placed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Index of the first slot.
    pub start: usize,
    /// Number of slots consumed.
    pub duration: u32,
    /// Label of the first slot.
    pub slot: String,
    /// Chosen resource id per required capability.
    pub resources: BTreeMap<String, String>,
}

impl Placement {
    /// One past the last slot index.
    pub fn end(&self) -> usize {
        self.start + self.duration as usize
    }

    pub fn overlaps(&self, other: &Placement) -> bool {
        self.start < other.end() && other.start < self.end()
    }
}

/// A complete mapping from demand id to placement.
///
/// Only ever returned when every demand is placed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Assignment {
    placements: BTreeMap<String, Placement>,
}

impl Assignment {
    pub(crate) fn from_placements(placements: BTreeMap<String, Placement>) -> Self {
        Self { placements }
    }

    pub fn get(&self, demand_id: &str) -> Option<&Placement> {
        self.placements.get(demand_id)
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Placement)> {
        self.placements.iter()
    }

    /// Total slot-units charged to `resource_id`.
    pub fn load_of(&self, resource_id: &str) -> u32 {
        self.placements
            .values()
            .filter(|p| p.resources.values().any(|r| r == resource_id))
            .map(|p| p.duration)
            .sum()
    }
}
