//! Resource model.
//!
//! A resource is one assignable unit: a bed, a staff member, a room. It
//! carries capability tags, an integer capacity, a grid coordinate and an
//! occupancy state. Resources are created when the pool is built and are
//! never removed during a run.

use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point on the facility grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Manhattan (grid) distance to `other`.
    pub fn manhattan(&self, other: &Coord) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Occupancy state of a resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Occupancy {
    #[default]
    Free,
    /// Held for a pending assignment.
    Reserved,
    Occupied,
}

/// An assignable unit with capability tags and capacity.
///
/// # Examples
///
/// ```
/// use u_allocate::model::{Coord, Resource};
///
/// let bed = Resource::new("b1")
///     .with_capability("critical-care")
///     .with_capability("ventilator")
///     .at(Coord::new(3, 2));
/// assert!(bed.has_capability("ventilator"));
/// assert!(bed.is_free());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Resource {
    /// Unique, stable identifier.
    pub id: String,
    /// Capability tags (e.g. "critical-care", "surgeon").
    pub capabilities: BTreeSet<String>,
    /// Units available: slot-units per horizon for staff, patients for beds.
    pub capacity: u32,
    /// Grid position used for distance scoring.
    pub location: Coord,
    pub occupancy: Occupancy,
}

impl Resource {
    /// Creates a free resource with capacity 1 at the origin.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            capabilities: BTreeSet::new(),
            capacity: 1,
            location: Coord::default(),
            occupancy: Occupancy::Free,
        }
    }

    /// Adds a capability tag.
    pub fn with_capability(mut self, tag: impl Into<String>) -> Self {
        self.capabilities.insert(tag.into());
        self
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the location.
    pub fn at(mut self, location: Coord) -> Self {
        self.location = location;
        self
    }

    /// Sets the occupancy state.
    pub fn with_occupancy(mut self, occupancy: Occupancy) -> Self {
        self.occupancy = occupancy;
        self
    }

    pub fn has_capability(&self, tag: &str) -> bool {
        self.capabilities.contains(tag)
    }

    pub fn is_free(&self) -> bool {
        self.occupancy == Occupancy::Free
    }

    pub fn reserve(&mut self) {
        self.occupancy = Occupancy::Reserved;
    }

    pub fn occupy(&mut self) {
        self.occupancy = Occupancy::Occupied;
    }

    pub fn release(&mut self) {
        self.occupancy = Occupancy::Free;
    }
}

/// Caller-owned inventory of resources.
///
/// Solvers borrow the pool read-only. The only mutation path is an
/// explicit commit performed by the caller after a solve.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResourcePool {
    resources: Vec<Resource>,
}

impl ResourcePool {
    pub fn new(resources: Vec<Resource>) -> Self {
        Self { resources }
    }

    pub fn push(&mut self, resource: Resource) {
        self.resources.push(resource);
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Resource> {
        self.resources.get(index)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.resources.iter().position(|r| r.id == id)
    }

    /// Indices of resources that carry `tag`, in pool order.
    pub fn with_capability<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = usize> + 'a {
        self.resources
            .iter()
            .enumerate()
            .filter(move |(_, r)| r.has_capability(tag))
            .map(|(i, _)| i)
    }

    /// Marks every resource referenced by an assignment vector as occupied.
    ///
    /// Unassigned genes and out-of-range indices are skipped. Returns the
    /// number of resources whose state changed.
    pub fn commit_genes(&mut self, genes: &[Option<usize>]) -> usize {
        let mut changed = 0;
        for &idx in genes.iter().flatten() {
            if let Some(resource) = self.resources.get_mut(idx) {
                if resource.occupancy != Occupancy::Occupied {
                    resource.occupy();
                    changed += 1;
                }
            }
        }
        changed
    }
}

impl From<Vec<Resource>> for ResourcePool {
    fn from(resources: Vec<Resource>) -> Self {
        Self::new(resources)
    }
}
