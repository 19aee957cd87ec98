//! Shared data model.
//!
//! - [`Resource`] / [`ResourcePool`]: caller-owned inventory
//! - [`Demand`]: requests competing for resources
//! - [`Assignment`] / [`Placement`]: scheduler output

mod assignment;
mod demand;
mod resource;

pub use assignment::{Assignment, Placement};
pub use demand::Demand;
pub use resource::{Coord, Occupancy, Resource, ResourcePool};
