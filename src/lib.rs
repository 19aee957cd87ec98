//! Allocation of scarce, typed resources to competing demands.
//!
//! Two solvers share one data model and one fit score:
//!
//! - **Constraint scheduling ([`cp`])**: exact backtracking search that
//!   assigns each demand a start slot and one resource per required
//!   capability under capacity and non-overlap constraints, or proves that
//!   no such assignment exists. Suited to small sets such as surgeries.
//! - **Population optimization ([`ga`])**: a genetic search over
//!   demand-to-resource vectors maximizing the aggregate fit score, for
//!   bulk problems such as bed assignment. Demands it declines to place
//!   come back unassigned.
//!
//! Supporting modules:
//!
//! - [`model`]: resources, demands, assignments
//! - [`scoring`]: the fit score and greedy single-demand selection
//! - [`triage`]: vital-sign priority for ordering a demand queue
//! - [`inference`]: forward-chaining enrichment of demand facts
//! - [`error`]: input and configuration errors
//!
//! # Typical flow
//!
//! ```
//! use u_allocate::cp::BacktrackingScheduler;
//! use u_allocate::ga::{optimize_assignment, OptimizerConfig};
//! use u_allocate::model::{Coord, Demand, Resource, ResourcePool};
//!
//! // Hard-constrained, small: surgeries onto staff and slots.
//! let staff = ResourcePool::new(vec![
//!     Resource::new("s1").with_capability("surgeon").with_capacity(4),
//!     Resource::new("s2").with_capability("anesthetist").with_capacity(4),
//! ]);
//! let surgeries = vec![
//!     Demand::new("op1").requires("surgeon").requires("anesthetist").with_duration(2),
//!     Demand::new("op2").requires("surgeon").requires("anesthetist").with_duration(2),
//! ];
//! let report = BacktrackingScheduler::default()
//!     .schedule(&staff, &surgeries, &["08:00", "09:00", "10:00", "11:00"])
//!     .unwrap();
//! assert!(report.is_feasible());
//!
//! // Soft-constrained, bulk: patients onto beds.
//! let patients = vec![Demand::new("p1").requires("critical-care")];
//! let mut beds = ResourcePool::new(vec![
//!     Resource::new("b1").with_capability("critical-care").at(Coord::new(2, 0)),
//! ]);
//! let mut config = OptimizerConfig::default();
//! config.ga = config.ga.with_population_size(12).with_elite_count(3).with_seed(1);
//! let allocation = optimize_assignment(&patients, &beds, &config).unwrap();
//! beds.commit_genes(&allocation.genes);
//! ```
//!
//! Both solvers are synchronous and only read their inputs. The optimizer
//! is reproducible for a fixed seed.

pub mod cp;
pub mod error;
pub mod ga;
pub mod inference;
pub mod model;
pub mod scoring;
pub mod triage;

pub use error::ConfigError;
