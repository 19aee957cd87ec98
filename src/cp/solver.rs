//! Depth-first backtracking scheduler.

use std::collections::{BTreeMap, HashSet};
use std::time::Instant;

use super::config::SchedulerConfig;
use super::ledger::LoadLedger;
use crate::error::ConfigError;
use crate::model::{Assignment, Demand, Placement, ResourcePool};
use crate::scoring::FitScorer;

/// Result of a scheduling run.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleOutcome {
    /// Every demand is placed.
    Scheduled(Assignment),
    /// The search space was exhausted: no feasible assignment exists.
    Infeasible,
    /// The node budget ran out before a decision was reached.
    BudgetExhausted,
}

/// Outcome plus search statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleReport {
    pub outcome: ScheduleOutcome,
    /// Candidate start slots examined.
    pub nodes_explored: u64,
    /// Committed candidates later undone.
    pub backtracks: u64,
    /// Wall-clock solve time in milliseconds.
    pub solve_time_ms: u64,
}

impl ScheduleReport {
    pub fn is_feasible(&self) -> bool {
        matches!(self.outcome, ScheduleOutcome::Scheduled(_))
    }

    pub fn assignment(&self) -> Option<&Assignment> {
        match &self.outcome {
            ScheduleOutcome::Scheduled(a) => Some(a),
            _ => None,
        }
    }
}

/// Exact scheduler for small demand sets.
///
/// Demands are taken in input order. For each one every start slot with
/// `start + duration <= slots` is tried in ascending order, and within a
/// slot every staffing with one distinct resource per required capability
/// is tried in pool order. A demand with no staffing left sends the search
/// back to the previous demand, so `Infeasible` is definitive.
///
/// The pool is only read. All load accounting lives in a ledger owned by
/// the call, so no partial commit can reach the caller.
///
/// # Examples
///
/// ```
/// use u_allocate::cp::{BacktrackingScheduler, ScheduleOutcome};
/// use u_allocate::model::{Demand, Resource, ResourcePool};
///
/// let pool = ResourcePool::new(vec![
///     Resource::new("s1").with_capability("surgeon").with_capacity(4),
///     Resource::new("s2").with_capability("anesthetist").with_capacity(4),
/// ]);
/// let ops = vec![
///     Demand::new("op1").requires("surgeon").requires("anesthetist").with_duration(2),
/// ];
/// let slots = ["08:00", "09:00", "10:00", "11:00"];
///
/// let report = BacktrackingScheduler::default().schedule(&pool, &ops, &slots).unwrap();
/// let placement = report.assignment().unwrap().get("op1").unwrap();
/// assert_eq!(placement.start, 0);
/// assert_eq!(placement.resources["surgeon"], "s1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BacktrackingScheduler {
    config: SchedulerConfig,
    scorer: FitScorer,
}

impl BacktrackingScheduler {
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            config,
            scorer: FitScorer::default(),
        }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Assigns every demand a start slot and one resource per capability.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for duplicate demand ids, zero durations and
    /// durations longer than the slot horizon. Infeasibility is reported
    /// through [`ScheduleOutcome`], not as an error.
    pub fn schedule<S: AsRef<str>>(
        &self,
        pool: &ResourcePool,
        demands: &[Demand],
        slots: &[S],
    ) -> Result<ScheduleReport, ConfigError> {
        validate_demands(demands, slots.len())?;
        let started = Instant::now();

        tracing::debug!(
            demands = demands.len(),
            resources = pool.len(),
            slots = slots.len(),
            "scheduling"
        );

        for demand in demands {
            let gaps = self.scorer.capability_gaps(demand, pool.resources());
            if !gaps.is_empty() {
                tracing::debug!(demand = %demand.id, missing = ?gaps, "no resource provides capability");
                return Ok(ScheduleReport {
                    outcome: ScheduleOutcome::Infeasible,
                    nodes_explored: 0,
                    backtracks: 0,
                    solve_time_ms: started.elapsed().as_millis() as u64,
                });
            }
        }

        let mut search = Search {
            pool,
            demands,
            slots: slots.len(),
            max_nodes: self.config.max_nodes,
            ledger: LoadLedger::new(pool.resources(), slots.len(), self.config.exclusive_slots),
            frames: Vec::with_capacity(demands.len()),
            nodes: 0,
            backtracks: 0,
        };

        let outcome = match search.descend(0) {
            Step::Found => ScheduleOutcome::Scheduled(search.assignment(slots)),
            Step::Exhausted => ScheduleOutcome::Infeasible,
            Step::OutOfBudget => ScheduleOutcome::BudgetExhausted,
        };

        let report = ScheduleReport {
            outcome,
            nodes_explored: search.nodes,
            backtracks: search.backtracks,
            solve_time_ms: started.elapsed().as_millis() as u64,
        };
        tracing::debug!(
            feasible = report.is_feasible(),
            nodes = report.nodes_explored,
            backtracks = report.backtracks,
            "scheduling finished"
        );
        Ok(report)
    }
}

fn validate_demands(demands: &[Demand], slots: usize) -> Result<(), ConfigError> {
    let mut seen = HashSet::with_capacity(demands.len());
    for d in demands {
        if !seen.insert(d.id.as_str()) {
            return Err(ConfigError::DuplicateDemand(d.id.clone()));
        }
        if d.duration == 0 {
            return Err(ConfigError::ZeroDuration { id: d.id.clone() });
        }
        if d.duration as usize > slots {
            return Err(ConfigError::DurationExceedsHorizon {
                id: d.id.clone(),
                duration: d.duration,
                slots,
            });
        }
    }
    Ok(())
}

enum Step {
    Found,
    Exhausted,
    OutOfBudget,
}

/// Tentative placement of the demand at the same depth.
struct Frame {
    start: usize,
    chosen: Vec<(usize, usize)>,
}

struct Search<'a> {
    pool: &'a ResourcePool,
    demands: &'a [Demand],
    slots: usize,
    max_nodes: Option<u64>,
    ledger: LoadLedger,
    frames: Vec<Frame>,
    nodes: u64,
    backtracks: u64,
}

impl Search<'_> {
    fn descend(&mut self, depth: usize) -> Step {
        let demands = self.demands;
        let Some(demand) = demands.get(depth) else {
            return Step::Found;
        };
        let duration = demand.duration as usize;

        if !self.consistent(demand, duration) {
            return Step::Exhausted;
        }

        let mut chosen = Vec::with_capacity(demand.required.len());
        for start in 0..=(self.slots - duration) {
            if self.max_nodes.is_some_and(|limit| self.nodes >= limit) {
                return Step::OutOfBudget;
            }
            self.nodes += 1;

            match self.staff(depth, demand, start, &mut chosen) {
                Step::Exhausted => {}
                step => return step,
            }
        }
        Step::Exhausted
    }

    /// Forward check: each required capability still has a holder with
    /// enough residual capacity.
    fn consistent(&self, demand: &Demand, duration: usize) -> bool {
        demand.required.iter().all(|tag| {
            self.pool
                .with_capability(tag)
                .any(|r| self.ledger.residual(r) as usize >= duration)
        })
    }

    /// Tries every staffing of `demand` at `start`, one distinct resource
    /// per capability in pool order, and descends under each.
    ///
    /// `chosen` holds (requirement index, resource) for the capabilities
    /// staffed so far.
    fn staff(
        &mut self,
        depth: usize,
        demand: &Demand,
        start: usize,
        chosen: &mut Vec<(usize, usize)>,
    ) -> Step {
        let duration = demand.duration as usize;
        let req = chosen.len();
        let Some(tag) = demand.required.get(req) else {
            return self.commit(depth, demand, start, chosen.clone());
        };

        let pool = self.pool;
        for resource in pool.with_capability(tag) {
            if chosen.iter().any(|&(_, c)| c == resource)
                || !self.ledger.can_take(resource, start, duration)
            {
                continue;
            }
            chosen.push((req, resource));
            let step = self.staff(depth, demand, start, chosen);
            chosen.pop();
            match step {
                Step::Exhausted => {}
                step => return step,
            }
        }
        Step::Exhausted
    }

    /// Charges a complete staffing and searches the remaining demands,
    /// undoing the charges if that fails.
    fn commit(&mut self, depth: usize, demand: &Demand, start: usize, chosen: Vec<(usize, usize)>) -> Step {
        let duration = demand.duration as usize;
        let mark = self.ledger.mark();
        for &(_, resource) in &chosen {
            self.ledger.charge(resource, start, duration);
        }
        self.frames.push(Frame { start, chosen });
        tracing::trace!(demand = %demand.id, start, depth, "tentative placement");

        match self.descend(depth + 1) {
            Step::Found => Step::Found,
            step => {
                self.ledger.rollback_to(mark);
                self.frames.pop();
                if let Step::OutOfBudget = step {
                    return step;
                }
                self.backtracks += 1;
                Step::Exhausted
            }
        }
    }

    fn assignment<S: AsRef<str>>(&self, slots: &[S]) -> Assignment {
        let placements = self
            .demands
            .iter()
            .zip(&self.frames)
            .map(|(demand, frame)| {
                let resources = frame
                    .chosen
                    .iter()
                    .filter_map(|&(req, r)| {
                        let resource = self.pool.get(r)?;
                        Some((demand.required[req].clone(), resource.id.clone()))
                    })
                    .collect();
                let placement = Placement {
                    start: frame.start,
                    duration: demand.duration,
                    slot: slots
                        .get(frame.start)
                        .map(|s| s.as_ref().to_string())
                        .unwrap_or_default(),
                    resources,
                };
                (demand.id.clone(), placement)
            })
            .collect::<BTreeMap<_, _>>();
        Assignment::from_placements(placements)
    }
}
