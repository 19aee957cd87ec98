//! Resource load bookkeeping for the backtracking search.
//!
//! Every charge is appended to a trail. The search takes a [`mark`] before
//! committing a candidate and calls [`rollback_to`] with it on backtrack,
//! which undoes exactly the charges made since, restoring loads and slot
//! occupancy bit for bit.
//!
//! [`mark`]: LoadLedger::mark
//! [`rollback_to`]: LoadLedger::rollback_to

use crate::model::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Charge {
    resource: usize,
    start: usize,
    duration: usize,
}

/// Per-resource cumulative load plus per-slot occupancy.
#[derive(Debug, Clone)]
pub(crate) struct LoadLedger {
    capacity: Vec<u32>,
    load: Vec<u32>,
    /// Row-major `resources × slots`; empty unless slots are exclusive.
    busy: Vec<bool>,
    slots: usize,
    exclusive: bool,
    trail: Vec<Charge>,
}

impl LoadLedger {
    pub(crate) fn new(resources: &[Resource], slots: usize, exclusive: bool) -> Self {
        let busy = if exclusive {
            vec![false; resources.len() * slots]
        } else {
            Vec::new()
        };
        Self {
            capacity: resources.iter().map(|r| r.capacity).collect(),
            load: vec![0; resources.len()],
            busy,
            slots,
            exclusive,
            trail: Vec::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn load(&self, resource: usize) -> u32 {
        self.load[resource]
    }

    /// Capacity left before any further charge.
    pub(crate) fn residual(&self, resource: usize) -> u32 {
        self.capacity[resource].saturating_sub(self.load[resource])
    }

    /// Whether `resource` can absorb `duration` slots starting at `start`.
    pub(crate) fn can_take(&self, resource: usize, start: usize, duration: usize) -> bool {
        if (self.residual(resource) as usize) < duration {
            return false;
        }
        if !self.exclusive {
            return true;
        }
        let row = resource * self.slots;
        !self.busy[row + start..row + start + duration]
            .iter()
            .any(|&b| b)
    }

    pub(crate) fn charge(&mut self, resource: usize, start: usize, duration: usize) {
        self.load[resource] += duration as u32;
        if self.exclusive {
            let row = resource * self.slots;
            self.busy[row + start..row + start + duration].fill(true);
        }
        self.trail.push(Charge {
            resource,
            start,
            duration,
        });
    }

    pub(crate) fn mark(&self) -> usize {
        self.trail.len()
    }

    /// Undoes every charge made after `mark`.
    pub(crate) fn rollback_to(&mut self, mark: usize) {
        while self.trail.len() > mark {
            let Some(c) = self.trail.pop() else { break };
            self.load[c.resource] -= c.duration as u32;
            if self.exclusive {
                let row = c.resource * self.slots;
                self.busy[row + c.start..row + c.start + c.duration].fill(false);
            }
        }
    }
}
