//! Forward-chaining fact inference.
//!
//! A [`RuleBase`] holds propositional rules `conditions → conclusions`.
//! [`RuleBase::infer`] fires every rule whose conditions are all known,
//! pass after pass, until a pass adds nothing or the iteration bound is
//! reached. The bound guarantees termination for any rule set.
//!
//! Used to enrich demands before they reach the solvers: a derived fact
//! of the form `require:<tag>` becomes a required capability.

use std::collections::BTreeSet;

use crate::model::Demand;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Prefix marking a derived fact as a capability requirement.
pub const REQUIRE_PREFIX: &str = "require:";

/// Default bound on inference passes.
pub const DEFAULT_MAX_ITERATIONS: usize = 50;

/// `if all conditions hold then add all conclusions`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rule {
    pub conditions: BTreeSet<String>,
    pub conclusions: BTreeSet<String>,
}

impl Rule {
    pub fn new<I, J, S, T>(conditions: I, conclusions: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            conditions: conditions.into_iter().map(Into::into).collect(),
            conclusions: conclusions.into_iter().map(Into::into).collect(),
        }
    }

    fn fires(&self, facts: &BTreeSet<String>) -> bool {
        self.conditions.iter().all(|c| facts.contains(c))
    }
}

/// Closure of a fact set under a rule base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inference {
    pub facts: BTreeSet<String>,
    /// Passes executed, including the final one that added nothing.
    pub iterations: usize,
    /// Whether a fixpoint was reached within the bound.
    pub saturated: bool,
}

impl Inference {
    pub fn query(&self, fact: &str) -> bool {
        self.facts.contains(fact)
    }
}

/// An ordered collection of rules.
///
/// # Examples
///
/// ```
/// use u_allocate::inference::{Rule, RuleBase};
///
/// let rules = RuleBase::new(vec![
///     Rule::new(["fever", "cough"], ["possible_infection"]),
///     Rule::new(["possible_infection", "high_wbc"], ["bacterial_infection"]),
/// ]);
/// let result = rules.infer(["fever", "cough", "high_wbc"], 50);
/// assert!(result.query("bacterial_infection"));
/// assert!(result.saturated);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RuleBase {
    rules: Vec<Rule>,
}

impl RuleBase {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Computes the closure of `facts`, running at most `max_iterations`
    /// passes over the rules.
    pub fn infer<I, S>(&self, facts: I, max_iterations: usize) -> Inference
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut known: BTreeSet<String> = facts.into_iter().map(Into::into).collect();
        let mut iterations = 0;
        let mut saturated = false;

        while iterations < max_iterations {
            iterations += 1;
            let mut added = false;
            for rule in &self.rules {
                if rule.fires(&known) {
                    for fact in &rule.conclusions {
                        added |= known.insert(fact.clone());
                    }
                }
            }
            if !added {
                saturated = true;
                break;
            }
        }

        if !saturated {
            tracing::debug!(iterations, facts = known.len(), "inference stopped at iteration bound");
        }
        Inference {
            facts: known,
            iterations,
            saturated,
        }
    }

    /// Adds facts derived from `demand.facts` to the demand and turns
    /// derived `require:<tag>` facts into required capabilities.
    ///
    /// Returns the number of requirements added.
    pub fn enrich_demand(&self, demand: &mut Demand, max_iterations: usize) -> usize {
        let inference = self.infer(demand.facts.iter().cloned(), max_iterations);
        let mut added = 0;
        for fact in &inference.facts {
            if let Some(tag) = fact.strip_prefix(REQUIRE_PREFIX) {
                if !tag.is_empty() && demand.add_requirement(tag) {
                    added += 1;
                }
            }
        }
        demand.facts = inference.facts;
        added
    }
}
