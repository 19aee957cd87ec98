//! Demand-to-resource assignment as a GA problem.
//!
//! A [`Candidate`] holds one gene per demand: `Some(index)` into the
//! resource list, or `None` when the demand is left unassigned. Fitness is
//! the [`FitScorer`] aggregate over all genes.

use std::collections::HashSet;

use rand::Rng;

use super::config::GaConfig;
use super::runner::GaRunner;
use super::types::{GaProblem, Individual};
use crate::error::ConfigError;
use crate::model::{Demand, Resource, ResourcePool};
use crate::scoring::{FitScorer, ScoringConfig};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An assignment vector with its fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub genes: Vec<Option<usize>>,
    fitness: f64,
}

impl Candidate {
    pub fn new(genes: Vec<Option<usize>>) -> Self {
        Self {
            genes,
            fitness: f64::NEG_INFINITY,
        }
    }
}

impl Individual for Candidate {
    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

/// Bulk assignment of demands to free resources.
///
/// Genes are drawn uniformly from `{unassigned} ∪ {free resources}`.
/// Resources that are reserved or occupied never appear in a gene.
#[derive(Debug)]
pub struct BedAssignmentProblem<'a> {
    demands: &'a [Demand],
    resources: &'a [Resource],
    eligible: Vec<usize>,
    scorer: FitScorer,
}

impl<'a> BedAssignmentProblem<'a> {
    /// # Errors
    ///
    /// Rejects duplicate demand ids and preference weights that are not
    /// finite and positive.
    pub fn new(
        demands: &'a [Demand],
        pool: &'a ResourcePool,
        scorer: FitScorer,
    ) -> Result<Self, ConfigError> {
        let mut seen = HashSet::with_capacity(demands.len());
        for d in demands {
            if !seen.insert(d.id.as_str()) {
                return Err(ConfigError::DuplicateDemand(d.id.clone()));
            }
            if !(d.weight.is_finite() && d.weight > 0.0) {
                return Err(ConfigError::InvalidWeight {
                    id: d.id.clone(),
                    weight: d.weight,
                });
            }
        }

        let resources = pool.resources();
        let eligible = resources
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_free())
            .map(|(i, _)| i)
            .collect();

        Ok(Self {
            demands,
            resources,
            eligible,
            scorer,
        })
    }

    /// Indices of resources a gene may point at.
    pub fn eligible(&self) -> &[usize] {
        &self.eligible
    }

    fn random_gene<R: Rng>(&self, rng: &mut R) -> Option<usize> {
        let pick = rng.random_range(0..=self.eligible.len());
        self.eligible.get(pick).copied()
    }
}

impl GaProblem for BedAssignmentProblem<'_> {
    type Individual = Candidate;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Candidate {
        Candidate::new((0..self.demands.len()).map(|_| self.random_gene(rng)).collect())
    }

    fn evaluate(&self, candidate: &Candidate) -> f64 {
        self.scorer
            .score_assignment(self.demands, self.resources, &candidate.genes)
    }

    /// Single-point crossover with the cut in `[1, len - 1]`.
    fn crossover<R: Rng>(&self, parent1: &Candidate, parent2: &Candidate, rng: &mut R) -> Vec<Candidate> {
        let n = parent1.genes.len();
        if n < 2 {
            return vec![Candidate::new(parent1.genes.clone())];
        }
        let cut = rng.random_range(1..n);
        let mut genes = Vec::with_capacity(n);
        genes.extend_from_slice(&parent1.genes[..cut]);
        genes.extend_from_slice(&parent2.genes[cut..]);
        vec![Candidate::new(genes)]
    }

    /// Resamples one random gene.
    fn mutate<R: Rng>(&self, candidate: &mut Candidate, rng: &mut R) {
        if candidate.genes.is_empty() {
            return;
        }
        let idx = rng.random_range(0..candidate.genes.len());
        candidate.genes[idx] = self.random_gene(rng);
    }
}

/// Everything that parameterises a bulk assignment run.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OptimizerConfig {
    pub ga: GaConfig,
    pub scoring: ScoringConfig,
}

/// Outcome of [`optimize_assignment`].
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    /// One entry per demand; `None` means the optimizer declined to place
    /// it and the caller must route it elsewhere.
    pub genes: Vec<Option<usize>>,
    pub fitness: f64,
    pub generations: usize,
    pub fitness_history: Vec<f64>,
    pub seed: u64,
}

impl Allocation {
    /// Indices of demands left unassigned.
    pub fn unassigned(&self) -> impl Iterator<Item = usize> + '_ {
        self.genes
            .iter()
            .enumerate()
            .filter(|(_, g)| g.is_none())
            .map(|(i, _)| i)
    }

    /// `(demand id, resource id)` pairs for every assigned demand.
    pub fn pairs<'a>(
        &'a self,
        demands: &'a [Demand],
        pool: &'a ResourcePool,
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        demands.iter().zip(&self.genes).filter_map(|(d, g)| {
            let resource = pool.get((*g)?)?;
            Some((d.id.as_str(), resource.id.as_str()))
        })
    }
}

/// Searches for a high-scoring assignment of `demands` to free resources.
///
/// # Examples
///
/// ```
/// use u_allocate::ga::{optimize_assignment, OptimizerConfig};
/// use u_allocate::model::{Coord, Demand, Resource, ResourcePool};
///
/// let patients = vec![
///     Demand::new("p1").requires("critical-care").at(Coord::new(0, 0)),
///     Demand::new("p2").at(Coord::new(5, 5)),
/// ];
/// let beds = ResourcePool::new(vec![
///     Resource::new("b1").with_capability("critical-care").at(Coord::new(1, 0)),
///     Resource::new("b2").at(Coord::new(6, 6)),
/// ]);
/// let mut config = OptimizerConfig::default();
/// config.ga = config.ga.with_population_size(20).with_max_generations(10).with_seed(7);
///
/// let allocation = optimize_assignment(&patients, &beds, &config).unwrap();
/// assert_eq!(allocation.genes.len(), 2);
/// ```
///
/// # Errors
///
/// Returns [`ConfigError`] for an invalid GA configuration or malformed
/// demands.
pub fn optimize_assignment(
    demands: &[Demand],
    pool: &ResourcePool,
    config: &OptimizerConfig,
) -> Result<Allocation, ConfigError> {
    config.ga.validate()?;
    let problem = BedAssignmentProblem::new(demands, pool, FitScorer::new(config.scoring.clone()))?;

    tracing::debug!(
        demands = demands.len(),
        resources = pool.len(),
        eligible = problem.eligible().len(),
        "optimizing assignment"
    );

    let result = GaRunner::run(&problem, &config.ga)?;
    Ok(Allocation {
        genes: result.best.genes,
        fitness: result.best_fitness,
        generations: result.generations,
        fitness_history: result.fitness_history,
        seed: result.seed,
    })
}
