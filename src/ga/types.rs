//! Core trait definitions for the GA framework.
//!
//! [`Individual`] and [`GaProblem`] form the contract between the generic
//! evolutionary loop and a concrete problem such as bed assignment.

use rand::Rng;

/// A candidate solution in the GA population.
///
/// Fitness is an `f64` where **higher is better**. The runner calls
/// [`GaProblem::evaluate`] and stores the result via
/// [`set_fitness`](Individual::set_fitness).
pub trait Individual: Clone + Send + Sync {
    fn fitness(&self) -> f64;

    fn set_fitness(&mut self, fitness: f64);
}

/// Defines a GA optimization problem.
///
/// 1. **Initialization**: how to create random individuals
/// 2. **Evaluation**: how to compute fitness
/// 3. **Crossover**: how to recombine two parents
/// 4. **Mutation**: how to perturb an individual
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the runner may evaluate
/// individuals in parallel (feature `parallel`).
pub trait GaProblem: Send + Sync {
    type Individual: Individual;

    /// Creates a random individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Fitness of an individual; higher is better. Must be pure.
    fn evaluate(&self, individual: &Self::Individual) -> f64;

    /// Produces one or more offspring from two parents.
    ///
    /// The default clones `parent1`.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        _parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Vec<Self::Individual> {
        vec![parent1.clone()]
    }

    /// Mutates an individual in place. The runner decides *whether* to
    /// mutate; this decides *how*.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Called at the end of each generation with the generation's best
    /// fitness.
    fn on_generation(&self, _generation: usize, _best_fitness: f64) {}
}
