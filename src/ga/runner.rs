//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → ranking → elitism → crossover → mutation → repeat.

use super::config::{GaConfig, ReturnPolicy};
use super::types::{GaProblem, Individual};
use crate::error::ConfigError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The reported individual, chosen by [`ReturnPolicy`].
    pub best: I,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Generations executed.
    pub generations: usize,

    /// Best fitness of each generation, starting with the initial
    /// population (`generations + 1` entries).
    pub fitness_history: Vec<f64>,

    /// Seed actually used, for replaying unseeded runs.
    pub seed: u64,
}

/// Executes the GA evolutionary loop.
///
/// Each generation the population is ranked best-first, the top
/// `elite_count` individuals survive unchanged, and the rest is refilled
/// with offspring of selected parent pairs. Offspring are mutated with
/// probability `mutation_rate`.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// # Errors
    /// Returns the [`GaConfig::validate`] error for an invalid configuration.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Individual>, ConfigError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let elite_count = config.elite_count;

        // 1. Initialize and evaluate
        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();
        evaluate_population(problem, &mut population, config.parallel);

        let mut best = population[find_best(&population)].clone();
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(best.fitness());

        tracing::debug!(
            seed,
            population = config.population_size,
            generations = config.max_generations,
            initial_best = best.fitness(),
            "ga start"
        );

        // 2. Evolutionary loop
        for gen in 0..config.max_generations {
            rank(&mut population);

            let mut next_gen: Vec<P::Individual> = population[..elite_count].to_vec();

            while next_gen.len() < config.population_size {
                let (p1, p2) = config
                    .selection
                    .select_pair(&population, elite_count, &mut rng);

                for mut child in problem.crossover(&population[p1], &population[p2], &mut rng) {
                    if next_gen.len() >= config.population_size {
                        break;
                    }
                    if rng.random_range(0.0..1.0) < config.mutation_rate {
                        problem.mutate(&mut child, &mut rng);
                    }
                    next_gen.push(child);
                }
            }

            // Elites keep their fitness
            evaluate_population(problem, &mut next_gen[elite_count..], config.parallel);
            population = next_gen;

            let gen_best = &population[find_best(&population)];
            let gen_best_fitness = gen_best.fitness();
            if gen_best_fitness > best.fitness() {
                best = gen_best.clone();
            }
            fitness_history.push(gen_best_fitness);

            tracing::trace!(generation = gen + 1, best = gen_best_fitness, "generation");
            problem.on_generation(gen + 1, gen_best_fitness);
        }

        let best = match config.return_policy {
            ReturnPolicy::BestEver => best,
            ReturnPolicy::FinalGeneration => population[find_best(&population)].clone(),
        };

        tracing::debug!(best = best.fitness(), "ga finished");

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            generations: config.max_generations,
            fitness_history,
            seed,
        })
    }
}

/// Sorts best-first. Stable, so equal individuals keep their order.
fn rank<I: Individual>(population: &mut [I]) {
    population.sort_by(|a, b| b.fitness().total_cmp(&a.fitness()));
}

fn evaluate_population<P: GaProblem>(problem: &P, population: &mut [P::Individual], parallel: bool) {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            population.par_iter_mut().for_each(|ind| {
                let f = problem.evaluate(ind);
                ind.set_fitness(f);
            });
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for ind in population.iter_mut() {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

/// Index of the fittest individual; the first one wins ties.
fn find_best<I: Individual>(population: &[I]) -> usize {
    let mut best = 0;
    for (i, ind) in population.iter().enumerate().skip(1) {
        if ind.fitness() > population[best].fitness() {
            best = i;
        }
    }
    best
}
