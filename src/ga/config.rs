//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::Selection;
use crate::error::ConfigError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which candidate a run reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReturnPolicy {
    /// Best candidate seen in any generation, including the initial one.
    #[default]
    BestEver,
    /// Best candidate of the final generation.
    FinalGeneration,
}

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_allocate::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.max_generations, 50);
/// assert_eq!(config.elite_count, 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_allocate::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(10)
///     .with_elite_count(4)
///     .with_selection(Selection::Tournament(3))
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Number of generations to run. 0 returns the best initial candidate.
    pub max_generations: usize,

    /// Top individuals copied unchanged into the next generation.
    ///
    /// Must be at least 1 and less than `population_size`.
    pub elite_count: usize,

    /// Probability that an offspring receives one point mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Which candidate the run returns.
    pub return_policy: ReturnPolicy,

    /// Evaluate offspring in parallel. Only honoured with the `parallel`
    /// feature; results are identical either way.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 50,
            elite_count: 10,
            mutation_rate: 0.1,
            selection: Selection::default(),
            return_policy: ReturnPolicy::default(),
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the elite count.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Sets the mutation rate, clamped to [0, 1].
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets which individual the run reports.
    pub fn with_return_policy(mut self, policy: ReturnPolicy) -> Self {
        self.return_policy = policy;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.elite_count == 0 || self.elite_count >= self.population_size {
            return Err(ConfigError::InvalidEliteCount {
                elite_count: self.elite_count,
                population_size: self.population_size,
            });
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::InvalidMutationRate(self.mutation_rate));
        }
        if self.selection == Selection::Tournament(0) {
            return Err(ConfigError::InvalidTournamentSize);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.max_generations, 50);
        assert_eq!(config.elite_count, 10);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert_eq!(config.selection, Selection::Truncation);
        assert_eq!(config.return_policy, ReturnPolicy::BestEver);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(200)
            .with_max_generations(1000)
            .with_elite_count(20)
            .with_mutation_rate(0.05)
            .with_return_policy(ReturnPolicy::FinalGeneration)
            .with_parallel(true)
            .with_seed(42);

        assert_eq!(config.population_size, 200);
        assert_eq!(config.max_generations, 1000);
        assert_eq!(config.elite_count, 20);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert_eq!(config.return_policy, ReturnPolicy::FinalGeneration);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_clamp_mutation_rate() {
        assert_eq!(GaConfig::default().with_mutation_rate(2.0).mutation_rate, 1.0);
        assert_eq!(GaConfig::default().with_mutation_rate(-0.5).mutation_rate, 0.0);
    }

    #[test]
    fn test_validate_empty_population() {
        let config = GaConfig::default().with_population_size(0);
        assert_eq!(config.validate(), Err(ConfigError::EmptyPopulation));
    }

    #[test]
    fn test_validate_elite_bounds() {
        let too_many = GaConfig::default().with_population_size(10).with_elite_count(10);
        assert!(matches!(
            too_many.validate(),
            Err(ConfigError::InvalidEliteCount { elite_count: 10, population_size: 10 })
        ));

        let none = GaConfig::default().with_elite_count(0);
        assert!(none.validate().is_err());
    }

    #[test]
    fn test_validate_mutation_rate_set_directly() {
        let mut config = GaConfig::default();
        config.mutation_rate = 1.5;
        assert_eq!(config.validate(), Err(ConfigError::InvalidMutationRate(1.5)));
        config.mutation_rate = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_tournament_size() {
        let config = GaConfig::default().with_selection(Selection::Tournament(0));
        assert_eq!(config.validate(), Err(ConfigError::InvalidTournamentSize));
    }

    #[test]
    fn test_zero_generations_is_valid() {
        assert!(GaConfig::default().with_max_generations(0).validate().is_ok());
    }
}
