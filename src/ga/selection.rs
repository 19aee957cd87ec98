//! Parent selection strategies.
//!
//! The runner ranks the population best-first before selection, so
//! strategies may rely on index order.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Individual;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Selection strategy for choosing a pair of distinct parents.
///
/// # Examples
///
/// ```
/// use u_allocate::ga::Selection;
///
/// // Uniform draw from the top 2 × elite_count ranked individuals
/// let sel = Selection::Truncation;
///
/// // Best of 3 random individuals
/// let sel = Selection::Tournament(3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Selection {
    /// Uniform sampling from the top `2 × elite_count` individuals.
    #[default]
    Truncation,

    /// Tournament selection over the whole population: pick `k` at
    /// random, keep the fittest.
    Tournament(usize),
}

impl Selection {
    /// Selects two distinct parent indices from a best-first population.
    ///
    /// # Panics
    /// Panics if `population` has fewer than two individuals.
    pub fn select_pair<I: Individual, R: Rng>(
        &self,
        population: &[I],
        elite_count: usize,
        rng: &mut R,
    ) -> (usize, usize) {
        assert!(population.len() >= 2, "need two individuals to pair");

        match self {
            Selection::Truncation => {
                let pool = (2 * elite_count).clamp(2, population.len());
                let a = rng.random_range(0..pool);
                let b = draw_excluding(pool, a, rng);
                (a, b)
            }
            Selection::Tournament(k) => {
                let a = tournament(population, *k, None, rng);
                let b = tournament(population, *k, Some(a), rng);
                (a, b)
            }
        }
    }
}

/// Uniform index in `0..n` other than `excluded`.
fn draw_excluding<R: Rng>(n: usize, excluded: usize, rng: &mut R) -> usize {
    let idx = rng.random_range(0..n - 1);
    if idx >= excluded {
        idx + 1
    } else {
        idx
    }
}

fn tournament<I: Individual, R: Rng>(
    population: &[I],
    k: usize,
    excluded: Option<usize>,
    rng: &mut R,
) -> usize {
    let n = population.len();
    let draw = |rng: &mut R| match excluded {
        Some(e) => draw_excluding(n, e, rng),
        None => rng.random_range(0..n),
    };

    let mut best = draw(rng);
    for _ in 1..k.max(1) {
        let idx = draw(rng);
        if population[idx].fitness() > population[best].fitness() {
            best = idx;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Clone, Debug)]
    struct Scored(f64);

    impl Individual for Scored {
        fn fitness(&self) -> f64 {
            self.0
        }
        fn set_fitness(&mut self, f: f64) {
            self.0 = f;
        }
    }

    fn ranked(n: usize) -> Vec<Scored> {
        (0..n).map(|i| Scored((n - i) as f64)).collect()
    }

    #[test]
    fn test_truncation_stays_in_top_pool() {
        let pop = ranked(50);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let (a, b) = Selection::Truncation.select_pair(&pop, 10, &mut rng);
            assert!(a < 20 && b < 20, "({a}, {b}) outside top 20");
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_truncation_pool_capped_by_population() {
        let pop = ranked(3);
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..200 {
            let (a, b) = Selection::Truncation.select_pair(&pop, 10, &mut rng);
            assert!(a < 3 && b < 3);
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_tournament_distinct_and_biased() {
        let pop = ranked(30);
        let mut rng = StdRng::seed_from_u64(3);
        let mut top_half = 0;
        for _ in 0..1000 {
            let (a, b) = Selection::Tournament(4).select_pair(&pop, 5, &mut rng);
            assert_ne!(a, b);
            if a < 15 {
                top_half += 1;
            }
        }
        assert!(top_half > 700, "tournament should favour fitter individuals: {top_half}");
    }

    #[test]
    fn test_two_individuals() {
        let pop = ranked(2);
        let mut rng = StdRng::seed_from_u64(4);
        let (a, b) = Selection::Tournament(3).select_pair(&pop, 1, &mut rng);
        assert_ne!(a, b);
    }
}
