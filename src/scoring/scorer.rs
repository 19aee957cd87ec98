//! Fit scoring for demand/resource pairs.

use super::config::ScoringConfig;
use crate::model::{Demand, Resource};

/// Scores how well a resource fits a demand. Higher is better.
///
/// `score = Σ(required) [bonus if provided, −penalty if missing]
///          − distance_weight · demand.weight · manhattan(demand, resource)`
///
/// # Examples
///
/// ```
/// use u_allocate::model::{Coord, Demand, Resource};
/// use u_allocate::scoring::FitScorer;
///
/// let scorer = FitScorer::default();
/// let patient = Demand::new("p1").requires("critical-care");
/// let far_icu = Resource::new("b1").with_capability("critical-care").at(Coord::new(10, 0));
/// let near_ward = Resource::new("b2").at(Coord::new(1, 0));
/// assert!(scorer.score(&patient, &far_icu) > scorer.score(&patient, &near_ward));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FitScorer {
    config: ScoringConfig,
}

impl FitScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score of placing `demand` on `resource`.
    pub fn score(&self, demand: &Demand, resource: &Resource) -> f64 {
        let capability: f64 = demand
            .required
            .iter()
            .map(|tag| {
                if resource.has_capability(tag) {
                    self.config.match_bonus
                } else {
                    -self.config.mismatch_penalty
                }
            })
            .sum();
        capability - self.proximity_penalty(demand, resource)
    }

    /// Non-negative distance term, monotone in Manhattan distance.
    pub fn proximity_penalty(&self, demand: &Demand, resource: &Resource) -> f64 {
        let dist = demand.location.manhattan(&resource.location) as f64;
        self.config.distance_weight * demand.weight * dist
    }

    /// Score contribution of leaving a demand unassigned.
    pub fn unassigned(&self) -> f64 {
        self.config.unassigned_penalty
    }

    /// Whether `resource` provides every capability `demand` requires.
    pub fn covers(&self, demand: &Demand, resource: &Resource) -> bool {
        demand.required.iter().all(|tag| resource.has_capability(tag))
    }

    /// Required tags of `demand` that no resource in `resources` provides.
    pub fn capability_gaps<'d>(&self, demand: &'d Demand, resources: &[Resource]) -> Vec<&'d str> {
        demand
            .required
            .iter()
            .filter(|tag| !resources.iter().any(|r| r.has_capability(tag)))
            .map(String::as_str)
            .collect()
    }

    /// Aggregate score of an assignment vector.
    ///
    /// `genes[i]` is the resource index for `demands[i]`, or `None`.
    /// Indices outside `resources` count as unassigned. When
    /// `overbooking_penalty` is positive, each demand beyond a resource's
    /// capacity is penalised.
    pub fn score_assignment(
        &self,
        demands: &[Demand],
        resources: &[Resource],
        genes: &[Option<usize>],
    ) -> f64 {
        let track_load = self.config.overbooking_penalty > 0.0;
        let mut load = if track_load { vec![0u32; resources.len()] } else { Vec::new() };
        let mut total = 0.0;

        for (demand, gene) in demands.iter().zip(genes) {
            match gene.and_then(|idx| resources.get(idx).map(|r| (idx, r))) {
                Some((idx, resource)) => {
                    total += self.score(demand, resource);
                    if track_load {
                        load[idx] += 1;
                        if load[idx] > resource.capacity {
                            total -= self.config.overbooking_penalty;
                        }
                    }
                }
                None => total += self.unassigned(),
            }
        }
        total
    }
}

/// Greedy single-demand selection: the best-scoring free resource.
///
/// Ties go to the earlier resource. Returns `None` when nothing is free.
pub fn best_fit(scorer: &FitScorer, demand: &Demand, resources: &[Resource]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, resource) in resources.iter().enumerate() {
        if !resource.is_free() {
            continue;
        }
        let score = scorer.score(demand, resource);
        if best.map_or(true, |(_, b)| score > b) {
            best = Some((idx, score));
        }
    }
    best.map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Coord, Occupancy};
    use proptest::prelude::*;

    fn icu_patient() -> Demand {
        Demand::new("p1").requires("critical-care").at(Coord::new(0, 0))
    }

    #[test]
    fn test_matching_distant_beats_near_mismatch() {
        let scorer = FitScorer::default();
        let d = icu_patient();
        let far = Resource::new("far").with_capability("critical-care").at(Coord::new(10, 0));
        let near = Resource::new("near").at(Coord::new(1, 0));

        let s_far = scorer.score(&d, &far);
        let s_near = scorer.score(&d, &near);
        assert!((s_far - 1.0).abs() < 1e-9, "2 - 0.1*10, got {s_far}");
        assert!((s_near + 100.1).abs() < 1e-9, "-100 - 0.1*1, got {s_near}");
        assert!(s_far > s_near);
    }

    #[test]
    fn test_no_requirements_only_distance() {
        let scorer = FitScorer::default();
        let d = Demand::new("p").at(Coord::new(5, 5));
        let r = Resource::new("b").at(Coord::new(6, 6));
        assert!((scorer.score(&d, &r) + 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_weight_scales_proximity() {
        let scorer = FitScorer::default();
        let d = Demand::new("p").with_weight(3.0);
        let r = Resource::new("b").at(Coord::new(2, 0));
        assert!((scorer.proximity_penalty(&d, &r) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_capability_gaps() {
        let scorer = FitScorer::default();
        let d = Demand::new("op").requires("surgeon").requires("anesthetist");
        let staff = vec![Resource::new("s1").with_capability("surgeon")];
        assert_eq!(scorer.capability_gaps(&d, &staff), vec!["anesthetist"]);
        assert!(!scorer.covers(&d, &staff[0]));
    }

    #[test]
    fn test_score_assignment_reference_instance() {
        let scorer = FitScorer::default();
        let demands = vec![
            Demand::new("p1").requires("critical-care").at(Coord::new(0, 0)),
            Demand::new("p2").at(Coord::new(5, 5)),
        ];
        let beds = vec![
            Resource::new("b1").with_capability("critical-care").at(Coord::new(1, 0)),
            Resource::new("b2").at(Coord::new(6, 6)),
        ];
        let good = scorer.score_assignment(&demands, &beds, &[Some(0), Some(1)]);
        assert!((good - 1.7).abs() < 1e-9, "got {good}");
        assert!(good > 0.0);

        let none = scorer.score_assignment(&demands, &beds, &[None, None]);
        assert!((none + 2.0).abs() < 1e-9);

        let out_of_range = scorer.score_assignment(&demands, &beds, &[Some(9), Some(1)]);
        assert!((out_of_range - (-1.0 - 0.2)).abs() < 1e-9);
    }

    #[test]
    fn test_overbooking_penalty() {
        let scorer = FitScorer::new(ScoringConfig::default().with_overbooking_penalty(50.0));
        let demands = vec![Demand::new("a"), Demand::new("b")];
        let beds = vec![Resource::new("b1"), Resource::new("b2")];
        let shared = scorer.score_assignment(&demands, &beds, &[Some(0), Some(0)]);
        let split = scorer.score_assignment(&demands, &beds, &[Some(0), Some(1)]);
        assert!((shared + 50.0).abs() < 1e-9);
        assert!(split.abs() < 1e-9);
    }

    #[test]
    fn test_best_fit_prefers_capability() {
        let scorer = FitScorer::default();
        let beds = vec![
            Resource::new("b1").at(Coord::new(1, 0)),
            Resource::new("b2").with_capability("critical-care").at(Coord::new(10, 10)),
        ];
        assert_eq!(best_fit(&scorer, &icu_patient(), &beds), Some(1));
    }

    #[test]
    fn test_best_fit_skips_unavailable() {
        let scorer = FitScorer::default();
        let beds = vec![
            Resource::new("b1")
                .with_capability("critical-care")
                .with_occupancy(Occupancy::Occupied),
            Resource::new("b2").with_occupancy(Occupancy::Reserved),
        ];
        assert_eq!(best_fit(&scorer, &icu_patient(), &beds), None);
        assert_eq!(best_fit(&scorer, &icu_patient(), &[]), None);
    }

    proptest! {
        #[test]
        fn prop_score_strictly_decreases_with_distance(
            x in -50i64..50,
            y in -50i64..50,
            extra in 1i64..100,
        ) {
            let scorer = FitScorer::default();
            let d = icu_patient();
            let near = Resource::new("a").with_capability("critical-care").at(Coord::new(x, y));
            let farther_x = if x >= 0 { x + extra } else { x - extra };
            let far = Resource::new("b").with_capability("critical-care").at(Coord::new(farther_x, y));
            prop_assert!(scorer.score(&d, &far) < scorer.score(&d, &near));
        }

        #[test]
        fn prop_losing_match_costs_at_least_penalty(
            x in -500i64..500,
            y in -500i64..500,
        ) {
            let scorer = FitScorer::default();
            let d = icu_patient();
            let matched = Resource::new("a").with_capability("critical-care").at(Coord::new(x, y));
            let unmatched = Resource::new("b").at(Coord::new(x, y));
            let drop = scorer.score(&d, &matched) - scorer.score(&d, &unmatched);
            prop_assert!(drop >= scorer.config().mismatch_penalty);
        }
    }
}
