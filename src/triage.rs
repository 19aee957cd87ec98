//! Demand prioritisation from vital signs.
//!
//! [`FuzzyTriage`] maps temperature, systolic blood pressure and pain onto
//! triangular low/normal/high memberships, fires three rules and
//! defuzzifies by weighted average:
//!
//! - high: temperature high OR pain severe OR pressure high → 90
//! - medium: temperature normal AND pain moderate AND pressure normal → 50
//! - low: temperature low OR pain mild → 10
//!
//! The result lies in `[0, 100]`; 0 is returned when no rule fires.
//!
//! # References
//!
//! Mamdani & Assilian (1975), "An experiment in linguistic synthesis with a
//! fuzzy logic controller"

use crate::model::Demand;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Triage inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vitals {
    /// Body temperature in °C.
    pub temperature_c: f64,
    /// Systolic blood pressure in mmHg.
    pub systolic_bp: f64,
    /// Pain on a 0–10 scale.
    pub pain: f64,
}

impl Vitals {
    pub fn new(temperature_c: f64, systolic_bp: f64, pain: f64) -> Self {
        Self {
            temperature_c,
            systolic_bp,
            pain,
        }
    }
}

/// Degrees of membership in three fuzzy sets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Memberships {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}

/// A pure, deterministic priority function; higher is more urgent.
pub trait PriorityModel: Send + Sync {
    fn name(&self) -> &str;

    fn priority(&self, vitals: &Vitals) -> f64;
}

/// Rule-based fuzzy triage.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyTriage;

impl FuzzyTriage {
    pub fn temperature(t: f64) -> Memberships {
        Memberships {
            low: unit((37.0 - t) / 2.0),
            mid: unit(1.0 - (t - 37.0).abs() / 1.5),
            high: unit((t - 37.0) / 3.0),
        }
    }

    pub fn blood_pressure(sbp: f64) -> Memberships {
        Memberships {
            low: unit((120.0 - sbp) / 40.0),
            mid: unit(1.0 - (sbp - 120.0).abs() / 20.0),
            high: unit((sbp - 120.0) / 40.0),
        }
    }

    /// `low` = mild, `mid` = moderate, `high` = severe.
    pub fn pain(p: f64) -> Memberships {
        Memberships {
            low: unit((5.0 - p) / 5.0),
            mid: unit(1.0 - (p - 5.0).abs() / 3.0),
            high: unit((p - 5.0) / 5.0),
        }
    }
}

impl PriorityModel for FuzzyTriage {
    fn name(&self) -> &str {
        "fuzzy-triage"
    }

    fn priority(&self, vitals: &Vitals) -> f64 {
        let t = Self::temperature(vitals.temperature_c);
        let b = Self::blood_pressure(vitals.systolic_bp);
        let p = Self::pain(vitals.pain);

        let high = t.high.max(p.high).max(b.high);
        let medium = t.mid.min(p.mid).min(b.mid);
        let low = t.low.max(p.low);

        let denom = high + medium + low;
        if denom <= 0.0 {
            return 0.0;
        }
        (high * 90.0 + medium * 50.0 + low * 10.0) / denom
    }
}

/// Clamps to `[0, 1]`, mapping NaN to 0.
fn unit(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Writes `model`'s priority for each demand's vitals into `Demand::priority`.
///
/// Pairs are matched by position; extra entries on either side are ignored.
pub fn assign_priorities<M: PriorityModel + ?Sized>(
    model: &M,
    demands: &mut [Demand],
    vitals: &[Vitals],
) {
    for (demand, v) in demands.iter_mut().zip(vitals) {
        demand.priority = model.priority(v);
        tracing::trace!(model = model.name(), demand = %demand.id, priority = demand.priority, "triaged");
    }
    tracing::debug!(
        model = model.name(),
        scored = demands.len().min(vitals.len()),
        "priorities assigned"
    );
}

/// Sorts demands most urgent first. Ties keep their original order.
pub fn order_by_priority(demands: &mut [Demand]) {
    demands.sort_by(|a, b| b.priority.total_cmp(&a.priority));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(t: f64, sbp: f64, pain: f64) -> f64 {
        FuzzyTriage.priority(&Vitals::new(t, sbp, pain))
    }

    #[test]
    fn test_high_priority() {
        assert!(score(40.0, 160.0, 9.0) > 70.0);
        assert!(score(39.0, 140.0, 7.0) > 50.0);
    }

    #[test]
    fn test_low_priority() {
        let p = score(37.0, 120.0, 2.0);
        assert!(p < 40.0, "got {p}");
        assert!((p - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_medium_priority() {
        let p = score(38.0, 130.0, 5.0);
        assert!((40.0..=70.0 + 1e-9).contains(&p), "got {p}");
    }

    #[test]
    fn test_no_rule_fires() {
        // normal temperature, moderate pain, low-normal pressure boundary
        assert_eq!(score(37.0, 100.0, 5.0), 0.0);
    }

    #[test]
    fn test_bounded_and_nan_safe() {
        for &(t, b, p) in &[
            (30.0, 60.0, 0.0),
            (45.0, 220.0, 10.0),
            (f64::NAN, 120.0, 3.0),
            (37.0, f64::NAN, f64::NAN),
        ] {
            let s = score(t, b, p);
            assert!((0.0..=100.0).contains(&s), "{t} {b} {p} -> {s}");
        }
    }

    #[test]
    fn test_model_name() {
        let model: &dyn PriorityModel = &FuzzyTriage;
        assert_eq!(model.name(), "fuzzy-triage");
    }

    #[test]
    fn test_memberships() {
        let m = FuzzyTriage::temperature(37.0);
        assert_eq!(m.mid, 1.0);
        assert_eq!(m.low, 0.0);
        assert_eq!(m.high, 0.0);
        let m = FuzzyTriage::pain(10.0);
        assert_eq!(m.high, 1.0);
    }

    #[test]
    fn test_order_by_priority() {
        let mut demands = vec![
            Demand::new("a"),
            Demand::new("b"),
            Demand::new("c"),
        ];
        assign_priorities(
            &FuzzyTriage,
            &mut demands,
            &[
                Vitals::new(37.0, 120.0, 2.0),
                Vitals::new(40.0, 160.0, 9.0),
                Vitals::new(37.0, 120.0, 2.0),
            ],
        );
        order_by_priority(&mut demands);
        let ids: Vec<_> = demands.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }
}
