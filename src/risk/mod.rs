//! Irritation risk model.
//!
//! A weighted linear heuristic over the `sensitivity` and `hyperemia`
//! readings plus the sensitivity and rosacea concerns. Every term is
//! non-negative and the total is capped at 1.0.

use serde::{Deserialize, Serialize};

use crate::config::{IrritationWeights, SchedulingThresholds};
use crate::intake::{find_metric, MachineMetric, MetricKey};
use crate::profile::Concern;

/// One term of the irritation score
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub name: String,
    pub weight: f64,
    pub raw_value: f64,
    pub contribution: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IrritationBreakdown {
    pub factors: Vec<RiskFactor>,
    /// Sum of contributions, capped at 1.0
    pub score: f64,
}

impl IrritationBreakdown {
    fn from_factors(factors: Vec<RiskFactor>) -> Self {
        let total: f64 = factors.iter().map(|factor| factor.contribution).sum();
        Self {
            factors,
            score: total.clamp(0.0, 1.0),
        }
    }
}

fn metric_factor(metrics: &[MachineMetric], key: MetricKey, weight: f64) -> Option<RiskFactor> {
    find_metric(metrics, key).map(|metric| {
        let normalized = metric.value / 100.0;
        RiskFactor {
            name: format!("{key} reading"),
            weight,
            raw_value: metric.value,
            contribution: normalized * weight,
        }
    })
}

fn concern_factor(concerns: &[Concern], concern: Concern, weight: f64) -> Option<RiskFactor> {
    concerns.contains(&concern).then(|| RiskFactor {
        name: format!("{concern} concern"),
        weight,
        raw_value: 1.0,
        contribution: weight,
    })
}

/// Score irritation risk with explicit weights, keeping each term.
pub fn score_irritation(
    metrics: &[MachineMetric],
    concerns: &[Concern],
    weights: &IrritationWeights,
) -> IrritationBreakdown {
    let factors = [
        metric_factor(metrics, MetricKey::Sensitivity, weights.sensitivity_metric),
        metric_factor(metrics, MetricKey::Hyperemia, weights.hyperemia_metric),
        concern_factor(concerns, Concern::Sensitivity, weights.sensitivity_concern),
        concern_factor(concerns, Concern::Rosacea, weights.rosacea_concern),
    ];

    IrritationBreakdown::from_factors(factors.into_iter().flatten().collect())
}

/// Irritation score in `[0, 1]` under the default weights
pub fn calculate_irritation_score(metrics: &[MachineMetric], concerns: &[Concern]) -> f64 {
    score_irritation(metrics, concerns, &IrritationWeights::default()).score
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub fn classify(score: f64, thresholds: &SchedulingThresholds) -> RiskTier {
        if score >= thresholds.high_risk {
            RiskTier::High
        } else if score >= thresholds.moderate_risk {
            RiskTier::Moderate
        } else {
            RiskTier::Low
        }
    }

    /// Tier under the default cut-offs (0.6 high, 0.4 moderate)
    pub fn from_score(score: f64) -> RiskTier {
        Self::classify(score, &SchedulingThresholds::default())
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Moderate => "Moderate",
            RiskTier::High => "High",
        }
    }
}
