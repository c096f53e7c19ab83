//! Scoring configuration for irritation risk and plan confidence
//!
//! - Weights for the linear irritation heuristic (sensor and concern terms)
//! - Confidence floor and risk penalty for the explainability score

use serde::{Deserialize, Serialize};

/// Weights of the irritation heuristic.
///
/// Sensor terms are multiplied by the reading normalised to 0-1; concern
/// terms are added as-is. The summed score is capped at 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrritationWeights {
    /// Weight for the `sensitivity` sensor reading (0.0-1.0)
    #[serde(default = "default_sensitivity_metric_weight")]
    pub sensitivity_metric: f64,

    /// Weight for the `hyperemia` (redness) sensor reading (0.0-1.0)
    #[serde(default = "default_hyperemia_metric_weight")]
    pub hyperemia_metric: f64,

    /// Added when the person reports sensitivity as a concern
    #[serde(default = "default_sensitivity_concern_weight")]
    pub sensitivity_concern: f64,

    /// Added when the person reports rosacea as a concern
    #[serde(default = "default_rosacea_concern_weight")]
    pub rosacea_concern: f64,
}

impl Default for IrritationWeights {
    fn default() -> Self {
        Self {
            sensitivity_metric: default_sensitivity_metric_weight(),
            hyperemia_metric: default_hyperemia_metric_weight(),
            sensitivity_concern: default_sensitivity_concern_weight(),
            rosacea_concern: default_rosacea_concern_weight(),
        }
    }
}

impl IrritationWeights {
    // Pure function: Check if a weight is in valid range
    pub fn is_valid_weight(weight: f64) -> bool {
        (0.0..=1.0).contains(&weight)
    }

    // Pure function: Validate a single weight with name
    pub fn validate_weight(weight: f64, name: &str) -> Result<(), String> {
        if Self::is_valid_weight(weight) {
            Ok(())
        } else {
            Err(format!("{} weight must be between 0.0 and 1.0", name))
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        Self::validate_weight(self.sensitivity_metric, "Sensitivity metric")?;
        Self::validate_weight(self.hyperemia_metric, "Hyperemia metric")?;
        Self::validate_weight(self.sensitivity_concern, "Sensitivity concern")?;
        Self::validate_weight(self.rosacea_concern, "Rosacea concern")?;
        Ok(())
    }
}

pub fn default_sensitivity_metric_weight() -> f64 {
    0.4
}
pub fn default_hyperemia_metric_weight() -> f64 {
    0.3
}
pub fn default_sensitivity_concern_weight() -> f64 {
    0.2
}
pub fn default_rosacea_concern_weight() -> f64 {
    0.3
}

/// Confidence reported alongside a plan.
///
/// `confidence = max(confidence_floor, 1.0 - irritation * risk_penalty)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExplainabilityConfig {
    #[serde(default = "default_confidence_floor")]
    pub confidence_floor: f64,

    #[serde(default = "default_risk_penalty")]
    pub risk_penalty: f64,
}

impl Default for ExplainabilityConfig {
    fn default() -> Self {
        Self {
            confidence_floor: default_confidence_floor(),
            risk_penalty: default_risk_penalty(),
        }
    }
}

impl ExplainabilityConfig {
    pub fn validate(&self) -> Result<(), String> {
        IrritationWeights::validate_weight(self.confidence_floor, "Confidence floor")?;
        IrritationWeights::validate_weight(self.risk_penalty, "Risk penalty")?;
        Ok(())
    }
}

pub fn default_confidence_floor() -> f64 {
    0.7
}
pub fn default_risk_penalty() -> f64 {
    0.3
}
