use serde::{Deserialize, Serialize};

/// Sensor thresholds used to classify skin type from machine readings.
///
/// Machine readings only override the questionnaire when the weaker of the
/// sebum and moisture confidences reaches `min_confidence`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationThresholds {
    /// Minimum sensor confidence (0.0-1.0) for machine data to win
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f64,

    /// Sebum at or above this value means oily skin
    #[serde(default = "default_oily_sebum_min")]
    pub oily_sebum_min: f64,

    /// Dry skin: sebum at or below this value...
    #[serde(default = "default_dry_sebum_max")]
    pub dry_sebum_max: f64,

    /// ...and moisture at or below this value
    #[serde(default = "default_dry_moisture_max")]
    pub dry_moisture_max: f64,

    /// Moisture at or below this value means sensitive skin
    #[serde(default = "default_sensitive_moisture_max")]
    pub sensitive_moisture_max: f64,

    /// Combination skin: sebum at or above this value...
    #[serde(default = "default_combination_sebum_min")]
    pub combination_sebum_min: f64,

    /// ...and moisture at or above this value
    #[serde(default = "default_combination_moisture_min")]
    pub combination_moisture_min: f64,
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            min_confidence: default_min_confidence(),
            oily_sebum_min: default_oily_sebum_min(),
            dry_sebum_max: default_dry_sebum_max(),
            dry_moisture_max: default_dry_moisture_max(),
            sensitive_moisture_max: default_sensitive_moisture_max(),
            combination_sebum_min: default_combination_sebum_min(),
            combination_moisture_min: default_combination_moisture_min(),
        }
    }
}

impl ClassificationThresholds {
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(format!(
                "classification.min_confidence must be between 0.0 and 1.0, got {}",
                self.min_confidence
            ));
        }

        let readings = [
            ("oily_sebum_min", self.oily_sebum_min),
            ("dry_sebum_max", self.dry_sebum_max),
            ("dry_moisture_max", self.dry_moisture_max),
            ("sensitive_moisture_max", self.sensitive_moisture_max),
            ("combination_sebum_min", self.combination_sebum_min),
            ("combination_moisture_min", self.combination_moisture_min),
        ];
        for (name, value) in readings {
            if !(0.0..=100.0).contains(&value) {
                return Err(format!(
                    "classification.{name} must be between 0 and 100, got {value}"
                ));
            }
        }

        Ok(())
    }
}

fn default_min_confidence() -> f64 {
    0.6
}
fn default_oily_sebum_min() -> f64 {
    60.0
}
fn default_dry_sebum_max() -> f64 {
    30.0
}
fn default_dry_moisture_max() -> f64 {
    40.0
}
fn default_sensitive_moisture_max() -> f64 {
    30.0
}
fn default_combination_sebum_min() -> f64 {
    40.0
}
fn default_combination_moisture_min() -> f64 {
    50.0
}

/// Irritation cut-offs that drive weekly cadence and the risk narration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SchedulingThresholds {
    /// At or above this score strong actives move to a weekly cadence
    #[serde(default = "default_high_risk")]
    pub high_risk: f64,

    /// At or above this score actives are introduced gradually
    #[serde(default = "default_moderate_risk")]
    pub moderate_risk: f64,
}

impl Default for SchedulingThresholds {
    fn default() -> Self {
        Self {
            high_risk: default_high_risk(),
            moderate_risk: default_moderate_risk(),
        }
    }
}

impl SchedulingThresholds {
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("high_risk", self.high_risk),
            ("moderate_risk", self.moderate_risk),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!(
                    "scheduling.{name} must be between 0.0 and 1.0, got {value}"
                ));
            }
        }

        if self.moderate_risk > self.high_risk {
            return Err(format!(
                "scheduling.moderate_risk ({}) must not exceed scheduling.high_risk ({})",
                self.moderate_risk, self.high_risk
            ));
        }

        Ok(())
    }
}

fn default_high_risk() -> f64 {
    0.6
}
fn default_moderate_risk() -> f64 {
    0.4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classification_is_valid() {
        assert!(ClassificationThresholds::default().validate().is_ok());
    }

    #[test]
    fn test_confidence_outside_unit_interval_rejected() {
        let thresholds = ClassificationThresholds {
            min_confidence: 1.2,
            ..Default::default()
        };
        let err = thresholds.validate().unwrap_err();
        assert!(err.contains("min_confidence"));
    }

    #[test]
    fn test_reading_threshold_outside_scale_rejected() {
        let thresholds = ClassificationThresholds {
            oily_sebum_min: 140.0,
            ..Default::default()
        };
        assert!(thresholds.validate().unwrap_err().contains("oily_sebum_min"));
    }

    #[test]
    fn test_moderate_above_high_rejected() {
        let thresholds = SchedulingThresholds {
            high_risk: 0.3,
            moderate_risk: 0.5,
        };
        assert!(thresholds.validate().is_err());
    }
}
