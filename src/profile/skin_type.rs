//! Skin-type resolution by confidence-gated sensor fusion.
//!
//! Sensor readings win over the questionnaire only when both `sebum` and
//! `moisture` were measured and the weaker of their confidences clears the
//! configured gate. The classification itself is an ordered rule table:
//! the first rule whose bounds all hold decides the skin type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ClassificationThresholds;
use crate::intake::{find_metric, FormAnswers, MachineMetric, MetricKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinType {
    Dry,
    Oily,
    Combination,
    Sensitive,
    Normal,
}

impl SkinType {
    /// Case-insensitive parse of a self-reported skin type
    pub fn parse(value: &str) -> Option<SkinType> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dry" => Some(SkinType::Dry),
            "oily" => Some(SkinType::Oily),
            "combination" => Some(SkinType::Combination),
            "sensitive" => Some(SkinType::Sensitive),
            "normal" => Some(SkinType::Normal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SkinType::Dry => "dry",
            SkinType::Oily => "oily",
            SkinType::Combination => "combination",
            SkinType::Sensitive => "sensitive",
            SkinType::Normal => "normal",
        }
    }

    /// Oily and combination skin get gel textures and micellar cleansing
    pub fn is_oil_prone(&self) -> bool {
        matches!(self, SkinType::Oily | SkinType::Combination)
    }

    /// Dry and sensitive skin get the rich ceramide night cream
    pub fn needs_rich_care(&self) -> bool {
        matches!(self, SkinType::Dry | SkinType::Sensitive)
    }
}

impl fmt::Display for SkinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which branch of the resolver produced the skin type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinTypeBasis {
    /// Sensor readings were confident enough to classify
    Machine,
    /// The questionnaire named a recognised skin type
    Questionnaire,
    /// Neither source was usable
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkinTypeResolution {
    pub skin_type: SkinType,
    pub basis: SkinTypeBasis,
    /// `min(sebum, moisture)` confidence when both readings exist
    pub sensor_confidence: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Bound {
    AtLeast(f64),
    AtMost(f64),
}

impl Bound {
    fn holds(self, reading: f64) -> bool {
        match self {
            Bound::AtLeast(limit) => reading >= limit,
            Bound::AtMost(limit) => reading <= limit,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct SkinTypeRule {
    sebum: Option<Bound>,
    moisture: Option<Bound>,
    result: SkinType,
}

impl SkinTypeRule {
    fn matches(&self, sebum: f64, moisture: f64) -> bool {
        self.sebum.is_none_or(|bound| bound.holds(sebum))
            && self.moisture.is_none_or(|bound| bound.holds(moisture))
    }
}

/// Classification rules in precedence order
fn skin_type_rules(thresholds: &ClassificationThresholds) -> [SkinTypeRule; 4] {
    [
        SkinTypeRule {
            sebum: Some(Bound::AtLeast(thresholds.oily_sebum_min)),
            moisture: None,
            result: SkinType::Oily,
        },
        SkinTypeRule {
            sebum: Some(Bound::AtMost(thresholds.dry_sebum_max)),
            moisture: Some(Bound::AtMost(thresholds.dry_moisture_max)),
            result: SkinType::Dry,
        },
        SkinTypeRule {
            sebum: None,
            moisture: Some(Bound::AtMost(thresholds.sensitive_moisture_max)),
            result: SkinType::Sensitive,
        },
        SkinTypeRule {
            sebum: Some(Bound::AtLeast(thresholds.combination_sebum_min)),
            moisture: Some(Bound::AtLeast(thresholds.combination_moisture_min)),
            result: SkinType::Combination,
        },
    ]
}

/// Classify a pair of sensor readings, falling back to normal skin
pub fn classify_readings(
    sebum: f64,
    moisture: f64,
    thresholds: &ClassificationThresholds,
) -> SkinType {
    skin_type_rules(thresholds)
        .iter()
        .find(|rule| rule.matches(sebum, moisture))
        .map(|rule| rule.result)
        .unwrap_or(SkinType::Normal)
}

/// Resolve the skin type and record which source decided it.
pub fn resolve_skin_type(
    form: &FormAnswers,
    metrics: &[MachineMetric],
    thresholds: &ClassificationThresholds,
) -> SkinTypeResolution {
    let readings = find_metric(metrics, MetricKey::Sebum)
        .zip(find_metric(metrics, MetricKey::Moisture));

    let sensor_confidence = readings
        .map(|(sebum, moisture)| sebum.confidence_or_zero().min(moisture.confidence_or_zero()));

    if let Some((sebum, moisture)) = readings {
        if sensor_confidence.is_some_and(|confidence| confidence >= thresholds.min_confidence) {
            return SkinTypeResolution {
                skin_type: classify_readings(sebum.value, moisture.value, thresholds),
                basis: SkinTypeBasis::Machine,
                sensor_confidence,
            };
        }
    }

    match form.declared_skin_type().and_then(SkinType::parse) {
        Some(skin_type) => SkinTypeResolution {
            skin_type,
            basis: SkinTypeBasis::Questionnaire,
            sensor_confidence,
        },
        None => SkinTypeResolution {
            skin_type: SkinType::Normal,
            basis: SkinTypeBasis::Default,
            sensor_confidence,
        },
    }
}

/// Skin type under the default classification thresholds
pub fn determine_skin_type(form: &FormAnswers, metrics: &[MachineMetric]) -> SkinType {
    resolve_skin_type(form, metrics, &ClassificationThresholds::default()).skin_type
}
