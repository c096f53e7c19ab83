//! Sensor readings produced by a skin-analysis scan.
//!
//! A scan yields an unordered collection of [`MachineMetric`]s. Keys are not
//! guaranteed to be unique; lookups always take the first reading for a key.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Largest accepted length of `source_key`
pub const MAX_SOURCE_KEY_LEN: usize = 100;

/// Closed set of measurements a scan can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    Moisture,
    Sebum,
    Texture,
    PigmentationUv,
    Hyperemia,
    Pores,
    AcneUv,
    UvSpot,
    BrownArea,
    Sensitivity,
}

impl MetricKey {
    /// Every key in declaration order
    pub const ALL: [MetricKey; 10] = [
        MetricKey::Moisture,
        MetricKey::Sebum,
        MetricKey::Texture,
        MetricKey::PigmentationUv,
        MetricKey::Hyperemia,
        MetricKey::Pores,
        MetricKey::AcneUv,
        MetricKey::UvSpot,
        MetricKey::BrownArea,
        MetricKey::Sensitivity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKey::Moisture => "moisture",
            MetricKey::Sebum => "sebum",
            MetricKey::Texture => "texture",
            MetricKey::PigmentationUv => "pigmentation_uv",
            MetricKey::Hyperemia => "hyperemia",
            MetricKey::Pores => "pores",
            MetricKey::AcneUv => "acne_uv",
            MetricKey::UvSpot => "uv_spot",
            MetricKey::BrownArea => "brown_area",
            MetricKey::Sensitivity => "sensitivity",
        }
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricUnit {
    #[serde(rename = "pct")]
    Percent,
    #[serde(rename = "score")]
    Score,
    #[serde(rename = "count")]
    Count,
    #[serde(rename = "mm")]
    Millimeter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    None,
    Low,
    Moderate,
    High,
}

/// Imaging mode the reading was captured under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureMode {
    #[serde(rename = "RGB")]
    Rgb,
    #[serde(rename = "PL")]
    Polarized,
    #[serde(rename = "UV")]
    Uv,
}

/// A single sensor reading.
///
/// `value` is on a 0-100 scale; `confidence`, when reported, is 0-1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineMetric {
    pub key: MetricKey,
    pub value: f64,
    pub unit: MetricUnit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<SeverityLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<CaptureMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_key: Option<String>,
}

impl MachineMetric {
    pub fn new(key: MetricKey, value: f64, unit: MetricUnit) -> Self {
        Self {
            key,
            value,
            unit,
            severity: None,
            confidence: None,
            mode: None,
            source_key: None,
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn with_severity(mut self, severity: SeverityLevel) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn with_mode(mut self, mode: CaptureMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Reported confidence, treating an unreported value as zero
    pub fn confidence_or_zero(&self) -> f64 {
        self.confidence.unwrap_or(0.0)
    }

    /// Check the reading against its documented ranges. `field` names the
    /// reading in the error, e.g. `metrics[3]`.
    pub fn validate(&self, field: &str) -> Result<()> {
        if !self.value.is_finite() || !(0.0..=100.0).contains(&self.value) {
            return Err(Error::contract(
                format!("{field}.value"),
                format!("must be between 0 and 100, got {}", self.value),
            ));
        }

        if let Some(confidence) = self.confidence {
            if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
                return Err(Error::contract(
                    format!("{field}.confidence"),
                    format!("must be between 0 and 1, got {confidence}"),
                ));
            }
        }

        if let Some(source_key) = &self.source_key {
            let len = source_key.chars().count();
            if len > MAX_SOURCE_KEY_LEN {
                return Err(Error::contract(
                    format!("{field}.source_key"),
                    format!("must be at most {MAX_SOURCE_KEY_LEN} characters, got {len}"),
                ));
            }
        }

        Ok(())
    }
}

/// First reading with the given key, if any.
pub fn find_metric(metrics: &[MachineMetric], key: MetricKey) -> Option<&MachineMetric> {
    metrics.iter().find(|metric| metric.key == key)
}

/// Validate every reading, reporting the first offending index.
pub fn validate_metrics(metrics: &[MachineMetric]) -> Result<()> {
    metrics
        .iter()
        .enumerate()
        .try_for_each(|(index, metric)| metric.validate(&format!("metrics[{index}]")))
}
