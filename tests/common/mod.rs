// Shared fixtures for skinplan integration tests
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use skinplan::{FormAnswers, MachineMetric, MetricKey, MetricUnit};

/// Fixed analysis time used wherever a plan is generated
pub fn analysis_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 1, 12, 0, 0).unwrap()
}

pub fn metric(key: MetricKey, value: f64) -> MachineMetric {
    MachineMetric::new(key, value, MetricUnit::Score)
}

pub fn confident(key: MetricKey, value: f64, confidence: f64) -> MachineMetric {
    metric(key, value).with_confidence(confidence)
}

/// Sebum and moisture readings sharing one confidence
pub fn sebum_moisture(sebum: f64, moisture: f64, confidence: f64) -> Vec<MachineMetric> {
    vec![
        confident(MetricKey::Sebum, sebum, confidence),
        confident(MetricKey::Moisture, moisture, confidence),
    ]
}

/// Sensitivity and redness readings that push irritation to 0.7
pub fn reactive_readings() -> Vec<MachineMetric> {
    vec![
        metric(MetricKey::Sensitivity, 100.0),
        metric(MetricKey::Hyperemia, 100.0),
    ]
}

pub fn form_with_concerns(concerns: &[&str]) -> FormAnswers {
    FormAnswers::new().with_concerns(concerns.iter().copied())
}
