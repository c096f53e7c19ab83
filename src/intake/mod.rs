//! Typed boundary for raw intake data.
//!
//! Everything the engine consumes passes through here first. Missing
//! optional data is defaulted; data of the wrong shape or out of range is
//! rejected as a contract violation.

pub mod form;
pub mod metrics;
pub mod preferences;

pub use form::{FormAnswers, MedicalInfo, SkinProfileAnswers};
pub use metrics::{
    find_metric, validate_metrics, CaptureMode, MachineMetric, MetricKey, MetricUnit,
    SeverityLevel,
};
pub use preferences::{MoisturizerTexture, Preferences};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// One assessment session's worth of input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeRequest {
    pub answers: FormAnswers,
    #[serde(default)]
    pub metrics: Vec<MachineMetric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,
}

impl IntakeRequest {
    pub fn from_json(json: &str) -> Result<Self> {
        let request: IntakeRequest =
            serde_json::from_str(json).map_err(|e| Error::contract("intake", e.to_string()))?;
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<()> {
        validate_metrics(&self.metrics)
    }
}
