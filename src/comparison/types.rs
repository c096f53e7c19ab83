use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::intake::{validate_metrics, MachineMetric, MetricKey};
use crate::profile::{Concern, SkinType};
use crate::storage::StoredPlan;

/// What was known about the person at one assessment session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub metrics: Vec<MachineMetric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_type: Option<SkinType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_concerns: Option<Vec<Concern>>,
}

impl SessionSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: SessionSnapshot =
            serde_json::from_str(json).map_err(|e| Error::contract("snapshot", e.to_string()))?;
        validate_metrics(&snapshot.metrics)?;
        Ok(snapshot)
    }

    /// Snapshot of a stored plan and the readings it was generated from
    pub fn from_plan(stored: &StoredPlan, metrics: Vec<MachineMetric>) -> Self {
        Self {
            session_id: Some(stored.session_id),
            created_at: stored.created_at,
            metrics,
            skin_type: Some(stored.plan.skin_profile.skin_type),
            main_concerns: Some(stored.plan.skin_profile.main_concerns.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricComparison {
    pub key: MetricKey,
    pub previous: Option<f64>,
    pub latest: Option<f64>,
    /// `latest - previous` when both readings exist
    pub delta: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Change<T> {
    pub previous: Option<T>,
    pub latest: Option<T>,
}

impl<T: PartialEq> Change<T> {
    /// Both sides known and different
    pub fn changed(&self) -> bool {
        matches!(
            (&self.previous, &self.latest),
            (Some(previous), Some(latest)) if previous != latest
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileComparison {
    pub skin_type: Change<SkinType>,
    pub main_concerns: Change<Vec<Concern>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionComparison {
    pub previous_session: Option<Uuid>,
    pub latest_session: Option<Uuid>,
    pub previous_at: DateTime<Utc>,
    pub latest_at: DateTime<Utc>,
    pub metrics: Vec<MetricComparison>,
    pub profile: ProfileComparison,
    pub notes: Vec<String>,
}
