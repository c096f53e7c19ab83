use serde::{Deserialize, Serialize};

use super::scoring::{ExplainabilityConfig, IrritationWeights};
use super::thresholds::{ClassificationThresholds, SchedulingThresholds};

/// Root configuration structure for the planning engine.
///
/// Every section is optional in `.skinplan.toml`; missing sections and
/// missing fields fall back to the built-in defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    /// Sensor thresholds for skin-type classification
    #[serde(default)]
    pub classification: ClassificationThresholds,

    /// Irritation heuristic weights
    #[serde(default)]
    pub irritation: IrritationWeights,

    /// Risk cut-offs for cadence and narration
    #[serde(default)]
    pub scheduling: SchedulingThresholds,

    /// Confidence scoring
    #[serde(default)]
    pub explainability: ExplainabilityConfig,
}

impl EngineConfig {
    /// Validate every section, stopping at the first problem
    pub fn validate(&self) -> Result<(), String> {
        self.classification.validate()?;
        self.irritation.validate()?;
        self.scheduling.validate()?;
        self.explainability.validate()?;
        Ok(())
    }

    /// Render the configuration as a commented TOML document
    pub fn to_toml_document(&self) -> Result<String, toml::ser::Error> {
        let body = toml::to_string_pretty(self)?;
        Ok(format!(
            "# skinplan configuration\n# Values shown are the built-in defaults.\n\n{body}"
        ))
    }
}
