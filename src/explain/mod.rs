//! Human-readable account of how a plan was reached.

use serde::{Deserialize, Serialize};

use crate::config::{ExplainabilityConfig, SchedulingThresholds};
use crate::profile::{SkinProfile, SkinTypeBasis};
use crate::risk::RiskTier;
use crate::routine::RoutineSchedule;

/// Presentational source label carried in the explanation.
///
/// This is derived from the irritation score, not from the resolver branch;
/// the actual branch is [`SkinProfile::skin_type_basis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinTypeSource {
    Machine,
    Hybrid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explainability {
    pub reasoning: Vec<String>,
    pub confidence_score: f64,
    pub skin_type_source: SkinTypeSource,
    pub total_am_steps: usize,
    pub total_pm_steps: usize,
    pub irritation_score: f64,
    pub restrictions_applied: Vec<String>,
}

fn skin_type_sentence(profile: &SkinProfile) -> String {
    let skin_type = profile.skin_type;
    match profile.skin_type_basis {
        SkinTypeBasis::Machine => format!(
            "Skin type classified as {skin_type} from confident sebum and moisture readings."
        ),
        SkinTypeBasis::Questionnaire => {
            format!("Skin type identified as {skin_type} from the questionnaire.")
        }
        SkinTypeBasis::Default => format!(
            "Skin type defaulted to {skin_type}: no confident sensor readings or recognised self-report."
        ),
    }
}

fn risk_sentence(score: f64, thresholds: &SchedulingThresholds) -> Option<String> {
    match RiskTier::classify(score, thresholds) {
        RiskTier::High => Some(format!(
            "High irritation risk ({score:.2}): strong actives are limited to specific weekdays with rest nights in between."
        )),
        RiskTier::Moderate => Some(format!(
            "Moderate irritation risk ({score:.2}): introduce actives gradually, alternating nights."
        )),
        RiskTier::Low => None,
    }
}

/// Narrate the decisions behind a plan and score confidence in it.
pub fn explain_plan(
    profile: &SkinProfile,
    routine: &RoutineSchedule,
    scheduling: &SchedulingThresholds,
    scoring: &ExplainabilityConfig,
) -> Explainability {
    let restrictions_applied = profile.restrictions.applied();
    let mut reasoning = vec![skin_type_sentence(profile)];

    if !profile.main_concerns.is_empty() {
        let concerns: Vec<&str> = profile.main_concerns.iter().map(|c| c.as_str()).collect();
        reasoning.push(format!("Targeting primary concerns: {}.", concerns.join(", ")));
    }

    if !restrictions_applied.is_empty() {
        reasoning.push(format!(
            "Safety restrictions applied: {}.",
            restrictions_applied.join(", ")
        ));
    }

    reasoning.extend(risk_sentence(profile.irritation_score, scheduling));

    let irritation_score = profile.irritation_score;
    let confidence_score =
        (1.0 - irritation_score * scoring.risk_penalty).max(scoring.confidence_floor);
    let skin_type_source = if irritation_score < scheduling.moderate_risk {
        SkinTypeSource::Machine
    } else {
        SkinTypeSource::Hybrid
    };

    Explainability {
        reasoning,
        confidence_score,
        skin_type_source,
        total_am_steps: routine.am.len(),
        total_pm_steps: routine.pm.len(),
        irritation_score,
        restrictions_applied,
    }
}

/// [`explain_plan`] under the default thresholds
pub fn generate_explainability(profile: &SkinProfile, routine: &RoutineSchedule) -> Explainability {
    explain_plan(
        profile,
        routine,
        &SchedulingThresholds::default(),
        &ExplainabilityConfig::default(),
    )
}
