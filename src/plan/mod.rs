//! Plan orchestration.
//!
//! [`PlanEngine`] runs the pipeline in a fixed order: skin type, concerns,
//! restrictions, irritation risk, routine, explanation. It performs no I/O
//! and never reads the clock; the analysis time is always supplied.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

use crate::config::EngineConfig;
use crate::explain::{explain_plan, Explainability};
use crate::intake::{FormAnswers, IntakeRequest, MachineMetric, Preferences};
use crate::profile::{check_restrictions, extract_main_concerns, resolve_skin_type, SkinProfile};
use crate::risk::score_irritation;
use crate::routine::{build_routine, optimize_schedule, RoutineSchedule};

/// The engine's sole output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentPlan {
    pub skin_profile: SkinProfile,
    pub routine: RoutineSchedule,
    pub explainability: Explainability,
}

/// Stateless planner parameterised by thresholds and weights.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlanEngine {
    config: EngineConfig,
}

impl PlanEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn generate(
        &self,
        form: &FormAnswers,
        metrics: &[MachineMetric],
        preferences: Option<&Preferences>,
        analysis_time: DateTime<Utc>,
    ) -> TreatmentPlan {
        let _span = info_span!("generate_plan", metrics = metrics.len()).entered();
        let preferences = preferences.copied().unwrap_or_default();

        let resolution = resolve_skin_type(form, metrics, &self.config.classification);
        let main_concerns = extract_main_concerns(form);
        let restrictions = check_restrictions(form);
        let irritation = score_irritation(metrics, &main_concerns, &self.config.irritation);
        debug!(
            skin_type = %resolution.skin_type,
            basis = ?resolution.basis,
            concerns = main_concerns.len(),
            irritation = irritation.score,
            "Profile resolved"
        );

        let skin_profile = SkinProfile {
            skin_type: resolution.skin_type,
            main_concerns,
            irritation_score: irritation.score,
            restrictions,
            analysis_timestamp: analysis_time.to_rfc3339_opts(SecondsFormat::Secs, true),
            skin_type_basis: resolution.basis,
        };

        let routine = optimize_schedule(build_routine(
            &skin_profile,
            &preferences,
            &self.config.scheduling,
        ));
        debug_assert!(
            routine.invariant_violations().is_empty(),
            "routine invariants broken: {:?}",
            routine.invariant_violations()
        );
        debug!(
            am_steps = routine.am.len(),
            pm_steps = routine.pm.len(),
            weekly_steps = routine.weekly.len(),
            "Routine built"
        );

        let explainability = explain_plan(
            &skin_profile,
            &routine,
            &self.config.scheduling,
            &self.config.explainability,
        );

        TreatmentPlan {
            skin_profile,
            routine,
            explainability,
        }
    }

    pub fn generate_from_intake(
        &self,
        request: &IntakeRequest,
        analysis_time: DateTime<Utc>,
    ) -> TreatmentPlan {
        self.generate(
            &request.answers,
            &request.metrics,
            request.preferences.as_ref(),
            analysis_time,
        )
    }
}

/// Generate a plan with the default configuration.
pub fn generate_treatment_plan(
    form: &FormAnswers,
    metrics: &[MachineMetric],
    preferences: Option<&Preferences>,
    analysis_time: DateTime<Utc>,
) -> TreatmentPlan {
    PlanEngine::default().generate(form, metrics, preferences, analysis_time)
}
