use serde::{Deserialize, Serialize};

use super::catalog;
use super::types::{Active, RoutineStep, StepKind, StepList, TimeOfDay, Weekday, WeeklyStep};
use crate::config::SchedulingThresholds;
use crate::profile::{Concern, Restrictions, SkinType};

const SALICYLIC_WEEKDAYS: [Weekday; 3] = [Weekday::Monday, Weekday::Wednesday, Weekday::Friday];
const RETINOL_START_LOW_WEEKDAYS: [Weekday; 2] = [Weekday::Tuesday, Weekday::Friday];
const RETINOL_STANDARD_WEEKDAYS: [Weekday; 3] =
    [Weekday::Monday, Weekday::Wednesday, Weekday::Friday];

/// Evening output: daily steps plus weekday-only treatments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PmRoutine {
    pub daily: Vec<RoutineStep>,
    pub weekly: Vec<WeeklyStep>,
}

fn weekly_pm(days: &[Weekday], instructions: &str, active: Active) -> Vec<WeeklyStep> {
    days.iter()
        .map(|&day_of_week| WeeklyStep {
            day_of_week,
            when: TimeOfDay::Pm,
            instructions: instructions.to_string(),
            kind: StepKind::Treatment,
            active: Some(active),
        })
        .collect()
}

/// Evening routine under the default high-risk cut-off of 0.6
pub fn build_pm_routine(
    skin_type: SkinType,
    concerns: &[Concern],
    restrictions: &Restrictions,
    irritation_score: f64,
) -> PmRoutine {
    build_pm_routine_with(
        skin_type,
        concerns,
        restrictions,
        irritation_score,
        &SchedulingThresholds::default(),
    )
}

/// Evening routine.
///
/// High-risk skin gets salicylic acid on Mon/Wed/Fri instead of nightly.
/// Retinol is always weekly and is withheld entirely while acne is being
/// treated, so the two actives never share a routine.
pub fn build_pm_routine_with(
    skin_type: SkinType,
    concerns: &[Concern],
    restrictions: &Restrictions,
    irritation_score: f64,
    thresholds: &SchedulingThresholds,
) -> PmRoutine {
    let high_risk = irritation_score >= thresholds.high_risk;
    let has_acne = concerns.contains(&Concern::Acne);

    let mut daily = StepList::default();
    let mut weekly = Vec::new();

    let cleanser = if skin_type.is_oil_prone() {
        catalog::MICELLAR_DOUBLE_CLEANSE
    } else {
        catalog::OIL_DOUBLE_CLEANSE
    };
    daily.push(StepKind::Cleansing, cleanser, None);

    if has_acne && !restrictions.pregnant {
        if high_risk {
            weekly.extend(weekly_pm(
                &SALICYLIC_WEEKDAYS,
                catalog::SALICYLIC_ACID,
                Active::SalicylicAcid,
            ));
        } else {
            daily.push(
                StepKind::Treatment,
                catalog::SALICYLIC_ACID,
                Some(Active::SalicylicAcid),
            );
        }
    }

    if concerns.contains(&Concern::Aging) && !restrictions.pregnant && !has_acne {
        let (days, instructions): (&[Weekday], &str) = if high_risk {
            (&RETINOL_START_LOW_WEEKDAYS, catalog::RETINOL_START_LOW)
        } else {
            (&RETINOL_STANDARD_WEEKDAYS, catalog::RETINOL_STANDARD)
        };
        weekly.extend(weekly_pm(days, instructions, Active::Retinol));
    }

    let night_moisturizer = if skin_type.needs_rich_care() {
        catalog::CERAMIDE_NIGHT_CREAM
    } else {
        catalog::HYALURONIC_NIGHT_MOISTURIZER
    };
    daily.push(StepKind::Moisturizing, night_moisturizer, None);

    PmRoutine {
        daily: daily.into_steps(),
        weekly,
    }
}
