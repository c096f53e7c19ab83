//! Routine construction: morning steps, evening steps and weekday-only
//! treatments.

pub mod am;
pub mod catalog;
pub mod pm;
pub mod sequence;
pub mod types;

pub use am::build_am_routine;
pub use pm::{build_pm_routine, build_pm_routine_with, PmRoutine};
pub use sequence::{optimize_schedule, optimize_sequence};
pub use types::{
    Active, RoutineSchedule, RoutineStep, StepKind, TimeOfDay, Weekday, WeeklyStep,
};

use crate::config::SchedulingThresholds;
use crate::intake::Preferences;
use crate::profile::SkinProfile;

/// Build the full schedule for a resolved profile.
pub fn build_routine(
    profile: &SkinProfile,
    preferences: &Preferences,
    thresholds: &SchedulingThresholds,
) -> RoutineSchedule {
    let am = build_am_routine(
        profile.skin_type,
        &profile.main_concerns,
        &profile.restrictions,
        preferences,
    );
    let PmRoutine { daily, weekly } = build_pm_routine_with(
        profile.skin_type,
        &profile.main_concerns,
        &profile.restrictions,
        profile.irritation_score,
        thresholds,
    );

    RoutineSchedule {
        am,
        pm: daily,
        weekly,
    }
}
