//! Plan persistence.
//!
//! A stored plan is split into a plan row and one row per routine step, the
//! same shape a relational `plan` / `routine_step` schema would use. Daily
//! steps keep their `step_order` and carry no weekday; weekly steps follow
//! the daily steps of their slot and carry `day_of_week`.

mod memory;

pub use memory::InMemoryPlanRepository;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::plan::TreatmentPlan;
use crate::routine::{
    Active, RoutineSchedule, RoutineStep, StepKind, TimeOfDay, Weekday, WeeklyStep,
};

/// Longest instruction text a step row may hold
pub const MAX_INSTRUCTIONS_LEN: usize = 500;

/// A plan together with the identity the repository assigned it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPlan {
    pub plan_id: Uuid,
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub plan: TreatmentPlan,
}

/// One persisted routine step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    pub id: Uuid,
    pub plan_id: Uuid,
    pub when: TimeOfDay,
    pub step_order: u32,
    pub instructions: String,
    pub kind: StepKind,
    pub active: Option<Active>,
    pub day_of_week: Option<Weekday>,
    pub product_id: Option<Uuid>,
}

/// Storage for generated plans.
///
/// Implementations must write a plan and all of its steps as one unit:
/// readers never observe a plan with only some of its steps.
pub trait PlanRepository: Send + Sync {
    /// Store a plan and its steps, returning the new plan id.
    ///
    /// Fails without writing anything if the session already has a plan or
    /// any step row is invalid.
    fn save_plan_with_steps(
        &self,
        session_id: Uuid,
        plan: &TreatmentPlan,
        created_at: DateTime<Utc>,
    ) -> Result<Uuid>;

    fn load_plan(&self, plan_id: Uuid) -> Result<Option<StoredPlan>>;

    fn load_plan_by_session(&self, session_id: Uuid) -> Result<Option<StoredPlan>>;

    /// Newest first
    fn list_plans(&self, limit: usize, offset: usize) -> Result<Vec<StoredPlan>>;

    /// Step rows of one slot ordered by `step_order`
    fn steps_for(&self, plan_id: Uuid, when: TimeOfDay) -> Result<Vec<StepRecord>>;

    /// Remove every step row of a plan, returning how many were removed
    fn delete_steps(&self, plan_id: Uuid) -> Result<usize>;
}

/// Split a schedule into step rows.
pub fn flatten_steps(plan_id: Uuid, routine: &RoutineSchedule) -> Vec<StepRecord> {
    let mut records = Vec::new();

    for when in [TimeOfDay::Am, TimeOfDay::Pm] {
        let daily = routine.daily(when);
        records.extend(daily.iter().map(|step| StepRecord {
            id: Uuid::new_v4(),
            plan_id,
            when,
            step_order: step.step_order,
            instructions: step.instructions.clone(),
            kind: step.kind,
            active: step.active,
            day_of_week: None,
            product_id: None,
        }));

        let offset = daily.len() as u32;
        records.extend(
            routine
                .weekly_in(when)
                .enumerate()
                .map(|(index, step)| StepRecord {
                    id: Uuid::new_v4(),
                    plan_id,
                    when,
                    step_order: offset + index as u32 + 1,
                    instructions: step.instructions.clone(),
                    kind: step.kind,
                    active: step.active,
                    day_of_week: Some(step.day_of_week),
                    product_id: None,
                }),
        );
    }

    records
}

/// Rebuild a schedule from step rows in any order.
pub fn assemble_routine(records: &[StepRecord]) -> RoutineSchedule {
    let mut sorted: Vec<&StepRecord> = records.iter().collect();
    sorted.sort_by_key(|record| (record.when, record.step_order));

    let mut routine = RoutineSchedule::default();
    for record in sorted {
        match record.day_of_week {
            Some(day_of_week) => routine.weekly.push(WeeklyStep {
                day_of_week,
                when: record.when,
                instructions: record.instructions.clone(),
                kind: record.kind,
                active: record.active,
            }),
            None => {
                let step = RoutineStep {
                    step_order: record.step_order,
                    instructions: record.instructions.clone(),
                    kind: record.kind,
                    active: record.active,
                };
                match record.when {
                    TimeOfDay::Am => routine.am.push(step),
                    TimeOfDay::Pm => routine.pm.push(step),
                }
            }
        }
    }
    routine
}

fn check_step_record(record: &StepRecord) -> std::result::Result<(), String> {
    let len = record.instructions.chars().count();
    if record.instructions.trim().is_empty() {
        return Err("instructions must not be empty".to_string());
    }
    if len > MAX_INSTRUCTIONS_LEN {
        return Err(format!(
            "instructions must be at most {MAX_INSTRUCTIONS_LEN} characters, got {len}"
        ));
    }
    if record.step_order < 1 {
        return Err("step_order must be at least 1".to_string());
    }
    Ok(())
}

/// Validate rows before any of them are written.
pub fn validate_step_records(records: &[StepRecord]) -> std::result::Result<(), StorageError> {
    records
        .iter()
        .enumerate()
        .try_for_each(|(index, record)| {
            check_step_record(record).map_err(|reason| StorageError::InvalidStep {
                index,
                when: record.when.to_string(),
                reason,
            })
        })
}
