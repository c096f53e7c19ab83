use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::{
    assemble_routine, flatten_steps, validate_step_records, PlanRepository, StepRecord,
    StoredPlan,
};
use crate::error::{Result, StorageError};
use crate::explain::Explainability;
use crate::plan::TreatmentPlan;
use crate::profile::SkinProfile;
use crate::routine::TimeOfDay;

#[derive(Debug, Clone)]
struct PlanRow {
    plan_id: Uuid,
    session_id: Uuid,
    created_at: DateTime<Utc>,
    sequence: u64,
    skin_profile: SkinProfile,
    explainability: Explainability,
}

#[derive(Debug, Default)]
struct Tables {
    plans: HashMap<Uuid, PlanRow>,
    sessions: HashMap<Uuid, Uuid>,
    steps: HashMap<Uuid, Vec<StepRecord>>,
    next_sequence: u64,
}

impl Tables {
    fn stored(&self, row: &PlanRow) -> StoredPlan {
        let records = self
            .steps
            .get(&row.plan_id)
            .map(Vec::as_slice)
            .unwrap_or_default();
        StoredPlan {
            plan_id: row.plan_id,
            session_id: row.session_id,
            created_at: row.created_at,
            plan: TreatmentPlan {
                skin_profile: row.skin_profile.clone(),
                routine: assemble_routine(records),
                explainability: row.explainability.clone(),
            },
        }
    }
}

/// Process-local repository.
///
/// All tables sit behind one lock, so a save is a single write and readers
/// see either the whole plan or none of it.
#[derive(Debug, Default)]
pub struct InMemoryPlanRepository {
    tables: RwLock<Tables>,
}

impl InMemoryPlanRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plan_count(&self) -> usize {
        self.tables.read().plans.len()
    }

    pub fn step_count(&self) -> usize {
        self.tables.read().steps.values().map(Vec::len).sum()
    }
}

impl PlanRepository for InMemoryPlanRepository {
    fn save_plan_with_steps(
        &self,
        session_id: Uuid,
        plan: &TreatmentPlan,
        created_at: DateTime<Utc>,
    ) -> Result<Uuid> {
        let plan_id = Uuid::new_v4();
        let records = flatten_steps(plan_id, &plan.routine);
        validate_step_records(&records)?;

        let mut tables = self.tables.write();
        if tables.sessions.contains_key(&session_id) {
            return Err(StorageError::DuplicateSession(session_id).into());
        }

        let sequence = tables.next_sequence;
        tables.next_sequence += 1;
        let step_count = records.len();

        tables.sessions.insert(session_id, plan_id);
        tables.steps.insert(plan_id, records);
        tables.plans.insert(
            plan_id,
            PlanRow {
                plan_id,
                session_id,
                created_at,
                sequence,
                skin_profile: plan.skin_profile.clone(),
                explainability: plan.explainability.clone(),
            },
        );

        debug!(%plan_id, %session_id, steps = step_count, "Plan stored");
        Ok(plan_id)
    }

    fn load_plan(&self, plan_id: Uuid) -> Result<Option<StoredPlan>> {
        let tables = self.tables.read();
        Ok(tables.plans.get(&plan_id).map(|row| tables.stored(row)))
    }

    fn load_plan_by_session(&self, session_id: Uuid) -> Result<Option<StoredPlan>> {
        let tables = self.tables.read();
        Ok(tables
            .sessions
            .get(&session_id)
            .and_then(|plan_id| tables.plans.get(plan_id))
            .map(|row| tables.stored(row)))
    }

    fn list_plans(&self, limit: usize, offset: usize) -> Result<Vec<StoredPlan>> {
        let tables = self.tables.read();
        let mut rows: Vec<&PlanRow> = tables.plans.values().collect();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.sequence.cmp(&a.sequence))
        });

        Ok(rows
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|row| tables.stored(row))
            .collect())
    }

    fn steps_for(&self, plan_id: Uuid, when: TimeOfDay) -> Result<Vec<StepRecord>> {
        let tables = self.tables.read();
        if !tables.plans.contains_key(&plan_id) {
            return Err(StorageError::PlanNotFound(plan_id).into());
        }

        let mut records: Vec<StepRecord> = tables
            .steps
            .get(&plan_id)
            .into_iter()
            .flatten()
            .filter(|record| record.when == when)
            .cloned()
            .collect();
        records.sort_by_key(|record| record.step_order);
        Ok(records)
    }

    fn delete_steps(&self, plan_id: Uuid) -> Result<usize> {
        let mut tables = self.tables.write();
        if !tables.plans.contains_key(&plan_id) {
            return Err(StorageError::PlanNotFound(plan_id).into());
        }
        let removed = tables.steps.remove(&plan_id).map_or(0, |records| records.len());
        debug!(%plan_id, removed, "Plan steps deleted");
        Ok(removed)
    }
}
