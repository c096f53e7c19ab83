//! Declarative step ordering.
//!
//! Steps are ranked by the [`StepKind`] tag they were created with, never by
//! their instruction text.

use super::types::{RoutineSchedule, RoutineStep, StepKind};

/// Application order for a daily list
const SEQUENCE_ORDER: [StepKind; 4] = [
    StepKind::Cleansing,
    StepKind::Treatment,
    StepKind::Moisturizing,
    StepKind::Protection,
];

fn sequence_rank(kind: StepKind) -> usize {
    SEQUENCE_ORDER
        .iter()
        .position(|candidate| *candidate == kind)
        .unwrap_or(SEQUENCE_ORDER.len())
}

/// Stable reorder into application order, renumbering `step_order` from 1.
pub fn optimize_sequence(mut steps: Vec<RoutineStep>) -> Vec<RoutineStep> {
    steps.sort_by_key(|step| sequence_rank(step.kind));
    for (index, step) in steps.iter_mut().enumerate() {
        step.step_order = index as u32 + 1;
    }
    steps
}

/// Apply [`optimize_sequence`] to both daily lists. Weekly steps carry no
/// order and are left untouched.
pub fn optimize_schedule(schedule: RoutineSchedule) -> RoutineSchedule {
    RoutineSchedule {
        am: optimize_sequence(schedule.am),
        pm: optimize_sequence(schedule.pm),
        weekly: schedule.weekly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routine::types::Active;

    fn step(order: u32, kind: StepKind, text: &str) -> RoutineStep {
        RoutineStep {
            step_order: order,
            instructions: text.to_string(),
            kind,
            active: None,
        }
    }

    #[test]
    fn test_reorders_by_kind() {
        let steps = vec![
            step(1, StepKind::Protection, "spf"),
            step(2, StepKind::Moisturizing, "cream"),
            step(3, StepKind::Cleansing, "wash"),
            step(4, StepKind::Treatment, "serum"),
        ];
        let ordered = optimize_sequence(steps);
        let texts: Vec<_> = ordered.iter().map(|s| s.instructions.as_str()).collect();
        assert_eq!(texts, vec!["wash", "serum", "cream", "spf"]);
        let orders: Vec<_> = ordered.iter().map(|s| s.step_order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_stable_within_kind() {
        let mut first = step(1, StepKind::Treatment, "niacinamide");
        first.active = Some(Active::Niacinamide);
        let mut second = step(2, StepKind::Treatment, "vitamin c");
        second.active = Some(Active::VitaminC);

        let ordered = optimize_sequence(vec![
            step(3, StepKind::Moisturizing, "cream"),
            first,
            second,
        ]);
        assert_eq!(ordered[0].active, Some(Active::Niacinamide));
        assert_eq!(ordered[1].active, Some(Active::VitaminC));
        assert_eq!(ordered[2].instructions, "cream");
    }

    #[test]
    fn test_instruction_text_is_ignored() {
        // mentions "cleanser" but is tagged as moisturizing
        let steps = vec![
            step(1, StepKind::Treatment, "serum"),
            step(2, StepKind::Moisturizing, "cream, no cleanser needed"),
        ];
        let ordered = optimize_sequence(steps.clone());
        assert_eq!(ordered, steps);
    }

    #[test]
    fn test_empty_list() {
        assert!(optimize_sequence(Vec::new()).is_empty());
    }
}
