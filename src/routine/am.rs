use super::catalog;
use super::types::{Active, RoutineStep, StepKind, StepList};
use crate::intake::{MoisturizerTexture, Preferences};
use crate::profile::{Concern, Restrictions, SkinType};

struct SerumRule {
    concern: Concern,
    active: Active,
    instructions: &'static str,
    blocked_in_pregnancy: bool,
}

impl SerumRule {
    fn applies(&self, concerns: &[Concern], restrictions: &Restrictions) -> bool {
        concerns.contains(&self.concern) && !(self.blocked_in_pregnancy && restrictions.pregnant)
    }
}

/// Morning serums in precedence order
const AM_SERUM_RULES: [SerumRule; 2] = [
    SerumRule {
        concern: Concern::Acne,
        active: Active::Niacinamide,
        instructions: catalog::NIACINAMIDE_SERUM,
        blocked_in_pregnancy: true,
    },
    SerumRule {
        concern: Concern::Pigmentation,
        active: Active::VitaminC,
        instructions: catalog::VITAMIN_C_SERUM,
        blocked_in_pregnancy: false,
    },
];

/// Cleanser, up to `max_serums` serums, moisturizer, sunscreen.
pub fn build_am_routine(
    skin_type: SkinType,
    concerns: &[Concern],
    restrictions: &Restrictions,
    preferences: &Preferences,
) -> Vec<RoutineStep> {
    let mut steps = StepList::default();

    let cleanser = if skin_type.is_oil_prone() {
        catalog::GEL_CLEANSER
    } else {
        catalog::CREAM_CLEANSER
    };
    steps.push(StepKind::Cleansing, cleanser, None);

    AM_SERUM_RULES
        .iter()
        .filter(|rule| rule.applies(concerns, restrictions))
        .take(preferences.max_serums)
        .for_each(|rule| steps.push(StepKind::Treatment, rule.instructions, Some(rule.active)));

    let moisturizer = if skin_type == SkinType::Oily
        || preferences.moisturizer_texture == MoisturizerTexture::Lightweight
    {
        catalog::GEL_MOISTURIZER
    } else {
        catalog::CREAM_MOISTURIZER
    };
    steps.push(StepKind::Moisturizing, moisturizer, None);

    steps.push(StepKind::Protection, catalog::SUNSCREEN, None);

    steps.into_steps()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instructions(steps: &[RoutineStep]) -> Vec<&str> {
        steps.iter().map(|s| s.instructions.as_str()).collect()
    }

    #[test]
    fn test_minimal_routine_for_normal_skin() {
        let steps = build_am_routine(
            SkinType::Normal,
            &[],
            &Restrictions::default(),
            &Preferences::default(),
        );
        assert_eq!(
            instructions(&steps),
            vec![
                catalog::CREAM_CLEANSER,
                catalog::CREAM_MOISTURIZER,
                catalog::SUNSCREEN
            ]
        );
    }

    #[test]
    fn test_oily_skin_with_both_serums() {
        let steps = build_am_routine(
            SkinType::Oily,
            &[Concern::Pigmentation, Concern::Acne],
            &Restrictions::default(),
            &Preferences::default(),
        );
        assert_eq!(
            instructions(&steps),
            vec![
                catalog::GEL_CLEANSER,
                catalog::NIACINAMIDE_SERUM,
                catalog::VITAMIN_C_SERUM,
                catalog::GEL_MOISTURIZER,
                catalog::SUNSCREEN,
            ]
        );
        let orders: Vec<_> = steps.iter().map(|s| s.step_order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_serum_cap() {
        let prefs = Preferences::default().with_max_serums(1);
        let steps = build_am_routine(
            SkinType::Combination,
            &[Concern::Acne, Concern::Pigmentation],
            &Restrictions::default(),
            &prefs,
        );
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[1].active, Some(Active::Niacinamide));

        let none = build_am_routine(
            SkinType::Combination,
            &[Concern::Acne, Concern::Pigmentation],
            &Restrictions::default(),
            &Preferences::default().with_max_serums(0),
        );
        assert_eq!(none.len(), 3);
    }

    #[test]
    fn test_pregnancy_blocks_niacinamide_but_frees_slot() {
        let restrictions = Restrictions {
            pregnant: true,
            ..Default::default()
        };
        let steps = build_am_routine(
            SkinType::Dry,
            &[Concern::Acne, Concern::Pigmentation],
            &restrictions,
            &Preferences::default().with_max_serums(1),
        );
        assert!(steps.iter().all(|s| s.active != Some(Active::Niacinamide)));
        assert_eq!(steps[1].active, Some(Active::VitaminC));
    }

    #[test]
    fn test_lightweight_preference_and_combination_skin() {
        let prefs = Preferences::default().with_texture(MoisturizerTexture::Lightweight);
        let steps = build_am_routine(SkinType::Dry, &[], &Restrictions::default(), &prefs);
        assert_eq!(steps[1].instructions, catalog::GEL_MOISTURIZER);

        let combination = build_am_routine(
            SkinType::Combination,
            &[],
            &Restrictions::default(),
            &Preferences::default(),
        );
        assert_eq!(combination[0].instructions, catalog::GEL_CLEANSER);
        assert_eq!(combination[1].instructions, catalog::CREAM_MOISTURIZER);
    }

    #[test]
    fn test_sunscreen_always_last() {
        for skin_type in [
            SkinType::Dry,
            SkinType::Oily,
            SkinType::Combination,
            SkinType::Sensitive,
            SkinType::Normal,
        ] {
            let steps = build_am_routine(
                skin_type,
                &[Concern::Acne, Concern::Pigmentation, Concern::Aging],
                &Restrictions::default(),
                &Preferences::default(),
            );
            let last = steps.last().unwrap();
            assert_eq!(last.instructions, catalog::SUNSCREEN);
            assert_eq!(last.kind, StepKind::Protection);
        }
    }
}
