mod common;

use common::{analysis_time, form_with_concerns, reactive_readings, sebum_moisture};
use pretty_assertions::assert_eq;
use serde_json::json;
use skinplan::routine::catalog;
use skinplan::{
    build_pm_routine, check_restrictions, determine_skin_type, generate_treatment_plan, Active,
    Concern, FormAnswers, IntakeRequest, MoisturizerTexture, PlanEngine, Preferences,
    Restrictions, SkinType, SkinTypeBasis, StepKind, TimeOfDay, Weekday,
};

#[test]
fn test_confident_oily_readings_override_questionnaire() {
    let form = FormAnswers::new().with_skin_type("dry");
    assert_eq!(
        determine_skin_type(&form, &sebum_moisture(70.0, 50.0, 0.9)),
        SkinType::Oily
    );
}

#[test]
fn test_confident_low_readings_are_dry() {
    assert_eq!(
        determine_skin_type(&FormAnswers::new(), &sebum_moisture(20.0, 20.0, 0.8)),
        SkinType::Dry
    );
}

#[test]
fn test_high_risk_acne_and_aging_schedules_salicylic_weekly_without_retinol() {
    let pm = build_pm_routine(
        SkinType::Combination,
        &[Concern::Acne, Concern::Aging],
        &Restrictions::default(),
        0.8,
    );

    let salicylic_days: Vec<Weekday> = pm
        .weekly
        .iter()
        .filter(|step| step.active == Some(Active::SalicylicAcid))
        .map(|step| step.day_of_week)
        .collect();
    assert_eq!(
        salicylic_days,
        vec![Weekday::Monday, Weekday::Wednesday, Weekday::Friday]
    );
    assert!(pm.weekly.iter().all(|step| step.when == TimeOfDay::Pm));
    assert!(!pm.daily.iter().any(|s| s.active == Some(Active::SalicylicAcid)));
    assert!(!pm.weekly.iter().any(|s| s.active == Some(Active::Retinol)));
    assert!(!pm.daily.iter().any(|s| s.active == Some(Active::Retinol)));
}

#[test]
fn test_high_risk_end_to_end() {
    let form = form_with_concerns(&["acne", "aging"]);
    let plan = generate_treatment_plan(&form, &reactive_readings(), None, analysis_time());

    assert!(plan.skin_profile.irritation_score >= 0.6);
    assert_eq!(
        plan.routine.weekdays_for(Active::SalicylicAcid),
        vec![Weekday::Monday, Weekday::Wednesday, Weekday::Friday]
    );
    assert!(!plan.routine.contains_active(Active::Retinol));
    assert!(plan
        .explainability
        .reasoning
        .iter()
        .any(|sentence| sentence.contains("rest nights")));
}

#[test]
fn test_pregnancy_removes_acne_actives_everywhere() {
    let form = form_with_concerns(&["acne"]).pregnant(true);
    for metrics in [Vec::new(), reactive_readings()] {
        let plan = generate_treatment_plan(&form, &metrics, None, analysis_time());
        assert!(!plan.routine.contains_active(Active::Niacinamide));
        assert!(!plan.routine.contains_active(Active::SalicylicAcid));
        assert!(plan
            .routine
            .am
            .iter()
            .chain(&plan.routine.pm)
            .all(|step| step.instructions != catalog::NIACINAMIDE_SERUM
                && step.instructions != catalog::SALICYLIC_ACID));
    }
}

#[test]
fn test_restrictions_applied_matches_true_flags() {
    let form = form_with_concerns(&["acne", "aging", "pigmentation", "sensitivity"])
        .breastfeeding(true)
        .with_medications(["spironolactone"]);
    let plan = generate_treatment_plan(&form, &[], None, analysis_time());
    let restrictions = check_restrictions(&form);

    let expected: Vec<String> = restrictions
        .flags()
        .iter()
        .filter(|(_, active)| *active)
        .map(|(name, _)| name.to_string())
        .collect();
    assert_eq!(plan.explainability.restrictions_applied, expected);
    assert_eq!(
        expected,
        vec!["breastfeeding", "medications", "sensitive_skin"]
    );
}

#[test]
fn test_identical_inputs_produce_identical_plans() {
    let form = form_with_concerns(&["rosacea", "aging"]).with_skin_type("sensitive");
    let metrics = reactive_readings();
    let prefs = Preferences::default().with_texture(MoisturizerTexture::Lightweight);

    let first = generate_treatment_plan(&form, &metrics, Some(&prefs), analysis_time());
    let second = generate_treatment_plan(&form, &metrics, Some(&prefs), analysis_time());

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_missing_sections_default_instead_of_failing() {
    let request = IntakeRequest::from_json(r#"{"answers": {"skin_profile": null}}"#).unwrap();
    let plan = PlanEngine::default().generate_from_intake(&request, analysis_time());

    assert_eq!(plan.skin_profile.skin_type, SkinType::Normal);
    assert_eq!(plan.skin_profile.skin_type_basis, SkinTypeBasis::Default);
    assert!(plan.skin_profile.main_concerns.is_empty());
    assert_eq!(plan.routine.am.len(), 3);
    assert_eq!(
        plan.routine.am.last().map(|s| s.kind),
        Some(StepKind::Protection)
    );
}

#[test]
fn test_full_plan_shape() {
    let form = FormAnswers::new()
        .with_skin_type("oily")
        .with_concerns(["pigmentation", "dullness", "acne"]);
    let plan = generate_treatment_plan(&form, &[], None, analysis_time());

    let expected = json!({
        "skin_profile": {
            "skin_type": "oily",
            "main_concerns": ["pigmentation", "acne", "dullness"],
            "irritation_score": 0.0,
            "restrictions": {
                "pregnant": false,
                "breastfeeding": false,
                "medications": false,
                "sensitive_skin": false
            },
            "analysis_timestamp": "2025-09-01T12:00:00Z",
            "skin_type_basis": "questionnaire"
        },
        "routine": {
            "am": [
                {"step_order": 1, "instructions": catalog::GEL_CLEANSER, "kind": "cleansing"},
                {"step_order": 2, "instructions": catalog::NIACINAMIDE_SERUM, "kind": "treatment", "active": "niacinamide"},
                {"step_order": 3, "instructions": catalog::VITAMIN_C_SERUM, "kind": "treatment", "active": "vitamin_c"},
                {"step_order": 4, "instructions": catalog::GEL_MOISTURIZER, "kind": "moisturizing"},
                {"step_order": 5, "instructions": catalog::SUNSCREEN, "kind": "protection"}
            ],
            "pm": [
                {"step_order": 1, "instructions": catalog::MICELLAR_DOUBLE_CLEANSE, "kind": "cleansing"},
                {"step_order": 2, "instructions": catalog::SALICYLIC_ACID, "kind": "treatment", "active": "salicylic_acid"},
                {"step_order": 3, "instructions": catalog::HYALURONIC_NIGHT_MOISTURIZER, "kind": "moisturizing"}
            ],
            "weekly": []
        },
        "explainability": {
            "reasoning": [
                "Skin type identified as oily from the questionnaire.",
                "Targeting primary concerns: pigmentation, acne, dullness."
            ],
            "confidence_score": 1.0,
            "skin_type_source": "machine",
            "total_am_steps": 5,
            "total_pm_steps": 3,
            "irritation_score": 0.0,
            "restrictions_applied": []
        }
    });

    assert_eq!(serde_json::to_value(&plan).unwrap(), expected);
}
