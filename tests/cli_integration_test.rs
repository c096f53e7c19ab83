use assert_cmd::Command as AssertCommand;
use indoc::indoc;
use skinplan::{Active, SessionComparison, SkinType, TreatmentPlan};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const TIMESTAMP: &str = "2025-09-01T12:00:00Z";

const OILY_ACNE_INTAKE: &str = indoc! {r#"
    {
        "answers": {
            "skin_profile": {"skin_type": "dry", "main_concerns": ["acne", "pigmentation"]},
            "medical_info": {"pregnant": false, "breastfeeding": false, "medications": []}
        },
        "metrics": [
            {"key": "sebum", "value": 72.0, "unit": "score", "confidence": 0.9},
            {"key": "moisture", "value": 48.0, "unit": "score", "confidence": 0.9}
        ],
        "preferences": {"max_serums": 2, "moisturizer_texture": "normal"}
    }
"#};

fn write_intake(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn run_plan(dir: &TempDir, intake: &Path, extra: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_skinplan"))
        .current_dir(dir.path())
        .env_remove("SKINPLAN_CONFIG")
        .arg("plan")
        .arg(intake)
        .args(["--format", "json", "--timestamp", TIMESTAMP])
        .args(extra)
        .output()
        .expect("Failed to execute skinplan")
}

#[test]
fn test_plan_json_output() {
    let dir = TempDir::new().unwrap();
    let intake = write_intake(&dir, "intake.json", OILY_ACNE_INTAKE);

    let output = run_plan(&dir, &intake, &[]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let plan: TreatmentPlan = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan.skin_profile.skin_type, SkinType::Oily);
    assert_eq!(plan.skin_profile.analysis_timestamp, TIMESTAMP);
    assert!(plan.routine.contains_active(Active::Niacinamide));
    assert!(plan.routine.contains_active(Active::VitaminC));
}

#[test]
fn test_max_serums_flag_overrides_intake() {
    let dir = TempDir::new().unwrap();
    let intake = write_intake(&dir, "intake.json", OILY_ACNE_INTAKE);

    let output = run_plan(&dir, &intake, &["--max-serums", "0"]);
    assert!(output.status.success());

    let plan: TreatmentPlan = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan.routine.am.len(), 3);
    assert_eq!(plan.explainability.total_am_steps, 3);
}

#[test]
fn test_plan_is_identical_across_runs() {
    let dir = TempDir::new().unwrap();
    let intake = write_intake(&dir, "intake.json", OILY_ACNE_INTAKE);

    let first = run_plan(&dir, &intake, &[]);
    let second = run_plan(&dir, &intake, &[]);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_config_file_changes_thresholds() {
    let dir = TempDir::new().unwrap();
    let intake = write_intake(
        &dir,
        "intake.json",
        r#"{"answers": {"skin_profile": {"main_concerns": ["acne", "rosacea"]}}}"#,
    );
    let config = dir.path().join("strict.toml");
    fs::write(
        &config,
        indoc! {r#"
            [scheduling]
            high_risk = 0.25
            moderate_risk = 0.1
        "#},
    )
    .unwrap();

    let default_run = run_plan(&dir, &intake, &[]);
    let default_plan: TreatmentPlan = serde_json::from_slice(&default_run.stdout).unwrap();
    assert!(default_plan.routine.weekdays_for(Active::SalicylicAcid).is_empty());

    let strict_run = run_plan(&dir, &intake, &["--config", config.to_str().unwrap()]);
    assert!(
        strict_run.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&strict_run.stderr)
    );
    let strict_plan: TreatmentPlan = serde_json::from_slice(&strict_run.stdout).unwrap();
    assert_eq!(strict_plan.routine.weekdays_for(Active::SalicylicAcid).len(), 3);
}

#[test]
fn test_invalid_metric_is_rejected() {
    let dir = TempDir::new().unwrap();
    let intake = write_intake(
        &dir,
        "intake.json",
        r#"{"answers": {}, "metrics": [{"key": "sebum", "value": 140.0, "unit": "score"}]}"#,
    );

    let output = run_plan(&dir, &intake, &[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("metrics[0].value"), "stderr: {stderr}");
}

#[test]
fn test_markdown_written_to_file() {
    let dir = TempDir::new().unwrap();
    let intake = write_intake(&dir, "intake.json", OILY_ACNE_INTAKE);
    let report = dir.path().join("plan.md");

    AssertCommand::cargo_bin("skinplan")
        .unwrap()
        .current_dir(dir.path())
        .env_remove("SKINPLAN_CONFIG")
        .args(["plan", "intake.json", "--format", "markdown", "--timestamp", TIMESTAMP])
        .arg("--output")
        .arg(&report)
        .assert()
        .success();

    let markdown = fs::read_to_string(&report).unwrap();
    assert!(markdown.starts_with("# Skincare Plan"));
    assert!(markdown.contains("Morning Routine"));
}

#[test]
fn test_compare_sessions_json() {
    let dir = TempDir::new().unwrap();
    let previous = write_intake(
        &dir,
        "previous.json",
        indoc! {r#"
            {
                "created_at": "2025-06-01T09:00:00Z",
                "metrics": [{"key": "sebum", "value": 70.0, "unit": "score"}],
                "skin_type": "oily",
                "main_concerns": ["acne", "pigmentation"]
            }
        "#},
    );
    let latest = write_intake(
        &dir,
        "latest.json",
        indoc! {r#"
            {
                "created_at": "2025-09-01T09:00:00Z",
                "metrics": [{"key": "sebum", "value": 55.0, "unit": "score"}],
                "skin_type": "combination",
                "main_concerns": ["acne", "aging"]
            }
        "#},
    );

    // Argument order does not matter; sessions are ordered by time.
    let output = Command::new(env!("CARGO_BIN_EXE_skinplan"))
        .arg("compare")
        .arg(&latest)
        .arg(&previous)
        .args(["--format", "json"])
        .output()
        .expect("Failed to execute skinplan");
    assert!(output.status.success());

    let comparison: SessionComparison = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        comparison.notes,
        vec![
            "sebum decreased by 15.0 points (70.0 to 55.0).",
            "Skin type changed from oily to combination.",
            "New concerns reported: aging.",
            "Concerns no longer reported: pigmentation.",
        ]
    );
}

#[test]
fn test_init_creates_config_once() {
    let dir = TempDir::new().unwrap();

    let first = Command::new(env!("CARGO_BIN_EXE_skinplan"))
        .current_dir(dir.path())
        .arg("init")
        .output()
        .unwrap();
    assert!(first.status.success());
    let written = fs::read_to_string(dir.path().join(".skinplan.toml")).unwrap();
    assert!(written.contains("[classification]"));

    let second = Command::new(env!("CARGO_BIN_EXE_skinplan"))
        .current_dir(dir.path())
        .arg("init")
        .output()
        .unwrap();
    assert!(!second.status.success());

    let forced = Command::new(env!("CARGO_BIN_EXE_skinplan"))
        .current_dir(dir.path())
        .args(["init", "--force"])
        .output()
        .unwrap();
    assert!(forced.status.success());
}

#[cfg(target_os = "linux")]
#[test]
fn test_output_write_failure_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let intake = write_intake(&dir, "intake.json", OILY_ACNE_INTAKE);

    let output = run_plan(&dir, &intake, &["--output", "/dev/full"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No space left"), "stderr: {stderr}");
}
