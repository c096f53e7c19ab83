use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing::info;

use crate::config::{load_config, load_config_from_path};
use crate::intake::{IntakeRequest, MoisturizerTexture, Preferences};
use crate::io::{self, create_writer, OutputFormat};
use crate::plan::PlanEngine;

pub struct PlanConfig {
    pub intake: PathBuf,
    pub max_serums: Option<usize>,
    pub texture: Option<MoisturizerTexture>,
    pub timestamp: Option<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub no_color: bool,
}

/// Parse an RFC 3339 analysis time, or take the current time when absent
pub fn resolve_analysis_time(timestamp: Option<&str>) -> Result<DateTime<Utc>> {
    match timestamp {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|time| time.with_timezone(&Utc))
            .with_context(|| format!("Invalid --timestamp '{raw}', expected RFC 3339")),
        None => Ok(Utc::now()),
    }
}

/// Command-line overrides win over preferences in the intake file
pub fn merge_preferences(
    from_intake: Option<Preferences>,
    max_serums: Option<usize>,
    texture: Option<MoisturizerTexture>,
) -> Option<Preferences> {
    if max_serums.is_none() && texture.is_none() {
        return from_intake;
    }
    let base = from_intake.unwrap_or_default();
    Some(Preferences {
        max_serums: max_serums.unwrap_or(base.max_serums),
        moisturizer_texture: texture.unwrap_or(base.moisturizer_texture),
    })
}

pub fn generate_plan(config: PlanConfig) -> Result<()> {
    let raw = io::read_file(&config.intake)
        .with_context(|| format!("Failed to read intake file {}", config.intake.display()))?;
    let request = IntakeRequest::from_json(&raw)?;

    let engine_config = match &config.config {
        Some(path) => load_config_from_path(path)?,
        None => load_config(),
    };
    let analysis_time = resolve_analysis_time(config.timestamp.as_deref())?;
    let preferences = merge_preferences(request.preferences, config.max_serums, config.texture);

    let plan = PlanEngine::new(engine_config).generate(
        &request.answers,
        &request.metrics,
        preferences.as_ref(),
        analysis_time,
    );
    info!(
        skin_type = %plan.skin_profile.skin_type,
        am_steps = plan.routine.am.len(),
        pm_steps = plan.routine.pm.len(),
        "Plan generated"
    );

    super::configure_color(config.no_color, config.output.as_deref());
    let mut writer = create_writer(config.format, super::open_output(config.output.as_deref())?);
    writer.write_plan(&plan)?;
    writer.flush()?;
    Ok(())
}
