use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::comparison::{compare_sessions, SessionSnapshot};
use crate::io::{self, create_writer, OutputFormat};

pub struct CompareConfig {
    pub previous: PathBuf,
    pub latest: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub no_color: bool,
}

fn load_snapshot(path: &Path) -> Result<SessionSnapshot> {
    let raw = io::read_file(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    SessionSnapshot::from_json(&raw)
        .with_context(|| format!("Invalid snapshot {}", path.display()))
}

pub fn compare_snapshots(config: CompareConfig) -> Result<()> {
    let previous = load_snapshot(&config.previous)?;
    let latest = load_snapshot(&config.latest)?;
    let comparison = compare_sessions(&previous, &latest);

    super::configure_color(config.no_color, config.output.as_deref());
    let mut writer = create_writer(config.format, super::open_output(config.output.as_deref())?);
    writer.write_comparison(&comparison)?;
    writer.flush()?;
    Ok(())
}
