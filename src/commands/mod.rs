pub mod compare;
pub mod init;
pub mod plan;

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Stdout, or a buffered file when a path is given
pub(crate) fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}

/// Color is only used on stdout and only when not disabled
pub(crate) fn configure_color(no_color: bool, output: Option<&Path>) {
    if no_color || output.is_some() {
        colored::control::set_override(false);
    }
}
