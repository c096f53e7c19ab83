use crate::config::EngineConfig;
use crate::io;
use anyhow::Result;
use std::path::Path;

pub fn init_config(config_path: &Path, force: bool) -> Result<()> {
    if io::file_exists(config_path) && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = EngineConfig::default().to_toml_document()?;
    io::write_file(config_path, &default_config)?;
    println!("Created {} configuration file", config_path.display());

    Ok(())
}
