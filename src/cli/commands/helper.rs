use std::env;

use anyhow::{Context, Result};

use super::super::args::DelimiterArgs;
use crate::config::{Config, load_config};

/// Load the config for the working directory and apply delimiter overrides.
pub fn resolve_config(overrides: &DelimiterArgs) -> Result<Config> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let loaded = load_config(&cwd)?;
    if !loaded.from_file {
        tracing::debug!("no config file found, using defaults");
    }

    let config = loaded
        .config
        .with_overrides(overrides.open.clone(), overrides.close.clone());
    config.validate()?;
    Ok(config)
}
