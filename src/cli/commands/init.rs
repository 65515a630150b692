use std::path::Path;

use anyhow::Result;

use super::super::{exit_status::ExitStatus, report};
use crate::config::{CONFIG_FILE_NAME, default_config_json};
use crate::core::parsers::template::write_output;

pub fn init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
        return Ok(ExitStatus::Failure);
    }

    write_output(config_path, &default_config_json()?)?;
    report::print_success(&format!("Created {}", CONFIG_FILE_NAME));

    Ok(ExitStatus::Success)
}
