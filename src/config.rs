use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::lexer::{DEFAULT_CLOSE, DEFAULT_OPEN, Delimiters};

pub const CONFIG_FILE_NAME: &str = ".formgenrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Marker opening an output expression.
    #[serde(default = "default_open")]
    pub open: String,
    /// Marker closing an output expression.
    #[serde(default = "default_close")]
    pub close: String,
    /// Spaces per level in generated JSON.
    #[serde(default = "default_indent")]
    pub indent: usize,
}

fn default_open() -> String {
    DEFAULT_OPEN.to_string()
}

fn default_close() -> String {
    DEFAULT_CLOSE.to_string()
}

fn default_indent() -> usize {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            open: default_open(),
            close: default_close(),
            indent: default_indent(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Both markers must be non-empty and differ from each other.
    pub fn validate(&self) -> Result<()> {
        if self.open.trim().is_empty() {
            bail!("Invalid 'open' marker: must not be empty");
        }
        if self.close.trim().is_empty() {
            bail!("Invalid 'close' marker: must not be empty");
        }
        if self.open == self.close {
            bail!(
                "Invalid markers: 'open' and 'close' are both \"{}\"",
                self.open
            );
        }
        Ok(())
    }

    pub fn delimiters(&self) -> Delimiters {
        Delimiters::new(&self.open, &self.close)
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, open: Option<String>, close: Option<String>) -> Self {
        if let Some(open) = open {
            self.open = open;
        }
        if let Some(close) = close {
            self.close = close;
        }
        self
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
