//! Diagnostic logging to stderr via `tracing`.
//!
//! The default level is `warn`; `--verbose` raises it to `debug`. The
//! `FORMGEN_LOG` environment variable takes precedence and accepts any
//! `EnvFilter` directive (e.g. `formgen=trace`).

use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

pub const LOG_ENV_VAR: &str = "FORMGEN_LOG";

pub fn init(verbose: bool) {
    let level = default_level(verbose);

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .with_filter(filter);

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry().with(layer).try_init();
}

fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    }
}
