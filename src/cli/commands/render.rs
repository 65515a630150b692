use anyhow::{Context, Result};

use super::super::{args::RenderCommand, exit_status::ExitStatus};
use super::helper::resolve_config;
use crate::{
    core::{
        parsers::{json::read_json_file, template::read_template},
        render::{DataContext, render_template},
    },
    utils::file_stem,
};

pub fn render(cmd: RenderCommand) -> Result<ExitStatus> {
    let config = resolve_config(&cmd.delimiters)?;

    let mut data = DataContext::new();
    for path in &cmd.data {
        let namespace = file_stem(path)
            .with_context(|| format!("Cannot derive a namespace from {}", path.display()))?;
        let value = read_json_file(path)?;
        tracing::debug!(path = %path.display(), namespace = namespace.as_str(), "loaded data file");
        data.insert(namespace, value);
    }

    let text = read_template(&cmd.template)?;
    let rendered = render_template(&text, &data, &config.delimiters())
        .with_context(|| format!("Failed to render template {}", cmd.template.display()))?;

    println!("{}", rendered);
    Ok(ExitStatus::Success)
}
