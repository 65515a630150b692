use std::path;

use anyhow::{Context, Result};

use super::super::{args::SchemaCommand, exit_status::ExitStatus, report};
use super::helper::resolve_config;
use crate::core::{
    infer_schema,
    parsers::template::{read_template, write_output},
    schema::to_pretty_json,
};

pub fn schema(cmd: SchemaCommand) -> Result<ExitStatus> {
    let config = resolve_config(&cmd.delimiters)?;

    let text = read_template(&cmd.template)?;
    let schema = infer_schema(&text, &config.delimiters());
    let output = to_pretty_json(&schema, config.indent)?;

    match cmd.output {
        Some(path) => {
            let path = path::absolute(&path)
                .with_context(|| format!("Invalid output path: {}", path.display()))?;
            write_output(&path, &output)?;
            report::print_written("Form schema", &path);
        }
        None => println!("{}", output),
    }

    Ok(ExitStatus::Success)
}
