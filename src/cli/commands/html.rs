use std::path::Path;

use anyhow::Result;
use serde_json::Value;

use super::super::{args::HtmlCommand, exit_status::ExitStatus};
use crate::core::{form::render_form, parsers::json::read_json_file};

fn read_optional(path: Option<&Path>) -> Result<Value> {
    match path {
        Some(path) => Ok(read_json_file(path)?),
        None => Ok(Value::Object(Default::default())),
    }
}

pub fn html(cmd: HtmlCommand) -> Result<ExitStatus> {
    let schema = read_json_file(&cmd.schema)?;
    let ui_schema = read_optional(cmd.style.as_deref())?;
    let form_data = read_optional(cmd.data.as_deref())?;

    print!("{}", render_form(&schema, &ui_schema, &form_data));
    Ok(ExitStatus::Success)
}
