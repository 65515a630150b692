use std::{fs, path::Path};

use serde_json::Value;

use super::InputError;

/// Read and parse a JSON file.
pub fn read_json_file(path: &Path) -> Result<Value, InputError> {
    let content =
        fs::read_to_string(path).map_err(|e| InputError::from_read(path.to_path_buf(), e))?;

    serde_json::from_str(&content).map_err(|e| InputError::InvalidInput {
        path: path.to_path_buf(),
        kind: "JSON",
        reason: e.to_string(),
    })
}
