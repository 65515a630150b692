use std::{fs, path::Path};

use super::InputError;

/// Read a template file as UTF-8 text.
pub fn read_template(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|e| InputError::from_read(path.to_path_buf(), e))
}

/// Write generated output, replacing any existing file.
pub fn write_output(path: &Path, content: &str) -> Result<(), InputError> {
    fs::write(path, content).map_err(|source| InputError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })
}
