//! File readers and writers at the I/O boundary.
//!
//! - `json`: JSON documents (schemas, UI schemas, form data, template data)
//! - `template`: Template text and generated output
//!
//! Every failure is reported as an [`InputError`] citing the offending path.

use std::{io, path::PathBuf};

use thiserror::Error;

pub mod json;
pub mod template;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },
    #[error("Invalid {kind} in file: {} ({reason})", path.display())]
    InvalidInput {
        path: PathBuf,
        kind: &'static str,
        reason: String,
    },
    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write {}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl InputError {
    /// Map a read error, singling out missing files.
    pub(crate) fn from_read(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::FileNotFound { path },
            io::ErrorKind::InvalidData => Self::InvalidInput {
                path,
                kind: "UTF-8",
                reason: source.to_string(),
            },
            _ => Self::Read { path, source },
        }
    }
}
