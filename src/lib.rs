//! Formgen - code generation from templates and JSON Schemas
//!
//! Formgen is a CLI tool and library that infers a JSON Schema from the
//! variables a text template references, renders templates against JSON data
//! files, and renders JSON-Schema-driven forms to static HTML.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Engine (lexer, variable extraction, schema builder, renderers)
//! - `logging`: Diagnostic logging setup
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod utils;
