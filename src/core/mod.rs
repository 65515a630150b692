//! Core engine: template scanning, schema inference and rendering.
//!
//! ## Module Structure
//!
//! - `lexer`: Splits template text into literal text and expression tokens
//! - `extract`: Folds expression tokens into an ordered set of variable paths
//! - `schema`: Builds and serializes the JSON Schema tree for those paths
//! - `render`: Substitutes expressions with values from namespaced JSON data
//! - `form`: Renders a JSON-Schema-driven form to static HTML
//! - `parsers`: File reads and writes at the I/O boundary
//!
//! Nothing in `lexer`, `extract` or `schema` performs I/O or can fail.

pub mod extract;
pub mod form;
pub mod lexer;
pub mod parsers;
pub mod render;
pub mod schema;

pub use extract::{VariablePath, VariablePaths, extract_variables};
pub use lexer::{Delimiters, Lexer, Segment};
pub use schema::{SchemaNode, build_json_schema};

/// Infer the JSON Schema of the data a template expects.
pub fn infer_schema(text: &str, delimiters: &Delimiters) -> SchemaNode {
    build_json_schema(&extract_variables(text, delimiters))
}
