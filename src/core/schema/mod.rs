//! JSON Schema synthesis from extracted variable paths.
//!
//! ## Module Structure
//!
//! - `types`: Schema tree (`SchemaNode`, `ObjectNode`, `StringNode`) and its serialization
//! - `builder`: Grouping of paths by namespace and recursive tree construction

mod builder;
mod types;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

pub use builder::build_json_schema;
pub use types::{ObjectNode, Properties, Required, SchemaNode, StringNode};

/// Serialize a schema tree as pretty JSON with `indent` spaces per level.
///
/// Keys are emitted in construction order.
pub fn to_pretty_json(schema: &SchemaNode, indent: usize) -> Result<String> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    schema
        .serialize(&mut serializer)
        .context("Failed to serialize schema")?;
    String::from_utf8(buf).context("Serialized schema is not valid UTF-8")
}
