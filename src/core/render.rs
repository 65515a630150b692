//! Template rendering against namespaced JSON data.
//!
//! Output expressions are substituted with the value found by walking a
//! plain property-access chain through the data context. Literal text is
//! copied through verbatim, but it must not contain any other tag of the
//! same family (scriptlets, unescaped output, comments): the renderer cannot
//! execute those, and copying them would leave template code in the output.

use serde_json::{Map, Value};
use thiserror::Error;

use super::extract::is_identifier;
use super::lexer::{Delimiters, Lexer, Segment};
use crate::utils::escape_html;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("{0} is not defined")]
    UndefinedVariable(String),
    #[error("unsupported template syntax: {0} (only `metadata.author`-style output is supported)")]
    Unsupported(String),
}

/// Data available to a template, keyed by namespace (usually a data file's stem).
#[derive(Debug, Clone, Default)]
pub struct DataContext(Map<String, Value>);

impl DataContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expose `data` under `namespace`, replacing any earlier value.
    pub fn insert(&mut self, namespace: impl Into<String>, data: Value) {
        self.0.insert(namespace.into(), data);
    }

    pub fn get(&self, namespace: &str) -> Option<&Value> {
        self.0.get(namespace)
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Resolve a dotted path. Missing properties below the namespace resolve to `None`.
    fn lookup(&self, expression: &str) -> Result<Option<&Value>, RenderError> {
        let mut segments = expression.split('.').map(str::trim);
        let namespace = segments.next().unwrap_or_default();
        let Some(mut value) = self.get(namespace) else {
            return Err(RenderError::UndefinedVariable(namespace.to_string()));
        };
        for segment in segments {
            match value.get(segment) {
                Some(next) => value = next,
                None => return Ok(None),
            }
        }
        Ok(Some(value))
    }
}

fn is_property_access(expression: &str) -> bool {
    !expression.is_empty() && expression.split('.').all(|s| is_identifier(s.trim()))
}

/// Text form of a value as it appears in rendered output.
fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// First tag in `literal` starting with the delimiters' tag prefix, up to and
/// including its close marker (or the end of the line if it is unclosed).
fn find_stray_tag<'a>(literal: &'a str, delimiters: &Delimiters) -> Option<&'a str> {
    let start = literal.find(delimiters.tag_prefix())?;
    let tag = &literal[start..];
    let end = match tag.find(delimiters.close.as_str()) {
        Some(index) => index + delimiters.close.len(),
        None => tag.find('\n').unwrap_or(tag.len()),
    };
    Some(&tag[..end])
}

/// Render `text`, substituting every output expression with its escaped value.
pub fn render_template(
    text: &str,
    data: &DataContext,
    delimiters: &Delimiters,
) -> Result<String, RenderError> {
    let mut output = String::with_capacity(text.len());
    for segment in Lexer::new(text, delimiters) {
        match segment {
            Segment::Text(literal) => {
                if let Some(tag) = find_stray_tag(literal, delimiters) {
                    return Err(RenderError::Unsupported(tag.to_string()));
                }
                output.push_str(literal);
            }
            Segment::Expression(raw) => {
                let expression = raw.trim();
                if !is_property_access(expression) {
                    return Err(RenderError::Unsupported(expression.to_string()));
                }
                if let Some(value) = data.lookup(expression)? {
                    output.push_str(&escape_html(&display_value(value)));
                }
            }
        }
    }
    Ok(output)
}
