//! Variable extraction from template text.
//!
//! Every output-expression token found by the [`Lexer`] is classified on its
//! own by [`classify_expression`]; the accepted paths are folded into an
//! insertion-ordered [`VariablePaths`] set. Extraction never fails: anything
//! that is not a plain property-access chain is skipped.

use std::{borrow::Borrow, fmt, sync::LazyLock};

use indexmap::IndexSet;
use regex::Regex;

use super::lexer::{Delimiters, Lexer};


static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap());

/// Markers of expressions that are not plain property access.
const CALL_MARKER: &str = "(";
const CONSTRUCTOR_MARKER: &str = "new ";

/// Returns true if `segment` is a valid identifier (`[a-zA-Z_][a-zA-Z0-9_]*`).
pub fn is_identifier(segment: &str) -> bool {
    IDENTIFIER_REGEX.is_match(segment)
}

/// A dotted variable path with at least two segments, e.g. `metadata.author`.
///
/// The first segment is the namespace; the rest are the residual segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariablePath(String);

impl VariablePath {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    pub fn namespace(&self) -> &str {
        self.0.split_once('.').map_or(self.0.as_str(), |(ns, _)| ns)
    }

    /// Segments after the namespace.
    pub fn residual(&self) -> Vec<&str> {
        self.segments().skip(1).collect()
    }
}

impl fmt::Display for VariablePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VariablePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for VariablePath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Insertion-ordered set of unique variable paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariablePaths(IndexSet<VariablePath>);

impl VariablePaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path. Returns false if it was already present.
    pub fn insert(&mut self, path: VariablePath) -> bool {
        self.0.insert(path)
    }

    /// Consuming insert, for use as a fold step.
    pub fn with(mut self, path: VariablePath) -> Self {
        self.insert(path);
        self
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.contains(path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Paths in first-seen order.
    pub fn iter(&self) -> indexmap::set::Iter<'_, VariablePath> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a VariablePaths {
    type Item = &'a VariablePath;
    type IntoIter = indexmap::set::Iter<'a, VariablePath>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<VariablePath> for VariablePaths {
    fn from_iter<I: IntoIterator<Item = VariablePath>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::with)
    }
}

/// Classify a single raw expression token.
///
/// Calls and constructor calls are rejected outright. Otherwise the
/// expression is split on `.`, segments that are not identifiers are dropped,
/// and the survivors are joined back. The result is only a variable path if
/// at least two segments survive.
///
/// ```
/// use formgen::core::extract::classify_expression;
///
/// assert_eq!(
///     classify_expression(" input.bucket.name ").map(|p| p.to_string()),
///     Some("input.bucket.name".to_string())
/// );
/// assert_eq!(classify_expression("helper(x)"), None);
/// assert_eq!(classify_expression("title"), None);
/// ```
pub fn classify_expression(raw: &str) -> Option<VariablePath> {
    let expression = raw.trim();
    if expression.contains(CALL_MARKER) || expression.contains(CONSTRUCTOR_MARKER) {
        tracing::trace!(expression, "skipping call expression");
        return None;
    }

    let path = expression
        .split('.')
        .map(str::trim)
        .filter(|segment| is_identifier(segment))
        .collect::<Vec<_>>()
        .join(".");

    if !path.contains('.') {
        tracing::trace!(expression, "skipping expression without namespace");
        return None;
    }

    Some(VariablePath(path))
}

/// Extract the ordered set of variable paths referenced by output
/// expressions in `text`.
///
/// The scan is purely lexical, so an expression inside a template comment or
/// a string literal is extracted as well.
pub fn extract_variables(text: &str, delimiters: &Delimiters) -> VariablePaths {
    let paths = Lexer::new(text, delimiters)
        .expressions()
        .filter_map(classify_expression)
        .fold(VariablePaths::new(), VariablePaths::with);

    tracing::debug!(count = paths.len(), "extracted variable paths");
    paths
}
