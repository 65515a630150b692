//! Lexical scanning of template text.
//!
//! The lexer splits a template into literal text and output-expression tokens
//! for a configurable delimiter pair (`<%=` … `%>` by default). It does not
//! understand any other template syntax: comments, string literals and
//! control-flow tags are all plain text to it.

use serde::{Deserialize, Serialize};

pub const DEFAULT_OPEN: &str = "<%=";
pub const DEFAULT_CLOSE: &str = "%>";

const OUTPUT_MODIFIERS: &[char] = &['=', '-'];

/// Open/close marker pair delimiting an output expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delimiters {
    pub open: String,
    pub close: String,
}

impl Delimiters {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// The part of the open marker shared by every tag of the same family.
    ///
    /// Output modifiers are stripped from the end, so `<%=` gives `<%`, which
    /// also starts scriptlets (`<% if … %>`) and unescaped output (`<%- … %>`).
    /// A marker without a modifier, such as `{{`, is its own tag prefix.
    pub fn tag_prefix(&self) -> &str {
        match self.open.trim_end_matches(OUTPUT_MODIFIERS) {
            "" => &self.open,
            prefix => prefix,
        }
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::new(DEFAULT_OPEN, DEFAULT_CLOSE)
    }
}

/// A piece of template text produced by the [`Lexer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text copied through unchanged.
    Text(&'a str),
    /// Raw content strictly between the open and close markers.
    Expression(&'a str),
}

/// Lazy, left-to-right scanner over template text.
///
/// Matches never overlap. An expression only matches when its content is
/// non-empty and does not contain the first character of the close marker,
/// so `<%= a % b %>` is not an expression. An open marker without a valid
/// close is emitted as text and scanning resumes right after it.
///
/// The lexer borrows the text and holds no other state than an offset, so a
/// fresh lexer over the same text always yields the same sequence.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    text: &'a str,
    delimiters: &'a Delimiters,
    /// Start of the text not yet emitted.
    emitted: usize,
    /// Where the next search for an open marker starts.
    cursor: usize,
    /// Expression found ahead of pending text, emitted on the next call.
    pending: Option<(&'a str, usize)>,
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a str, delimiters: &'a Delimiters) -> Self {
        Self {
            text,
            delimiters,
            emitted: 0,
            cursor: 0,
            pending: None,
        }
    }

    /// Only the expression contents, in order of appearance.
    pub fn expressions(self) -> impl Iterator<Item = &'a str> {
        self.filter_map(|segment| match segment {
            Segment::Expression(expr) => Some(expr),
            Segment::Text(_) => None,
        })
    }

    /// Find the next well-formed expression at or after `self.cursor`.
    ///
    /// Returns `(start_of_open, content, end_of_close)`.
    fn next_match(&mut self) -> Option<(usize, &'a str, usize)> {
        let text = self.text;
        let Delimiters { open, close } = self.delimiters;
        if open.is_empty() || close.is_empty() {
            return None;
        }
        let stop = close.chars().next()?;

        while self.cursor < text.len() {
            let start = self.cursor + text[self.cursor..].find(open.as_str())?;
            let content_start = start + open.len();
            // Resume after this open marker if it does not match.
            self.cursor = content_start;

            let rest = &text[content_start..];
            let Some(stop_at) = rest.find(stop) else {
                continue;
            };
            if stop_at == 0 || !rest[stop_at..].starts_with(close.as_str()) {
                continue;
            }

            let end = content_start + stop_at + close.len();
            self.cursor = end;
            return Some((start, &rest[..stop_at], end));
        }
        None
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((expr, end)) = self.pending.take() {
            self.emitted = end;
            return Some(Segment::Expression(expr));
        }

        match self.next_match() {
            Some((start, expr, end)) if start > self.emitted => {
                let text = &self.text[self.emitted..start];
                self.pending = Some((expr, end));
                Some(Segment::Text(text))
            }
            Some((_, expr, end)) => {
                self.emitted = end;
                Some(Segment::Expression(expr))
            }
            None if self.emitted < self.text.len() => {
                let text = &self.text[self.emitted..];
                self.emitted = self.text.len();
                self.cursor = self.text.len();
                Some(Segment::Text(text))
            }
            None => None,
        }
    }
}
