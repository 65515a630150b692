use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// Insertion-ordered `name -> node` mapping of an object's properties.
///
/// Each object exclusively owns its properties; subtrees are never shared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Properties(IndexMap<String, SchemaNode>);

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.0.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut SchemaNode> {
        self.0.get_mut(name)
    }

    /// Return the node stored under `name`, inserting `make()` if absent.
    pub fn get_or_insert_with(
        &mut self,
        name: &str,
        make: impl FnOnce() -> SchemaNode,
    ) -> &mut SchemaNode {
        self.0.entry(name.to_string()).or_insert_with(make)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.0.iter().map(|(key, node)| (key.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Insertion-ordered set of required property names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Required(IndexSet<String>);

impl Required {
    /// Add `name` unless already present; the first insertion fixes its position.
    pub fn insert(&mut self, name: &str) {
        if !self.0.contains(name) {
            self.0.insert(name.to_string());
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectNode {
    /// `None` only for the root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub properties: Properties,
    pub required: Required,
}

impl ObjectNode {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            properties: Properties::new(),
            required: Required::default(),
        }
    }

    pub fn root() -> Self {
        Self {
            title: None,
            properties: Properties::new(),
            required: Required::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringNode {
    pub title: String,
}

/// A node of the generated JSON Schema.
///
/// Serializes as `{"type": "object", "title", "properties", "required"}` or
/// `{"type": "string", "title"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SchemaNode {
    Object(ObjectNode),
    String(StringNode),
}

impl SchemaNode {
    pub fn object(title: impl Into<String>) -> Self {
        Self::Object(ObjectNode::new(title))
    }

    pub fn string(title: impl Into<String>) -> Self {
        Self::String(StringNode {
            title: title.into(),
        })
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Object(object) => object.title.as_deref(),
            Self::String(string) => Some(&string.title),
        }
    }

    pub fn as_object(&self) -> Option<&ObjectNode> {
        match self {
            Self::Object(object) => Some(object),
            Self::String(_) => None,
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }
}
