use indexmap::IndexMap;

use super::types::{ObjectNode, SchemaNode};
use crate::core::extract::VariablePaths;

/// Residual segment sequences of each namespace, both in first-seen order.
type NamespaceGroups<'a> = IndexMap<&'a str, Vec<Vec<&'a str>>>;

/// Partition paths by their first segment.
fn group_by_namespace(paths: &VariablePaths) -> NamespaceGroups<'_> {
    let mut groups = NamespaceGroups::new();
    for path in paths {
        groups
            .entry(path.namespace())
            .or_default()
            .push(path.residual());
    }
    groups
}

/// Insert `segments` below `parent`, creating intermediate objects on demand.
///
/// Nested objects start with an empty `required` list and nothing is ever
/// added to it: only a namespace's direct children are required.
///
/// A name that has children is always an object. A string leaf that a later
/// path descends through is promoted to an object, and a path ending at an
/// existing object leaves that object in place.
fn insert_path(parent: &mut ObjectNode, segments: &[&str]) {
    let Some((&name, rest)) = segments.split_first() else {
        return;
    };

    if rest.is_empty() {
        parent
            .properties
            .get_or_insert_with(name, || SchemaNode::string(name));
        return;
    }

    let child = parent
        .properties
        .get_or_insert_with(name, || SchemaNode::object(name));
    if child.is_string() {
        *child = SchemaNode::object(name);
    }
    if let SchemaNode::Object(object) = child {
        insert_path(object, rest);
    }
}

fn build_namespace(name: &str, fields: &[Vec<&str>]) -> ObjectNode {
    let mut namespace = ObjectNode::new(name);
    for residual in fields {
        insert_path(&mut namespace, residual);
        if let Some(first) = residual.first() {
            namespace.required.insert(first);
        }
    }
    namespace
}

/// Build the JSON Schema tree for a set of variable paths.
///
/// The root object has one property per namespace, each an object whose
/// direct children are required. Every path ends in a `string` leaf.
/// Total over its input: an empty set yields an empty root object.
pub fn build_json_schema(paths: &VariablePaths) -> SchemaNode {
    let mut root = ObjectNode::root();
    for (name, fields) in group_by_namespace(paths) {
        let namespace = build_namespace(name, &fields);
        root.properties
            .get_or_insert_with(name, || SchemaNode::Object(namespace));
        root.required.insert(name);
    }

    tracing::debug!(
        namespaces = root.properties.len(),
        paths = paths.len(),
        "built json schema"
    );
    SchemaNode::Object(root)
}
