//! JSON view of a tree.

use serde::Serialize;

use super::{NodeRef, Tree};

#[derive(Serialize)]
struct JsonNode<'a> {
    kind: &'static str,
    string: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    flags: Vec<&'static str>,
    offset: u32,
    #[serde(skip_serializing_if = "str::is_empty")]
    comment: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<JsonNode<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<JsonNode<'a>>,
}

impl<'a> JsonNode<'a> {
    fn new(node: NodeRef<'_, 'a>) -> Self {
        Self {
            kind: node.kind().as_str(),
            string: node.string(),
            flags: node.flags().names().collect(),
            offset: node.offset().into(),
            comment: node.comment(),
            tags: node.tags().map(JsonNode::new).collect(),
            children: node.children().map(JsonNode::new).collect(),
        }
    }
}

pub fn to_json(tree: &Tree<'_>) -> serde_json::Result<String> {
    serde_json::to_string(&JsonNode::new(tree.root()))
}

pub fn to_json_pretty(tree: &Tree<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonNode::new(tree.root()))
}
