//! [`RichText`] definitions.

use itertools::Itertools as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Rich text document produced by the content store editor.
///
/// Only the node tree shape matters here: every node is either a text leaf
/// or a container of child nodes. Formatting is ignored.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RichText {
    /// Root [`Node`] of this [`RichText`].
    pub root: Node,
}

impl RichText {
    /// Maximum nesting depth of [`Node`]s being read out of a document.
    ///
    /// Deeper subtrees are read as [`Node::Empty`].
    pub const MAX_DEPTH: usize = 64;

    /// Reads a [`RichText`] out of its JSON representation.
    ///
    /// Never fails: a malformed document results in an empty one.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self {
            root: value
                .get("root")
                .map_or(Node::Empty, |root| Node::from_value(root, 0)),
        }
    }

    /// Extracts the plain text of this [`RichText`].
    ///
    /// Sibling texts are joined with a single space. Whitespace is not
    /// collapsed.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.root.plain_text()
    }
}

impl<'de> Deserialize<'de> for RichText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(|v| Self::from_value(&v))
    }
}

/// Node of a [`RichText`] tree.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Node {
    /// Text leaf.
    Text(String),

    /// Container of child [`Node`]s.
    Container(Vec<Node>),

    /// Node carrying no text (line break, unknown or malformed node).
    #[default]
    Empty,
}

impl Node {
    /// Reads a [`Node`] out of its JSON representation at the given `depth`.
    fn from_value(value: &Value, depth: usize) -> Self {
        if depth >= RichText::MAX_DEPTH {
            return Self::Empty;
        }

        if let Some(text) = value.get("text") {
            return text.as_str().map_or(Self::Empty, |t| Self::Text(t.into()));
        }

        match value.get("children") {
            Some(Value::Array(children)) => Self::Container(
                children
                    .iter()
                    .map(|c| Self::from_value(c, depth + 1))
                    .collect(),
            ),
            Some(
                Value::Null
                | Value::Bool(_)
                | Value::Number(_)
                | Value::String(_)
                | Value::Object(_),
            )
            | None => Self::Empty,
        }
    }

    /// Extracts the plain text of this [`Node`] and its descendants.
    #[must_use]
    pub fn plain_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Container(children) => {
                children.iter().map(Self::plain_text).join(" ")
            }
            Self::Empty => String::new(),
        }
    }
}

#[cfg(test)]
mod spec {
    use serde_json::json;

    use super::{Node, RichText};

    #[test]
    fn empty_for_null_or_malformed() {
        assert_eq!(RichText::from_value(&json!(null)).plain_text(), "");
        assert_eq!(RichText::from_value(&json!("text")).plain_text(), "");
        assert_eq!(RichText::from_value(&json!({"root": 1})).plain_text(), "");
        assert_eq!(
            RichText::from_value(&json!({"root": {"children": "x"}}))
                .plain_text(),
            "",
        );
    }

    #[test]
    fn empty_for_no_children() {
        let doc = RichText::from_value(&json!({"root": {"children": []}}));

        assert_eq!(doc.plain_text(), "");
    }

    #[test]
    fn joins_siblings_with_space() {
        let doc = RichText::from_value(&json!({"root": {"children": [
            {"type": "text", "text": "Hello"},
            {"type": "text", "text": "World"},
        ]}}));

        assert_eq!(doc.plain_text(), "Hello World");
    }

    #[test]
    fn walks_nested_containers() {
        let doc = RichText::from_value(&json!({"root": {
            "type": "root",
            "children": [
                {"type": "heading", "children": [
                    {"type": "text", "text": "1965 Triumph"},
                ]},
                {"type": "paragraph", "children": [
                    {"type": "text", "text": "Frame-off"},
                    {"type": "text", "text": "restoration."},
                ]},
            ],
        }}));

        assert_eq!(doc.plain_text(), "1965 Triumph Frame-off restoration.");
    }

    #[test]
    fn keeps_repeated_whitespace() {
        let doc = RichText::from_value(&json!({"root": {"children": [
            {"type": "text", "text": "a"},
            {"type": "linebreak"},
            {"type": "text", "text": "b"},
        ]}}));

        assert_eq!(doc.plain_text(), "a  b");
    }

    #[test]
    fn non_string_text_is_empty() {
        let doc = RichText::from_value(&json!({"root": {"children": [
            {"text": 42},
            {"text": "ok"},
        ]}}));

        assert_eq!(doc.root, Node::Container(vec![
            Node::Empty,
            Node::Text("ok".into()),
        ]));
    }

    #[test]
    fn cuts_overly_deep_trees() {
        let mut value = json!({"text": "deep"});
        for _ in 0..RichText::MAX_DEPTH + 5 {
            value = json!({"children": [value]});
        }

        let doc = RichText::from_value(&json!({"root": value}));

        assert_eq!(doc.plain_text(), "");
    }

    #[test]
    fn deserializes_leniently() {
        let doc: RichText = serde_json::from_value(json!([1, 2])).unwrap();

        assert_eq!(doc, RichText::default());
    }
}
