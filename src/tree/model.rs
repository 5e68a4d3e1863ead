//! JSON decoding and the tree model.
//!
//! `decode` parses a payload in one shot via serde_json and converts the
//! value depth-first into a [`TreeNode`] tagged union: objects become ordered
//! entry lists (order = decode order, never sorted; serde_json's
//! `preserve_order` feature backs this), arrays become ordered item lists,
//! primitives become leaf variants. Numbers keep their decoded
//! `serde_json::Number` representation so rendering is the literal textual
//! form with no float coercion.
//!
//! The model is immutable once built; expand/collapse state lives in the
//! view-state layer, keyed by node path.

use crate::types::NodePath;

/// A decoded JSON value as an explicit tagged union.
///
/// Every consumer matches exhaustively over the variants; there is no
/// dynamic type inspection anywhere downstream.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    /// Ordered key/value entries, in decode order.
    Object(Vec<(String, TreeNode)>),
    /// Ordered items, in decode order.
    Array(Vec<TreeNode>),
    String(String),
    Number(serde_json::Number),
    Bool(bool),
    Null,
}

impl TreeNode {
    /// Whether this node is an object or array.
    pub fn is_composite(&self) -> bool {
        matches!(self, TreeNode::Object(_) | TreeNode::Array(_))
    }

    /// Number of direct children; zero for leaves.
    pub fn child_count(&self) -> usize {
        match self {
            TreeNode::Object(entries) => entries.len(),
            TreeNode::Array(items) => items.len(),
            _ => 0,
        }
    }

    /// Whether this node takes part in expand/collapse: only non-empty
    /// composites bear a toggle. Leaves and empty composites never do.
    pub fn has_toggle(&self) -> bool {
        self.is_composite() && self.child_count() > 0
    }

    /// Child-count label for the collapsed-preview summary: `"3 keys"`,
    /// `"1 item"` (singular when the count is 1). `None` for leaves.
    pub fn child_summary(&self) -> Option<String> {
        match self {
            TreeNode::Object(entries) => {
                let n = entries.len();
                Some(format!("{n} {}", if n == 1 { "key" } else { "keys" }))
            }
            TreeNode::Array(items) => {
                let n = items.len();
                Some(format!("{n} {}", if n == 1 { "item" } else { "items" }))
            }
            _ => None,
        }
    }

    /// Resolve a child-index path from this node.
    pub fn node_at(&self, path: &NodePath) -> Option<&TreeNode> {
        let mut node = self;
        for &index in path.indices() {
            node = match node {
                TreeNode::Object(entries) => &entries.get(index)?.1,
                TreeNode::Array(items) => items.get(index)?,
                _ => return None,
            };
        }
        Some(node)
    }
}

/// Failure to decode syntactically invalid JSON.
///
/// Captures the position and reason from the underlying decoder. Callers
/// present this as a user-visible error and render no partial tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid JSON: {message}")]
pub struct DecodeError {
    /// One-based line of the failure.
    pub line: usize,
    /// One-based column of the failure.
    pub column: usize,
    /// The decoder's own description (includes the position).
    pub message: String,
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// Decode a JSON payload into a tree model.
pub fn decode(text: &str) -> Result<TreeNode, DecodeError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    Ok(build(value))
}

/// Depth-first conversion from a decoded value to the tree model.
pub fn build(value: serde_json::Value) -> TreeNode {
    match value {
        serde_json::Value::Object(map) => {
            TreeNode::Object(map.into_iter().map(|(k, v)| (k, build(v))).collect())
        }
        serde_json::Value::Array(items) => {
            TreeNode::Array(items.into_iter().map(build).collect())
        }
        serde_json::Value::String(s) => TreeNode::String(s),
        serde_json::Value::Number(n) => TreeNode::Number(n),
        serde_json::Value::Bool(b) => TreeNode::Bool(b),
        serde_json::Value::Null => TreeNode::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_nested_structure() {
        let root = decode(r#"{"x":[1,2,{}]}"#).unwrap();
        let TreeNode::Object(entries) = &root else {
            panic!("root should be an object");
        };
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, "x");

        let TreeNode::Array(items) = &entries[0].1 else {
            panic!("x should be an array");
        };
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], TreeNode::Number(1.into()));
        assert_eq!(items[1], TreeNode::Number(2.into()));
        assert_eq!(items[2], TreeNode::Object(vec![]));
        assert!(!items[2].has_toggle());
    }

    #[test]
    fn test_decode_error_not_partial_tree() {
        let err = decode(r#"{"x":}"#).unwrap_err();
        assert!(err.message.contains("line 1"));
        assert_eq!(err.line, 1);
        assert!(err.column > 0);
    }

    #[test]
    fn test_key_order_preserved() {
        let root = decode(r#"{"zebra":1,"alpha":2,"middle":3}"#).unwrap();
        let TreeNode::Object(entries) = root else {
            panic!("expected object");
        };
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zebra", "alpha", "middle"]);
    }

    #[test]
    fn test_leaf_variants() {
        assert_eq!(decode("\"hi\"").unwrap(), TreeNode::String("hi".to_string()));
        assert_eq!(decode("true").unwrap(), TreeNode::Bool(true));
        assert_eq!(decode("null").unwrap(), TreeNode::Null);
        assert!(matches!(decode("1.5").unwrap(), TreeNode::Number(_)));
    }

    #[test]
    fn test_number_keeps_literal_form() {
        let TreeNode::Number(n) = decode("1e3").unwrap() else {
            panic!("expected number");
        };
        // serde_json's own formatting, not a hand-rolled float print.
        assert_eq!(n.to_string(), serde_json::json!(1e3).to_string());
    }

    #[test]
    fn test_child_summary_pluralization() {
        let obj = decode(r#"{"a":1}"#).unwrap();
        assert_eq!(obj.child_summary().unwrap(), "1 key");

        let obj = decode(r#"{"a":1,"b":2}"#).unwrap();
        assert_eq!(obj.child_summary().unwrap(), "2 keys");

        let arr = decode("[0]").unwrap();
        assert_eq!(arr.child_summary().unwrap(), "1 item");

        let arr = decode("[0,1,2]").unwrap();
        assert_eq!(arr.child_summary().unwrap(), "3 items");

        assert_eq!(decode("null").unwrap().child_summary(), None);
    }

    #[test]
    fn test_toggle_bearing_nodes() {
        assert!(decode(r#"{"a":1}"#).unwrap().has_toggle());
        assert!(decode("[1]").unwrap().has_toggle());
        assert!(!decode("{}").unwrap().has_toggle());
        assert!(!decode("[]").unwrap().has_toggle());
        assert!(!decode("42").unwrap().has_toggle());
    }

    #[test]
    fn test_node_at_path() {
        let root = decode(r#"{"x":[10,{"y":true}]}"#).unwrap();
        let path = NodePath::root().child(0).child(1).child(0);
        assert_eq!(root.node_at(&path), Some(&TreeNode::Bool(true)));
        assert_eq!(root.node_at(&NodePath::root()), Some(&root));
        assert!(root.node_at(&NodePath::root().child(5)).is_none());
        // Descending through a leaf resolves to nothing.
        assert!(root.node_at(&NodePath::root().child(0).child(0).child(0)).is_none());
    }
}
