//! Expand/collapse view state for the tree, kept apart from the model.
//!
//! Each toggle-bearing node (a non-empty object or array) is either
//! `Expanded` (the default) or `Collapsed`. The state is a set of collapsed
//! paths: the decoded tree itself is never mutated, and the state can be
//! exercised without any presentation surface.

use std::collections::HashSet;

use super::model::TreeNode;
use crate::types::NodePath;

/// Per-node expanded/collapsed flags, keyed by stable path from the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeViewState {
    collapsed: HashSet<NodePath>,
}

impl TreeViewState {
    /// All nodes expanded, the initial state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, path: &NodePath) -> bool {
        !self.collapsed.contains(path)
    }

    /// Flip one node between expanded and collapsed.
    pub fn toggle(&mut self, path: &NodePath) {
        if !self.collapsed.remove(path) {
            self.collapsed.insert(path.clone());
        }
    }

    /// Force every toggle-bearing node in `root` to collapsed, regardless of
    /// prior individual state.
    pub fn collapse_all(&mut self, root: &TreeNode) {
        self.collapsed.clear();
        collect_toggle_paths(root, NodePath::root(), &mut self.collapsed);
    }

    /// Force every node back to the expanded default.
    pub fn expand_all(&mut self) {
        self.collapsed.clear();
    }

    /// Number of collapsed nodes (diagnostics and tests).
    pub fn collapsed_count(&self) -> usize {
        self.collapsed.len()
    }
}

/// Walk the tree, recording the path of every toggle-bearing node.
fn collect_toggle_paths(node: &TreeNode, path: NodePath, out: &mut HashSet<NodePath>) {
    if node.has_toggle() {
        out.insert(path.clone());
    }
    match node {
        TreeNode::Object(entries) => {
            for (i, (_, child)) in entries.iter().enumerate() {
                collect_toggle_paths(child, path.child(i), out);
            }
        }
        TreeNode::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                collect_toggle_paths(child, path.child(i), out);
            }
        }
        TreeNode::String(_) | TreeNode::Number(_) | TreeNode::Bool(_) | TreeNode::Null => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::model::decode;

    #[test]
    fn test_default_is_expanded() {
        let state = TreeViewState::new();
        assert!(state.is_expanded(&NodePath::root()));
        assert!(state.is_expanded(&NodePath::root().child(3)));
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let mut state = TreeViewState::new();
        let path = NodePath::root().child(1);

        state.toggle(&path);
        assert!(!state.is_expanded(&path));

        state.toggle(&path);
        assert!(state.is_expanded(&path));
        assert_eq!(state, TreeViewState::new());
    }

    #[test]
    fn test_toggle_is_independent_per_node() {
        let mut state = TreeViewState::new();
        state.toggle(&NodePath::root().child(0));
        assert!(!state.is_expanded(&NodePath::root().child(0)));
        assert!(state.is_expanded(&NodePath::root().child(1)));
        assert!(state.is_expanded(&NodePath::root()));
    }

    #[test]
    fn test_collapse_all_covers_toggle_bearing_nodes_only() {
        // Root object, nested array, nested object, one empty object leaf.
        let root = decode(r#"{"a":[1,{"b":2}],"c":{},"d":3}"#).unwrap();
        let mut state = TreeViewState::new();
        state.collapse_all(&root);

        // root, "a" array, and the object inside it; not "c" (empty) or "d".
        assert_eq!(state.collapsed_count(), 3);
        assert!(!state.is_expanded(&NodePath::root()));
        assert!(!state.is_expanded(&NodePath::root().child(0)));
        assert!(!state.is_expanded(&NodePath::root().child(0).child(1)));
        assert!(state.is_expanded(&NodePath::root().child(1)));
    }

    #[test]
    fn test_bulk_operations_override_manual_state() {
        let root = decode(r#"{"a":[1],"b":[2]}"#).unwrap();
        let mut state = TreeViewState::new();

        state.toggle(&NodePath::root().child(0));
        state.collapse_all(&root);
        assert!(!state.is_expanded(&NodePath::root().child(0)));
        assert!(!state.is_expanded(&NodePath::root().child(1)));

        state.expand_all();
        assert_eq!(state, TreeViewState::new());
        assert!(state.is_expanded(&NodePath::root().child(0)));
    }
}
