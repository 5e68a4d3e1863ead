//! Tree renderer: walks the model plus its view state into styled lines.
//!
//! Every toggle-bearing node renders a `▼`/`▶` glyph carrying a toggle
//! action for its path. An expanded composite renders its opening
//! brace/bracket, children block, and closing line; collapsing it hides the
//! children and closing line and appends a one-line `...}` / `...]` preview
//! after the opening brace, followed by the child-count summary. Empty
//! composites render as bare `{}`/`[]` with no toggle and no count. Entry
//! and item order is decode order throughout.

use super::model::{TreeNode, decode};
use super::view_state::TreeViewState;
use crate::theme::ThemeColors;
use crate::traits::{ContentRenderer, RenderError, RendererConfig, RenderedView};
use crate::types::{ContentKind, NodePath, Payload, SegmentAction, StyledLine, StyledSegment};

/// Generate the tree guide prefix for a given depth: one `│` plus padding
/// per level.
pub fn tree_guides(depth: usize) -> String {
    let mut prefix = String::new();
    for _ in 0..depth {
        prefix.push('│');
        prefix.push_str("  ");
    }
    prefix
}

/// Render a tree with the given view state into styled lines.
pub fn render_tree(
    root: &TreeNode,
    state: &TreeViewState,
    config: &RendererConfig,
) -> Vec<StyledLine> {
    let mut walk = TreeWalk {
        state,
        theme: &config.theme,
        lines: Vec::new(),
    };
    walk.node(root, &NodePath::root(), 0, None, false);
    walk.lines
}

// ---------------------------------------------------------------------------
// Recursive walk
// ---------------------------------------------------------------------------

struct TreeWalk<'a> {
    state: &'a TreeViewState,
    theme: &'a ThemeColors,
    lines: Vec<StyledLine>,
}

impl TreeWalk<'_> {
    fn node(
        &mut self,
        node: &TreeNode,
        path: &NodePath,
        depth: usize,
        key: Option<&str>,
        trailing_comma: bool,
    ) {
        match node {
            TreeNode::Object(entries) if !entries.is_empty() => {
                self.composite(node, path, depth, key, trailing_comma, ('{', '}'), |walk| {
                    for (i, (k, child)) in entries.iter().enumerate() {
                        let comma = i + 1 < entries.len();
                        walk.node(child, &path.child(i), depth + 1, Some(k.as_str()), comma);
                    }
                });
            }
            TreeNode::Array(items) if !items.is_empty() => {
                self.composite(node, path, depth, key, trailing_comma, ('[', ']'), |walk| {
                    for (i, child) in items.iter().enumerate() {
                        let comma = i + 1 < items.len();
                        walk.node(child, &path.child(i), depth + 1, None, comma);
                    }
                });
            }
            TreeNode::Object(_) => {
                self.leaf_line(depth, key, plain_segment("{}"), trailing_comma);
            }
            TreeNode::Array(_) => {
                self.leaf_line(depth, key, plain_segment("[]"), trailing_comma);
            }
            TreeNode::String(s) => {
                // Quotes are added for display only; the model keeps the raw value.
                let seg = StyledSegment {
                    text: format!("\"{s}\""),
                    fg: Some(self.theme.palette[2]),
                    ..Default::default()
                };
                self.leaf_line(depth, key, seg, trailing_comma);
            }
            TreeNode::Number(n) => {
                let seg = StyledSegment {
                    text: n.to_string(),
                    fg: Some(self.theme.palette[11]),
                    ..Default::default()
                };
                self.leaf_line(depth, key, seg, trailing_comma);
            }
            TreeNode::Bool(b) => {
                let seg = StyledSegment {
                    text: b.to_string(),
                    fg: Some(self.theme.palette[5]),
                    ..Default::default()
                };
                self.leaf_line(depth, key, seg, trailing_comma);
            }
            TreeNode::Null => {
                let seg = StyledSegment {
                    text: "null".to_string(),
                    fg: Some(self.theme.dim_color()),
                    italic: true,
                    ..Default::default()
                };
                self.leaf_line(depth, key, seg, trailing_comma);
            }
        }
    }

    /// Render a non-empty object or array and, when expanded, its children.
    fn composite(
        &mut self,
        node: &TreeNode,
        path: &NodePath,
        depth: usize,
        key: Option<&str>,
        trailing_comma: bool,
        braces: (char, char),
        children: impl FnOnce(&mut Self),
    ) {
        let expanded = self.state.is_expanded(path);
        let (open, close) = braces;

        let mut segments = vec![self.guide_segment(depth), self.toggle_segment(expanded, path)];
        if let Some(key) = key {
            segments.push(self.key_segment(key));
            segments.push(plain_segment(": "));
        }
        segments.push(plain_segment(&open.to_string()));

        if expanded {
            self.lines.push(StyledLine::new(segments));
            children(self);

            let mut close_segments = vec![
                self.guide_segment(depth),
                plain_segment("  "),
                plain_segment(&close.to_string()),
            ];
            if trailing_comma {
                close_segments.push(plain_segment(","));
            }
            self.lines.push(StyledLine::new(close_segments));
        } else {
            // Collapsed preview replaces the children block and closing line.
            segments.push(self.dim_segment(&format!("...{close}")));
            if let Some(summary) = node.child_summary() {
                segments.push(StyledSegment {
                    text: format!("  // {summary}"),
                    fg: Some(self.theme.dim_color()),
                    italic: true,
                    ..Default::default()
                });
            }
            if trailing_comma {
                segments.push(plain_segment(","));
            }
            self.lines.push(StyledLine::new(segments));
        }
    }

    /// Render a leaf or empty composite: guide, spacer, optional key, value.
    fn leaf_line(
        &mut self,
        depth: usize,
        key: Option<&str>,
        value: StyledSegment,
        trailing_comma: bool,
    ) {
        let mut segments = vec![self.guide_segment(depth), plain_segment("  ")];
        if let Some(key) = key {
            segments.push(self.key_segment(key));
            segments.push(plain_segment(": "));
        }
        segments.push(value);
        if trailing_comma {
            segments.push(plain_segment(","));
        }
        self.lines.push(StyledLine::new(segments));
    }

    fn guide_segment(&self, depth: usize) -> StyledSegment {
        StyledSegment {
            text: tree_guides(depth),
            fg: Some(self.theme.dim_color()),
            ..Default::default()
        }
    }

    fn dim_segment(&self, text: &str) -> StyledSegment {
        StyledSegment {
            text: text.to_string(),
            fg: Some(self.theme.dim_color()),
            ..Default::default()
        }
    }

    fn key_segment(&self, key: &str) -> StyledSegment {
        StyledSegment {
            text: format!("\"{key}\""),
            fg: Some(self.theme.palette[6]),
            ..Default::default()
        }
    }

    fn toggle_segment(&self, expanded: bool, path: &NodePath) -> StyledSegment {
        StyledSegment {
            text: if expanded { "▼ " } else { "▶ " }.to_string(),
            fg: Some(self.theme.dim_color()),
            action: Some(SegmentAction::Toggle(path.clone())),
            ..Default::default()
        }
    }
}

fn plain_segment(text: &str) -> StyledSegment {
    StyledSegment {
        text: text.to_string(),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// JsonRenderer
// ---------------------------------------------------------------------------

/// One-shot JSON pipeline: decode the payload and render the fully expanded
/// tree.
#[derive(Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ContentRenderer for JsonRenderer {
    fn kind(&self) -> ContentKind {
        ContentKind::Json
    }

    fn display_name(&self) -> &str {
        "JSON"
    }

    fn format_badge(&self) -> &str {
        "{}"
    }

    fn render(
        &self,
        payload: &Payload,
        config: &RendererConfig,
    ) -> Result<RenderedView, RenderError> {
        let root = decode(payload.text())?;
        let lines = render_tree(&root, &TreeViewState::new(), config);
        Ok(RenderedView {
            lines,
            format_badge: self.format_badge().to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
