//! The viewer shell: one payload, one content region, all the controls.
//!
//! `Viewer` is the composition root. It builds the region for the payload's
//! kind inside that region's own error boundary: a decode failure or an
//! empty tokenize result becomes an inline fragment in place of the region's
//! output, while the sibling actions (copy, download, raw view, theme)
//! keep operating on the untouched payload. Every interactive event
//! (search keystroke, wrap toggle, node toggle, bulk expand/collapse,
//! theme or view-mode toggle) mutates the relevant view state and the next
//! `render` recomputes the region from its base model.

use crate::actions::{ClipboardHandle, CopyStatus, DownloadRequest, download_request};
use crate::buffer::SourceBuffer;
use crate::config::ViewerConfig;
use crate::markdown::markdown_to_markup;
use crate::tabular::{Grid, TableRenderer, TableStyle, filter_grid, tokenize};
use crate::theme::ThemePreference;
use crate::traits::RendererConfig;
use crate::tree::model::{TreeNode, decode};
use crate::tree::renderer::render_tree;
use crate::tree::view_state::TreeViewState;
use crate::types::{ContentKind, NodePath, Payload, StyledLine, StyledSegment, ViewMode};

/// Per-kind region state. Failure states replace only this region's output.
enum Region {
    /// Tabular pipeline: the base grid, filtered per render by the query.
    Table { base: Grid },
    /// Tree pipeline: immutable model plus expand/collapse view state.
    Tree {
        root: TreeNode,
        state: TreeViewState,
    },
    /// Markdown delegation; no interactive state of its own.
    Markdown,
    /// CSV produced zero rows, an explicit "no data" state.
    Empty { message: String },
    /// The pipeline failed (e.g. invalid JSON); inline error fragment.
    Failed { message: String },
}

/// Composition root owning the payload and all view state.
pub struct Viewer {
    buffer: SourceBuffer,
    region: Region,
    theme: ThemePreference,
    table_style: TableStyle,
    max_width: usize,
    wrap_cells: bool,
    query: String,
    copy_status: CopyStatus,
}

impl Viewer {
    /// Build a viewer for a payload. Pipeline failures are captured into the
    /// region here; construction itself never fails.
    pub fn new(payload: Payload, config: &ViewerConfig) -> Self {
        let region = Self::build_region(&payload);
        Self {
            buffer: SourceBuffer::new(payload),
            region,
            theme: config.theme,
            table_style: config.table_style.clone(),
            max_width: config.max_width,
            wrap_cells: config.wrap_cells,
            query: String::new(),
            copy_status: CopyStatus::Idle,
        }
    }

    fn build_region(payload: &Payload) -> Region {
        match payload.kind() {
            ContentKind::Csv => {
                let base = tokenize(payload.text());
                if base.is_empty() {
                    log::debug!("{}: tokenized to zero rows", payload.locator());
                    Region::Empty {
                        message: "No data found in CSV file.".to_string(),
                    }
                } else {
                    log::debug!(
                        "{}: tokenized {} rows",
                        payload.locator(),
                        base.row_count()
                    );
                    Region::Table { base }
                }
            }
            ContentKind::Json => match decode(payload.text()) {
                Ok(root) => Region::Tree {
                    root,
                    state: TreeViewState::new(),
                },
                Err(e) => {
                    log::warn!("{}: {e}", payload.locator());
                    Region::Failed {
                        message: format!("Error parsing JSON: {e}"),
                    }
                }
            },
            ContentKind::Markdown => Region::Markdown,
        }
    }

    fn renderer_config(&self) -> RendererConfig {
        RendererConfig {
            max_width: self.max_width,
            wrap_cells: self.wrap_cells,
            theme: self.theme.colors(),
        }
    }

    /// Render the current view. In source mode this is the untouched
    /// payload; otherwise the region is recomputed from its base model and
    /// current view state.
    pub fn render(&mut self) -> Vec<StyledLine> {
        let config = self.renderer_config();
        let lines = match &self.region {
            Region::Table { base } => {
                // Always filter the original grid, never a prior filtered view.
                let filtered = filter_grid(base, &self.query);
                TableRenderer::new(self.table_style.clone()).render_grid(&filtered, &config)
            }
            Region::Tree { root, state } => render_tree(root, state, &config),
            Region::Markdown => markdown_to_markup(self.buffer.source_text())
                .lines()
                .map(StyledLine::plain)
                .collect(),
            Region::Empty { message } => vec![notice_fragment(message, &config)],
            Region::Failed { message } => vec![error_fragment(message, &config)],
        };
        self.buffer.set_rendered(lines);
        self.buffer.display_lines()
    }

    // -- Search / wrap (tabular) --

    /// Update the search query. Takes effect on the next render, which
    /// refilters the original grid.
    pub fn set_search_query(&mut self, query: &str) {
        self.query = query.to_lowercase();
    }

    pub fn search_query(&self) -> &str {
        &self.query
    }

    /// Presentational wrap toggle; the grid model is untouched.
    pub fn set_wrap(&mut self, wrap: bool) {
        self.wrap_cells = wrap;
    }

    // -- Expand/collapse (tree) --

    /// Toggle one node. Ignored for leaves, empty composites, and paths that
    /// resolve to nothing.
    pub fn toggle_node(&mut self, path: &NodePath) {
        if let Region::Tree { root, state } = &mut self.region
            && root.node_at(path).is_some_and(TreeNode::has_toggle)
        {
            state.toggle(path);
        }
    }

    /// Collapse every toggle-bearing node, overriding individual state.
    pub fn collapse_all(&mut self) {
        if let Region::Tree { root, state } = &mut self.region {
            state.collapse_all(root);
        }
    }

    /// Restore the fully expanded default, overriding individual state.
    pub fn expand_all(&mut self) {
        if let Region::Tree { state, .. } = &mut self.region {
            state.expand_all();
        }
    }

    // -- Theme / view mode --

    /// Flip the theme. The caller persists the returned preference.
    pub fn toggle_theme(&mut self) -> ThemePreference {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    /// Toggle between the rendered view and the untouched source text.
    pub fn toggle_raw_view(&mut self) {
        self.buffer.toggle_view();
    }

    pub fn view_mode(&self) -> ViewMode {
        self.buffer.view_mode()
    }

    // -- Actions on the untouched payload --

    /// Copy arbitrary text (a cell, the whole payload). The returned status
    /// is the transient button-label state; a repeat click just re-issues.
    pub fn copy(&mut self, clipboard: &mut ClipboardHandle, text: &str) -> CopyStatus {
        self.copy_status = match clipboard.copy(text) {
            Ok(()) => CopyStatus::Copied,
            Err(e) => {
                log::warn!("copy failed: {e}");
                CopyStatus::Failed
            }
        };
        self.copy_status
    }

    /// Copy the original payload text, byte-faithfully.
    pub fn copy_original(&mut self, clipboard: &mut ClipboardHandle) -> CopyStatus {
        let text = self.buffer.source_text().to_string();
        self.copy(clipboard, &text)
    }

    pub fn copy_status(&self) -> CopyStatus {
        self.copy_status
    }

    /// Download request over the untouched original payload. Works no
    /// matter what state the content region is in.
    pub fn download_request(&self) -> DownloadRequest {
        download_request(self.buffer.source())
    }

    pub fn payload(&self) -> &Payload {
        self.buffer.source()
    }
}

/// Inline fragment for a failed region.
fn error_fragment(message: &str, config: &RendererConfig) -> StyledLine {
    StyledLine::new(vec![StyledSegment {
        text: message.to_string(),
        fg: Some(config.theme.error_color()),
        ..Default::default()
    }])
}

/// Inline fragment for an empty-but-valid result.
fn notice_fragment(message: &str, config: &RendererConfig) -> StyledLine {
    StyledLine::new(vec![StyledSegment {
        text: message.to_string(),
        fg: Some(config.theme.dim_color()),
        italic: true,
        ..Default::default()
    }])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{all_text, make_payload};

    fn viewer(kind: ContentKind, text: &str) -> Viewer {
        Viewer::new(make_payload(kind, text), &ViewerConfig::default())
    }

    #[test]
    fn test_csv_payload_renders_table() {
        let mut v = viewer(ContentKind::Csv, "name,age\nAlice,30\nBob,25");
        let text = all_text(&v.render());
        assert!(text.contains("name"));
        assert!(text.contains("Alice"));
    }

    #[test]
    fn test_search_refilters_from_base_grid() {
        let mut v = viewer(ContentKind::Csv, "name\nAlice\nBob\nCarol");

        v.set_search_query("alice");
        let first = all_text(&v.render());
        assert!(first.contains("Alice"));
        assert!(!first.contains("Bob"));

        // A new query sees rows the previous query filtered out.
        v.set_search_query("bob");
        let second = all_text(&v.render());
        assert!(second.contains("Bob"));
        assert!(!second.contains("Alice"));

        v.set_search_query("");
        let third = all_text(&v.render());
        assert!(third.contains("Alice") && third.contains("Bob") && third.contains("Carol"));
    }

    #[test]
    fn test_empty_csv_is_a_distinct_notice() {
        let mut v = viewer(ContentKind::Csv, "\n,,\n");
        let text = all_text(&v.render());
        assert!(text.contains("No data found"));
        assert!(!text.contains("Error"));
    }

    #[test]
    fn test_json_renders_tree() {
        let mut v = viewer(ContentKind::Json, r#"{"x":[1,2,{}]}"#);
        let text = all_text(&v.render());
        assert!(text.contains("\"x\""));
        assert!(text.contains("{}"));
    }

    #[test]
    fn test_invalid_json_becomes_inline_error() {
        let mut v = viewer(ContentKind::Json, r#"{"x":}"#);
        let text = all_text(&v.render());
        assert!(text.contains("Error parsing JSON"));
    }

    /// A failed region never breaks the byte-faithful sibling actions.
    #[test]
    fn test_failed_region_keeps_download_and_raw_view() {
        let source = r#"{"x":}"#;
        let mut v = viewer(ContentKind::Json, source);
        v.render();

        assert_eq!(v.download_request().bytes, source.as_bytes());

        v.toggle_raw_view();
        assert_eq!(all_text(&v.render()), source);
    }

    #[test]
    fn test_toggle_node_ignores_leaves_and_empties() {
        let mut v = viewer(ContentKind::Json, r#"{"a":1,"b":{}}"#);
        let expanded = all_text(&v.render());

        v.toggle_node(&NodePath::root().child(0)); // leaf
        v.toggle_node(&NodePath::root().child(1)); // empty composite
        v.toggle_node(&NodePath::root().child(9)); // nonexistent
        assert_eq!(all_text(&v.render()), expanded);

        v.toggle_node(&NodePath::root());
        assert_ne!(all_text(&v.render()), expanded);
    }

    #[test]
    fn test_bulk_expand_collapse_round_trip() {
        let mut v = viewer(ContentKind::Json, r#"{"a":[1,{"b":2}]}"#);
        let initial = v.render();

        v.toggle_node(&NodePath::root().child(0));
        v.collapse_all();
        assert_eq!(v.render().len(), 1);

        v.expand_all();
        assert_eq!(v.render(), initial);
    }

    #[test]
    fn test_markdown_region_delegates() {
        let mut v = viewer(ContentKind::Markdown, "# Title");
        assert!(all_text(&v.render()).contains("<h1>Title</h1>"));
    }

    #[test]
    fn test_theme_toggle_changes_palette() {
        let mut v = viewer(ContentKind::Csv, "a\n1");
        assert_eq!(v.theme(), ThemePreference::Dark);
        let dark = v.render();

        assert_eq!(v.toggle_theme(), ThemePreference::Light);
        let light = v.render();
        assert_ne!(dark, light);
        // Same text, different styling only.
        assert_eq!(all_text(&dark), all_text(&light));
    }

    #[test]
    fn test_raw_view_is_byte_faithful_for_csv() {
        let source = "a,\"b,c\"\n1,\"2\n2\"";
        let mut v = viewer(ContentKind::Csv, source);
        v.render();
        v.toggle_raw_view();
        assert_eq!(v.view_mode(), ViewMode::Source);
        assert_eq!(all_text(&v.render()), source);
        assert_eq!(v.download_request().bytes, source.as_bytes());
    }

    #[test]
    fn test_wrap_toggle_does_not_affect_model() {
        let mut v = viewer(ContentKind::Csv, "h\nlong cell value here");
        let before = v.download_request();
        v.set_wrap(true);
        v.render();
        assert_eq!(v.download_request(), before);
    }
}
