//! Dual-view buffer pairing a payload with its rendered output.
//!
//! `SourceBuffer` keeps the untouched source payload alongside the cached
//! rendered lines and a view-mode toggle. The source side is what copy,
//! download, and raw view read, so those actions stay byte-faithful no
//! matter what the rendering path did.

use crate::types::{Payload, StyledLine, ViewMode};

/// Source payload + cached rendered lines for one content region.
#[derive(Debug, Clone)]
pub struct SourceBuffer {
    /// The original payload (never modified).
    source: Payload,
    /// The rendered output, cached by the last render pass.
    rendered: Option<Vec<StyledLine>>,
    /// Current view mode.
    view_mode: ViewMode,
}

impl SourceBuffer {
    pub fn new(source: Payload) -> Self {
        Self {
            source,
            rendered: None,
            view_mode: ViewMode::Rendered,
        }
    }

    /// The original payload.
    pub fn source(&self) -> &Payload {
        &self.source
    }

    /// Source text for copy and download operations.
    pub fn source_text(&self) -> &str {
        self.source.text()
    }

    /// Cache the latest rendered output.
    pub fn set_rendered(&mut self, lines: Vec<StyledLine>) {
        self.rendered = Some(lines);
    }

    /// Lines to display for the current view mode. Falls back to plain
    /// source lines when no render has been cached yet.
    pub fn display_lines(&self) -> Vec<StyledLine> {
        match self.view_mode {
            ViewMode::Rendered => match &self.rendered {
                Some(lines) => lines.clone(),
                None => self.source_as_styled_lines(),
            },
            ViewMode::Source => self.source_as_styled_lines(),
        }
    }

    /// Toggle between rendered and source view.
    pub fn toggle_view(&mut self) {
        self.view_mode = match self.view_mode {
            ViewMode::Rendered => ViewMode::Source,
            ViewMode::Source => ViewMode::Rendered,
        };
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    fn source_as_styled_lines(&self) -> Vec<StyledLine> {
        self.source.text().lines().map(StyledLine::plain).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::make_payload;
    use crate::types::ContentKind;

    #[test]
    fn test_source_is_untouched() {
        let buffer = SourceBuffer::new(make_payload(ContentKind::Csv, "a,b\n1,2"));
        assert_eq!(buffer.source_text(), "a,b\n1,2");
    }

    #[test]
    fn test_display_falls_back_to_source() {
        let buffer = SourceBuffer::new(make_payload(ContentKind::Csv, "a,b\n1,2"));
        let lines = buffer.display_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "a,b");
    }

    #[test]
    fn test_rendered_view_uses_cache() {
        let mut buffer = SourceBuffer::new(make_payload(ContentKind::Csv, "a,b"));
        buffer.set_rendered(vec![StyledLine::plain("rendered!")]);
        assert_eq!(buffer.display_lines()[0].text(), "rendered!");
    }

    #[test]
    fn test_toggle_view_shows_source_then_rendered() {
        let mut buffer = SourceBuffer::new(make_payload(ContentKind::Json, "{\"a\":1}"));
        buffer.set_rendered(vec![StyledLine::plain("tree")]);

        assert_eq!(buffer.view_mode(), ViewMode::Rendered);
        buffer.toggle_view();
        assert_eq!(buffer.view_mode(), ViewMode::Source);
        assert_eq!(buffer.display_lines()[0].text(), "{\"a\":1}");

        buffer.toggle_view();
        assert_eq!(buffer.display_lines()[0].text(), "tree");
    }
}
