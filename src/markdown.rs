//! Markdown rendering, delegated to an external converter.
//!
//! Conversion itself is not this crate's concern: the payload text goes
//! through `pulldown-cmark` and the resulting markup is sanitized with
//! `ammonia` before being handed back as an opaque fragment for the host
//! surface. The original payload is never touched.

use pulldown_cmark::{Options, Parser, html};

use crate::traits::{ContentRenderer, RenderError, RendererConfig, RenderedView};
use crate::types::{ContentKind, Payload, StyledLine};

/// Convert markdown content to sanitized HTML markup.
///
/// Strikethrough, tables, and footnotes are enabled; the output is cleaned
/// of dangerous elements and attributes.
pub fn markdown_to_markup(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);

    let parser = Parser::new_ext(markdown, options);

    let mut markup = String::new();
    html::push_html(&mut markup, parser);

    ammonia::clean(&markup)
}

/// One-shot Markdown pipeline: delegate conversion, wrap the markup as
/// plain lines. The converter is total, so this renderer cannot fail on
/// well-formed text input.
#[derive(Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ContentRenderer for MarkdownRenderer {
    fn kind(&self) -> ContentKind {
        ContentKind::Markdown
    }

    fn display_name(&self) -> &str {
        "Markdown"
    }

    fn format_badge(&self) -> &str {
        "MD"
    }

    fn render(
        &self,
        payload: &Payload,
        _config: &RendererConfig,
    ) -> Result<RenderedView, RenderError> {
        let markup = markdown_to_markup(payload.text());
        Ok(RenderedView {
            lines: markup.lines().map(StyledLine::plain).collect(),
            format_badge: self.format_badge().to_string(),
        })
    }
}
