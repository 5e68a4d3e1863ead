//! Renderer registry.
//!
//! Maps a payload's `ContentKind` discriminant to its renderer. Payloads
//! arrive pre-tagged (there is no content sniffing here), so lookup is a
//! straight keyed dispatch.

use std::collections::HashMap;

use crate::markdown::MarkdownRenderer;
use crate::tabular::{CsvRenderer, TableStyle};
use crate::traits::ContentRenderer;
use crate::types::ContentKind;

/// Central registry of content renderers, keyed by kind.
pub struct RendererRegistry {
    renderers: HashMap<ContentKind, Box<dyn ContentRenderer>>,
}

impl RendererRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// Registry with the three built-in renderers.
    pub fn with_defaults(table_style: TableStyle) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(CsvRenderer::new(table_style)));
        registry.register(Box::new(crate::tree::JsonRenderer::new()));
        registry.register(Box::new(MarkdownRenderer::new()));
        registry
    }

    /// Register a renderer under its own kind. Replaces any previous
    /// renderer for that kind.
    pub fn register(&mut self, renderer: Box<dyn ContentRenderer>) {
        self.renderers.insert(renderer.kind(), renderer);
    }

    /// Look up the renderer for a kind.
    pub fn get(&self, kind: ContentKind) -> Option<&dyn ContentRenderer> {
        self.renderers.get(&kind).map(|r| r.as_ref())
    }

    /// Return `(kind, display_name)` pairs for all registered renderers.
    pub fn registered_formats(&self) -> Vec<(ContentKind, &str)> {
        self.renderers
            .iter()
            .map(|(kind, r)| (*kind, r.display_name()))
            .collect()
    }

    pub fn renderer_count(&self) -> usize {
        self.renderers.len()
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::with_defaults(TableStyle::default())
    }
}
