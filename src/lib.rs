//! prettyview renders plain-text payloads as structured interactive views.
//!
//! A payload (raw text + kind discriminant + locator) goes through one of
//! two independent pipelines, or the Markdown delegation, into a styled-line
//! markup model the host surface can display:
//!
//! # Module Structure
//!
//! ## Model Layer
//! - [`tabular`] — quote-aware CSV tokenizer, grid model, search filtering,
//!   and table rendering.
//! - [`tree`] — one-shot JSON decoding into a tagged-union tree model,
//!   path-keyed expand/collapse view state, and tree rendering.
//! - [`markdown`] — Markdown conversion delegated to an external renderer.
//!
//! ## Shell Layer
//! - [`viewer`] — `Viewer`: the composition root owning the payload, one
//!   content region with its own error boundary, and all interactive state.
//! - [`registry`] — `RendererRegistry`: kind-keyed lookup of the one-shot
//!   renderers.
//! - [`buffer`] — `SourceBuffer`: untouched source + cached render + the
//!   rendered/source view toggle.
//! - [`actions`] — byte-faithful copy, download, and raw-view actions.
//! - [`config`] — persisted viewer settings (theme, table presentation).
//!
//! ## Shared Types
//! - [`types`] — payloads, node paths, and the styled markup model.
//! - [`traits`] — the `ContentRenderer` trait and render error taxonomy.
//! - [`theme`] — theme preference and the light/dark palettes.

pub mod actions;
pub mod buffer;
pub mod cli;
pub mod config;
pub mod markdown;
pub mod registry;
pub mod tabular;
#[cfg(test)]
pub mod testing;
pub mod theme;
pub mod traits;
pub mod tree;
pub mod types;
pub mod viewer;

pub use actions::{ClipboardHandle, CopyStatus, DownloadRequest, download_request, write_download};
pub use buffer::SourceBuffer;
pub use config::{ConfigError, ViewerConfig};
pub use registry::RendererRegistry;
pub use theme::{ThemeColors, ThemePreference};
pub use traits::{ContentRenderer, RenderError, RendererConfig, RenderedView};
pub use types::{ContentKind, NodePath, Payload, SegmentAction, StyledLine, StyledSegment};
pub use viewer::Viewer;
