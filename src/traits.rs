//! Core traits for the viewer's rendering layer.

use crate::theme::ThemeColors;
use crate::tree::model::DecodeError;
use crate::types::{ContentKind, Payload, StyledLine};

/// Configuration passed to renderers describing the presentation surface.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Maximum render width in columns.
    pub max_width: usize,
    /// Wrap long cell text onto continuation lines instead of truncating.
    /// Purely presentational; never affects the underlying model.
    pub wrap_cells: bool,
    /// Theme colors for styling rendered output.
    pub theme: ThemeColors,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            max_width: 80,
            wrap_cells: false,
            theme: ThemeColors::default(),
        }
    }
}

/// Errors a renderer can surface to its caller.
///
/// Every variant is substituted as an inline fragment in place of the
/// renderer's own output region; it never takes down sibling regions.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The payload was not syntactically valid for its kind.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// Tokenizing produced zero rows. Distinct from a decode error: the
    /// input was acceptable, there is just nothing to show.
    #[error("no data found in input")]
    EmptyResult,
    /// The renderer failed to produce output.
    #[error("render failed: {0}")]
    RenderFailed(String),
}

/// The rendered output from a `ContentRenderer`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedView {
    /// The styled lines of rendered output.
    pub lines: Vec<StyledLine>,
    /// Short badge text indicating the rendered format (e.g., "CSV", "{}").
    pub format_badge: String,
}

/// Renders a payload of one content kind into styled output.
///
/// `render` is a pure model-to-markup function: it never mutates the payload
/// and holds no view state, so a one-shot render of the same payload always
/// produces the same lines. Interactive state (search query, expand/collapse,
/// wrap) lives in the viewer shell, which re-invokes the underlying pipeline.
pub trait ContentRenderer {
    /// The payload kind this renderer handles.
    fn kind(&self) -> ContentKind;

    /// Human-readable name for UI labels.
    fn display_name(&self) -> &str;

    /// Short badge text for the rendered format.
    fn format_badge(&self) -> &str;

    /// Render a payload into styled output.
    fn render(&self, payload: &Payload, config: &RendererConfig)
    -> Result<RenderedView, RenderError>;
}
