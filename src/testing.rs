//! Shared test helpers.
//!
//! Compiled only for unit tests; canonical factory functions used across
//! the `#[cfg(test)]` modules.

use crate::theme::ThemeColors;
use crate::traits::RendererConfig;
use crate::types::{ContentKind, Payload, StyledLine};

/// Returns a `RendererConfig` suitable for renderer unit tests: 80 columns,
/// no wrapping, dark theme.
#[allow(dead_code)]
pub fn test_renderer_config() -> RendererConfig {
    RendererConfig {
        max_width: 80,
        wrap_cells: false,
        theme: ThemeColors::dark(),
    }
}

/// Creates a payload with a fixed test locator.
#[allow(dead_code)]
pub fn make_payload(kind: ContentKind, text: &str) -> Payload {
    Payload::new(text, kind, "test://input")
}

/// Flattens styled lines to their text, one line per `\n`.
#[allow(dead_code)]
pub fn all_text(lines: &[StyledLine]) -> String {
    lines
        .iter()
        .map(|l| l.text())
        .collect::<Vec<_>>()
        .join("\n")
}
