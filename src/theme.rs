//! Theme preference and color palettes.
//!
//! `ThemePreference` is the persisted, process-wide light/dark choice; it is
//! read once at startup from the viewer config and mutated only by an
//! explicit user toggle. Each preference resolves to a `ThemeColors` palette
//! consumed by the renderers.

use serde::{Deserialize, Serialize};

/// Persisted light/dark preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    /// The opposite preference, for the user toggle.
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Resolve to the concrete palette.
    pub fn colors(self) -> ThemeColors {
        match self {
            ThemePreference::Light => ThemeColors::light(),
            ThemePreference::Dark => ThemeColors::dark(),
        }
    }
}

/// Color palette used to style rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    /// Default foreground color [r, g, b].
    pub fg: [u8; 3],
    /// Default background color [r, g, b].
    pub bg: [u8; 3],
    /// The 16 ANSI colors [r, g, b] (indices 0–15).
    pub palette: [[u8; 3]; 16],
}

impl ThemeColors {
    /// Catppuccin Mocha-inspired dark palette.
    pub fn dark() -> Self {
        Self {
            fg: [205, 214, 244],
            bg: [30, 30, 46],
            palette: [
                [69, 71, 90],    // 0  Black (Surface0)
                [243, 139, 168], // 1  Red
                [166, 227, 161], // 2  Green
                [249, 226, 175], // 3  Yellow (warm gold)
                [137, 180, 250], // 4  Blue
                [203, 166, 247], // 5  Magenta (mauve)
                [148, 226, 213], // 6  Cyan (teal)
                [186, 194, 222], // 7  White (Subtext0)
                [108, 112, 134], // 8  Bright black (Overlay0)
                [235, 160, 172], // 9  Bright red (maroon)
                [166, 227, 161], // 10 Bright green
                [249, 226, 175], // 11 Bright yellow
                [116, 199, 236], // 12 Bright blue (sapphire)
                [245, 194, 231], // 13 Bright magenta (pink)
                [137, 220, 235], // 14 Bright cyan (sky)
                [205, 214, 244], // 15 Bright white (Text)
            ],
        }
    }

    /// Catppuccin Latte-inspired light palette.
    pub fn light() -> Self {
        Self {
            fg: [76, 79, 105],
            bg: [239, 241, 245],
            palette: [
                [188, 192, 204], // 0  Black (Surface1)
                [210, 15, 57],   // 1  Red
                [64, 160, 43],   // 2  Green
                [223, 142, 29],  // 3  Yellow
                [30, 102, 245],  // 4  Blue
                [136, 57, 239],  // 5  Magenta (mauve)
                [23, 146, 153],  // 6  Cyan (teal)
                [92, 95, 119],   // 7  White (Subtext1)
                [140, 143, 161], // 8  Bright black (Overlay1)
                [230, 69, 83],   // 9  Bright red (maroon)
                [64, 160, 43],   // 10 Bright green
                [223, 142, 29],  // 11 Bright yellow
                [32, 159, 181],  // 12 Bright blue (sapphire)
                [234, 118, 203], // 13 Bright magenta (pink)
                [4, 165, 229],   // 14 Bright cyan (sky)
                [76, 79, 105],   // 15 Bright white (Text)
            ],
        }
    }

    /// Dim color for guides, separators, and secondary text.
    pub fn dim_color(&self) -> [u8; 3] {
        self.palette[8]
    }

    /// Error color for inline failure fragments.
    pub fn error_color(&self) -> [u8; 3] {
        self.palette[1]
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::dark()
    }
}
