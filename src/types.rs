//! Core data types for the viewer: payloads and the styled markup model.

use std::fmt;

/// Fallback file name used when a locator has no usable final path segment.
const DEFAULT_DOWNLOAD_NAME: &str = "download.txt";

/// Discriminant tag identifying how a payload should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Csv,
    Json,
    Markdown,
}

impl ContentKind {
    /// MIME hint attached to download requests for this kind.
    pub fn mime_hint(self) -> &'static str {
        match self {
            ContentKind::Csv => "text/csv",
            ContentKind::Json => "application/json",
            ContentKind::Markdown => "text/markdown",
        }
    }

    /// Infer a kind from a file extension. Anything unrecognized is treated
    /// as Markdown, the viewer's default interpretation for plain text.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => ContentKind::Csv,
            "json" => ContentKind::Json,
            _ => ContentKind::Markdown,
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentKind::Csv => "CSV",
            ContentKind::Json => "JSON",
            ContentKind::Markdown => "Markdown",
        };
        f.write_str(name)
    }
}

/// A raw text payload handed to the viewer, plus its kind discriminant and
/// the locator it originated from.
///
/// The text is immutable for the payload's lifetime: every pipeline borrows
/// it, and the copy/download/raw-view actions must reproduce it byte for
/// byte. Fields are private so nothing downstream can touch the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    text: String,
    kind: ContentKind,
    locator: String,
}

impl Payload {
    /// Create a payload from already-loaded text.
    pub fn new(text: impl Into<String>, kind: ContentKind, locator: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            locator: locator.into(),
        }
    }

    /// Load a payload from a file on disk.
    ///
    /// This is the one-shot load gating the rest of the flow; a failure here
    /// is terminal for the viewer. `kind_override` skips extension inference.
    pub fn from_path(
        path: &std::path::Path,
        kind_override: Option<ContentKind>,
    ) -> std::io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let kind = kind_override.unwrap_or_else(|| {
            path.extension()
                .and_then(|e| e.to_str())
                .map(ContentKind::from_extension)
                .unwrap_or(ContentKind::Markdown)
        });
        Ok(Self::new(text, kind, path.display().to_string()))
    }

    /// The untouched original text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    /// The originating locator string (path or URL).
    pub fn locator(&self) -> &str {
        &self.locator
    }

    /// Final path segment of the locator, used to name downloads.
    pub fn file_name(&self) -> &str {
        let segment = self
            .locator
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.locator.as_str());
        if segment.is_empty() {
            DEFAULT_DOWNLOAD_NAME
        } else {
            segment
        }
    }
}

/// Toggle between rendered and source views of a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Show the prettified rendered output.
    Rendered,
    /// Show the original source text.
    Source,
}

/// Stable path from the tree root to a node, as child indices.
///
/// Object entries and array items are both addressed by position, so the
/// path survives re-renders and identifies the same node as long as the
/// decoded tree itself is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Path to the `index`-th child of this node.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("$");
        }
        write!(f, "$")?;
        for i in &self.0 {
            write!(f, ".{i}")?;
        }
        Ok(())
    }
}

/// An interaction attached to a rendered segment, for the host surface to
/// wire up. The core never performs these itself during rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentAction {
    /// Copy this literal text to the clipboard.
    Copy(String),
    /// Toggle the expand/collapse state of the node at this path.
    Toggle(NodePath),
}

/// A single line of styled output.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledLine {
    /// The styled segments making up this line.
    pub segments: Vec<StyledSegment>,
}

impl StyledLine {
    /// Creates a new styled line from segments.
    pub fn new(segments: Vec<StyledSegment>) -> Self {
        Self { segments }
    }

    /// Creates a plain unstyled line from text.
    pub fn plain(text: &str) -> Self {
        Self {
            segments: vec![StyledSegment {
                text: text.to_string(),
                ..Default::default()
            }],
        }
    }

    /// The line's text with all styling stripped.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// A segment of styled text within a line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledSegment {
    /// The text content.
    pub text: String,
    /// Foreground color as [r, g, b].
    pub fg: Option<[u8; 3]>,
    /// Background color as [r, g, b].
    pub bg: Option<[u8; 3]>,
    /// Whether this segment is bold.
    pub bold: bool,
    /// Whether this segment is italic.
    pub italic: bool,
    /// Whether this segment is underlined.
    pub underline: bool,
    /// Interaction the host surface should attach to this segment.
    pub action: Option<SegmentAction>,
}
