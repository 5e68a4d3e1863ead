//! Table rendering for grid content.
//!
//! Renders a `Grid` as a bordered table using box-drawing characters:
//! bold header row built from row 0 (with `Column N` fallback labels for
//! empty header cells), right-aligned numeric columns, column widths
//! auto-sized up to the configured maximum, and a presentational wrap mode
//! that spills long cell text onto continuation lines instead of truncating.
//!
//! Ragged rows render with exactly as many cell elements as the row has
//! entries; missing cells are absent, never padded. Every body cell carries
//! a copy action scoped to that cell's literal text.

use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::tokenizer::tokenize;
use crate::traits::{ContentRenderer, RenderError, RendererConfig, RenderedView};
use crate::types::{ContentKind, Payload, SegmentAction, StyledLine, StyledSegment};

// ---------------------------------------------------------------------------
// Configuration types
// ---------------------------------------------------------------------------

/// Visual style for table borders.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    /// Unicode box-drawing: `┌─┬─┐`, `│ │ │`, `├─┼─┤`, `└─┴─┘`
    #[default]
    Unicode,
    /// ASCII: `+---+---+`, `| | |`, `+---+---+`
    Ascii,
    /// Rounded corners: `╭─┬─╮`, `│ │ │`, `├─┼─┤`, `╰─┴─╯`
    Rounded,
}

/// Column alignment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ColumnAlignment {
    #[default]
    Left,
    Right,
}

// ---------------------------------------------------------------------------
// Box-drawing character sets
// ---------------------------------------------------------------------------

struct BoxChars {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
    top_tee: char,
    bottom_tee: char,
    left_tee: char,
    right_tee: char,
    cross: char,
}

impl BoxChars {
    fn for_style(style: &TableStyle) -> Self {
        match style {
            TableStyle::Unicode => Self {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '─',
                vertical: '│',
                top_tee: '┬',
                bottom_tee: '┴',
                left_tee: '├',
                right_tee: '┤',
                cross: '┼',
            },
            TableStyle::Ascii => Self {
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                horizontal: '-',
                vertical: '|',
                top_tee: '+',
                bottom_tee: '+',
                left_tee: '+',
                right_tee: '+',
                cross: '+',
            },
            TableStyle::Rounded => Self {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                horizontal: '─',
                vertical: '│',
                top_tee: '┬',
                bottom_tee: '┴',
                left_tee: '├',
                right_tee: '┤',
                cross: '┼',
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Display labels for the header row: `Column N` (1-indexed) for empty cells.
fn header_labels(header: &[String]) -> Vec<String> {
    header
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            if cell.is_empty() {
                format!("Column {}", i + 1)
            } else {
                cell.clone()
            }
        })
        .collect()
}

/// Infer column alignment from data rows: right-align numeric columns.
fn infer_column_alignments(data_rows: &[Vec<String>], col_count: usize) -> Vec<ColumnAlignment> {
    let mut alignments = vec![ColumnAlignment::Left; col_count];

    for (col_idx, alignment) in alignments.iter_mut().enumerate() {
        let mut numeric_count = 0;
        let mut total_count = 0;

        for row in data_rows {
            if let Some(cell) = row.get(col_idx)
                && !cell.is_empty()
            {
                total_count += 1;
                if cell.parse::<f64>().is_ok() {
                    numeric_count += 1;
                }
            }
        }

        // If the majority of non-empty cells are numeric, right-align.
        if total_count > 0 && numeric_count * 2 > total_count {
            *alignment = ColumnAlignment::Right;
        }
    }

    alignments
}

/// Align text within a field of the given width, truncating if needed.
fn align_text(text: &str, width: usize, alignment: &ColumnAlignment) -> String {
    let text_len = text.chars().count();
    if text_len >= width {
        return text.chars().take(width).collect();
    }

    let padding = " ".repeat(width - text_len);
    match alignment {
        ColumnAlignment::Left => format!("{text}{padding}"),
        ColumnAlignment::Right => format!("{padding}{text}"),
    }
}

/// Split text into width-sized chunks for the wrap mode.
///
/// Always returns at least one chunk so an empty cell still renders.
fn wrap_chunks(text: &str, width: usize) -> Vec<String> {
    if width == 0 || text.is_empty() {
        return vec![text.to_string()];
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

// ---------------------------------------------------------------------------
// TableRenderer
// ---------------------------------------------------------------------------

/// Renders a grid as a bordered table of styled lines.
pub struct TableRenderer {
    /// Visual style for table borders.
    pub style: TableStyle,
}

impl TableRenderer {
    pub fn new(style: TableStyle) -> Self {
        Self { style }
    }

    /// Render a grid: top border, header (row 0), separator, one row element
    /// per data row, bottom border. Returns no lines for an empty grid.
    pub fn render_grid(&self, grid: &Grid, config: &RendererConfig) -> Vec<StyledLine> {
        let Some(header) = grid.header() else {
            return vec![];
        };

        let headers = header_labels(header);
        let data_rows = grid.data_rows();

        // Columns span the widest row so ragged-wide rows still fit the frame.
        let col_count = grid
            .rows()
            .iter()
            .map(|r| r.len())
            .max()
            .unwrap_or(0)
            .max(headers.len());

        let mut col_widths = vec![1usize; col_count];
        for (i, label) in headers.iter().enumerate() {
            col_widths[i] = col_widths[i].max(label.chars().count());
        }
        for row in data_rows {
            for (i, cell) in row.iter().enumerate() {
                col_widths[i] = col_widths[i].max(cell.chars().count());
            }
        }

        // Shrink columns proportionally if the natural width exceeds the max.
        // Total = borders (col_count + 1) + padding (2 per col) + content.
        let overhead = col_count + 1 + col_count * 2;
        let content_width: usize = col_widths.iter().sum();
        if overhead + content_width > config.max_width && content_width > 0 {
            let available = config.max_width.saturating_sub(overhead);
            if available > 0 {
                let scale = available as f64 / content_width as f64;
                for w in &mut col_widths {
                    *w = ((*w as f64 * scale).floor() as usize).max(1);
                }
            }
        }

        let alignments = infer_column_alignments(data_rows, col_count);
        let chars = BoxChars::for_style(&self.style);
        let mut lines = Vec::new();

        lines.push(self.horizontal_border(
            &col_widths,
            chars.top_left,
            chars.top_tee,
            chars.top_right,
            chars.horizontal,
            config,
        ));
        lines.extend(self.row_lines(&headers, &col_widths, &alignments, &chars, config, true));
        lines.push(self.horizontal_border(
            &col_widths,
            chars.left_tee,
            chars.cross,
            chars.right_tee,
            chars.horizontal,
            config,
        ));
        for row in data_rows {
            lines.extend(self.row_lines(row, &col_widths, &alignments, &chars, config, false));
        }
        lines.push(self.horizontal_border(
            &col_widths,
            chars.bottom_left,
            chars.bottom_tee,
            chars.bottom_right,
            chars.horizontal,
            config,
        ));

        lines
    }

    /// Render a horizontal border line (top, separator, or bottom).
    fn horizontal_border(
        &self,
        col_widths: &[usize],
        left: char,
        mid: char,
        right: char,
        fill: char,
        config: &RendererConfig,
    ) -> StyledLine {
        let mut text = String::new();
        text.push(left);
        for (i, &w) in col_widths.iter().enumerate() {
            // +2 for padding on each side.
            for _ in 0..w + 2 {
                text.push(fill);
            }
            if i < col_widths.len() - 1 {
                text.push(mid);
            }
        }
        text.push(right);

        StyledLine::new(vec![StyledSegment {
            text,
            fg: Some(config.theme.dim_color()),
            ..Default::default()
        }])
    }

    /// Render one grid row as one or more visual lines.
    ///
    /// The row contributes exactly `cells.len()` cell elements; a ragged row
    /// ends early rather than being padded to the full column count. In wrap
    /// mode an overlong body cell spills onto continuation lines; otherwise
    /// it is truncated at the column width.
    fn row_lines(
        &self,
        cells: &[String],
        col_widths: &[usize],
        alignments: &[ColumnAlignment],
        chars: &BoxChars,
        config: &RendererConfig,
        is_header: bool,
    ) -> Vec<StyledLine> {
        let border = StyledSegment {
            text: chars.vertical.to_string(),
            fg: Some(config.theme.dim_color()),
            ..Default::default()
        };

        // Raw chunks per cell; padding, alignment, and truncation happen once
        // at assembly below.
        let chunked: Vec<Vec<String>> = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let width = col_widths.get(i).copied().unwrap_or(1);
                if !is_header && config.wrap_cells {
                    wrap_chunks(cell, width)
                } else {
                    vec![cell.clone()]
                }
            })
            .collect();
        let visual_lines = chunked.iter().map(|c| c.len()).max().unwrap_or(1);

        let mut lines = Vec::with_capacity(visual_lines);
        for visual in 0..visual_lines {
            let mut segments = vec![border.clone()];
            for (i, chunks) in chunked.iter().enumerate() {
                let width = col_widths.get(i).copied().unwrap_or(1);
                let alignment = alignments.get(i).unwrap_or(&ColumnAlignment::Left);
                let chunk = chunks.get(visual).map(|s| s.as_str()).unwrap_or("");
                let padded = align_text(chunk, width, alignment);

                // The copy action carries the cell's literal text, not the
                // padded/truncated display form, and rides the first visual
                // line only.
                let action = (!is_header && visual == 0)
                    .then(|| SegmentAction::Copy(cells[i].clone()));

                segments.push(StyledSegment {
                    text: format!(" {padded} "),
                    fg: is_header.then(|| config.theme.fg),
                    bold: is_header,
                    action,
                    ..Default::default()
                });
                segments.push(border.clone());
            }
            lines.push(StyledLine::new(segments));
        }

        lines
    }
}

// ---------------------------------------------------------------------------
// CsvRenderer
// ---------------------------------------------------------------------------

/// One-shot CSV pipeline: tokenize the payload and render the full grid.
pub struct CsvRenderer {
    style: TableStyle,
}

impl CsvRenderer {
    pub fn new(style: TableStyle) -> Self {
        Self { style }
    }
}

impl Default for CsvRenderer {
    fn default() -> Self {
        Self::new(TableStyle::default())
    }
}

impl ContentRenderer for CsvRenderer {
    fn kind(&self) -> ContentKind {
        ContentKind::Csv
    }

    fn display_name(&self) -> &str {
        "CSV"
    }

    fn format_badge(&self) -> &str {
        "CSV"
    }

    fn render(
        &self,
        payload: &Payload,
        config: &RendererConfig,
    ) -> Result<RenderedView, RenderError> {
        let grid = tokenize(payload.text());
        if grid.is_empty() {
            return Err(RenderError::EmptyResult);
        }

        let lines = TableRenderer::new(self.style.clone()).render_grid(&grid, config);
        Ok(RenderedView {
            lines,
            format_badge: self.format_badge().to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
