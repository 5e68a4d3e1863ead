//! Grid model and search filtering for tabular content.
//!
//! A `Grid` is an ordered sequence of rows of string cells. Row 0 is always
//! treated as the header; rows need not share a cell count (ragged rows are
//! legal and render with missing cells absent). The tokenizer never stores
//! empty rows, so a non-empty grid always has a meaningful header.

/// An ordered grid of string cells. Row 0 is the header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The header row, if the grid has any rows at all.
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(|r| r.as_slice())
    }

    /// All rows after the header.
    pub fn data_rows(&self) -> &[Vec<String>] {
        if self.rows.is_empty() { &[] } else { &self.rows[1..] }
    }
}

/// Filter a grid's data rows by a case-insensitive substring query.
///
/// The header row is always kept unchanged; a data row is kept when at least
/// one cell's lower-cased text contains the lower-cased query. An empty query
/// returns a grid content-identical to the input. Callers must always filter
/// the *original* grid: queries do not compose, so each keystroke recomputes
/// the view from the unfiltered base.
pub fn filter_grid(grid: &Grid, query: &str) -> Grid {
    if query.is_empty() {
        return grid.clone();
    }
    let needle = query.to_lowercase();

    let mut rows = Vec::with_capacity(grid.row_count());
    if let Some(header) = grid.header() {
        rows.push(header.to_vec());
    }
    for row in grid.data_rows() {
        if row.iter().any(|cell| cell.to_lowercase().contains(&needle)) {
            rows.push(row.clone());
        }
    }
    Grid::new(rows)
}
