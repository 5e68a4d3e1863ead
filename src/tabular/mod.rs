//! Tabular pipeline: CSV text → grid of cells → rendered table.
//!
//! - [`tokenizer`] — quote-aware comma tokenizer producing a [`grid::Grid`].
//! - [`grid`] — the grid model and search filtering over its data rows.
//! - [`table`] — table rendering and the one-shot [`table::CsvRenderer`].

pub mod grid;
pub mod table;
pub mod tokenizer;

pub use grid::{Grid, filter_grid};
pub use table::{CsvRenderer, TableRenderer, TableStyle};
pub use tokenizer::tokenize;
