//! Command-line interface for prettyview.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::types::ContentKind;

/// prettyview - renders CSV, JSON, and Markdown files as structured views
#[derive(Parser)]
#[command(name = "prettyview")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File to view
    pub file: PathBuf,

    /// Override the content kind inferred from the file extension
    #[arg(long, value_enum, value_name = "KIND")]
    pub kind: Option<KindArg>,

    /// Show the untouched source text instead of the rendered view
    #[arg(long)]
    pub raw: bool,

    /// Write the original payload into DIR and exit
    #[arg(long, value_name = "DIR")]
    pub download: Option<PathBuf>,

    /// Maximum render width in columns
    #[arg(long, value_name = "COLS")]
    pub width: Option<usize>,

    /// Keep only data rows containing this substring (CSV)
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Start with every tree node collapsed (JSON)
    #[arg(long)]
    pub collapsed: bool,

    /// Wrap long cell text instead of truncating (CSV)
    #[arg(long)]
    pub wrap: bool,

    /// Flip the persisted light/dark theme before rendering
    #[arg(long)]
    pub toggle_theme: bool,
}

/// Content kind as a CLI value.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum KindArg {
    Csv,
    Json,
    Markdown,
}

impl From<KindArg> for ContentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Csv => ContentKind::Csv,
            KindArg::Json => ContentKind::Json,
            KindArg::Markdown => ContentKind::Markdown,
        }
    }
}
