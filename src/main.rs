use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

use prettyview::cli::Cli;
use prettyview::config::ViewerConfig;
use prettyview::types::{Payload, StyledLine};
use prettyview::viewer::Viewer;
use prettyview::{actions, ContentKind};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = ViewerConfig::load();

    if cli.toggle_theme {
        config.theme = config.theme.toggled();
        if let Err(e) = config.save() {
            log::warn!("failed to persist theme preference: {e}");
        }
    }
    if let Some(width) = cli.width {
        config.max_width = width;
    }
    if cli.wrap {
        config.wrap_cells = true;
    }

    // The one-shot load gating everything else; failure here is terminal.
    let kind_override: Option<ContentKind> = cli.kind.map(Into::into);
    let payload = Payload::from_path(&cli.file, kind_override)
        .with_context(|| format!("failed to load {}", cli.file.display()))?;
    log::info!(
        "loaded {} payload from {} ({} bytes)",
        payload.kind(),
        payload.locator(),
        payload.text().len()
    );

    if let Some(dir) = &cli.download {
        let request = actions::download_request(&payload);
        let path = actions::write_download(&request, dir)?;
        println!("saved {}", path.display());
        return Ok(());
    }

    let mut viewer = Viewer::new(payload, &config);
    if let Some(query) = &cli.search {
        viewer.set_search_query(query);
    }
    if cli.collapsed {
        viewer.collapse_all();
    }
    if cli.raw {
        viewer.toggle_raw_view();
    }

    let mut stdout = std::io::stdout().lock();
    for line in viewer.render() {
        writeln!(stdout, "{}", ansi_line(&line))?;
    }
    Ok(())
}

/// Emit one styled line as ANSI SGR escape sequences.
fn ansi_line(line: &StyledLine) -> String {
    let mut out = String::new();
    for seg in &line.segments {
        let mut codes: Vec<String> = Vec::new();
        if seg.bold {
            codes.push("1".to_string());
        }
        if seg.italic {
            codes.push("3".to_string());
        }
        if seg.underline {
            codes.push("4".to_string());
        }
        if let Some([r, g, b]) = seg.fg {
            codes.push(format!("38;2;{r};{g};{b}"));
        }
        if let Some([r, g, b]) = seg.bg {
            codes.push(format!("48;2;{r};{g};{b}"));
        }
        if codes.is_empty() {
            out.push_str(&seg.text);
        } else {
            out.push_str(&format!("\x1b[{}m{}\x1b[0m", codes.join(";"), seg.text));
        }
    }
    out
}
