//! Tree command implementation

use std::io::{self, BufWriter};

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::tree::{render, RenderOptions};

/// Merge command-line flags over the loaded configuration
pub fn render_options(cli: &Cli, config: &Config) -> RenderOptions {
    let header = cli
        .header
        .clone()
        .unwrap_or_else(|| config.render.header.clone());

    RenderOptions::new()
        .with_show_root(cli.show_root || config.render.show_root)
        .with_header(header)
        .with_error_policy(cli.on_error.unwrap_or(config.render.on_error))
}

/// Run the tree command, writing to stdout
pub fn run(cli: &Cli, config: &Config) -> Result<()> {
    let options = render_options(cli, config);

    tracing::info!(path = %cli.path.display(), ?options, "Rendering tree");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stats = render(&cli.path, &options, &mut out)?;

    tracing::info!(
        directories = stats.directories,
        files = stats.files,
        unreadable = stats.unreadable,
        "Done"
    );

    Ok(())
}
