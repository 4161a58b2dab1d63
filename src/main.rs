use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;

mod apply;
mod config;
mod splice;
#[cfg(test)]
mod tests;
mod utils;

use config::MarkerConfig;
use splice::Anchor;

/// Inserts a block of content into a file immediately before a marker line.
#[derive(Parser, Debug)]
#[command(name = "splicer", version)]
struct Cli {
    /// File to splice into
    target: PathBuf,

    /// File holding the content to insert
    content_file: PathBuf,

    /// Multi-line primary marker; literal \n escapes are expanded
    #[arg(long)]
    primary: Option<String>,

    /// Single-line fallback marker, used when the primary is absent
    #[arg(long)]
    fallback: Option<String>,

    /// JSON file with "primary_marker" and "fallback_marker"
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the result here instead of back to the target
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the spliced document to stdout without writing any file
    #[arg(long)]
    dry_run: bool,
}

// Flags win over the config file.
fn resolve_markers(cli: &Cli) -> anyhow::Result<Anchor> {
    let cfg = match &cli.config {
        Some(path) => Some(MarkerConfig::load_from_path(path)?),
        None => None,
    };
    let primary = cli
        .primary
        .as_deref()
        .map(config::unescape_marker)
        .or_else(|| cfg.as_ref().map(|c| c.primary_marker.clone()))
        .context("no primary marker given; pass --primary or --config")?;
    let fallback = cli
        .fallback
        .as_deref()
        .map(config::unescape_marker)
        .or_else(|| cfg.as_ref().map(|c| c.fallback_marker.clone()))
        .context("no fallback marker given; pass --fallback or --config")?;

    let anchor = MarkerConfig {
        primary_marker: primary,
        fallback_marker: fallback,
    }
    .into_anchor()?;
    Ok(anchor)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let anchor = resolve_markers(cli)?;
    let outcome = apply::splice_files(&cli.target, &cli.content_file, &anchor)?;

    if outcome.used_fallback {
        eprintln!(
            "\u{001b}[93m⚠ primary marker not found, fell back to '{}'\u{001b}[0m",
            utils::clip(&anchor.fallback, 40)
        );
    }

    if cli.dry_run {
        eprintln!(
            "\u{001b}[92m✓ Anchor resolved at offset {} (dry run, nothing written)\u{001b}[0m",
            outcome.offset
        );
        print!("{}", outcome.document);
        return Ok(());
    }

    let destination = cli.output.as_deref().unwrap_or(&cli.target);
    apply::write_result(destination, &outcome.document)?;

    let inserted = &outcome.document[outcome.offset..outcome.offset + outcome.inserted];
    println!(
        "\u{001b}[92m✓ Inserted {} bytes at offset {} into {}\u{001b}[0m",
        outcome.inserted,
        outcome.offset,
        destination.display()
    );
    println!("\u{001b}[90m  {}\u{001b}[0m", utils::preview_line(inserted, 60));
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("\u{001b}[91mError:\u{001b}[0m {:#}", e);
        process::exit(1);
    }
}
