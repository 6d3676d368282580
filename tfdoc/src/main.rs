//! tfdoc — generate provider reference documentation from a schema manifest.
//!
//! Renders one page per resource and data source, a navigation index and a
//! landing page:
//!
//! - **write mode** (default): `tfdoc -o website/docs provider.json`
//! - **check mode**: `tfdoc --check -o website/docs provider.json` fails when
//!   the tree on disk differs from what would be generated.

mod diagnostics;
mod error;
mod generate;
mod hclfmt;
mod manifest;
mod model;
mod parser;
mod render;
mod slug;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tfdoc",
    about = "Generate provider reference documentation from a schema manifest"
)]
struct Cli {
    /// Provider manifest (JSON)
    manifest: PathBuf,

    /// Documentation root
    #[arg(short = 'o', long, default_value = "docs")]
    output: PathBuf,

    /// Compare against the existing tree instead of writing
    #[arg(long)]
    check: bool,

    /// Fail if any warning was emitted
    #[arg(long)]
    deny_warnings: bool,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let provider = manifest::load(&cli.manifest)?;
    let generation = generate::generate(&provider).with_context(|| {
        format!(
            "failed to generate documentation from {}",
            cli.manifest.display()
        )
    })?;

    for warning in generation.diagnostics.warnings() {
        warn!("{}", warning);
    }
    if cli.deny_warnings && !generation.diagnostics.is_empty() {
        bail!(
            "{} warning(s) emitted with --deny-warnings",
            generation.diagnostics.warnings().len()
        );
    }

    if cli.check {
        return check_mode(&cli, &generation.docs);
    }

    generate::write_docs(&cli.output, &generation.docs)?;
    info!(
        documents = generation.docs.len(),
        output = %cli.output.display(),
        "documentation written"
    );
    Ok(())
}

/// check mode: report every missing or outdated document.
fn check_mode(cli: &Cli, docs: &[model::RenderedDoc]) -> Result<()> {
    let stale = generate::stale_docs(&cli.output, docs)?;
    if stale.is_empty() {
        info!(documents = docs.len(), "documentation is up to date");
        return Ok(());
    }
    for path in &stale {
        eprintln!("stale: {}", path.display());
    }
    bail!(
        "{} document(s) out of date; rerun without --check",
        stale.len()
    );
}

/// Log to stderr; verbosity from `RUST_LOG`, `info` by default.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
