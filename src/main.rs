//! `pom-license-report` — resolve license metadata from Maven POMs and emit
//! attribution reports.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`config::load_config`]).
//! 3. Load the input manifest: root coordinates + coordinate→POM map
//!    ([`manifest`]).
//! 4. Optionally download missing parent POMs (`--fetch-parents`, [`fetch`]).
//! 5. Normalize every root into a `ResolvedProject` ([`normalizer`], using
//!    [`resolver`], [`interpolate`], [`license`]).
//! 6. Render the selected report formats ([`report`]) and write them to the
//!    output directory.
//! 7. Print a terminal summary.

mod cli;
mod config;
mod fetch;
mod interpolate;
mod license;
mod manifest;
mod models;
mod normalizer;
mod pom;
mod report;
mod resolver;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::load_config;
use manifest::Manifest;
use report::{RenderOptions, ReportKind};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    let mut manifest = Manifest::load(&cli.manifest)?;

    if cli.fetch_parents {
        let cache_dir = cli
            .cache_dir
            .clone()
            .unwrap_or_else(|| cli.output_dir.join("poms"));
        let fetched =
            fetch::fetch_missing_parents(&mut manifest, &cli.repository, &cache_dir, cli.quiet)
                .await?;
        if !cli.quiet && fetched > 0 {
            eprintln!("  {} fetched {} parent POM(s)", "→".cyan(), fetched);
        }
    }

    // CLI patterns extend, not replace, the config's.
    let mut ignored = config.filter.ignored_patterns.clone();
    ignored.extend(cli.ignore.iter().cloned());

    let projects = normalizer::normalize(&manifest.roots, &manifest.poms, &ignored);

    let options = RenderOptions {
        show_versions: cli.show_versions || config.report.show_versions,
        copyright_year_fallback: config.report.copyright_year_fallback.clone(),
    };

    let mut kinds: Vec<ReportKind> = if cli.report.is_empty() {
        config.report.formats.iter().map(Into::into).collect()
    } else {
        cli.report.iter().map(Into::into).collect()
    };
    let mut seen = Vec::new();
    kinds.retain(|kind| {
        if seen.contains(kind) {
            false
        } else {
            seen.push(*kind);
            true
        }
    });

    std::fs::create_dir_all(&cli.output_dir).with_context(|| {
        format!("creating output directory {}", cli.output_dir.display())
    })?;

    for kind in kinds {
        let rendered = kind.render(&projects, &options)?;
        let file = cli
            .output_dir
            .join(format!("{}.{}", cli.name, kind.extension()));
        std::fs::write(&file, rendered)
            .with_context(|| format!("writing {} report to {}", kind.name(), file.display()))?;
        if !cli.quiet {
            eprintln!(
                "  {} wrote {} report to {}",
                "→".cyan(),
                kind.name(),
                file.display()
            );
        }
    }

    report::terminal::render(&projects, cli.verbose, cli.quiet);

    Ok(())
}
