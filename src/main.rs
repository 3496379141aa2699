// SPDX-License-Identifier: MIT
//
// edit-themegen: regenerates the bundled color themes of the edit editor.
//
// Running with no arguments reproduces the shipped theme directory:
//
//   themes/*.ini removed  →  for each theme in table order:
//                               dark generator  → themes/{name}-dark.ini
//                               light generator → themes/{name}-light.ini
//
// All color work lives in edit-theme. This binary only wires up logging,
// command-line options and the final summary.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use edit_theme::contrast::{self, MIN_CONTRAST};
use edit_theme::output::GenerationReport;
use edit_theme::{BUILTIN_THEMES, OutputConfig, builtin_names, regenerate_all};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "edit-themegen", version, about = "Regenerate the edit editor's dark/light theme files")]
struct Cli {
    /// Directory the theme files are written to.
    #[arg(long, value_name = "DIR", default_value = "themes")]
    out_dir: PathBuf,

    /// Extension of theme files. Existing files with it are deleted first.
    #[arg(long, value_name = "EXT", default_value = "ini")]
    extension: String,

    /// Print text/background pairs below the WCAG AA contrast ratio.
    #[arg(long)]
    contrast_report: bool,

    /// List the builtin theme names and exit.
    #[arg(long)]
    list: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn output_config(&self) -> Result<OutputConfig> {
        let extension = self.extension.trim_start_matches('.');
        if extension.is_empty() || extension.contains(['/', '\\']) {
            bail!("invalid theme file extension {:?}", self.extension);
        }
        Ok(OutputConfig {
            out_dir: self.out_dir.clone(),
            extension: extension.to_owned(),
        })
    }
}

const fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Log to stderr; `RUST_LOG` overrides the `-v` level.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    if cli.list {
        for name in builtin_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let config = cli.output_config()?;
    info!(themes = BUILTIN_THEMES.len(), dir = %config.out_dir.display(), "generating themes");
    let report = regenerate_all(&BUILTIN_THEMES, &config)
        .with_context(|| format!("failed to regenerate themes in {}", config.out_dir.display()))?;

    println!(
        "Generated {} theme files in {}",
        report.files_written(),
        config.out_dir.display()
    );
    if report.exhausted() > 0 {
        println!("  {} colors kept a duplicate after exhausting retries", report.exhausted());
    }
    if cli.contrast_report {
        print_contrast_report(&report);
    }
    Ok(())
}

fn print_contrast_report(report: &GenerationReport) {
    println!("\nContrast below {MIN_CONTRAST}:1");
    let mut clean = 0;
    for theme in &report.themes {
        let issues = contrast::audit(&theme.generated.colors);
        if issues.is_empty() {
            clean += 1;
            continue;
        }
        println!("  {} ({} pairs)", theme.display_name, issues.len());
        for issue in issues {
            println!("    {:<24} on {:<24} {:.2}", issue.pair.fg, issue.pair.bg, issue.ratio);
        }
    }
    println!("  {clean} of {} variants pass every pair", report.themes.len());
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(&cli)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
