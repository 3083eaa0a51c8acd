//! CLI tool for analyzing markdown content into a slide plan.

use anyhow::{Context, Result};
use clap::Parser;
use slideplan_core::{AnalysisResult, ContentAnalyzer};
use std::io::Write;
use std::path::PathBuf;

/// Analyze a markdown document and print a slide plan as JSON.
#[derive(Parser, Debug)]
#[command(name = "analyze-content")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input markdown file
    input: PathBuf,

    /// Print single-line JSON instead of pretty-printed output
    #[arg(short, long)]
    compact: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    log::debug!("Processing: {}", args.input.display());

    let analyzer = ContentAnalyzer::new();
    let result = analyzer
        .analyze_file(&args.input)
        .with_context(|| format!("Failed to analyze {}", args.input.display()))?;

    if args.verbose {
        eprintln!(
            "  Found {} slides, {} metrics",
            result.total_slides,
            result.key_metrics.len()
        );
    }

    let output = render(&result, args.compact)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output).context("Failed to write to stdout")?;

    Ok(())
}

/// Serialize the analysis for stdout.
fn render(result: &AnalysisResult, compact: bool) -> Result<String> {
    let json = if compact {
        result.to_json()?
    } else {
        result.to_json_pretty()?
    };
    Ok(json)
}
