use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::LevelFilter;
use sift_demo::{render, run, OutputDestination, OutputMode, Section};

/// Runs the sift demonstrations and prints their results.
#[derive(Parser, Debug)]
#[command(name = "sift-demo", version, about, long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputMode::Auto)]
    output: OutputMode,

    /// Only run this section (repeatable); runs every section when omitted
    #[arg(long, value_enum)]
    section: Vec<Section>,

    /// Write the output to a file instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG applies otherwise
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let destination = match cli.out {
        Some(path) => OutputDestination::File(path),
        None => OutputDestination::Stdout,
    };
    // A file never gets terminal styling unless asked for.
    let mode = match (&destination, cli.output) {
        (OutputDestination::File(_), OutputMode::Auto) => OutputMode::Text,
        (_, mode) => mode,
    };

    let report = run(&cli.section);
    let mut rendered = render(&report, mode).context("failed to render report")?;
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    destination
        .write_text(&rendered)
        .with_context(|| format!("failed to write output to {:?}", destination))?;
    Ok(())
}
