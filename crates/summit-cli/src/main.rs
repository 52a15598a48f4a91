//! `summit` CLI — plan a two-day partner event for every country.
//!
//! ## Usage
//!
//! ```sh
//! # Plan from a partners document on stdin
//! cat partners.json | summit plan
//!
//! # Plan from file to file
//! summit plan -i partners.json -o countries.json
//!
//! # Plan against the embedded sample dataset
//! summit plan --sample
//!
//! # Sort each partner's dates before looking for consecutive days
//! summit plan -i partners.json --sorted-dates
//!
//! # Print the embedded sample dataset
//! summit sample
//! ```

mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use summit_core::{AdjacencyPolicy, PlannerOptions};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "summit",
    version,
    about = "Pick the best two-day event window per country",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log planning details to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the best start date, attendee count and attendees per country
    Plan {
        /// Partners JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Use the embedded sample dataset as input
        #[arg(long, conflicts_with = "input")]
        sample: bool,
        /// Sort each partner's dates before scanning for consecutive days
        #[arg(long)]
        sorted_dates: bool,
        /// Emit single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Print the embedded sample partners dataset
    Sample {
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Plan {
            input,
            output,
            sample,
            sorted_dates,
            compact,
        } => {
            let json = if sample {
                summit_core::SAMPLE_JSON.to_string()
            } else {
                read_input(input.as_deref())?
            };

            let partners =
                summit_core::parse_partners(&json).context("Failed to read partner records")?;
            debug!(partners = partners.len(), "decoded input");

            let options = PlannerOptions {
                adjacency: if sorted_dates {
                    AdjacencyPolicy::Sorted
                } else {
                    AdjacencyPolicy::ListOrder
                },
            };
            let report = summit_core::plan_report(&partners, &options)
                .context("Failed to plan events")?;

            let rendered = if compact {
                report.to_json()?
            } else {
                report.to_json_pretty()?
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Sample { output } => {
            write_output(output.as_deref(), summit_core::SAMPLE_JSON.trim_end())?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, format!("{content}\n"))
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
