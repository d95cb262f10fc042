#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that drives the rover simulation.
//!
//! Input values may arrive as flags or interactively over stdin; either way
//! they pass through the resolver before the navigation system sees them. A
//! resolution failure aborts the run with a non-zero exit status, while
//! boundary hits and unknown characters during execution never do.

mod render;
mod resolver;

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use mars_rover_system_navigation::Rover;

use crate::render::UnrecognizedPolicy;

/// Simulates a rover crossing a bounded grid one command at a time.
#[derive(Debug, Parser)]
#[command(name = "mars-rover")]
struct Cli {
    /// Grid size, e.g. "10 8" or "10x8". Prompted for when omitted.
    #[arg(long)]
    grid: Option<String>,

    /// Start position, e.g. "0 0" or "(3, 4)". Prompted for when omitted.
    #[arg(long)]
    start: Option<String>,

    /// Command string of U/D/L/R characters. Prompted for when omitted.
    #[arg(long)]
    commands: Option<String>,

    /// Suppress advisory lines for unrecognized command characters.
    #[arg(long)]
    quiet: bool,
}

/// Entry point for the rover command-line interface.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let grid_line = line_or_prompt(cli.grid, "Enter grid size (n m): ")?;
    let start_line = line_or_prompt(cli.start, "Enter starting position (x y): ")?;
    let command_line = line_or_prompt(cli.commands, "Enter commands: ")?;

    let input = resolver::resolve(&grid_line, &start_line, &command_line)?;

    let mut rover = Rover::new(input.bounds, input.start);
    let mut trace = Vec::new();
    rover.execute(&input.commands, &mut trace);

    let policy = if cli.quiet {
        UnrecognizedPolicy::Silent
    } else {
        UnrecognizedPolicy::Advise
    };
    let stdout = io::stdout();
    render::write_trace(&mut stdout.lock(), &trace, rover.position(), policy)
        .context("failed to write trace")?;

    Ok(())
}

/// Returns the flag value when present, otherwise prompts on stdin.
fn line_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }

    {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{prompt}").context("failed to write prompt")?;
        stdout.flush().context("failed to flush prompt")?;
    }

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if read == 0 {
        bail!("input ended before '{}' was answered", prompt.trim());
    }
    Ok(line)
}
