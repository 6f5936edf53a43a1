//! Goban-Rules: a Go rules engine.
//!
//! ## Usage
//!
//! - `goban-rules` - Replay the sample capture and show the board
//! - `goban-rules gtp` - Start a GTP server for GUI integration
//! - `goban-rules demo --json` - Print the sample game's state as JSON

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use goban_rules::board::Board;
use goban_rules::constants::DEFAULT_SIZE;
use goban_rules::coord::vertex_string;
use goban_rules::gtp::GtpEngine;

/// Goban-Rules: a Go rules engine
#[derive(Parser)]
#[command(name = "goban-rules")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) server for use with GUI applications
    Gtp {
        /// Board size
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: usize,
    },
    /// Replay a short capture sequence
    Demo {
        /// Board size
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: usize,
        /// Print the final state as JSON instead of a diagram
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Gtp { size }) => {
            info!("starting GTP server on a {size}x{size} board");
            let mut engine = GtpEngine::new(size)?;
            engine.run(io::stdin().lock(), io::stdout().lock())
        }
        Some(Commands::Demo { size, json }) => run_demo(size, json),
        None => run_demo(DEFAULT_SIZE, false),
    }
}

fn run_demo(size: usize, json: bool) -> Result<()> {
    let mut board = Board::new(size)?;

    // Black takes the corner, White surrounds it from both sides.
    board.play(0).context("black corner")?;
    board.play(1).context("white right of corner")?;
    board.pass();
    let capture = board.play(size).context("white below corner")?.clone();

    if json {
        println!("{}", board.to_json()?);
        return Ok(());
    }

    println!("Goban-Rules demo on a {size}x{size} board\n");
    for mv in board.history() {
        println!("{} {}", mv.color, vertex_string(mv.point, size));
    }
    let taken: Vec<String> = capture
        .captured
        .iter()
        .map(|&pt| vertex_string(Some(pt), size))
        .collect();
    println!("captured: {}\n", taken.join(" "));
    print!("{board}");
    Ok(())
}
