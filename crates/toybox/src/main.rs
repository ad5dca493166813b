//! Toybox - command-line harness.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use std::io::Read;
use toybox::{ClipboardMode, OutputFormat, ToyboxConfig};
use toybox_calculator::{ClipboardSink, MemoryClipboard};
use tracing::{info, instrument, warn};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let output = cli.output_override();

    match cli.command {
        Command::Calc { tokens, clipboard } => {
            let config = load_config(cli.config.as_deref(), output, clipboard)?;
            run_calc(&config, tokens)
        }
        Command::Tictactoe { moves } => {
            let config = load_config(cli.config.as_deref(), output, None)?;
            run_tictactoe(&config, moves)
        }
    }
}

fn load_config(
    path: Option<&std::path::Path>,
    output: Option<OutputFormat>,
    clipboard: Option<ClipboardMode>,
) -> Result<ToyboxConfig> {
    let config = ToyboxConfig::load(path)?.with_overrides(output, clipboard);
    toybox::init_tracing(config.log_filter());
    info!(?config, "Configuration ready");
    Ok(config)
}

/// Run the calculator harness
#[instrument(skip_all)]
fn run_calc(config: &ToyboxConfig, tokens: Vec<String>) -> Result<()> {
    let tokens = toybox::parse_calc_input(&input_words(tokens)?)?;
    let mut clipboard = open_clipboard(*config.clipboard());
    let report = toybox::run_calculator(&tokens, clipboard.as_mut());
    emit(config, &report)
}

/// Run the tic-tac-toe harness
#[instrument(skip_all)]
fn run_tictactoe(config: &ToyboxConfig, moves: Vec<String>) -> Result<()> {
    let commands = toybox::parse_game_input(&input_words(moves)?)?;
    let report = toybox::run_tictactoe(&commands);
    emit(config, &report)
}

/// Command-line words, or whitespace-separated words from stdin when none
/// were given.
fn input_words(args: Vec<String>) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(input.split_whitespace().map(String::from).collect())
}

#[instrument]
fn open_clipboard(mode: ClipboardMode) -> Box<dyn ClipboardSink> {
    match mode {
        ClipboardMode::Memory => Box::new(MemoryClipboard::new()),
        ClipboardMode::System => system_clipboard(),
    }
}

#[cfg(feature = "clipboard")]
fn system_clipboard() -> Box<dyn ClipboardSink> {
    match toybox_calculator::SystemClipboard::new() {
        Ok(clipboard) => Box::new(clipboard),
        Err(e) => {
            warn!(error = %e, "Falling back to in-memory clipboard");
            Box::new(MemoryClipboard::new())
        }
    }
}

#[cfg(not(feature = "clipboard"))]
fn system_clipboard() -> Box<dyn ClipboardSink> {
    warn!("Built without system clipboard support, using in-memory clipboard");
    Box::new(MemoryClipboard::new())
}

/// Print the report in the configured format
fn emit<R>(config: &ToyboxConfig, report: &R) -> Result<()>
where
    R: Serialize + std::fmt::Display,
{
    match config.output() {
        OutputFormat::Text => print!("{}", report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}
