//! Command-line interface for toybox.

use clap::{Parser, Subcommand};
use toybox::{ClipboardMode, OutputFormat};

/// Toybox - scripted harness for the calculator and tic-tac-toe engines
#[derive(Parser, Debug)]
#[command(name = "toybox")]
#[command(about = "Drive the calculator or tic-tac-toe engine from the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Print a JSON snapshot instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Output format (overrides the config file)
    #[arg(long, value_enum, global = true, conflicts_with = "json")]
    pub output: Option<OutputFormat>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Press calculator keys in order, e.g. `6 + 4 =`
    Calc {
        /// Keypad labels: 0-9 . + - * / = C CH Back Copy (read from stdin if omitted)
        tokens: Vec<String>,

        /// Clipboard used by the Copy key (overrides the config file)
        #[arg(long, value_enum)]
        clipboard: Option<ClipboardMode>,
    },

    /// Play tic-tac-toe moves in order, X first
    Tictactoe {
        /// Zero-based `row,col` moves or `reset` (read from stdin if omitted)
        moves: Vec<String>,
    },
}

impl Cli {
    /// Output format requested on the command line, if any.
    pub fn output_override(&self) -> Option<OutputFormat> {
        if self.json {
            Some(OutputFormat::Json)
        } else {
            self.output
        }
    }
}
