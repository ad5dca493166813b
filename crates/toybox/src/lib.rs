//! Toybox - scripted harness for the calculator and tic-tac-toe engines.
//!
//! The engines live in `toybox_calculator` and `toybox_tictactoe`; this
//! crate parses scripted input, runs it, and renders the result.
//!
//! # Example
//!
//! ```
//! use toybox::{parse_game_input, run_tictactoe};
//!
//! let words: Vec<String> = ["0,0", "1,1", "0,1", "2,2", "0,2"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let report = run_tictactoe(&parse_game_input(&words).unwrap());
//! assert_eq!(report.game.status_line(), "Player X wins!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod harness;
mod logging;

pub use config::{ClipboardMode, ConfigError, OutputFormat, ToyboxConfig};
pub use harness::{
    CalcReport, CommandError, GameCommand, GameReport, parse_calc_input, parse_game_input,
    run_calculator, run_tictactoe,
};
pub use logging::init_tracing;
