//! Feeds scripted input to the engines and collects the outcome.

use derive_more::{Display, Error, From};
use derive_new::new;
use serde::Serialize;
use std::str::FromStr;
use toybox_calculator::{CalcError, Calculator, ClipboardSink, Render, Token, format_number};
use toybox_tictactoe::{MoveEvent, Position, PositionError, TicTacToe};
use tracing::{debug, info, instrument, warn};

/// Final calculator state plus anything that went wrong along the way.
#[derive(Debug, Clone, Serialize, new)]
pub struct CalcReport {
    /// Engine after the last key press.
    pub calculator: Calculator,
    /// Rejected key presses, in order. The run continues past them.
    pub errors: Vec<String>,
    /// Last text sent to the clipboard.
    pub copied: Option<String>,
}

impl std::fmt::Display for CalcReport {
    /// Display, pending operator, copied text, history, then errors.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let calc = &self.calculator;
        writeln!(f, "Display: {}", calc.display())?;
        if let Some(pending) = calc.pending() {
            writeln!(f, "Pending: {} {}", format_number(pending.operand), pending.operator)?;
        }
        if let Some(copied) = &self.copied {
            writeln!(f, "Copied: {}", copied)?;
        }
        writeln!(f, "History:")?;
        for entry in calc.history() {
            writeln!(f, "  {}", entry)?;
        }
        for error in &self.errors {
            writeln!(f, "Error: {}", error)?;
        }
        Ok(())
    }
}

/// Presses every token in order.
///
/// Rejected presses and clipboard failures are logged and recorded; neither
/// stops the run.
#[instrument(skip_all, fields(tokens = tokens.len()))]
pub fn run_calculator(tokens: &[Token], clipboard: &mut dyn ClipboardSink) -> CalcReport {
    let mut calculator = Calculator::new();
    let mut errors = Vec::new();
    let mut copied = None;

    for token in tokens {
        match calculator.press(*token) {
            Ok(Render::Copy(text)) => match clipboard.set_text(&text) {
                Ok(()) => copied = Some(text),
                Err(e) => {
                    warn!(error = %e, "Copy failed");
                    errors.push(e.message.clone());
                }
            },
            Ok(render) => debug!(%token, ?render, "Pressed"),
            Err(e) => {
                warn!(%token, error = %e, "Key press rejected");
                errors.push(e.kind.to_string());
            }
        }
    }

    info!(history = calculator.history().len(), "Calculator run complete");
    CalcReport::new(calculator, errors, copied)
}

/// One scripted step at the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Play the current player's mark.
    Move(Position),
    /// Clear the board for a new game.
    Reset,
}

/// Harness input that is neither a move nor `reset`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
#[display("{}", _0)]
pub struct CommandError(PositionError);

impl FromStr for GameCommand {
    type Err = CommandError;

    /// Parses `row,col` or `reset`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("reset") {
            Ok(GameCommand::Reset)
        } else {
            Ok(GameCommand::Move(s.parse()?))
        }
    }
}

/// Final board and score plus what each move did.
#[derive(Debug, Clone, Serialize, new)]
pub struct GameReport {
    /// Engine after the last command.
    pub game: TicTacToe,
    /// Event for every move command, in order.
    pub events: Vec<MoveEvent>,
}

impl std::fmt::Display for GameReport {
    /// Board, status line, score line, then any ignored moves.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.game.state().board().display())?;
        writeln!(f)?;
        writeln!(f, "{}", self.game.status_line())?;
        writeln!(f, "{}", self.game.score_line())?;
        for event in &self.events {
            if let MoveEvent::Ignored(reason) = event {
                writeln!(f, "Ignored: {}", reason)?;
            }
        }
        Ok(())
    }
}

/// Runs every command in order against a fresh engine.
#[instrument(skip_all, fields(commands = commands.len()))]
pub fn run_tictactoe(commands: &[GameCommand]) -> GameReport {
    let mut game = TicTacToe::new();
    let mut events = Vec::new();

    for command in commands {
        match command {
            GameCommand::Move(pos) => events.push(game.play(*pos)),
            GameCommand::Reset => game.reset_board(),
        }
    }

    info!(score = %game.score(), "Tic-tac-toe run complete");
    GameReport::new(game, events)
}

/// Parses whitespace-separated calculator labels.
pub fn parse_calc_input(words: &[String]) -> Result<Vec<Token>, CalcError> {
    toybox_calculator::tokenize(&words.join(" "))
}

/// Parses whitespace-separated tic-tac-toe commands.
pub fn parse_game_input(words: &[String]) -> Result<Vec<GameCommand>, CommandError> {
    words
        .iter()
        .flat_map(|w| w.split_whitespace())
        .map(str::parse)
        .collect()
}
