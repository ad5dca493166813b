//! A sitting at the board: the current game plus the running score.

use super::action::MoveEvent;
use super::game::GameState;
use super::score::Scoreboard;
use super::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tic-tac-toe engine driven by a front end.
///
/// Owns one game and the score across every game played since it was
/// created. Starting a new game keeps the score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToe {
    state: GameState,
    score: Scoreboard,
}

impl TicTacToe {
    /// Creates an engine with an empty board and a zero score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the running score.
    pub fn score(&self) -> &Scoreboard {
        &self.score
    }

    /// Returns the player whose mark goes down next.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Applies a move at zero-based `(row, col)`.
    ///
    /// Coordinates off the board are ignored like any other illegal move.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Option<MoveEvent> {
        match Position::from_row_col(row, col) {
            Some(pos) => Some(self.play(pos)),
            None => {
                debug!("Ignoring move off the board");
                None
            }
        }
    }

    /// Plays the current player's mark at `pos` and scores a finished game.
    #[instrument(skip(self), fields(position = %pos))]
    pub fn play(&mut self, pos: Position) -> MoveEvent {
        let state = std::mem::take(&mut self.state);
        let transition = state.place(pos);
        self.state = transition.state;

        if let Some(outcome) = transition.event.outcome() {
            self.score.record(outcome);
            info!(%outcome, score = %self.score, "Game finished");
        }

        transition.event
    }

    /// Clears the board for a new game with X to move. The score is kept.
    #[instrument(skip(self))]
    pub fn reset_board(&mut self) {
        debug!(moves = self.state.history().len(), "Resetting board");
        self.state = GameState::new();
    }

    /// Builds an engine by playing `moves` from an empty board.
    ///
    /// Ignored moves are skipped, so the result is the same as feeding the
    /// moves one by one through [`TicTacToe::play`].
    pub fn replay(moves: &[Position]) -> Self {
        let mut engine = Self::new();
        for pos in moves {
            engine.play(*pos);
        }
        engine
    }

    /// Status text: whose turn it is, or how the game ended.
    pub fn status_line(&self) -> String {
        self.state.status_line()
    }

    /// Score text, e.g. `Score - X: 1  O: 0  Draws: 0`.
    pub fn score_line(&self) -> String {
        self.score.to_string()
    }
}
