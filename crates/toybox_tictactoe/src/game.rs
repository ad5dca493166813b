//! Tic-tac-toe game state and its move transition.
//!
//! [`GameState::place`] is a pure transition: it consumes the current
//! state and hands back the next one along with a [`MoveEvent`] describing
//! what the front end should render.

use super::action::{Move, MoveEvent, Rejection};
use super::invariants::assert_invariants;
use super::phases::{GameStatus, Outcome};
use super::rules;
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete state of one game on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Position>,
}

/// Result of offering a move to a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State after the move (unchanged if the move was ignored).
    pub state: GameState,
    /// What happened.
    pub event: MoveEvent,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark goes down next.
    ///
    /// In a won game this is the winner: the turn does not pass after a
    /// winning move.
    pub fn current_player(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the positions played so far, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Returns true once the game is won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the positions still open for play.
    ///
    /// Empty once the game is over, even if squares remain.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_terminal() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Moves on an occupied square or after the game has ended are ignored:
    /// the returned state equals the input state.
    #[instrument(skip(self), fields(position = %pos, player = %self.to_move))]
    pub fn place(mut self, pos: Position) -> Transition {
        if self.status.is_terminal() {
            debug!("Ignoring move, game is already over");
            return Transition {
                state: self,
                event: MoveEvent::Ignored(Rejection::GameOver),
            };
        }

        if !self.board.is_empty(pos) {
            debug!("Ignoring move, square is occupied");
            return Transition {
                state: self,
                event: MoveEvent::Ignored(Rejection::SquareOccupied(pos)),
            };
        }

        let mover = self.to_move;
        let action = Move::new(mover, pos);
        self.board.set(pos, Square::Occupied(mover));
        self.history.push(pos);

        let event = if rules::completes_line(&self.board, mover) {
            self.status = GameStatus::Finished(Outcome::Winner(mover));
            MoveEvent::Won(action)
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Finished(Outcome::Draw);
            MoveEvent::Drew(action)
        } else {
            self.to_move = mover.opponent();
            MoveEvent::Placed(action)
        };

        debug!(?event, "Move applied");
        assert_invariants(&self);

        Transition { state: self, event }
    }

    /// Status text for the front end.
    pub fn status_line(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("Player {}'s turn", self.to_move),
            GameStatus::Finished(outcome) => outcome.to_string(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
