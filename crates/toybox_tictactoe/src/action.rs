//! Move events reported back to the caller.
//!
//! Moves never fail. An illegal move is ignored, and the event says why so
//! the front end can decide whether to show anything.

use super::{Outcome, Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

/// What happened when a move was offered to the game.
///
/// This is the rendering directive for the board: the front end marks the
/// square on `Placed`, announces the result on `Won`/`Drew`, and leaves
/// everything as it was on `Ignored`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveEvent {
    /// Mark placed; the game continues with the other player.
    Placed(Move),
    /// Mark placed and it completed a line.
    Won(Move),
    /// Mark placed and it filled the board without a line.
    Drew(Move),
    /// Move was not applied; nothing changed.
    Ignored(Rejection),
}

impl MoveEvent {
    /// Returns true if the move changed the board.
    pub fn is_applied(&self) -> bool {
        !matches!(self, MoveEvent::Ignored(_))
    }

    /// Returns the outcome when this move ended the game.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            MoveEvent::Won(mv) => Some(Outcome::Winner(mv.player)),
            MoveEvent::Drew(_) => Some(Outcome::Draw),
            MoveEvent::Placed(_) | MoveEvent::Ignored(_) => None,
        }
    }
}
