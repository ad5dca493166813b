//! Pure tic-tac-toe game logic.
//!
//! Two players alternate placing marks on a 3x3 board, X first. A move that
//! completes a row, column or diagonal wins; a full board without a line is
//! a draw. Once a game ends, no further moves are accepted until the board
//! is reset. A [`TicTacToe`] engine keeps the running score across games.
//!
//! # Example
//!
//! ```
//! use toybox_tictactoe::{MoveEvent, Player, TicTacToe};
//!
//! let mut game = TicTacToe::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     game.apply_move(row, col);
//! }
//! assert_eq!(game.state().status().outcome().and_then(|o| o.winner()), Some(Player::X));
//! assert_eq!(*game.score().x_wins(), 1);
//!
//! // Terminal: further moves change nothing
//! assert!(matches!(game.apply_move(1, 0), Some(MoveEvent::Ignored(_))));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod score;
mod session;
mod types;

pub use action::{Move, MoveEvent, Rejection};
pub use game::{GameState, Transition};
pub use phases::{GameStatus, Outcome};
pub use position::{Position, PositionError};
pub use score::Scoreboard;
pub use session::TicTacToe;
pub use types::{Board, Player, Square};
