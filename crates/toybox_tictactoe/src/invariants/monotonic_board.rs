//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::{Board, GameState, Player, Square};

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replays the move history from an empty board, X first, and requires
/// every move to land on an empty square and the result to match the
/// current board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new();
        let mut player = Player::X;

        for pos in state.history() {
            if !reconstructed.is_empty(*pos) {
                return false;
            }
            reconstructed.set(*pos, Square::Occupied(player));
            player = player.opponent();
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let state = [
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ]
        .into_iter()
        .fold(GameState::new(), |state, pos| state.place(pos).state);
        assert!(MonotonicBoardInvariant::holds(&state));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut state = GameState::new().place(Position::Center).state;
        state.board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!MonotonicBoardInvariant::holds(&state));
    }

    #[test]
    fn test_duplicate_history_violates() {
        let mut state = GameState::new().place(Position::Center).state;
        state.history.push(Position::Center);
        assert!(!MonotonicBoardInvariant::holds(&state));
    }
}
