//! Alternating turn invariant: X and O take turns, X first.

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: mark counts and the player to move agree with strict
/// alternation.
///
/// X moves first, so X holds as many marks as O or exactly one more. While
/// the game runs, the player to move is the one with fewer marks (X on a
/// tie). Once finished, the turn stays with whoever moved last.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let x_count = state.board().count(Player::X);
        let o_count = state.board().count(Player::O);

        if x_count != o_count && x_count != o_count + 1 {
            return false;
        }

        let expected = match (state.is_terminal(), x_count == o_count) {
            (false, true) | (true, false) => Player::X,
            (false, false) | (true, true) => Player::O,
        };
        state.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns, X first"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_holds_through_a_game() {
        let mut state = GameState::new();
        for pos in [Position::Center, Position::TopLeft, Position::TopRight] {
            state = state.place(pos).state;
            assert!(AlternatingTurnInvariant::holds(&state));
        }
    }

    #[test]
    fn test_extra_mark_violates() {
        let mut state = GameState::new().place(Position::Center).state;
        state.board.set(Position::TopLeft, Square::Occupied(Player::X));
        assert!(!AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_player_to_move_violates() {
        let mut state = GameState::new().place(Position::Center).state;
        state.to_move = Player::X;
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
