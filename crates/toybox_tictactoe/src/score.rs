//! Running score across games.

use super::{Outcome, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Win and draw counters. Counters only ever go up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Games drawn.
    draws: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished game.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Player::X) => self.x_wins += 1,
            Outcome::Winner(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Total games counted.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Score - X: {}  O: {}  Draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_each_outcome() {
        let mut score = Scoreboard::new();
        score.record(Outcome::Winner(Player::X));
        score.record(Outcome::Winner(Player::X));
        score.record(Outcome::Winner(Player::O));
        score.record(Outcome::Draw);
        assert_eq!(*score.x_wins(), 2);
        assert_eq!(*score.o_wins(), 1);
        assert_eq!(*score.draws(), 1);
        assert_eq!(score.games(), 4);
        assert_eq!(score.to_string(), "Score - X: 2  O: 1  Draws: 1");
    }
}
