//! The four arithmetic operators.

use serde::{Deserialize, Serialize};

/// Binary operator on the keypad.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Operator {
    /// Addition.
    #[strum(to_string = "+")]
    Add,
    /// Subtraction.
    #[strum(to_string = "-")]
    Subtract,
    /// Multiplication.
    #[strum(to_string = "*")]
    Multiply,
    /// Floating-point division.
    #[strum(to_string = "/")]
    Divide,
}

impl Operator {
    /// Computes `lhs <op> rhs`.
    ///
    /// Returns `None` for division by zero; every other case is plain
    /// floating-point arithmetic.
    pub fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Operator::Add => Some(lhs + rhs),
            Operator::Subtract => Some(lhs - rhs),
            Operator::Multiply => Some(lhs * rhs),
            Operator::Divide if rhs == 0.0 => None,
            Operator::Divide => Some(lhs / rhs),
        }
    }
}
