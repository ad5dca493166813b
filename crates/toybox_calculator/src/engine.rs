//! Calculator engine: pending operand and operator, display buffer, and
//! the history log.

use super::error::CalcError;
use super::format::format_number;
use super::operator::Operator;
use super::token::Token;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Display text shown when a result cannot be represented.
pub const ERROR_SENTINEL: &str = "Error";

/// First operand and operator, captured when an operator key is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pending {
    /// Value of the display when the operator was pressed.
    pub operand: f64,
    /// Operator waiting for its second operand.
    pub operator: Operator,
}

/// What the front end needs to redraw after a key press.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Render {
    /// Nothing changed.
    Unchanged,
    /// The display text changed.
    Display,
    /// An operator is armed; the display still shows the first operand.
    Operator(Operator),
    /// The display shows a result and `expression` was appended to the
    /// history log.
    Result {
        /// The completed expression, e.g. `6.0 + 4.0 = 10.0`.
        expression: String,
    },
    /// The display shows [`ERROR_SENTINEL`].
    Error,
    /// The history log changed.
    History,
    /// The front end should place this text on the clipboard.
    Copy(String),
}

/// Four-function calculator.
///
/// Operators do not chain: pressing a second operator before `=` replaces
/// the first one and recaptures the display as the first operand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculator {
    display: String,
    pending: Option<Pending>,
    fresh_entry: bool,
    history: Vec<String>,
}

impl Calculator {
    /// Creates a calculator with an empty display and history.
    pub fn new() -> Self {
        Self {
            display: String::new(),
            pending: None,
            fresh_entry: true,
            history: Vec::new(),
        }
    }

    /// Current display text.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Captured first operand and operator, if an operator is armed.
    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    /// Operator waiting for its second operand.
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.map(|p| p.operator)
    }

    /// True when the next digit starts a new number.
    pub fn is_fresh_entry(&self) -> bool {
        self.fresh_entry
    }

    /// True when the display shows [`ERROR_SENTINEL`].
    pub fn is_error(&self) -> bool {
        self.display == ERROR_SENTINEL
    }

    /// Completed expressions, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Applies one key press.
    #[instrument(skip(self))]
    pub fn press(&mut self, token: Token) -> Result<Render, CalcError> {
        match token {
            Token::Digit(d) => self.enter_digit(d),
            Token::Point => Ok(self.enter_point()),
            Token::Operator(op) => self.select_operator(op),
            Token::Equals => self.evaluate(),
            Token::Clear => Ok(self.clear_entry()),
            Token::ClearHistory => Ok(self.clear_history()),
            Token::Backspace => Ok(self.backspace()),
            Token::Copy => Ok(self.copy()),
        }
    }

    /// Appends a digit, or starts a new number with it.
    pub fn enter_digit(&mut self, digit: u8) -> Result<Render, CalcError> {
        let c = char::from_digit(u32::from(digit), 10)
            .ok_or_else(|| CalcError::unknown_token(digit.to_string()))?;
        if self.fresh_entry {
            self.display.clear();
            self.fresh_entry = false;
        }
        self.display.push(c);
        Ok(Render::Display)
    }

    /// Appends a decimal point, or starts a new number with `0.`.
    ///
    /// A second point in the same number is ignored.
    pub fn enter_point(&mut self) -> Render {
        if self.fresh_entry || self.display.is_empty() {
            self.display = "0.".to_string();
            self.fresh_entry = false;
            Render::Display
        } else if self.display.contains('.') {
            debug!(display = %self.display, "Ignoring second decimal point");
            Render::Unchanged
        } else {
            self.display.push('.');
            Render::Display
        }
    }

    /// Captures the display as the first operand and arms `op`.
    ///
    /// No-op on an empty display. Fails without changing anything when the
    /// display is not a number (the error sentinel, a lone `-`).
    #[instrument(skip(self))]
    pub fn select_operator(&mut self, op: Operator) -> Result<Render, CalcError> {
        if self.display.is_empty() {
            return Ok(Render::Unchanged);
        }
        let operand = parse_operand(&self.display)?;
        if let Some(previous) = self.pending {
            debug!(previous = %previous.operator, "Replacing pending operator");
        }
        self.pending = Some(Pending {
            operand,
            operator: op,
        });
        self.fresh_entry = true;
        Ok(Render::Operator(op))
    }

    /// Computes `first <op> display`.
    ///
    /// No-op unless an operator is armed and the display is non-empty.
    /// Division by zero, or a result too large to represent, shows
    /// [`ERROR_SENTINEL`] and leaves the history untouched.
    #[instrument(skip(self))]
    pub fn evaluate(&mut self) -> Result<Render, CalcError> {
        let Some(Pending { operand, operator }) = self.pending else {
            return Ok(Render::Unchanged);
        };
        if self.display.is_empty() {
            return Ok(Render::Unchanged);
        }
        let second = parse_operand(&self.display)?;

        self.pending = None;
        self.fresh_entry = true;

        match operator.apply(operand, second) {
            Some(result) if result.is_finite() => {
                let expression = format!(
                    "{} {} {} = {}",
                    format_number(operand),
                    operator,
                    format_number(second),
                    format_number(result)
                );
                debug!(%expression, "Evaluated");
                self.display = format_number(result);
                self.history.push(expression.clone());
                Ok(Render::Result { expression })
            }
            _ => {
                warn!(operand, %operator, second, "Result not representable");
                self.display = ERROR_SENTINEL.to_string();
                Ok(Render::Error)
            }
        }
    }

    /// Deletes the last character of the display.
    pub fn backspace(&mut self) -> Render {
        match self.display.pop() {
            Some(_) => Render::Display,
            None => Render::Unchanged,
        }
    }

    /// Clears the display and any pending operation.
    pub fn clear_entry(&mut self) -> Render {
        self.display.clear();
        self.pending = None;
        self.fresh_entry = true;
        Render::Display
    }

    /// Empties the history log.
    pub fn clear_history(&mut self) -> Render {
        debug!(entries = self.history.len(), "Clearing history");
        self.history.clear();
        Render::History
    }

    /// Asks the front end to copy the display text.
    pub fn copy(&self) -> Render {
        Render::Copy(self.display.clone())
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_operand(text: &str) -> Result<f64, CalcError> {
    text.parse::<f64>().map_err(|_| {
        warn!(text, "Display is not a number");
        CalcError::invalid_input(text)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcErrorKind;

    fn press_all(calc: &mut Calculator, keys: &str) {
        for token in crate::tokenize(keys).unwrap() {
            calc.press(token).unwrap();
        }
    }

    #[test]
    fn test_fresh_entry_replaces_result() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "2 + 3 =");
        assert_eq!(calc.display(), "5.0");
        press_all(&mut calc, "7");
        assert_eq!(calc.display(), "7");
    }

    #[test]
    fn test_operator_keeps_display() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "12 *");
        assert_eq!(calc.display(), "12");
        assert_eq!(calc.pending_operator(), Some(Operator::Multiply));
        assert!(calc.is_fresh_entry());
    }

    #[test]
    fn test_operator_on_empty_display_is_no_op() {
        let mut calc = Calculator::new();
        assert_eq!(calc.press(Token::Operator(Operator::Add)).unwrap(), Render::Unchanged);
        assert_eq!(calc.pending(), None);
    }

    #[test]
    fn test_equals_right_after_operator_reuses_display() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "4 + =");
        assert_eq!(calc.display(), "8.0");
        assert_eq!(calc.history(), ["4.0 + 4.0 = 8.0"]);
    }

    #[test]
    fn test_operator_on_error_fails() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "1 / 0 =");
        let before = calc.clone();

        let err = calc.press(Token::Operator(Operator::Add)).unwrap_err();

        assert_eq!(err.kind, CalcErrorKind::InvalidInput("Error".to_string()));
        assert_eq!(calc, before);
    }

    #[test]
    fn test_overflow_shows_sentinel() {
        let mut calc = Calculator::new();
        calc.display = "1e308".to_string();
        calc.fresh_entry = false;
        press_all(&mut calc, "* 10 =");
        assert!(calc.is_error());
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_digit_out_of_range() {
        let mut calc = Calculator::new();
        assert!(calc.press(Token::Digit(10)).is_err());
        assert_eq!(calc.display(), "");
    }
}
