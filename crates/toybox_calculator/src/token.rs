//! Keypad buttons as a closed set of tokens.

use super::error::CalcError;
use super::operator::Operator;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A button press on the calculator keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// Digit `0`-`9`.
    Digit(u8),
    /// Decimal point.
    Point,
    /// Arithmetic operator.
    Operator(Operator),
    /// `=`: evaluate the pending expression.
    Equals,
    /// `C`: clear the entry and the pending operation.
    Clear,
    /// `CH`: clear the history log.
    ClearHistory,
    /// `Back`: delete the last character.
    Backspace,
    /// `Copy`: copy the display text.
    Copy,
}

impl Token {
    /// Button label as printed on the keypad.
    pub fn label(&self) -> String {
        match self {
            Token::Digit(d) => d.to_string(),
            Token::Point => ".".to_string(),
            Token::Operator(op) => op.to_string(),
            Token::Equals => "=".to_string(),
            Token::Clear => "C".to_string(),
            Token::ClearHistory => "CH".to_string(),
            Token::Backspace => "Back".to_string(),
            Token::Copy => "Copy".to_string(),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Token {
    type Err = CalcError;

    /// Parses a keypad label: `0`-`9`, `.`, `+ - * /`, `=`, `C`, `CH`,
    /// `Back` or `Copy`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = match s {
            "." => Token::Point,
            "=" => Token::Equals,
            "C" => Token::Clear,
            "CH" => Token::ClearHistory,
            "Back" => Token::Backspace,
            "Copy" => Token::Copy,
            _ => {
                if let Ok(op) = s.parse::<Operator>() {
                    Token::Operator(op)
                } else if let [digit @ b'0'..=b'9'] = s.as_bytes() {
                    Token::Digit(digit - b'0')
                } else {
                    return Err(CalcError::unknown_token(s));
                }
            }
        };
        Ok(token)
    }
}

/// Splits a string of button labels separated by whitespace.
///
/// Labels may also be run together for digits and operators, so `12+3=`
/// and `1 2 + 3 =` give the same tokens. Word labels (`CH`, `Back`,
/// `Copy`, `C`) must stand alone.
pub fn tokenize(input: &str) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    for word in input.split_whitespace() {
        match word.parse::<Token>() {
            Ok(token) => tokens.push(token),
            Err(err) => {
                if word.chars().all(|c| c.is_ascii_digit() || "+-*/=.".contains(c)) {
                    for c in word.chars() {
                        tokens.push(c.to_string().parse()?);
                    }
                } else {
                    return Err(err);
                }
            }
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcErrorKind;

    #[test]
    fn test_parse_labels() {
        assert_eq!("7".parse::<Token>().unwrap(), Token::Digit(7));
        assert_eq!(".".parse::<Token>().unwrap(), Token::Point);
        assert_eq!("/".parse::<Token>().unwrap(), Token::Operator(Operator::Divide));
        assert_eq!("CH".parse::<Token>().unwrap(), Token::ClearHistory);
        assert_eq!("Back".parse::<Token>().unwrap(), Token::Backspace);
    }

    #[test]
    fn test_unknown_label() {
        let err = "sqrt".parse::<Token>().unwrap_err();
        assert_eq!(err.kind, CalcErrorKind::UnknownToken("sqrt".to_string()));
        assert!("10".parse::<Token>().is_err());
    }

    #[test]
    fn test_label_round_trip() {
        for token in [
            Token::Digit(0),
            Token::Digit(9),
            Token::Point,
            Token::Operator(Operator::Subtract),
            Token::Equals,
            Token::Clear,
            Token::ClearHistory,
            Token::Backspace,
            Token::Copy,
        ] {
            assert_eq!(token.label().parse::<Token>().unwrap(), token);
        }
    }

    #[test]
    fn test_tokenize_run_together() {
        let spaced = tokenize("1 2 + 3 =").unwrap();
        let packed = tokenize("12+3=").unwrap();
        assert_eq!(spaced, packed);
        assert_eq!(packed.len(), 5);
    }

    #[test]
    fn test_tokenize_rejects_unknown_word() {
        assert!(tokenize("1 + Clear").is_err());
    }
}
