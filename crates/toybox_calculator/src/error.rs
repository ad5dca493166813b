//! Calculator error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CalcErrorKind {
    /// Display text that does not parse as a number.
    #[display("Invalid number {:?}", _0)]
    InvalidInput(String),
    /// Button label the keypad does not have.
    #[display("Unknown button {:?}", _0)]
    UnknownToken(String),
}

/// Calculator error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Calculator error: {} at {}:{}", kind, file, line)]
pub struct CalcError {
    /// Error kind.
    pub kind: CalcErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CalcError {
    /// Creates a new calculator error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: CalcErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Display text that does not parse as a number.
    #[track_caller]
    pub fn invalid_input(input: impl Into<String>) -> Self {
        Self::new(CalcErrorKind::InvalidInput(input.into()))
    }

    /// Button label the keypad does not have.
    #[track_caller]
    pub fn unknown_token(label: impl Into<String>) -> Self {
        Self::new(CalcErrorKind::UnknownToken(label.into()))
    }
}

/// Clipboard failure. Never fatal: the display is left as it was.
#[derive(Debug, Clone, Display, Error)]
#[display("Clipboard error: {} at {}:{}", message, file, line)]
pub struct ClipboardError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ClipboardError {
    /// Creates a new clipboard error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(feature = "clipboard")]
impl From<arboard::Error> for ClipboardError {
    #[track_caller]
    fn from(err: arboard::Error) -> Self {
        Self::new(format!("System clipboard unavailable: {}", err))
    }
}
