//! Basic four-function calculator engine.
//!
//! The engine is driven one key press at a time through [`Calculator::press`]
//! and answers each press with a [`Render`] directive telling the front end
//! what to redraw. Completed expressions are kept in a history log until it
//! is cleared.
//!
//! # Example
//!
//! ```
//! use toybox_calculator::{Calculator, tokenize};
//!
//! # fn main() -> Result<(), toybox_calculator::CalcError> {
//! let mut calc = Calculator::new();
//! for token in tokenize("6 + 4 =")? {
//!     calc.press(token)?;
//! }
//! assert_eq!(calc.display(), "10.0");
//! assert_eq!(calc.history(), ["6.0 + 4.0 = 10.0"]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod clipboard;
mod engine;
mod error;
mod format;
mod operator;
mod token;

pub use clipboard::{ClipboardSink, MemoryClipboard};
#[cfg(feature = "clipboard")]
pub use clipboard::SystemClipboard;
pub use engine::{Calculator, ERROR_SENTINEL, Pending, Render};
pub use error::{CalcError, CalcErrorKind, ClipboardError};
pub use format::format_number;
pub use operator::Operator;
pub use token::{Token, tokenize};
