//! Where the `Copy` key sends the display text.

use super::error::ClipboardError;
use tracing::{debug, instrument};

/// Destination for copied text.
pub trait ClipboardSink {
    /// Replaces the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard kept in process memory, for headless runs and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    /// Creates an empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last text copied, if any.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardSink for MemoryClipboard {
    #[instrument(skip(self))]
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        debug!(len = text.len(), "Copied to memory clipboard");
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// The desktop clipboard.
#[cfg(feature = "clipboard")]
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    /// Connects to the desktop clipboard.
    ///
    /// Fails on machines without a display server.
    #[instrument]
    pub fn new() -> Result<Self, ClipboardError> {
        let inner = arboard::Clipboard::new()?;
        debug!("Connected to system clipboard");
        Ok(Self { inner })
    }
}

#[cfg(feature = "clipboard")]
impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard").finish_non_exhaustive()
    }
}

#[cfg(feature = "clipboard")]
impl ClipboardSink for SystemClipboard {
    #[instrument(skip(self))]
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner.set_text(text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_keeps_last_text() {
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.contents(), None);
        clipboard.set_text("1.5").unwrap();
        clipboard.set_text("10.0").unwrap();
        assert_eq!(clipboard.contents(), Some("10.0"));
    }
}
