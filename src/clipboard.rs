//! System clipboard access.
//!
//! Thin wrapper over `arboard` that keeps one handle alive for the whole
//! session. On X11 the copied text can vanish when the handle that set it
//! is dropped, so the handle is opened on first use and only discarded
//! after a failure, which lets the next copy start from a fresh one.

use anyhow::{Context, Result};

pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self { inner: None }
    }

    /// Replace the clipboard contents with `text`.
    pub fn copy(&mut self, text: &str) -> Result<()> {
        let mut clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().context("Failed to access clipboard")?,
        };

        match clipboard.set_text(text) {
            Ok(()) => {
                self.inner = Some(clipboard);
                Ok(())
            }
            Err(e) => Err(e).context("Failed to copy to clipboard"),
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}
