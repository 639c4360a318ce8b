// Chunk: docs/chunks/clipboard - Clipboard backends for copy and paste
//! Clipboard storage behind [`PtyTerminal`](crate::PtyTerminal).
//!
//! [`SystemClipboard`] talks to the desktop clipboard through `arboard` and
//! opens it on first use. Where no desktop clipboard exists (a bare console,
//! a CI box) it keeps the text in memory instead, so paste still replays
//! whatever was last set. [`MemoryClipboard`] is the in-memory store alone.

/// A place to read and write clipboard text.
pub trait ClipboardBackend {
    /// Current clipboard text, if any.
    fn get_text(&mut self) -> Option<String>;

    /// Replaces the clipboard text.
    fn set_text(&mut self, text: &str);
}

/// Clipboard held in process memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard already holding `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn get_text(&mut self) -> Option<String> {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }
}

/// The desktop clipboard, with an in-memory fallback.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    unavailable: bool,
    fallback: MemoryClipboard,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure(&mut self) -> Option<&mut arboard::Clipboard> {
        if self.inner.is_none() && !self.unavailable {
            match arboard::Clipboard::new() {
                Ok(clipboard) => self.inner = Some(clipboard),
                Err(e) => {
                    log::info!("system clipboard unavailable, keeping text in memory: {}", e);
                    self.unavailable = true;
                }
            }
        }
        self.inner.as_mut()
    }
}

impl ClipboardBackend for SystemClipboard {
    fn get_text(&mut self) -> Option<String> {
        let Some(clipboard) = self.ensure() else {
            return self.fallback.get_text();
        };
        match clipboard.get_text() {
            Ok(text) => Some(text),
            Err(e) => {
                log::debug!("clipboard read failed: {}", e);
                self.fallback.get_text()
            }
        }
    }

    fn set_text(&mut self, text: &str) {
        self.fallback.set_text(text);
        if let Some(clipboard) = self.ensure() {
            if let Err(e) = clipboard.set_text(text.to_string()) {
                log::debug!("clipboard write failed: {}", e);
            }
        }
    }
}
