// Chunk: docs/chunks/terminal_widget - Headless PTY widget
//! A [`TerminalWidget`] that hosts its child in a PTY and renders nothing.
//!
//! Display output is forwarded byte-for-byte to a writer. When that writer is
//! the stdout of another terminal, that terminal does the emulation and
//! drawing. There is no character grid here, so there is never a selection;
//! copy and select-all are no-ops, and paste feeds the child whatever text
//! the clipboard backend holds.

use std::io::Write;

use crossbeam_channel::Sender;

use crate::clipboard::{ClipboardBackend, SystemClipboard};
use crate::event::TerminalEvent;
use crate::pty::PtyHandle;
use crate::title::TitleScanner;
use crate::widget::{SpawnOutcome, SpawnRequest, TerminalWidget};

/// Headless PTY-backed terminal widget.
pub struct PtyTerminal {
    rows: u16,
    cols: u16,
    pty: Option<PtyHandle>,
    display: Box<dyn Write + Send>,
    events: Sender<TerminalEvent>,
    titles: TitleScanner,
    clipboard: Box<dyn ClipboardBackend>,
    font_scale: f64,
    exit_reported: bool,
}

impl PtyTerminal {
    /// Creates a widget of the given size writing its display to `display`.
    ///
    /// Copy and paste go through the system clipboard.
    pub fn new(
        rows: u16,
        cols: u16,
        display: Box<dyn Write + Send>,
        events: Sender<TerminalEvent>,
    ) -> Self {
        Self {
            rows,
            cols,
            pty: None,
            display,
            events,
            titles: TitleScanner::new(),
            clipboard: Box::new(SystemClipboard::new()),
            font_scale: 1.0,
            exit_reported: false,
        }
    }

    /// Replaces the clipboard backend.
    pub fn with_clipboard(mut self, clipboard: Box<dyn ClipboardBackend>) -> Self {
        self.clipboard = clipboard;
        self
    }

    /// Forwards child output to the display.
    ///
    /// Returns the new window title if the output set one.
    pub fn process_output(&mut self, bytes: &[u8]) -> Option<String> {
        self.write_display(bytes);
        self.titles.scan(bytes)
    }

    /// Sends raw bytes to the child.
    pub fn write_child(&mut self, bytes: &[u8]) {
        let Some(pty) = self.pty.as_mut() else {
            log::debug!("dropping {} input bytes: no child", bytes.len());
            return;
        };
        if let Err(e) = pty.write(bytes) {
            log::warn!("failed to write to child: {}", e);
        }
    }

    /// Returns the child's exit code the first time it is observed exited.
    pub fn poll_exit(&mut self) -> Option<i32> {
        if self.exit_reported {
            return None;
        }
        let code = self.pty.as_mut()?.try_wait()?;
        self.exit_reported = true;
        Some(code)
    }

    /// Resizes the PTY.
    pub fn resize(&mut self, rows: u16, cols: u16) {
        self.rows = rows;
        self.cols = cols;
        if let Some(pty) = self.pty.as_ref() {
            if let Err(e) = pty.resize(rows, cols) {
                log::warn!("failed to resize PTY: {}", e);
            }
        }
    }

    /// Hangs up a still-running child, as when the window is closed.
    pub fn hang_up(&mut self) {
        if self.exit_reported {
            return;
        }
        if let Some(pty) = self.pty.as_ref() {
            if let Err(e) = pty.hang_up() {
                log::debug!("SIGHUP to child failed: {}", e);
            }
        }
    }

    /// Places text on the widget's clipboard.
    pub fn set_clipboard(&mut self, text: &str) {
        self.clipboard.set_text(text);
    }

    fn write_display(&mut self, bytes: &[u8]) {
        let result = self
            .display
            .write_all(bytes)
            .and_then(|()| self.display.flush());
        if let Err(e) = result {
            log::warn!("failed to write to display: {}", e);
        }
    }
}

impl TerminalWidget for PtyTerminal {
    fn spawn(&mut self, request: SpawnRequest) {
        let outcome = match PtyHandle::spawn(&request, self.rows, self.cols) {
            Ok(pty) => {
                let pid = pty.process_id();
                self.pty = Some(pty);
                SpawnOutcome::spawned(pid)
            }
            Err(e) => SpawnOutcome::failed(e.to_string()),
        };
        // Delivered through the channel so the handler runs from the drain loop,
        // and ahead of any output
        let _ = self.events.send(TerminalEvent::SpawnFinished(outcome));
        if let Some(pty) = self.pty.as_mut() {
            pty.start_reader(self.events.clone());
        }
    }

    fn has_selection(&self) -> bool {
        false
    }

    fn copy_clipboard(&mut self) {
        log::debug!("copy requested with no selection");
    }

    fn paste_clipboard(&mut self) {
        match self.clipboard.get_text() {
            Some(text) if !text.is_empty() => self.feed_child(&text),
            _ => log::debug!("paste requested with an empty clipboard"),
        }
    }

    fn select_all(&mut self) {
        log::debug!("select-all has no grid to select in a headless terminal");
    }

    fn feed_child(&mut self, text: &str) {
        self.write_child(text.as_bytes());
    }

    fn feed(&mut self, text: &str) {
        self.write_display(text.as_bytes());
    }

    fn font_scale(&self) -> f64 {
        self.font_scale
    }

    fn set_font_scale(&mut self, scale: f64) {
        self.font_scale = scale;
    }
}
