// Chunk: docs/chunks/terminal_widget - Terminal events
//! Event types for PTY communication.
//!
//! These events flow from the widget (and its PTY reader thread) to the main
//! thread via a crossbeam channel, so every callback runs on the one thread
//! that owns the window.

use std::io;

use crate::widget::SpawnOutcome;

/// Events sent from the terminal widget to the main drain loop.
#[derive(Debug)]
pub enum TerminalEvent {
    /// The spawn requested with `TerminalWidget::spawn` finished.
    SpawnFinished(SpawnOutcome),
    /// New data from PTY stdout - bytes to forward to the display.
    PtyOutput(Vec<u8>),
    /// The PTY reached EOF; the child has exited or closed its terminal.
    PtyClosed,
    /// PTY error occurred during reading.
    PtyError(io::Error),
}
