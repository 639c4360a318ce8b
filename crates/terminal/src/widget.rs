// Chunk: docs/chunks/terminal_widget - Terminal widget surface
//! The surface the window controller consumes from a terminal widget.

use std::path::PathBuf;

/// A request to start the session's child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnRequest {
    /// Program followed by its arguments. Never empty.
    pub argv: Vec<String>,
    /// Directory the child starts in.
    pub working_directory: PathBuf,
    /// Variables added to the inherited environment.
    pub env: Vec<(String, String)>,
}

impl SpawnRequest {
    /// Creates a request that inherits the environment unchanged.
    pub fn new(argv: Vec<String>, working_directory: PathBuf) -> Self {
        Self {
            argv,
            working_directory,
            env: Vec::new(),
        }
    }

    /// Adds an environment variable for the child.
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }
}

/// The result of a spawn request, produced exactly once per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnOutcome {
    /// Whether the child process started.
    pub success: bool,
    /// The child's process id, when known.
    pub pid: Option<u32>,
    /// Why the spawn failed.
    pub error_message: Option<String>,
}

impl SpawnOutcome {
    /// A successful spawn.
    pub fn spawned(pid: Option<u32>) -> Self {
        Self {
            success: true,
            pid,
            error_message: None,
        }
    }

    /// A failed spawn.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            pid: None,
            error_message: Some(message.into()),
        }
    }
}

/// A terminal-emulation widget as seen by the window controller.
///
/// The widget owns the PTY, the character grid, the selection and the
/// clipboard. Implementations must deliver the outcome of [`spawn`] later,
/// through their event channel, never from inside the call.
///
/// [`spawn`]: TerminalWidget::spawn
pub trait TerminalWidget {
    /// Starts the child process asynchronously.
    fn spawn(&mut self, request: SpawnRequest);

    /// Returns true if text is currently selected.
    fn has_selection(&self) -> bool;

    /// Copies the selection to the clipboard as plain text.
    fn copy_clipboard(&mut self);

    /// Pastes the clipboard into the child's input.
    fn paste_clipboard(&mut self);

    /// Selects the whole buffer.
    fn select_all(&mut self);

    /// Sends text to the child as if typed.
    fn feed_child(&mut self, text: &str);

    /// Writes text straight to the display, bypassing the child.
    fn feed(&mut self, text: &str);

    /// Returns the current font scale.
    fn font_scale(&self) -> f64;

    /// Sets the font scale.
    fn set_font_scale(&mut self, scale: f64);
}
