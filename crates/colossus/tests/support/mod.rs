// Chunk: docs/chunks/terminal_window - Test doubles
//! Doubles shared by the window and session tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use colossus::diagnostics::DiagnosticSink;
use colossus_launch::LaunchSpec;
use colossus_terminal::{SpawnRequest, TerminalWidget};
use log::Level;

/// A widget that records every call.
#[derive(Debug, Default)]
pub struct RecordingWidget {
    pub spawn_requests: Vec<SpawnRequest>,
    pub selection: bool,
    pub copies: usize,
    pub pastes: usize,
    pub select_alls: usize,
    pub child_input: String,
    pub display: String,
    pub font_scale: f64,
}

impl RecordingWidget {
    pub fn with_selection() -> Self {
        Self {
            selection: true,
            ..Self::default()
        }
    }
}

impl TerminalWidget for RecordingWidget {
    fn spawn(&mut self, request: SpawnRequest) {
        self.spawn_requests.push(request);
    }

    fn has_selection(&self) -> bool {
        self.selection
    }

    fn copy_clipboard(&mut self) {
        self.copies += 1;
    }

    fn paste_clipboard(&mut self) {
        self.pastes += 1;
    }

    fn select_all(&mut self) {
        self.select_alls += 1;
        self.selection = true;
    }

    fn feed_child(&mut self, text: &str) {
        self.child_input.push_str(text);
    }

    fn feed(&mut self, text: &str) {
        self.display.push_str(text);
    }

    fn font_scale(&self) -> f64 {
        self.font_scale
    }

    fn set_font_scale(&mut self, scale: f64) {
        self.font_scale = scale;
    }
}

/// A sink that keeps every line.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub lines: Vec<(Level, String)>,
}

impl RecordingSink {
    /// Lines containing `text`.
    pub fn matching(&self, text: &str) -> Vec<&(Level, String)> {
        self.lines.iter().filter(|(_, line)| line.contains(text)).collect()
    }
}

impl DiagnosticSink for RecordingSink {
    fn write_line(&mut self, level: Level, line: &str) {
        self.lines.push((level, line.to_string()));
    }
}

/// A display that records everything written to it.
#[derive(Clone, Default)]
pub struct SharedDisplay(Arc<Mutex<Vec<u8>>>);

impl SharedDisplay {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for SharedDisplay {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// A launch spec explicitly running `argv` in `/`.
pub fn spec(argv: &[&str]) -> LaunchSpec {
    let argv = argv.iter().map(|s| s.to_string()).collect();
    LaunchSpec::new(argv, PathBuf::from("/"), true).unwrap()
}
