// Chunk: docs/chunks/window_title - Title tracking from OSC 0/2
//! Window-title detection in PTY output.
//!
//! Programs set the title with `ESC ] 0 ; text BEL` or `ESC ] 2 ; text BEL`
//! (ST, `ESC \`, also terminates). The scanner only observes the stream: bytes
//! are still forwarded to the display unchanged. Sequences may be split
//! across reads, so state carries over between calls.

/// Upper bound on a collected title, in bytes.
const MAX_TITLE_LEN: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Ground,
    Escape,
    Param,
    Text,
    TextEscape,
}

/// Incremental scanner for title-setting OSC sequences.
#[derive(Debug)]
pub struct TitleScanner {
    state: State,
    param: Vec<u8>,
    text: Vec<u8>,
}

impl Default for TitleScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl TitleScanner {
    /// Creates a scanner in the ground state.
    pub fn new() -> Self {
        Self {
            state: State::Ground,
            param: Vec::new(),
            text: Vec::new(),
        }
    }

    /// Feeds a chunk of output; returns the last title completed in it.
    pub fn scan(&mut self, bytes: &[u8]) -> Option<String> {
        let mut latest = None;
        for &byte in bytes {
            self.state = match (self.state, byte) {
                (_, 0x1b) if self.state != State::Text => State::Escape,
                (State::Ground, _) => State::Ground,
                (State::Escape, b']') => {
                    self.param.clear();
                    self.text.clear();
                    State::Param
                }
                (State::Escape, _) => State::Ground,
                (State::Param, b'0'..=b'9') if self.param.len() < 4 => {
                    self.param.push(byte);
                    State::Param
                }
                (State::Param, b';') => State::Text,
                (State::Param, _) => State::Ground,
                (State::Text, 0x07) => {
                    if let Some(title) = self.finish() {
                        latest = Some(title);
                    }
                    State::Ground
                }
                (State::Text, 0x1b) => State::TextEscape,
                (State::Text, _) => {
                    if self.text.len() < MAX_TITLE_LEN {
                        self.text.push(byte);
                    }
                    State::Text
                }
                (State::TextEscape, b'\\') => {
                    if let Some(title) = self.finish() {
                        latest = Some(title);
                    }
                    State::Ground
                }
                (State::TextEscape, _) => State::Ground,
            };
        }
        latest
    }

    fn finish(&self) -> Option<String> {
        match self.param.as_slice() {
            b"0" | b"2" => Some(String::from_utf8_lossy(&self.text).into_owned()),
            _ => None,
        }
    }
}
