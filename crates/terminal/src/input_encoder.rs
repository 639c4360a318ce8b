// Chunk: docs/chunks/terminal_input_encoding - Terminal input encoding
//!
//! Encodes key events into the bytes a terminal sends its child.
//!
//! Used for every key the window does not consume itself.

use colossus_input::{Key, KeyEvent, Modifiers};

/// Encodes key events into terminal byte sequences (normal cursor mode).
///
/// This is a stateless encoder.
pub struct InputEncoder;

impl InputEncoder {
    /// Encode a key event.
    ///
    /// Returns an empty vector if the key cannot be encoded.
    pub fn encode_key(event: &KeyEvent) -> Vec<u8> {
        if let Key::Char(ch) = event.key {
            return Self::encode_char(ch, &event.modifiers);
        }
        Self::encode_special_key(&event.key, &event.modifiers)
    }

    /// Encode a printable character, handling modifiers.
    fn encode_char(ch: char, modifiers: &Modifiers) -> Vec<u8> {
        // Ctrl+key produces control characters
        if modifiers.control {
            return Self::encode_ctrl_char(ch);
        }

        // Alt sends ESC prefix on most terminals
        if modifiers.alt {
            let mut result = vec![0x1b];
            let mut buf = [0u8; 4];
            result.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            return result;
        }

        let mut buf = [0u8; 4];
        ch.encode_utf8(&mut buf).as_bytes().to_vec()
    }

    /// Encode Ctrl+key combinations.
    ///
    /// Ctrl+A through Ctrl+Z produce 0x01 through 0x1A.
    /// Ctrl+[ produces ESC (0x1B), Ctrl+\ produces 0x1C, etc.
    fn encode_ctrl_char(ch: char) -> Vec<u8> {
        let control_code = match ch.to_ascii_lowercase() {
            lower @ 'a'..='z' => Some((lower as u8) - b'a' + 1),
            '[' => Some(0x1b),
            '\\' => Some(0x1c),
            ']' => Some(0x1d),
            '^' => Some(0x1e),
            '_' => Some(0x1f),
            '@' | ' ' => Some(0x00),
            _ => None,
        };

        match control_code {
            Some(code) => vec![code],
            None => {
                // Fall back to regular character if no control mapping
                let mut buf = [0u8; 4];
                ch.encode_utf8(&mut buf).as_bytes().to_vec()
            }
        }
    }

    /// Encode special (non-character) keys.
    fn encode_special_key(key: &Key, modifiers: &Modifiers) -> Vec<u8> {
        match key {
            Key::Return => vec![0x0d],
            Key::Tab if modifiers.shift => b"\x1b[Z".to_vec(),
            Key::Tab => vec![0x09],
            Key::Escape => vec![0x1b],
            Key::Backspace if modifiers.alt => vec![0x1b, 0x7f],
            Key::Backspace => vec![0x7f],
            Key::Up => b"\x1b[A".to_vec(),
            Key::Down => b"\x1b[B".to_vec(),
            Key::Right => b"\x1b[C".to_vec(),
            Key::Left => b"\x1b[D".to_vec(),
            Key::Home => b"\x1b[H".to_vec(),
            Key::End => b"\x1b[F".to_vec(),
            Key::Insert => b"\x1b[2~".to_vec(),
            Key::Delete => b"\x1b[3~".to_vec(),
            Key::PageUp => b"\x1b[5~".to_vec(),
            Key::PageDown => b"\x1b[6~".to_vec(),
            Key::KeypadAdd => vec![b'+'],
            Key::KeypadSubtract => vec![b'-'],
            Key::KeypadDigit(digit) if *digit <= 9 => vec![b'0' + digit],
            Key::Function(n) => Self::encode_function_key(*n),
            Key::KeypadDigit(_) | Key::Char(_) => Vec::new(),
        }
    }

    /// F1-F4 use SS3, the rest the tilde form with xterm's numbering gaps.
    fn encode_function_key(n: u8) -> Vec<u8> {
        let code = match n {
            1 => return b"\x1bOP".to_vec(),
            2 => return b"\x1bOQ".to_vec(),
            3 => return b"\x1bOR".to_vec(),
            4 => return b"\x1bOS".to_vec(),
            5 => 15,
            6 => 17,
            7 => 18,
            8 => 19,
            9 => 20,
            10 => 21,
            11 => 23,
            12 => 24,
            _ => return Vec::new(),
        };
        format!("\x1b[{}~", code).into_bytes()
    }
}
