// Chunk: docs/chunks/input_dispatch - Shared input types crate
//!
//! Input event types for keyboard and mouse handling.
//!
//! These types abstract over the windowing toolkit's raw events and provide a
//! Rust-native interface for input handling. This crate is shared between
//! the window controller and the terminal crate to avoid circular dependencies.

/// A keyboard event.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    /// The key that was pressed
    pub key: Key,
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Creates a new KeyEvent with the given key and modifiers.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Creates a KeyEvent for a single character with no modifiers.
    pub fn char(ch: char) -> Self {
        Self {
            key: Key::Char(ch),
            modifiers: Modifiers::default(),
        }
    }

    /// Creates a KeyEvent for a character with Ctrl held.
    pub fn ctrl(ch: char) -> Self {
        Self {
            key: Key::Char(ch),
            modifiers: Modifiers {
                control: true,
                ..Default::default()
            },
        }
    }

    /// Creates a KeyEvent for a character with Ctrl and Shift held.
    pub fn ctrl_shift(ch: char) -> Self {
        Self {
            key: Key::Char(ch),
            modifiers: Modifiers {
                control: true,
                shift: true,
                ..Default::default()
            },
        }
    }
}

/// Modifier keys that can be held during a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key
    pub shift: bool,
    /// Control key (Ctrl)
    pub control: bool,
    /// Alt / Meta key
    pub alt: bool,
    /// Logo key (Super / Windows)
    pub logo: bool,
}

impl Modifiers {
    /// Returns true if no modifier keys are held.
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.control && !self.alt && !self.logo
    }

    /// Returns true if Ctrl is held together with Shift.
    pub fn is_ctrl_shift(&self) -> bool {
        self.control && self.shift
    }
}

/// Keys that can be pressed.
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    /// A printable character (already accounts for shift state)
    Char(char),
    /// Backspace / Delete backward
    Backspace,
    /// Forward delete
    Delete,
    /// Return / Enter
    Return,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Home key
    Home,
    /// End key
    End,
    /// Tab key
    Tab,
    /// Escape key
    Escape,
    /// Page Up
    PageUp,
    /// Page Down
    PageDown,
    /// Insert key
    Insert,
    /// Numeric keypad `+`
    KeypadAdd,
    /// Numeric keypad `-`
    KeypadSubtract,
    /// Numeric keypad digit (0-9)
    KeypadDigit(u8),
    /// Function key F1-F12
    Function(u8),
}

/// A mouse button, numbered the way X11-style toolkits number them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Button 1
    Left,
    /// Button 2
    Middle,
    /// Button 3
    Right,
    /// Any other button index (wheel, side buttons)
    Other(u8),
}

impl MouseButton {
    /// Maps a toolkit button index (1-based) to a button.
    pub fn from_index(index: u8) -> Self {
        match index {
            1 => MouseButton::Left,
            2 => MouseButton::Middle,
            3 => MouseButton::Right,
            other => MouseButton::Other(other),
        }
    }

    /// Returns the toolkit button index (1-based).
    pub fn index(&self) -> u8 {
        match self {
            MouseButton::Left => 1,
            MouseButton::Middle => 2,
            MouseButton::Right => 3,
            MouseButton::Other(index) => *index,
        }
    }
}

/// A mouse event.
#[derive(Debug, Clone, PartialEq)]
pub struct MouseEvent {
    /// The type of mouse event
    pub kind: MouseEventKind,
    /// The button involved in the event
    pub button: MouseButton,
    /// Position in view coordinates from the top-left (pixels in a window,
    /// cells when hosted in another terminal)
    pub position: (f64, f64),
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
}

impl MouseEvent {
    /// Creates a button-press event with no modifiers.
    pub fn press(button: MouseButton, x: f64, y: f64) -> Self {
        Self {
            kind: MouseEventKind::Down,
            button,
            position: (x, y),
            modifiers: Modifiers::default(),
        }
    }
}

/// Kind of mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    /// Mouse button pressed
    Down,
    /// Mouse button released
    Up,
    /// Mouse moved (with button held for drag)
    Moved,
}
