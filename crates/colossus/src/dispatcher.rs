// Chunk: docs/chunks/input_dispatch - Chord and button dispatch
//!
//! Input dispatch for the terminal window.
//!
//! Dispatch is a pure function of the event and the widget's selection state.
//! Only the Ctrl and Shift modifiers take part: a chord without Ctrl always
//! passes through to the child, and Shift is ignored except to distinguish
//! Ctrl+Shift+C (always Copy) from Ctrl+C (Copy only over a selection, else the
//! child gets its interrupt).
//!
//! The window controller performs the resulting [`Action`]; nothing here
//! touches the widget.

use colossus_input::{Key, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

/// Step applied by one zoom chord.
pub const ZOOM_STEP: f64 = 0.1;

/// What the window should do with an input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Copy the selection as plain text.
    Copy,
    /// Paste the clipboard into the child.
    Paste,
    /// Select the whole buffer.
    SelectAll,
    /// Grow the font by one step.
    ZoomIn,
    /// Shrink the font by one step.
    ZoomOut,
    /// Return the font to its natural size.
    ZoomReset,
    /// Open the context menu at a pointer position.
    ContextMenu {
        /// Pointer position in view coordinates.
        position: (f64, f64),
    },
    /// Let the event reach the terminal (and the child) unchanged.
    PassThrough,
}

impl Action {
    /// The scale delta of a zoom step, if this is one.
    pub fn zoom_delta(&self) -> Option<f64> {
        match self {
            Action::ZoomIn => Some(ZOOM_STEP),
            Action::ZoomOut => Some(-ZOOM_STEP),
            _ => None,
        }
    }
}

/// Resolves a key event.
pub fn dispatch_key(event: &KeyEvent, has_selection: bool) -> Action {
    let modifiers = event.modifiers;
    if !modifiers.control {
        return Action::PassThrough;
    }

    match &event.key {
        Key::Char(ch) => match ch.to_ascii_lowercase() {
            'c' if modifiers.shift || has_selection => Action::Copy,
            'c' => Action::PassThrough,
            'v' => Action::Paste,
            '+' | '=' => Action::ZoomIn,
            '-' => Action::ZoomOut,
            '0' => Action::ZoomReset,
            _ => Action::PassThrough,
        },
        Key::KeypadAdd => Action::ZoomIn,
        Key::KeypadSubtract => Action::ZoomOut,
        Key::KeypadDigit(0) => Action::ZoomReset,
        _ => Action::PassThrough,
    }
}

/// Resolves a mouse event. Only a right-button press opens the menu.
pub fn dispatch_mouse(event: &MouseEvent) -> Action {
    match (event.kind, event.button) {
        (MouseEventKind::Down, MouseButton::Right) => Action::ContextMenu {
            position: event.position,
        },
        _ => Action::PassThrough,
    }
}
