// Chunk: docs/chunks/headless_host - Hosting terminal plumbing
//!
//! The terminal COLOSSUS runs inside when it has no window system.
//!
//! The hosting terminal is driven through `crossterm`. Raw mode keeps control
//! chords from being turned into signals by the tty, mouse capture delivers
//! right-clicks for the context menu, and bracketed paste delivers pasted text
//! (including drops from a file manager) as one event. Events are translated
//! into this crate's input types on a reader thread and sent to the drain
//! loop.

use std::io::{self, IsTerminal, Write};
use std::thread;

use colossus_input::{Key, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind};
use crossbeam_channel::Sender;
use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event, KeyCode, KeyEventKind, KeyEventState, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{self, SetTitle};
use crossterm::{queue, QueueableCommand};
use thiserror::Error;

use crate::config::WindowSize;
use crate::palette::Palette;

/// Nominal cell size used to turn a pixel size into a grid.
const CELL_WIDTH_PX: u32 = 8;
const CELL_HEIGHT_PX: u32 = 16;

/// Errors setting up the hosting terminal.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("failed to enter raw mode: {0}")]
    RawMode(#[source] io::Error),
    #[error("failed to configure the hosting terminal: {0}")]
    Modes(#[source] io::Error),
}

/// Input from the hosting terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Text delivered by bracketed paste
    Paste(String),
    Resize {
        rows: u16,
        cols: u16,
    },
    /// Input reached end of file or failed.
    InputClosed,
}

/// True if both stdin and stdout are terminals.
pub fn is_interactive() -> bool {
    io::stdin().is_terminal() && io::stdout().is_terminal()
}

/// The hosting terminal's `(rows, cols)`.
pub fn host_grid() -> Option<(u16, u16)> {
    match terminal::size() {
        Ok((cols, rows)) if rows > 0 && cols > 0 => Some((rows, cols)),
        Ok(_) => None,
        Err(e) => {
            log::debug!("terminal size unavailable: {}", e);
            None
        }
    }
}

/// Converts a window size in pixels to a `(rows, cols)` grid.
pub fn grid_for_pixels(size: WindowSize) -> (u16, u16) {
    let rows = (size.height / CELL_HEIGHT_PX).clamp(1, u16::MAX as u32) as u16;
    let cols = (size.width / CELL_WIDTH_PX).clamp(1, u16::MAX as u32) as u16;
    (rows, cols)
}

/// Writes `text` to the hosting terminal.
pub fn write_host(out: &mut dyn Write, text: &str) {
    let result = out.write_all(text.as_bytes()).and_then(|()| out.flush());
    if let Err(e) = result {
        log::warn!("failed to write to hosting terminal: {}", e);
    }
}

/// Sets the hosting terminal's title.
pub fn set_title<W: Write>(out: &mut W, title: &str) {
    let printable: String = title.chars().filter(|c| !c.is_control()).collect();
    let result = out.queue(SetTitle(printable)).and_then(|out| out.flush());
    if let Err(e) = result {
        log::warn!("failed to set window title: {}", e);
    }
}

// =============================================================================
// Terminal modes
// =============================================================================

/// The modes COLOSSUS switches on in the hosting terminal.
#[derive(Debug, Clone, Default)]
pub struct TerminalModes {
    /// Palette to install, if stdout is a terminal
    pub palette: Option<Palette>,
    /// Whether the terminal understands the kitty keyboard protocol
    pub keyboard_enhanced: bool,
}

impl TerminalModes {
    /// Switches the modes on.
    pub fn enter<W: Write>(&self, out: &mut W) -> io::Result<()> {
        queue!(out, EnableMouseCapture, EnableBracketedPaste)?;
        if self.keyboard_enhanced {
            // Lets Ctrl+Shift+C arrive distinct from Ctrl+C
            queue!(
                out,
                PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                        | KeyboardEnhancementFlags::REPORT_ALTERNATE_KEYS
                )
            )?;
        }
        if let Some(palette) = &self.palette {
            out.write_all(palette.osc_sequences().as_bytes())?;
        }
        out.flush()
    }

    /// Switches the modes back off, in reverse order.
    pub fn leave<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.palette.is_some() {
            out.write_all(Palette::osc_reset().as_bytes())?;
        }
        if self.keyboard_enhanced {
            queue!(out, PopKeyboardEnhancementFlags)?;
        }
        queue!(out, DisableBracketedPaste, DisableMouseCapture)?;
        out.flush()
    }
}

/// Raw mode plus [`TerminalModes`] on stdout, undone on drop.
pub struct HostTerminal {
    modes: TerminalModes,
}

impl HostTerminal {
    /// Enables raw mode, then the modes with `palette` installed.
    ///
    /// Raw mode comes first so that once anything has been written to the
    /// terminal, the guard exists to take it back.
    pub fn enter(palette: Palette) -> Result<Self, HostError> {
        terminal::enable_raw_mode().map_err(HostError::RawMode)?;
        let modes = TerminalModes {
            palette: Some(palette),
            keyboard_enhanced: terminal::supports_keyboard_enhancement().unwrap_or(false),
        };
        let guard = Self { modes };
        guard.modes.enter(&mut io::stdout()).map_err(HostError::Modes)?;
        log::debug!("keyboard enhancement: {}", guard.modes.keyboard_enhanced);
        Ok(guard)
    }
}

impl Drop for HostTerminal {
    fn drop(&mut self) {
        if let Err(e) = self.modes.leave(&mut io::stdout()) {
            log::warn!("failed to restore terminal modes: {}", e);
        }
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("failed to leave raw mode: {}", e);
        }
    }
}

// =============================================================================
// Event translation
// =============================================================================

/// Reads terminal events on a background thread, forwarding them as
/// [`HostEvent`]s until the read fails or the receiver goes away.
pub fn spawn_event_reader(events: Sender<HostEvent>) -> thread::JoinHandle<()> {
    thread::spawn(move || loop {
        match event::read() {
            Ok(event) => {
                let Some(event) = translate_event(event) else {
                    continue;
                };
                if events.send(event).is_err() {
                    break;
                }
            }
            Err(e) => {
                log::warn!("terminal input failed: {}", e);
                let _ = events.send(HostEvent::InputClosed);
                break;
            }
        }
    })
}

/// Translates a terminal event. Focus changes and key releases are dropped.
pub fn translate_event(event: Event) -> Option<HostEvent> {
    match event {
        Event::Key(key) => translate_key(&key).map(HostEvent::Key),
        Event::Mouse(mouse) => translate_mouse(&mouse).map(HostEvent::Mouse),
        Event::Paste(text) => Some(HostEvent::Paste(text)),
        Event::Resize(cols, rows) => Some(HostEvent::Resize { rows, cols }),
        _ => None,
    }
}

pub fn translate_key(event: &event::KeyEvent) -> Option<KeyEvent> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let mut modifiers = translate_modifiers(event.modifiers);
    let keypad = event.state.contains(KeyEventState::KEYPAD);
    let key = match event.code {
        KeyCode::Char('+') if keypad => Key::KeypadAdd,
        KeyCode::Char('-') if keypad => Key::KeypadSubtract,
        KeyCode::Char(ch) if keypad && ch.is_ascii_digit() => Key::KeypadDigit(ch as u8 - b'0'),
        KeyCode::Char(ch) => Key::Char(ch),
        KeyCode::Enter => Key::Return,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => {
            modifiers.shift = true;
            Key::Tab
        }
        KeyCode::Esc => Key::Escape,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Insert => Key::Insert,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::F(n) => Key::Function(n),
        other => {
            log::trace!("ignoring key {:?}", other);
            return None;
        }
    };
    Some(KeyEvent::new(key, modifiers))
}

/// Translates a mouse event; positions are `(column, row)` in cells.
///
/// Plain motion with no button held is dropped.
pub fn translate_mouse(event: &event::MouseEvent) -> Option<MouseEvent> {
    use event::MouseEventKind as Kind;

    let (kind, button) = match event.kind {
        Kind::Down(button) => (MouseEventKind::Down, translate_button(button)),
        Kind::Up(button) => (MouseEventKind::Up, translate_button(button)),
        Kind::Drag(button) => (MouseEventKind::Moved, translate_button(button)),
        Kind::ScrollUp => (MouseEventKind::Down, MouseButton::Other(4)),
        Kind::ScrollDown => (MouseEventKind::Down, MouseButton::Other(5)),
        Kind::ScrollLeft => (MouseEventKind::Down, MouseButton::Other(6)),
        Kind::ScrollRight => (MouseEventKind::Down, MouseButton::Other(7)),
        Kind::Moved => return None,
    };
    Some(MouseEvent {
        kind,
        button,
        position: (f64::from(event.column), f64::from(event.row)),
        modifiers: translate_modifiers(event.modifiers),
    })
}

fn translate_button(button: event::MouseButton) -> MouseButton {
    match button {
        event::MouseButton::Left => MouseButton::Left,
        event::MouseButton::Middle => MouseButton::Middle,
        event::MouseButton::Right => MouseButton::Right,
    }
}

fn translate_modifiers(modifiers: KeyModifiers) -> Modifiers {
    Modifiers {
        shift: modifiers.contains(KeyModifiers::SHIFT),
        control: modifiers.contains(KeyModifiers::CONTROL),
        alt: modifiers.contains(KeyModifiers::ALT),
        logo: modifiers.contains(KeyModifiers::SUPER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent as TermKey, MouseEvent as TermMouse};

    fn term_key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(TermKey::new(code, modifiers))
    }

    fn term_mouse(kind: event::MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(TermMouse {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn pixel_size_to_grid() {
        assert_eq!(grid_for_pixels(WindowSize::default()), (43, 137));
        assert_eq!(grid_for_pixels(WindowSize { width: 0, height: 0 }), (1, 1));
    }

    #[test]
    fn ctrl_chords_become_key_events() {
        assert_eq!(
            translate_event(term_key(KeyCode::Char('v'), KeyModifiers::CONTROL)),
            Some(HostEvent::Key(KeyEvent::ctrl('v')))
        );
        assert_eq!(
            translate_event(term_key(
                KeyCode::Char('C'),
                KeyModifiers::CONTROL | KeyModifiers::SHIFT
            )),
            Some(HostEvent::Key(KeyEvent::ctrl_shift('C')))
        );
    }

    #[test]
    fn back_tab_is_shift_tab() {
        let event = translate_event(term_key(KeyCode::BackTab, KeyModifiers::NONE));
        let Some(HostEvent::Key(key)) = event else {
            panic!("expected a key event, got {:?}", event);
        };
        assert_eq!(key.key, Key::Tab);
        assert!(key.modifiers.shift);
    }

    #[test]
    fn keypad_keys_are_recognised() {
        let keypad = |ch| {
            Event::Key(TermKey::new_with_kind_and_state(
                KeyCode::Char(ch),
                KeyModifiers::CONTROL,
                KeyEventKind::Press,
                KeyEventState::KEYPAD,
            ))
        };
        let key = |event| match translate_event(event) {
            Some(HostEvent::Key(key)) => key.key,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(key(keypad('+')), Key::KeypadAdd);
        assert_eq!(key(keypad('-')), Key::KeypadSubtract);
        assert_eq!(key(keypad('0')), Key::KeypadDigit(0));
    }

    #[test]
    fn key_releases_are_dropped() {
        let release = Event::Key(TermKey::new_with_kind(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert_eq!(translate_event(release), None);
    }

    #[test]
    fn function_keys_translate() {
        assert_eq!(
            translate_event(term_key(KeyCode::F(5), KeyModifiers::NONE)),
            Some(HostEvent::Key(KeyEvent::new(Key::Function(5), Modifiers::default())))
        );
    }

    #[test]
    fn right_click_keeps_cell_position() {
        let event = term_mouse(event::MouseEventKind::Down(event::MouseButton::Right), 40, 12);
        assert_eq!(
            translate_event(event),
            Some(HostEvent::Mouse(MouseEvent::press(MouseButton::Right, 40.0, 12.0)))
        );
    }

    #[test]
    fn bare_motion_is_dropped_but_drag_is_not() {
        assert_eq!(translate_event(term_mouse(event::MouseEventKind::Moved, 1, 1)), None);
        let Some(HostEvent::Mouse(drag)) = translate_event(term_mouse(
            event::MouseEventKind::Drag(event::MouseButton::Left),
            2,
            3,
        )) else {
            panic!("expected a mouse event");
        };
        assert_eq!(drag.kind, MouseEventKind::Moved);
        assert_eq!(drag.button, MouseButton::Left);
    }

    #[test]
    fn paste_and_resize_pass_through() {
        assert_eq!(
            translate_event(Event::Paste("ls\n".into())),
            Some(HostEvent::Paste("ls\n".into()))
        );
        assert_eq!(
            translate_event(Event::Resize(120, 40)),
            Some(HostEvent::Resize { rows: 40, cols: 120 })
        );
        assert_eq!(translate_event(Event::FocusGained), None);
    }

    #[test]
    fn modes_are_undone_on_leave() {
        let modes = TerminalModes {
            palette: Some(Palette::grayscale()),
            keyboard_enhanced: true,
        };
        let mut entered = Vec::new();
        modes.enter(&mut entered).unwrap();
        let entered = String::from_utf8(entered).unwrap();
        assert!(entered.contains("\x1b[?1000h"), "{:?}", entered);
        assert!(entered.contains("\x1b[?2004h"), "{:?}", entered);
        assert!(entered.contains("\x1b]4;"), "{:?}", entered);

        let mut left = Vec::new();
        modes.leave(&mut left).unwrap();
        let left = String::from_utf8(left).unwrap();
        assert!(left.contains("\x1b[?1000l"), "{:?}", left);
        assert!(left.contains("\x1b[?2004l"), "{:?}", left);
        assert!(left.contains("\x1b]104\x07"), "{:?}", left);
    }

    #[test]
    fn plain_modes_leave_the_palette_alone() {
        let mut left = Vec::new();
        TerminalModes::default().leave(&mut left).unwrap();
        assert!(!String::from_utf8(left).unwrap().contains("\x1b]104"));
    }

    #[test]
    fn title_strips_control_characters() {
        let mut out = Vec::new();
        set_title(&mut out, "COLOSSUS — vim");
        assert_eq!(out, "\x1b]0;COLOSSUS — vim\x07".as_bytes());

        let mut out = Vec::new();
        set_title(&mut out, "a\x07b\x1bc");
        assert_eq!(out, b"\x1b]0;abc\x07");
    }

    #[test]
    fn write_host_writes_everything() {
        let mut out = Vec::new();
        write_host(&mut out, "\x1b]0;t\x07");
        assert_eq!(out, b"\x1b]0;t\x07");
    }
}
