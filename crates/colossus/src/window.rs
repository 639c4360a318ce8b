// Chunk: docs/chunks/terminal_window - Terminal window controller
//!
//! The terminal window controller.
//!
//! [`TerminalWindow`] owns the widget, the session and the zoom state. Input
//! comes in as key and mouse events, is resolved to an [`Action`] by the
//! dispatcher, and is either performed here ([`Handled::Yes`]) or left for the
//! widget to deliver to the child ([`Handled::No`]). Pasted text arrives
//! separately and may turn out to be a file drop. Session notifications
//! arrive from the drain loop.

use colossus_input::{Key, KeyEvent, MouseEvent, MouseEventKind};
use colossus_terminal::{SpawnOutcome, TerminalWidget};

use crate::context_menu::{ContextMenu, MenuItem};
use crate::diagnostics::DiagnosticSink;
use crate::dispatcher::{dispatch_key, dispatch_mouse, Action};
use crate::file_drop::{drop_text, paste_as_drop};
use crate::font_scale::ZoomState;
use crate::session::{SessionLauncher, SessionState, NOTICE_PREFIX};

/// Title shown until the child sets one.
pub const DEFAULT_TERMINAL_TITLE: &str = "Terminal";

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// The window consumed the event
    Yes,
    /// The event belongs to the child
    No,
}

/// The single terminal window.
pub struct TerminalWindow<W: TerminalWidget> {
    app_name: String,
    widget: W,
    session: SessionLauncher,
    zoom: ZoomState,
    /// Title last set by the child, if any
    terminal_title: Option<String>,
    menu: Option<ContextMenu>,
    closed: bool,
}

impl<W: TerminalWidget> TerminalWindow<W> {
    /// Creates the window. The session is not launched until [`open`](Self::open).
    pub fn new(
        app_name: impl Into<String>,
        widget: W,
        session: SessionLauncher,
        zoom: ZoomState,
    ) -> Self {
        let mut window = Self {
            app_name: app_name.into(),
            widget,
            session,
            zoom,
            terminal_title: None,
            menu: None,
            closed: false,
        };
        window.widget.set_font_scale(window.zoom.scale());
        window
    }

    /// Launches the session.
    pub fn open(&mut self) {
        self.session.launch(&mut self.widget);
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    pub fn session(&self) -> &SessionLauncher {
        &self.session
    }

    pub fn zoom(&self) -> ZoomState {
        self.zoom
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Closes the window. Returns true only for the call that closed it.
    pub fn close(&mut self) -> bool {
        if self.closed {
            return false;
        }
        log::debug!("closing window");
        self.closed = true;
        self.menu = None;
        true
    }

    // =========================================================================
    // Title
    // =========================================================================

    /// `"<app> — <title>"`, with "Terminal" standing in for a missing title.
    pub fn window_title(&self) -> String {
        let title = self
            .terminal_title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TERMINAL_TITLE);
        format!("{} — {}", self.app_name, title)
    }

    /// Records a title change from the terminal.
    ///
    /// Returns true if the window title changed.
    pub fn set_terminal_title(&mut self, title: Option<String>) -> bool {
        let before = self.window_title();
        self.terminal_title = title;
        self.window_title() != before
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handles a key press.
    ///
    /// While the context menu is open the key answers it instead: an item's
    /// digit activates that item, anything else dismisses the menu.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Handled {
        if self.intercept_input() {
            return Handled::Yes;
        }
        if self.menu.is_some() {
            match menu_shortcut(event) {
                Some(item) => self.activate_menu_item(item),
                None => self.dismiss_menu(),
            }
            return Handled::Yes;
        }
        let action = dispatch_key(event, self.widget.has_selection());
        self.perform(action)
    }

    /// Swallows input when no child can receive it.
    fn intercept_input(&mut self) -> bool {
        if self.closed {
            return true;
        }
        // Nothing is running; the keystroke dismisses the window.
        if self.session.state() == SessionState::SpawnFailed {
            self.close();
            return true;
        }
        false
    }

    /// Handles a mouse event.
    ///
    /// A press outside the menu's own button dismisses an open menu.
    pub fn handle_mouse(&mut self, event: &MouseEvent) -> Handled {
        if self.closed {
            return Handled::Yes;
        }
        let action = dispatch_mouse(event);
        if self.menu.is_some()
            && event.kind == MouseEventKind::Down
            && action == Action::PassThrough
        {
            self.dismiss_menu();
            return Handled::Yes;
        }
        self.perform(action)
    }

    /// Handles pasted text.
    ///
    /// A paste that lists existing files is a drop and is typed as quoted
    /// paths; anything else goes to the child as-is.
    pub fn handle_paste(&mut self, text: &str) {
        if self.intercept_input() {
            return;
        }
        self.dismiss_menu();
        if let Some(items) = paste_as_drop(text) {
            if self.handle_drop(&items) {
                return;
            }
        }
        self.widget.feed_child(text);
    }

    /// Performs a dispatched action.
    pub fn perform(&mut self, action: Action) -> Handled {
        match action {
            Action::Copy => {
                if self.widget.has_selection() {
                    self.widget.copy_clipboard();
                }
            }
            Action::Paste => self.widget.paste_clipboard(),
            Action::SelectAll => self.widget.select_all(),
            Action::ZoomIn | Action::ZoomOut => {
                let delta = action.zoom_delta().unwrap_or(0.0);
                let scale = self.zoom.adjust(delta);
                self.widget.set_font_scale(scale);
            }
            Action::ZoomReset => {
                let scale = self.zoom.reset();
                self.widget.set_font_scale(scale);
            }
            Action::ContextMenu { position } => {
                let menu = ContextMenu::at(position);
                let prompt = format!("\r\n{} {}\r\n", NOTICE_PREFIX, menu.prompt());
                self.widget.feed(&prompt);
                self.menu = Some(menu);
            }
            Action::PassThrough => return Handled::No,
        }
        Handled::Yes
    }

    // =========================================================================
    // Context menu
    // =========================================================================

    /// The open context menu, if any.
    pub fn context_menu(&self) -> Option<&ContextMenu> {
        self.menu.as_ref()
    }

    /// Activates a menu item and closes the menu.
    pub fn activate_menu_item(&mut self, item: MenuItem) {
        if self.menu.take().is_none() {
            log::debug!("menu item {:?} activated with no menu open", item);
        }
        if let Some(action) = item.action(self.widget.has_selection()) {
            self.perform(action);
        }
    }

    /// Closes the menu without activating anything.
    pub fn dismiss_menu(&mut self) {
        self.menu = None;
    }

    // =========================================================================
    // Drag and drop
    // =========================================================================

    /// Types the dropped files' quoted paths into the child.
    ///
    /// Returns true if anything was fed.
    pub fn handle_drop<S: AsRef<str>>(&mut self, items: &[S]) -> bool {
        match drop_text(items) {
            Some(text) => {
                self.widget.feed_child(&text);
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Session notifications
    // =========================================================================

    /// Handles the spawn outcome delivered by the widget.
    pub fn on_spawn_finished(&mut self, outcome: &SpawnOutcome, sink: &mut dyn DiagnosticSink) {
        if self.closed && !self.session.is_finished() {
            log::debug!("spawn outcome after close ignored");
            return;
        }
        self.session.handle_spawn_outcome(outcome, &mut self.widget, sink);
    }

    /// Handles the child's exit. The first exit closes the window.
    pub fn on_child_exited(&mut self, status: i32, sink: &mut dyn DiagnosticSink) {
        if self.session.handle_child_exited(status, sink) {
            self.close();
        }
    }
}

/// The menu item an unmodified digit key picks, if any.
fn menu_shortcut(event: &KeyEvent) -> Option<MenuItem> {
    if event.modifiers.control || event.modifiers.alt {
        return None;
    }
    match event.key {
        Key::Char(ch) => MenuItem::from_shortcut(ch),
        Key::KeypadDigit(digit) => {
            char::from_digit(u32::from(digit), 10).and_then(MenuItem::from_shortcut)
        }
        _ => None,
    }
}
