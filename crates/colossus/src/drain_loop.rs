// Chunk: docs/chunks/drain_loop - Event drain loop (single ownership of the window)
//! Event drain loop.
//!
//! [`DrainLoop`] owns the window directly. The PTY reader thread and the
//! host event reader thread only send events; every state change happens
//! here, one event at a time.
//!
//! ```text
//! PTY reader thread ──→ TerminalEvent ──┐
//! host event reader ──→ HostEvent ──────┼──→ DrainLoop ──→ TerminalWindow
//! poll tick ────────────────────────────┘
//! ```
//!
//! The tick polls for child exit; the reader thread only sees the PTY close.

use std::io::Write;
use std::time::Duration;

use colossus_input::KeyEvent;
use colossus_terminal::{InputEncoder, PtyTerminal, TerminalEvent, TerminalWidget};
use crossbeam_channel::{select, tick, Receiver};

use crate::diagnostics::LogSink;
use crate::host::{self, HostEvent};
use crate::session::{SessionState, NOTICE_PREFIX};
use crate::window::{Handled, TerminalWindow};

/// How often child exit is polled.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The drain loop that owns the window.
pub struct DrainLoop {
    window: TerminalWindow<PtyTerminal>,
    terminal_events: Receiver<TerminalEvent>,
    host_events: Receiver<HostEvent>,
    /// Where title sequences go; the hosting terminal's stdout
    chrome: Box<dyn Write + Send>,
    /// Last window title that was set, to avoid redundant updates
    last_window_title: String,
    sink: LogSink,
}

impl DrainLoop {
    pub fn new(
        window: TerminalWindow<PtyTerminal>,
        terminal_events: Receiver<TerminalEvent>,
        host_events: Receiver<HostEvent>,
        chrome: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            window,
            terminal_events,
            host_events,
            chrome,
            last_window_title: String::new(),
            sink: LogSink,
        }
    }

    pub fn window(&self) -> &TerminalWindow<PtyTerminal> {
        &self.window
    }

    /// Launches the session and processes events until the window closes.
    ///
    /// Returns the window so callers can inspect the final state.
    pub fn run(mut self) -> TerminalWindow<PtyTerminal> {
        self.update_title();
        self.window.open();

        let terminal_events = self.terminal_events.clone();
        let host_events = self.host_events.clone();
        let ticker = tick(POLL_INTERVAL);
        while !self.window.is_closed() {
            select! {
                recv(terminal_events) -> event => match event {
                    Ok(event) => self.handle_terminal_event(event),
                    Err(_) => {
                        log::warn!("terminal event channel closed");
                        self.window.close();
                    }
                },
                recv(host_events) -> event => match event {
                    Ok(event) => self.handle_host_event(event),
                    Err(_) => self.handle_host_event(HostEvent::InputClosed),
                },
                recv(ticker) -> _ => self.poll_child(),
            }
        }

        self.window.widget_mut().hang_up();
        self.window
    }

    fn handle_terminal_event(&mut self, event: TerminalEvent) {
        match event {
            TerminalEvent::SpawnFinished(outcome) => {
                self.window.on_spawn_finished(&outcome, &mut self.sink);
                if self.window.session().state() == SessionState::SpawnFailed {
                    self.window
                        .widget_mut()
                        .feed(&format!("{} press any key to close\r\n", NOTICE_PREFIX));
                }
            }
            TerminalEvent::PtyOutput(bytes) => {
                let title = self.window.widget_mut().process_output(&bytes);
                if let Some(title) = title {
                    self.window.set_terminal_title(Some(title));
                    self.update_title();
                }
            }
            TerminalEvent::PtyClosed => {
                log::debug!("PTY closed");
                self.poll_child();
            }
            TerminalEvent::PtyError(e) => {
                log::warn!("PTY read failed: {}", e);
                self.poll_child();
            }
        }
    }

    fn handle_host_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::Key(event) => self.handle_key(&event),
            HostEvent::Mouse(event) => {
                if self.window.handle_mouse(&event) == Handled::No {
                    log::trace!("mouse event not forwarded: {:?}", event);
                }
            }
            HostEvent::Paste(text) => self.window.handle_paste(&text),
            HostEvent::Resize { rows, cols } => {
                log::debug!("resize to {}x{}", cols, rows);
                self.window.widget_mut().resize(rows, cols);
            }
            HostEvent::InputClosed => {
                log::info!("input closed, closing window");
                self.window.close();
            }
        }
    }

    /// Keys the window does not consume are encoded for the child.
    fn handle_key(&mut self, event: &KeyEvent) {
        if self.window.handle_key(event) == Handled::No {
            let bytes = InputEncoder::encode_key(event);
            self.window.widget_mut().write_child(&bytes);
        }
    }

    fn poll_child(&mut self) {
        let Some(status) = self.window.widget_mut().poll_exit() else {
            return;
        };
        // Output already read must reach the display before the window goes.
        while let Ok(event) = self.terminal_events.try_recv() {
            self.handle_terminal_event(event);
        }
        self.window.on_child_exited(status, &mut self.sink);
    }

    fn update_title(&mut self) {
        let title = self.window.window_title();
        if title != self.last_window_title {
            host::set_title(&mut self.chrome, &title);
            self.last_window_title = title;
        }
    }
}
