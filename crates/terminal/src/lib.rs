// Chunk: docs/chunks/terminal_widget - Terminal widget surface
//! Terminal widget crate for the COLOSSUS terminal.
//!
//! The window controller never talks to a PTY directly. It drives a
//! [`TerminalWidget`]: something that can spawn a child, report whether text
//! is selected, copy/paste/select-all, feed input to the child and text to
//! the display, and carry a font scale. Spawning is asynchronous: its
//! [`SpawnOutcome`] arrives later as a [`TerminalEvent`].
//!
//! [`PtyTerminal`] is the bundled implementation. It spawns through
//! `portable-pty`, forwards display bytes to any writer (stdout when hosted in
//! another terminal) and reports PTY output from a reader thread over a
//! crossbeam channel. Its clipboard is a [`ClipboardBackend`], the desktop
//! clipboard unless one is supplied.
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use colossus_terminal::{PtyTerminal, SpawnRequest, TerminalEvent, TerminalWidget};
//!
//! let (tx, rx) = crossbeam_channel::unbounded();
//! let mut term = PtyTerminal::new(24, 80, Box::new(std::io::stdout()), tx);
//! term.spawn(SpawnRequest::new(vec!["/bin/sh".into()], PathBuf::from("/tmp")));
//!
//! while let Ok(event) = rx.recv() {
//!     match event {
//!         TerminalEvent::SpawnFinished(outcome) => println!("spawned: {}", outcome.success),
//!         TerminalEvent::PtyOutput(bytes) => { term.process_output(&bytes); }
//!         TerminalEvent::PtyClosed | TerminalEvent::PtyError(_) => break,
//!     }
//! }
//! ```

mod clipboard;
mod event;
mod input_encoder;
mod pty;
mod pty_terminal;
mod title;
mod widget;

pub use clipboard::{ClipboardBackend, MemoryClipboard, SystemClipboard};
pub use event::TerminalEvent;
pub use input_encoder::InputEncoder;
pub use pty::PtyHandle;
pub use pty_terminal::PtyTerminal;
pub use title::TitleScanner;
pub use widget::{SpawnOutcome, SpawnRequest, TerminalWidget};
