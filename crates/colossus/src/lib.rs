// Chunk: docs/chunks/terminal_window - Library for the window controller
//!
//! COLOSSUS: a single-window terminal that runs one command in one directory.
//!
//! The launch decisions live in `colossus-launch` and the widget surface in
//! `colossus-terminal`. This crate is the window around them:
//!
//! - [`dispatcher`] maps chords and clicks to an [`Action`].
//! - [`font_scale`] clamps zoom steps.
//! - [`session`] launches the child and handles its spawn and exit
//!   notifications.
//! - [`window`] owns the widget, the session and the zoom state.
//! - [`drain_loop`] and [`host`] run the window inside another terminal.

pub mod app;
pub mod config;
pub mod context_menu;
pub mod diagnostics;
pub mod dispatcher;
pub mod drain_loop;
pub mod file_drop;
pub mod font_scale;
pub mod host;
pub mod palette;
pub mod session;
pub mod window;

pub use config::{Config, ConfigError};
pub use context_menu::{ContextMenu, MenuItem};
pub use diagnostics::{DiagnosticSink, LogSink};
pub use dispatcher::{dispatch_key, dispatch_mouse, Action};
pub use font_scale::ZoomState;
pub use host::HostError;
pub use palette::{Palette, Rgba};
pub use session::{SessionLauncher, SessionState};
pub use window::{Handled, TerminalWindow};
