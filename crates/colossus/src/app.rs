// Chunk: docs/chunks/headless_host - Application wiring
//! Builds the window around a resolved launch and runs it to completion.

use std::io;

use colossus_launch::LaunchSpec;
use colossus_terminal::PtyTerminal;
use crossbeam_channel::unbounded;

use crate::config::Config;
use crate::drain_loop::DrainLoop;
use crate::font_scale::ZoomState;
use crate::host::{self, HostError, HostTerminal};
use crate::palette::Palette;
use crate::session::SessionLauncher;
use crate::window::TerminalWindow;

/// Runs one terminal session in the hosting terminal.
///
/// Returns once the window has closed: the child exited or input ended.
/// Without a terminal to read from, the session runs until the child exits.
pub fn run(config: &Config, spec: LaunchSpec) -> Result<(), HostError> {
    let interactive = host::is_interactive();

    let (terminal_tx, terminal_rx) = unbounded();
    let (host_tx, host_rx) = unbounded();

    let (rows, cols) =
        host::host_grid().unwrap_or_else(|| host::grid_for_pixels(config.default_size));
    log::debug!("terminal grid {}x{}", cols, rows);

    // Dropped after the loop, which restores the hosting terminal
    let host_terminal = if interactive {
        Some(HostTerminal::enter(Palette::from_config(&config.palette))?)
    } else {
        None
    };

    let widget = PtyTerminal::new(rows, cols, Box::new(io::stdout()), terminal_tx);
    let session = SessionLauncher::new(spec, config.child_env());
    let window = TerminalWindow::new(
        config.app_name.clone(),
        widget,
        session,
        ZoomState::new(config.initial_font_scale),
    );

    if interactive {
        host::spawn_event_reader(host_tx.clone());
    }

    let drain_loop = DrainLoop::new(window, terminal_rx, host_rx, Box::new(io::stdout()));
    let window = drain_loop.run();
    log::info!("window closed, session state {:?}", window.session().state());

    drop(host_tx);
    drop(host_terminal);
    Ok(())
}
