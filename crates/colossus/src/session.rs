// Chunk: docs/chunks/session_launch - Session launch and post-spawn handlers
//!
//! The terminal session: one child process, launched once.
//!
//! [`SessionLauncher`] owns the resolved [`LaunchSpec`], hands it to the
//! widget as a spawn request, and then reacts to the two notifications that
//! can follow:
//!
//! - the spawn outcome, handled at most once. A failure is logged and shown
//!   in the display; the window stays open so the message can be read.
//! - the child exiting, which ends the session exactly once whatever the exit
//!   status. Later notifications of either kind are ignored.
//!
//! The two can race: a child that exits immediately may be reported before
//! its spawn outcome has been handled. An outcome that arrives after the
//! session ended is logged but never written to the display.

use colossus_launch::LaunchSpec;
use colossus_terminal::{SpawnOutcome, SpawnRequest, TerminalWidget};
use log::Level;

use crate::diagnostics::DiagnosticSink;

/// Prefix of notices written into the display.
pub const NOTICE_PREFIX: &str = "[COLOSSUS]";

/// Lifecycle of the session's child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing requested yet.
    NotStarted,
    /// Spawn requested, outcome pending.
    Spawning,
    /// The child started.
    Running,
    /// The spawn failed; the window stays open.
    SpawnFailed,
    /// The child exited; the session is over.
    Exited,
}

/// Launches the session's child and handles its notifications.
#[derive(Debug)]
pub struct SessionLauncher {
    spec: LaunchSpec,
    env: Vec<(String, String)>,
    state: SessionState,
}

impl SessionLauncher {
    /// Creates a launcher that will run `spec` with `env` added to the
    /// inherited environment.
    pub fn new(spec: LaunchSpec, env: Vec<(String, String)>) -> Self {
        Self {
            spec,
            env,
            state: SessionState::NotStarted,
        }
    }

    pub fn spec(&self) -> &LaunchSpec {
        &self.spec
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns true once the child has exited.
    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Exited
    }

    /// The request handed to the widget.
    pub fn spawn_request(&self) -> SpawnRequest {
        let mut request = SpawnRequest::new(
            self.spec.argv().to_vec(),
            self.spec.working_directory().to_path_buf(),
        );
        request.env = self.env.clone();
        request
    }

    /// Asks the widget to start the child. Only the first call does anything.
    pub fn launch(&mut self, widget: &mut dyn TerminalWidget) {
        if self.state != SessionState::NotStarted {
            log::warn!("session already launched, ignoring second launch");
            return;
        }
        log::debug!(
            "spawning {} in {}",
            self.spec.describe_argv(),
            self.spec.working_directory().display()
        );
        self.state = SessionState::Spawning;
        widget.spawn(self.spawn_request());
    }

    /// Handles the spawn outcome.
    pub fn handle_spawn_outcome(
        &mut self,
        outcome: &SpawnOutcome,
        widget: &mut dyn TerminalWidget,
        sink: &mut dyn DiagnosticSink,
    ) {
        match self.state {
            SessionState::Spawning => {}
            SessionState::Exited => {
                sink.write_line(
                    Level::Debug,
                    &format!("spawn outcome after session end ignored: {}", describe(outcome)),
                );
                return;
            }
            state => {
                sink.write_line(
                    Level::Warn,
                    &format!("unexpected spawn outcome in state {:?} ignored", state),
                );
                return;
            }
        }

        if outcome.success {
            let pid = outcome
                .pid
                .map(|pid| pid.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            sink.write_line(Level::Info, &format!("spawn ok, pid={}", pid));
            self.state = SessionState::Running;
        } else {
            let message = format!("spawn failed: {}", failure_message(outcome));
            sink.write_line(Level::Error, &message);
            widget.feed(&format!("\r\n{} {}\r\n", NOTICE_PREFIX, message));
            self.state = SessionState::SpawnFailed;
        }
    }

    /// Handles the child's exit.
    ///
    /// Returns true exactly once, when the window should close.
    pub fn handle_child_exited(&mut self, status: i32, sink: &mut dyn DiagnosticSink) -> bool {
        match self.state {
            SessionState::NotStarted => {
                sink.write_line(Level::Warn, "child exit before launch ignored");
                false
            }
            SessionState::Exited => {
                sink.write_line(Level::Debug, "duplicate child exit ignored");
                false
            }
            _ => {
                sink.write_line(Level::Info, &format!("child exited, status={}", status));
                self.state = SessionState::Exited;
                true
            }
        }
    }
}

fn failure_message(outcome: &SpawnOutcome) -> &str {
    outcome.error_message.as_deref().unwrap_or("unknown error")
}

fn describe(outcome: &SpawnOutcome) -> String {
    if outcome.success {
        "success".to_string()
    } else {
        format!("failure ({})", failure_message(outcome))
    }
}
