// Chunk: docs/chunks/terminal_widget - PTY spawning and reader thread
//! PTY spawning and I/O thread management.
//!
//! This module handles spawning processes in PTYs and reading their output
//! on a background thread.

use std::io::{Read, Write};
use std::thread::{self, JoinHandle};

use crossbeam_channel::Sender;
use portable_pty::{native_pty_system, Child, CommandBuilder, MasterPty, PtySize};

use crate::event::TerminalEvent;
use crate::widget::SpawnRequest;

/// Handle to a PTY process and its I/O thread.
pub struct PtyHandle {
    /// Master side of the PTY, kept for resizing.
    master: Box<dyn MasterPty + Send>,
    /// Writer instance for sending input to the PTY.
    /// Taken from master once at creation time.
    writer: Box<dyn Write + Send>,
    /// The child process handle.
    child: Box<dyn Child + Send + Sync>,
    /// Output reader, handed to the reader thread when it starts.
    reader: Option<Box<dyn Read + Send>>,
    /// Handle to the reader thread (for cleanup on drop).
    reader_thread: Option<JoinHandle<()>>,
}

fn pty_error(e: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
}

impl PtyHandle {
    /// Spawns `request.argv` in a new PTY.
    ///
    /// The program is looked up on `PATH`; the environment is inherited
    /// and extended with `request.env`. No output is read until
    /// [`start_reader`](Self::start_reader) is called.
    pub fn spawn(request: &SpawnRequest, rows: u16, cols: u16) -> std::io::Result<Self> {
        let Some((program, args)) = request.argv.split_first() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "empty argv",
            ));
        };

        let pty_system = native_pty_system();

        // Create PTY with specified size
        let size = PtySize {
            rows,
            cols,
            pixel_width: 0,
            pixel_height: 0,
        };

        let pair = pty_system.openpty(size).map_err(pty_error)?;

        let mut cmd_builder = CommandBuilder::new(program);
        cmd_builder.args(args);
        cmd_builder.cwd(&request.working_directory);
        for (key, value) in &request.env {
            cmd_builder.env(key, value);
        }

        // Spawn the child process
        let child = pair.slave.spawn_command(cmd_builder).map_err(pty_error)?;

        // Get a reader for the PTY output
        let reader = pair.master.try_clone_reader().map_err(pty_error)?;

        // Take the writer once at creation time
        let writer = pair.master.take_writer().map_err(pty_error)?;

        Ok(PtyHandle {
            master: pair.master,
            writer,
            child,
            reader: Some(reader),
            reader_thread: None,
        })
    }

    /// Starts the background thread that reads PTY output.
    ///
    /// Output is delivered on `events`: [`TerminalEvent::PtyOutput`] for each
    /// chunk, then a single [`TerminalEvent::PtyClosed`] or
    /// [`TerminalEvent::PtyError`]. Calling this twice has no effect.
    pub fn start_reader(&mut self, events: Sender<TerminalEvent>) {
        let Some(mut reader) = self.reader.take() else {
            return;
        };

        self.reader_thread = Some(thread::spawn(move || {
            let mut buf = [0u8; 4096];
            loop {
                match reader.read(&mut buf) {
                    Ok(0) => {
                        // EOF - PTY closed
                        let _ = events.send(TerminalEvent::PtyClosed);
                        break;
                    }
                    Ok(n) => {
                        // Send output to main thread
                        if events.send(TerminalEvent::PtyOutput(buf[..n].to_vec())).is_err() {
                            // Channel closed, main thread dropped
                            break;
                        }
                    }
                    Err(e) => {
                        let _ = events.send(TerminalEvent::PtyError(e));
                        break;
                    }
                }
            }
        }));
    }

    /// Writes data to the PTY stdin.
    pub fn write(&mut self, data: &[u8]) -> std::io::Result<()> {
        self.writer.write_all(data)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Resizes the PTY to the given dimensions.
    pub fn resize(&self, rows: u16, cols: u16) -> std::io::Result<()> {
        let size = PtySize {
            rows,
            cols,
            pixel_width: 0,
            pixel_height: 0,
        };
        self.master.resize(size).map_err(pty_error)
    }

    /// Checks if the child process has exited.
    ///
    /// Returns `Some(exit_code)` if the process has exited, `None` otherwise.
    pub fn try_wait(&mut self) -> Option<i32> {
        match self.child.try_wait() {
            Ok(Some(status)) => Some(status.exit_code() as i32),
            Ok(None) => None,
            Err(_) => Some(-1), // Error checking status, assume dead
        }
    }

    /// Sends SIGHUP to the child, the way a closing terminal would.
    pub fn hang_up(&self) -> std::io::Result<()> {
        let Some(pid) = self.process_id() else {
            return Ok(());
        };
        // SAFETY: kill(2) has no memory-safety preconditions.
        let rc = unsafe { libc::kill(pid as libc::pid_t, libc::SIGHUP) };
        if rc == 0 {
            Ok(())
        } else {
            Err(std::io::Error::last_os_error())
        }
    }

    /// Returns the process ID of the child process, if available.
    pub fn process_id(&self) -> Option<u32> {
        self.child.process_id()
    }
}

impl Drop for PtyHandle {
    fn drop(&mut self) {
        // Kill the process if it's still running to ensure the reader thread
        // will hit EOF or an error and exit.
        let _ = self.child.kill();

        // Detached rather than joined: read() may stay blocked until the
        // OS tears the PTY down.
        self.reader_thread.take();
    }
}
