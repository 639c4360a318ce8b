// Chunk: docs/chunks/launch_core - Resolved launch request
//! The resolved (argv, working directory) pair for one session.

use std::path::{Path, PathBuf};

use crate::command_line::{default_shell, resolve_command, LaunchCommand};
use crate::environment::Environment;
use crate::working_dir::resolve_working_directory;

/// What a session runs and where.
///
/// The argv is never empty and the working directory is absolute. A
/// `LaunchSpec` is built once at startup and never mutated afterwards; the
/// fields are private so nothing can.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    argv: Vec<String>,
    working_directory: PathBuf,
    explicit: bool,
}

impl LaunchSpec {
    /// Creates a spec from an argv.
    ///
    /// `explicit` records whether the user asked for this command (as opposed
    /// to getting their shell). Returns `None` if `argv` is empty or
    /// `working_directory` is relative.
    pub fn new(argv: Vec<String>, working_directory: PathBuf, explicit: bool) -> Option<Self> {
        if argv.is_empty() || !working_directory.is_absolute() {
            return None;
        }
        Some(Self {
            argv,
            working_directory,
            explicit,
        })
    }

    /// Resolves the launch from the full process argument list.
    ///
    /// Without an explicit command the argv is just the user's shell.
    pub fn resolve(args: &[String], env: &dyn Environment, fallback_shell: &str) -> Self {
        let command = resolve_command(args, env, fallback_shell);
        let explicit = command.is_explicit();
        let argv = match command {
            LaunchCommand::DefaultShell => vec![default_shell(env, fallback_shell)],
            LaunchCommand::Explicit(argv) => argv,
        };
        Self {
            argv,
            working_directory: resolve_working_directory(args, env),
            explicit,
        }
    }

    /// The full argv; element 0 is the program.
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// The program to execute.
    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    /// The program's arguments.
    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }

    /// The directory the program starts in.
    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    /// True when the user requested a command, false for the default shell.
    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    /// Renders the argv for log lines: each element double-quoted, space separated.
    pub fn describe_argv(&self) -> String {
        self.argv
            .iter()
            .map(|arg| format!("\"{}\"", arg))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
