// Chunk: docs/chunks/launch_core - Execute request parsing
//! Command-line interpretation: default shell or an explicit command.
//!
//! Supported forms:
//!
//! ```text
//! colossus                      default shell
//! colossus -e "cmd ..."         $SHELL -l -c "cmd ..."
//! colossus -e prog arg1 arg2    prog arg1 arg2
//! colossus --execute ...        same as -e
//! colossus -- prog arg1 ...     same as -e
//! ```
//!
//! This must run before the windowing toolkit sees the argument list, since
//! toolkits are allowed to rewrite it.

use crate::environment::Environment;

/// Arguments that end option scanning and start the launched command.
pub const EXECUTE_MARKERS: [&str; 3] = ["--", "-e", "--execute"];

/// Shell used when `$SHELL` is unset or empty.
pub const DEFAULT_FALLBACK_SHELL: &str = "/bin/bash";

/// What the session should run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchCommand {
    /// No explicit command: run the user's shell.
    DefaultShell,
    /// A fully resolved argv for an explicit command.
    Explicit(Vec<String>),
}

impl LaunchCommand {
    /// Returns true if the user asked for a specific command.
    pub fn is_explicit(&self) -> bool {
        matches!(self, LaunchCommand::Explicit(_))
    }
}

/// Returns the index of the first execute marker, scanning from index 1.
pub fn find_execute_marker(args: &[String]) -> Option<usize> {
    args.iter()
        .enumerate()
        .skip(1)
        .find(|(_, arg)| EXECUTE_MARKERS.contains(&arg.as_str()))
        .map(|(index, _)| index)
}

/// Returns the user's shell: `$SHELL` if non-empty, else `fallback`.
///
/// An empty `fallback` is replaced by [`DEFAULT_FALLBACK_SHELL`] so the
/// result is always a usable program name.
pub fn default_shell(env: &dyn Environment, fallback: &str) -> String {
    match env.var("SHELL") {
        Some(shell) if !shell.is_empty() => shell,
        _ if !fallback.is_empty() => fallback.to_string(),
        _ => DEFAULT_FALLBACK_SHELL.to_string(),
    }
}

/// Resolves the launch command from the full argument list.
///
/// - No marker, or a marker with nothing after it: [`LaunchCommand::DefaultShell`].
/// - Exactly one trailing argument: it is a shell command line, run as
///   `<shell> -l -c <arg>` so the user's shell configuration applies.
/// - Several trailing arguments: they are the program and its arguments,
///   taken literally.
pub fn resolve_command(
    args: &[String],
    env: &dyn Environment,
    fallback_shell: &str,
) -> LaunchCommand {
    let Some(marker) = find_execute_marker(args) else {
        return LaunchCommand::DefaultShell;
    };

    let trailing = &args[marker + 1..];
    match trailing {
        [] => LaunchCommand::DefaultShell,
        [command_line] => LaunchCommand::Explicit(vec![
            default_shell(env, fallback_shell),
            "-l".to_string(),
            "-c".to_string(),
            command_line.clone(),
        ]),
        program_and_args => LaunchCommand::Explicit(program_and_args.to_vec()),
    }
}
