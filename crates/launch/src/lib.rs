// Chunk: docs/chunks/launch_core - Launch decision logic
//! colossus-launch: decides what the terminal runs and where it runs it.
//!
//! Everything in this crate runs once at startup, before any window exists,
//! and never fails: malformed or missing input degrades to the next fallback.
//!
//! # Overview
//!
//! - [`resolve_command`] scans the process arguments for `--`, `-e` or
//!   `--execute` and produces the argv of the launched program.
//! - [`resolve_working_directory`] scans for `--cwd` and falls back through the
//!   process cwd, `$HOME` and `/`.
//! - [`resolve_path`] decodes `file://` URIs.
//! - [`shell_quote`] produces POSIX single-quoted tokens.
//! - [`LaunchSpec`] bundles the resolved argv and directory.
//!
//! # Example
//!
//! ```
//! use colossus_launch::{FixedEnvironment, LaunchSpec};
//!
//! let args: Vec<String> = ["colossus", "-e", "ls", "-la"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let env = FixedEnvironment::new().with_var("SHELL", "/bin/zsh");
//!
//! let spec = LaunchSpec::resolve(&args, &env, "/bin/bash");
//! assert_eq!(spec.argv(), ["ls", "-la"]);
//! ```

mod command_line;
mod environment;
mod file_uri;
mod launch_spec;
mod shell_escape;
mod working_dir;

pub use command_line::{
    default_shell, find_execute_marker, resolve_command, LaunchCommand, DEFAULT_FALLBACK_SHELL,
    EXECUTE_MARKERS,
};
pub use environment::{Environment, FixedEnvironment, ProcessEnvironment};
pub use file_uri::{file_uri_to_path, resolve_path, FILE_SCHEME};
pub use launch_spec::LaunchSpec;
pub use shell_escape::{shell_quote, shell_quote_all};
pub use working_dir::{find_cwd_argument, resolve_working_directory, CWD_FLAG};
