// Chunk: docs/chunks/launch_core - Working directory resolution
//! Working-directory resolution.
//!
//! The order of preference is:
//!
//! 1. `--cwd <value>` / `--cwd=<value>` (first occurrence, before any execute marker)
//! 2. the process working directory
//! 3. `$HOME`
//! 4. `/`
//!
//! A `--cwd` value may be a `file://` URI. A value naming a regular file
//! resolves to the file's parent directory, which is what file managers send
//! for "open terminal here" on a selected file. Every failure along the way
//! drops silently to the next candidate.

use std::path::{Path, PathBuf};

use crate::command_line::find_execute_marker;
use crate::environment::Environment;
use crate::file_uri::resolve_path;

/// The working-directory flag.
pub const CWD_FLAG: &str = "--cwd";

/// Finds the value of the first `--cwd` argument.
///
/// Scanning runs left to right from index 1 and stops at the first execute
/// marker, since everything after it belongs to the launched command. A
/// `--cwd` with no value (end of options, or an empty `--cwd=`) yields `None`.
pub fn find_cwd_argument(args: &[String]) -> Option<&str> {
    let end = find_execute_marker(args).unwrap_or(args.len());
    let options = args.get(1..end)?;

    for (index, arg) in options.iter().enumerate() {
        if arg == CWD_FLAG {
            return options
                .get(index + 1)
                .map(String::as_str)
                .filter(|value| !value.is_empty());
        }
        if let Some(value) = arg.strip_prefix("--cwd=") {
            return Some(value).filter(|value| !value.is_empty());
        }
    }
    None
}

/// Resolves the directory the session starts in. Always returns an absolute path.
pub fn resolve_working_directory(args: &[String], env: &dyn Environment) -> PathBuf {
    if let Some(dir) = find_cwd_argument(args).and_then(|value| candidate_from_value(value, env)) {
        return dir;
    }
    fallback_directory(env)
}

/// Turns a `--cwd` value into an existing absolute directory, if possible.
fn candidate_from_value(value: &str, env: &dyn Environment) -> Option<PathBuf> {
    let Some(path) = resolve_path(value) else {
        log::warn!("ignoring --cwd {:?}: not a decodable file URI", value);
        return None;
    };

    let path = if path.is_absolute() {
        path
    } else {
        env.current_dir()?.join(path)
    };

    let path = if path.is_file() {
        path.parent().map(Path::to_path_buf)?
    } else {
        path
    };

    if path.is_dir() {
        Some(path)
    } else {
        log::warn!("ignoring --cwd {:?}: not an existing directory", value);
        None
    }
}

/// Process cwd, then `$HOME`, then `/`.
fn fallback_directory(env: &dyn Environment) -> PathBuf {
    if let Some(cwd) = env.current_dir().filter(|dir| dir.is_absolute() && dir.is_dir()) {
        return cwd;
    }
    let home = env
        .var("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
        .filter(|home| home.is_absolute() && home.is_dir());
    if let Some(home) = home {
        log::debug!("process cwd unavailable, starting in $HOME");
        return home;
    }
    log::debug!("process cwd and $HOME unavailable, starting in /");
    PathBuf::from("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::FixedEnvironment;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn separate_value() {
        assert_eq!(find_cwd_argument(&args(&["t", "--cwd", "/srv"])), Some("/srv"));
    }

    #[test]
    fn equals_value() {
        assert_eq!(find_cwd_argument(&args(&["t", "--cwd=/srv"])), Some("/srv"));
    }

    #[test]
    fn first_occurrence_wins() {
        assert_eq!(
            find_cwd_argument(&args(&["t", "--cwd=/a", "--cwd", "/b"])),
            Some("/a")
        );
    }

    #[test]
    fn missing_value_is_ignored() {
        assert_eq!(find_cwd_argument(&args(&["t", "--cwd"])), None);
        assert_eq!(find_cwd_argument(&args(&["t", "--cwd="])), None);
    }

    #[test]
    fn arguments_after_execute_marker_are_not_scanned() {
        assert_eq!(
            find_cwd_argument(&args(&["t", "-e", "tool", "--cwd", "/srv"])),
            None
        );
        // The marker cannot serve as the value either
        assert_eq!(find_cwd_argument(&args(&["t", "--cwd", "-e", "ls"])), None);
    }

    #[test]
    fn program_name_is_not_scanned() {
        assert_eq!(find_cwd_argument(&args(&["--cwd=/srv"])), None);
    }

    #[test]
    fn falls_back_to_root_when_nothing_is_available() {
        let env = FixedEnvironment::new();
        assert_eq!(resolve_working_directory(&args(&["t"]), &env), PathBuf::from("/"));
    }

    #[test]
    fn relative_value_without_cwd_is_discarded() {
        let env = FixedEnvironment::new();
        assert_eq!(
            resolve_working_directory(&args(&["t", "--cwd", "some/dir"]), &env),
            PathBuf::from("/")
        );
    }
}
