// Chunk: docs/chunks/terminal_window - Entry point
//!
//! colossus: launch one command (or the user's shell) in one directory.
//!
//! ```text
//! colossus [--cwd PATH] [-e CMD | -e PROG ARGS... | --execute ... | -- PROG ARGS...]
//! ```
//!
//! Arguments are resolved before anything touches the terminal, so a bad
//! `--cwd` or a missing program never prevents the window from appearing.

use anyhow::Context;

use colossus::config::Config;
use colossus::diagnostics::{init_logging, open_log_file};
use colossus_launch::{LaunchSpec, ProcessEnvironment};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let (config, config_error) = Config::load();

    // The terminal is about to go raw, so a log that cannot be opened only
    // gets a single line on stderr before it is lost.
    match open_log_file(&config.log_path) {
        Ok(file) => {
            if let Err(e) = init_logging(file) {
                eprintln!("colossus: logging disabled: {}", e);
            }
        }
        Err(e) => eprintln!(
            "colossus: cannot open log {}: {}",
            config.log_path.display(),
            e
        ),
    }
    if let Some(e) = config_error {
        log::warn!("{}; using defaults", e);
    }

    let spec = LaunchSpec::resolve(&args, &ProcessEnvironment, &config.fallback_shell);
    if spec.is_explicit() {
        log::info!("exec requested: {}", spec.describe_argv());
    } else {
        log::info!("no exec requested: spawning default shell");
    }

    colossus::app::run(&config, spec).context("failed to set up the hosting terminal")
}
