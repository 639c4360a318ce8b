// Chunk: docs/chunks/diagnostics_log - Diagnostic log file
//!
//! Diagnostic logging.
//!
//! The terminal owns the tty it runs in, so nothing may be printed to
//! stdout or stderr. Log records go to a plain-text file instead, truncated at
//! each start and opened with a header line so every run starts clean.
//!
//! Library code logs through the `log` facade; the session reports through a
//! [`DiagnosticSink`] so tests can capture exactly what it wrote.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use log::Level;

/// First line of every log file.
pub const LOG_HEADER: &str = "COLOSSUS Terminal start";

/// Environment variable holding the log filter.
pub const LOG_FILTER_ENV: &str = "COLOSSUS_LOG";

/// Filter used when `COLOSSUS_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Somewhere the session can write diagnostic lines.
pub trait DiagnosticSink {
    fn write_line(&mut self, level: Level, line: &str);
}

/// Forwards session diagnostics to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn write_line(&mut self, level: Level, line: &str) {
        log::log!(target: "colossus::session", level, "{}", line);
    }
}

/// Truncates (or creates) the log file and writes the header.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    writeln!(file, "{}", LOG_HEADER)?;
    file.flush()?;
    Ok(file)
}

/// Installs `env_logger` writing into `file`.
///
/// Info records are written as bare lines; other levels carry their level
/// and target.
pub fn init_logging(file: File) -> Result<(), log::SetLoggerError> {
    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or(LOG_FILTER_ENV, DEFAULT_LOG_FILTER)
            .write_style_or("COLOSSUS_LOG_STYLE", "never"),
    )
    .format(|buf, record| {
        if record.level() == Level::Info {
            writeln!(buf, "{}", record.args())
        } else {
            writeln!(buf, "{} {}: {}", record.level(), record.target(), record.args())
        }
    })
    .target(env_logger::Target::Pipe(Box::new(file)))
    .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn log_file_starts_with_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("colossus.log");
        open_log_file(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "COLOSSUS Terminal start\n");
    }

    #[test]
    fn log_file_is_truncated_on_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("colossus.log");
        fs::write(&path, "stale line from a previous run\n").unwrap();

        open_log_file(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("stale"));
        assert!(contents.starts_with(LOG_HEADER));
    }

    #[test]
    fn unwritable_location_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("colossus.log");
        assert!(open_log_file(&path).is_err());
    }
}
