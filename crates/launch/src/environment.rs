// Chunk: docs/chunks/launch_core - Process context lookups
//! Access to the process context the resolvers consult.
//!
//! The resolvers only read environment variables and the process working
//! directory. Routing those reads through [`Environment`] keeps the resolvers
//! pure with respect to their arguments and lets tests pin the context.

use std::collections::HashMap;
use std::path::PathBuf;

/// Read-only view of the process context.
pub trait Environment {
    /// Returns the value of an environment variable, if set and valid UTF-8.
    fn var(&self, key: &str) -> Option<String>;

    /// Returns the process working directory, if it can be determined.
    fn current_dir(&self) -> Option<PathBuf>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn current_dir(&self) -> Option<PathBuf> {
        std::env::current_dir().ok()
    }
}

/// A fixed environment, used where the real one must not leak in.
#[derive(Debug, Clone, Default)]
pub struct FixedEnvironment {
    vars: HashMap<String, String>,
    current_dir: Option<PathBuf>,
}

impl FixedEnvironment {
    /// Creates an environment with no variables and no working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a variable.
    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    /// Sets the working directory.
    pub fn with_current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }
}

impl Environment for FixedEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn current_dir(&self) -> Option<PathBuf> {
        self.current_dir.clone()
    }
}
