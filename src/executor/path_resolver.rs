use std::path::{Path, PathBuf};

use crate::environment::Environment;

/// Searches the `PATH` directory list for bare command names.
pub struct PathResolver<'a> {
    env: &'a Environment,
}

impl<'a> PathResolver<'a> {
    pub fn new(env: &'a Environment) -> Self {
        PathResolver { env }
    }

    /// Returns the first `<dir>/<command>` that exists, trying `PATH`
    /// entries left to right; empty entries are skipped. The check is
    /// existence only; whether the file can actually be executed is
    /// discovered at spawn time. An unset or empty `PATH` resolves nothing.
    pub fn resolve(&self, command: &str) -> Option<PathBuf> {
        let paths = self.env.get("PATH")?;
        if paths.is_empty() {
            return None;
        }

        for dir in paths.split(':').filter(|dir| !dir.is_empty()) {
            let candidate = Path::new(dir).join(command);
            if candidate.exists() {
                return Some(candidate);
            }
        }

        None
    }
}
