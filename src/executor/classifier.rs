use std::path::PathBuf;

use super::builtins::BuiltinRegistry;
use super::path_resolver::PathResolver;
use crate::environment::Environment;

/// How a command name will be dispatched. Computed fresh for every command;
/// never cached across commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    /// The name contains a path separator and is run as given. Whether the
    /// path exists is only discovered at spawn time.
    External,
    /// The name matches a registered built-in.
    Builtin,
    /// A bare name found on `PATH`. Carries the resolved location so
    /// dispatch does not search again.
    PathResolved(PathBuf),
    /// Nothing matched.
    Invalid,
}

pub fn classify(name: &str, builtins: &BuiltinRegistry, env: &Environment) -> CommandKind {
    if name.contains('/') {
        return CommandKind::External;
    }
    if builtins.contains(name) {
        return CommandKind::Builtin;
    }
    match PathResolver::new(env).resolve(name) {
        Some(path) => CommandKind::PathResolved(path),
        None => CommandKind::Invalid,
    }
}
