use std::path::Path;
use std::process::Command;

use super::builtins::BuiltinRegistry;
use super::classifier::{CommandKind, classify};
use crate::error::ShellError;
use crate::session::ShellSession;

/// Routes one tokenized command to a spawned program, a built-in handler,
/// or the not-found diagnostic.
pub struct Dispatcher {
    builtins: BuiltinRegistry,
}

impl Dispatcher {
    pub fn new() -> Self {
        Dispatcher {
            builtins: BuiltinRegistry::new(),
        }
    }

    /// Executes one command to completion. Recoverable conditions are
    /// reported here and recorded in `session.status`; the only `Err` is a
    /// failure to start an external program, which the caller must treat as
    /// fatal.
    pub fn dispatch(&self, tokens: &[String], session: &mut ShellSession) -> Result<(), ShellError> {
        let Some(name) = tokens.first() else {
            return Ok(());
        };

        match classify(name, &self.builtins, &session.env) {
            CommandKind::External => self.run_program(Path::new(name), tokens, session),
            CommandKind::PathResolved(path) => self.run_program(&path, tokens, session),
            CommandKind::Builtin => {
                let code = self.builtins.execute(name, tokens, session)?;
                session.status = code;
                Ok(())
            }
            CommandKind::Invalid => {
                eprintln!("{}: {}: not found", session.shell_name, name);
                session.status = 127;
                Ok(())
            }
        }
    }

    /// Spawn-and-wait stand-in for exec-style image replacement: the child
    /// runs to completion and its exit code becomes the session status, so
    /// a shell that exits right after carries the child's code out.
    fn run_program(
        &self,
        program: &Path,
        tokens: &[String],
        session: &mut ShellSession,
    ) -> Result<(), ShellError> {
        let mut command = Command::new(program);
        command.args(&tokens[1..]);
        if !session.config.inherit_env {
            command.env_clear();
        }

        let status = command.status().map_err(|source| ShellError::ExecStart {
            command: tokens[0].clone(),
            pwd: session.env.get("PWD").map(str::to_string),
            source,
        })?;

        session.status = status.code().unwrap_or(1);
        Ok(())
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
