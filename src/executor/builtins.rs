use std::collections::HashMap;

use crate::error::ShellError;
use crate::session::ShellSession;

pub trait BuiltinCommand {
    fn name(&self) -> &'static str;

    /// Runs the built-in with the full token sequence; `tokens[0]` is the
    /// command name itself. Returns the exit code; diagnostics go to
    /// stderr here, at the point of detection.
    fn run(&self, tokens: &[String], session: &mut ShellSession) -> i32;
}

/// Fixed table of built-in commands, built once and never mutated after.
pub struct BuiltinRegistry {
    commands: HashMap<String, Box<dyn BuiltinCommand>>,
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        let mut registry = BuiltinRegistry {
            commands: HashMap::new(),
        };
        registry.register(Box::new(EnvCommand));
        registry.register(Box::new(ExitCommand));
        registry.register(Box::new(CdCommand));
        registry
    }

    fn register(&mut self, cmd: Box<dyn BuiltinCommand>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn execute(
        &self,
        name: &str,
        tokens: &[String],
        session: &mut ShellSession,
    ) -> Result<i32, ShellError> {
        match self.commands.get(name) {
            Some(cmd) => Ok(cmd.run(tokens, session)),
            None => Err(ShellError::NoSuchBuiltin(name.to_string())),
        }
    }
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Prints the environment snapshot, one `NAME=VALUE` per line, in storage
/// order. Arguments are ignored.
pub struct EnvCommand;

impl BuiltinCommand for EnvCommand {
    fn name(&self) -> &'static str {
        "env"
    }

    fn run(&self, _tokens: &[String], session: &mut ShellSession) -> i32 {
        for (key, value) in session.env.iter() {
            println!("{}={}", key, value);
        }
        0
    }
}

/// Requests shell termination: with no argument, using the last recorded
/// status; with one argument, using it as the exit code. A non-numeric or
/// negative argument leaves the shell running.
pub struct ExitCommand;

impl BuiltinCommand for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn run(&self, tokens: &[String], session: &mut ShellSession) -> i32 {
        match tokens.get(1) {
            None => {
                let code = session.status;
                session.request_exit(code);
                code
            }
            Some(arg) => match arg.parse::<i32>() {
                Ok(code) if code >= 0 => {
                    session.request_exit(code);
                    code
                }
                _ => {
                    eprintln!(
                        "{}: exit: {}: numeric argument required",
                        session.shell_name, arg
                    );
                    2
                }
            },
        }
    }
}

/// Changes the working directory to the argument, or to `$HOME` with none.
pub struct CdCommand;

impl BuiltinCommand for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn run(&self, tokens: &[String], session: &mut ShellSession) -> i32 {
        let target = match tokens.get(1) {
            Some(dir) => dir.clone(),
            None => session.env.get("HOME").unwrap_or("/").to_string(),
        };
        match std::env::set_current_dir(&target) {
            Ok(_) => 0,
            Err(e) => {
                eprintln!("{}: cd: {}: {}", session.shell_name, target, e);
                1
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::environment::Environment;

    fn session() -> ShellSession {
        ShellSession::new(
            "minish",
            Environment::from_entries(Vec::new()),
            ConfigLoader::default_config(),
        )
    }

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_registry_knows_required_builtins() {
        let registry = BuiltinRegistry::new();
        assert!(registry.contains("env"));
        assert!(registry.contains("exit"));
        assert!(!registry.contains("ls"));
    }

    #[test]
    fn test_registry_miss_is_signalled() {
        let registry = BuiltinRegistry::new();
        let mut session = session();
        let err = registry
            .execute("bogus", &tokens(&["bogus"]), &mut session)
            .unwrap_err();
        assert!(matches!(err, ShellError::NoSuchBuiltin(name) if name == "bogus"));
    }

    #[test]
    fn test_exit_without_args_uses_last_status() {
        let mut session = session();
        session.status = 5;
        let code = ExitCommand.run(&tokens(&["exit"]), &mut session);
        assert_eq!(code, 5);
        assert_eq!(session.exit_requested(), Some(5));
    }

    #[test]
    fn test_exit_with_numeric_arg() {
        let mut session = session();
        let code = ExitCommand.run(&tokens(&["exit", "7"]), &mut session);
        assert_eq!(code, 7);
        assert_eq!(session.exit_requested(), Some(7));
    }

    #[test]
    fn test_exit_rejects_non_numeric_arg_and_keeps_running() {
        let mut session = session();
        let code = ExitCommand.run(&tokens(&["exit", "abc"]), &mut session);
        assert_eq!(code, 2);
        assert_eq!(session.exit_requested(), None);
    }

    #[test]
    fn test_exit_rejects_negative_arg() {
        let mut session = session();
        let code = ExitCommand.run(&tokens(&["exit", "-1"]), &mut session);
        assert_eq!(code, 2);
        assert_eq!(session.exit_requested(), None);
    }

    #[test]
    fn test_env_ignores_args_and_succeeds() {
        let mut session = session();
        let code = EnvCommand.run(&tokens(&["env", "ignored", "also"]), &mut session);
        assert_eq!(code, 0);
        assert_eq!(session.exit_requested(), None);
    }
}
