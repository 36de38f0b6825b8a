use crate::config::Config;
use crate::environment::Environment;

/// Per-session shell state, owned by the main loop and threaded through
/// dispatch: the invocation name used in diagnostics, the last recorded
/// exit status, the environment snapshot, the configuration, and a pending
/// exit request.
#[derive(Debug)]
pub struct ShellSession {
    pub shell_name: String,
    pub status: i32,
    pub env: Environment,
    pub config: Config,
    exit_request: Option<i32>,
}

impl ShellSession {
    pub fn new(shell_name: impl Into<String>, env: Environment, config: Config) -> Self {
        ShellSession {
            shell_name: shell_name.into(),
            status: 0,
            env,
            config,
            exit_request: None,
        }
    }

    /// Asks the main loop to terminate with `code` once the current command
    /// finishes. Nothing is torn down here; the loop unwinds and drops its
    /// buffers on the way out.
    pub fn request_exit(&mut self, code: i32) {
        self.exit_request = Some(code);
    }

    pub fn exit_requested(&self) -> Option<i32> {
        self.exit_request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;

    fn session() -> ShellSession {
        ShellSession::new(
            "minish",
            Environment::from_entries(Vec::new()),
            ConfigLoader::default_config(),
        )
    }

    #[test]
    fn test_new_session_starts_clean() {
        let session = session();
        assert_eq!(session.status, 0);
        assert_eq!(session.exit_requested(), None);
    }

    #[test]
    fn test_request_exit_is_recorded() {
        let mut session = session();
        session.request_exit(5);
        assert_eq!(session.exit_requested(), Some(5));
    }
}
