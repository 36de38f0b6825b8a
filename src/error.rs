use std::fmt;
use std::io;

#[derive(Debug)]
pub enum ShellError {
    /// The OS refused to start an external program. Fatal to the whole
    /// shell; the loop reports it and terminates with status 2.
    ExecStart {
        command: String,
        pwd: Option<String>,
        source: io::Error,
    },
    /// Registry lookup missed. Unreachable through normal dispatch, since
    /// classification only tags names the registry already knows.
    NoSuchBuiltin(String),
    Io(io::Error),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::ExecStart {
                command,
                pwd,
                source,
            } => {
                write!(f, "{}: {}", command, source)?;
                if let Some(pwd) = pwd {
                    write!(f, " (in {})", pwd)?;
                }
                Ok(())
            }
            ShellError::NoSuchBuiltin(name) => write!(f, "no such builtin: {}", name),
            ShellError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::ExecStart { source, .. } => Some(source),
            ShellError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ShellError {
    fn from(e: io::Error) -> Self {
        ShellError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exec_start_display_names_command_and_reason() {
        let err = ShellError::ExecStart {
            command: "/no/such/prog".to_string(),
            pwd: Some("/home/me".to_string()),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("/no/such/prog: "));
        assert!(msg.ends_with("(in /home/me)"));
    }

    #[test]
    fn test_exec_start_display_without_pwd() {
        let err = ShellError::ExecStart {
            command: "tool".to_string(),
            pwd: None,
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(!err.to_string().contains("(in "));
    }
}
