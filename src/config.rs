use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prompt string written before each read.
    pub prompt: String,
    /// Whether spawned programs inherit the shell's environment. The
    /// default is false: programs start with a cleared environment.
    pub inherit_env: bool,
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn default_config() -> Config {
        Config {
            prompt: "$ ".to_string(),
            inherit_env: false,
        }
    }

    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Config, ConfigError> {
        let file = File::open(path).map_err(ConfigError::Io)?;
        let mut src = String::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(ConfigError::Io)?;
            src.push_str(&line);
            src.push('\n');
        }
        Self::load_from_str(&src)
    }

    pub fn load_from_str(src: &str) -> Result<Config, ConfigError> {
        let mut prompt = None;
        let mut inherit_env = None;

        for (lineno, line) in src.lines().enumerate() {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(ConfigError::Parse(format!(
                    "Line {}: No '=' found: {}",
                    lineno + 1,
                    line
                )));
            };

            // The prompt value is taken verbatim so trailing spaces survive.
            match key.trim() {
                "prompt" => prompt = Some(value.to_string()),
                "inherit_env" => match value.trim().parse::<bool>() {
                    Ok(b) => inherit_env = Some(b),
                    Err(_) => {
                        return Err(ConfigError::Parse(format!(
                            "Line {}: Invalid bool: {}",
                            lineno + 1,
                            line
                        )));
                    }
                },
                key => {
                    return Err(ConfigError::Parse(format!(
                        "Line {}: Unknown key: {}",
                        lineno + 1,
                        key
                    )));
                }
            }
        }

        let default = Self::default_config();
        Ok(Config {
            prompt: prompt.unwrap_or(default.prompt),
            inherit_env: inherit_env.unwrap_or(default.inherit_env),
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(_) => None,
        }
    }
}
