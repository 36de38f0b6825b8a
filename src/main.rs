use std::path::Path;
use std::process;

use minish::config::{Config, ConfigLoader};
use minish::environment::Environment;
use minish::executor::Dispatcher;
use minish::prompt::ShellPrompt;
use minish::session::ShellSession;
use minish::signal;
use minish::tokenizer::{strip_comment, tokenize};

const COMMENT_MARKER: char = '#';

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let env = Environment::from_process();
    let config = load_config(&env);

    if let Err(e) = signal::install_sigint_handler() {
        eprintln!("minish: failed to install SIGINT handler: {}", e);
    }

    let shell_name = std::env::args().next().unwrap_or_else(|| "minish".to_string());
    let mut session = ShellSession::new(shell_name, env, config);
    let prompt = ShellPrompt::new(session.config.prompt.clone());
    let dispatcher = Dispatcher::new();

    loop {
        prompt.show();
        let line = match prompt.read_line() {
            Ok(Some(line)) => line,
            Ok(None) => break, // EOF (e.g. Ctrl+D)
            Err(e) => {
                eprintln!("{}: failed to read input: {}", session.shell_name, e);
                break;
            }
        };

        let line = strip_comment(&line, COMMENT_MARKER);
        for segment in tokenize(line, &[';']) {
            let tokens = tokenize(&segment, &[' ', '\t']);
            if tokens.is_empty() {
                continue;
            }

            if let Err(e) = dispatcher.dispatch(&tokens, &mut session) {
                // Failure to start an external program is fatal to the
                // whole shell; everything recoverable was already handled
                // inside dispatch.
                eprintln!("{}: {}", session.shell_name, e);
                return 2;
            }

            if let Some(code) = session.exit_requested() {
                return code;
            }
        }
    }

    session.status
}

fn load_config(env: &Environment) -> Config {
    let Some(home) = env.get("HOME") else {
        return ConfigLoader::default_config();
    };
    let path = Path::new(home).join(".minishrc");
    if !path.exists() {
        return ConfigLoader::default_config();
    }
    match ConfigLoader::load_from_file(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("minish: {}: {}", path.display(), e);
            ConfigLoader::default_config()
        }
    }
}
