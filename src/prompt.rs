use std::io::{self, Write};

pub struct ShellPrompt {
    prompt: String,
}

impl ShellPrompt {
    pub fn new(prompt: impl Into<String>) -> Self {
        ShellPrompt {
            prompt: prompt.into(),
        }
    }

    pub fn show(&self) {
        print!("{}", self.prompt);
        io::stdout().flush().unwrap();
    }

    /// Reads one line, without its trailing newline. `None` means EOF
    /// (e.g. Ctrl-D).
    pub fn read_line(&self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        let bytes_read = io::stdin().read_line(&mut buf)?;
        if bytes_read == 0 {
            println!();
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\n', '\r']).to_string()))
    }
}
