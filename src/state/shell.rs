use std::io::Write;

use crossterm::style::Stylize;
use log::warn;

use super::config::Configuration;
use crate::errors::ShellError;

/// Represents the shell state and provides methods for interacting with it
pub struct ShellState {
    pub config: Configuration,
    /// Whether the shell reads from a terminal
    pub interactive: bool,
    /// Names of the registered builtins, in registration order
    pub builtin_names: Vec<String>,
    stdout: Box<dyn Write>,
    stderr: Box<dyn Write>,
}

impl ShellState {
    pub fn new(
        config: Configuration,
        interactive: bool,
        stdout: Box<dyn Write>,
        stderr: Box<dyn Write>,
    ) -> Self {
        Self {
            config,
            interactive,
            builtin_names: Vec::new(),
            stdout,
            stderr,
        }
    }

    pub fn stdout(&mut self) -> &mut dyn Write {
        self.stdout.as_mut()
    }

    // Color only makes sense when a person is looking at a terminal
    fn styled(&self) -> bool {
        self.config.colored_output && self.interactive
    }

    /// Generates the prompt string shown before every line of input
    pub fn generate_prompt(&self) -> String {
        match self.styled() {
            true => self.config.prompt.as_str().green().bold().to_string(),
            false => self.config.prompt.clone(),
        }
    }

    /// Prints a diagnostic for the given error to stderr
    pub fn report(&mut self, error: &ShellError) {
        let prefix = match self.styled() {
            true => "tsh:".red().bold().to_string(),
            false => "tsh:".to_string(),
        };

        let written = writeln!(self.stderr, "{} {}", prefix, error).and_then(|_| self.stderr.flush());
        if let Err(e) = written {
            warn!("Failed to report error ({}): {}", error, e);
        }
    }
}
