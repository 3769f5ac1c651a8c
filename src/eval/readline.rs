use std::io::{self, BufRead, Write};

use log::warn;
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};

use crate::errors::{Result, ShellError};

/// Initial line buffer capacity in bytes, and the step the buffer grows by once it is full
pub const LINE_BUFFER_UNIT: usize = 1024;

/// Anything the shell can read command lines from
pub trait LineSource {
    /// Shows the prompt and reads one line, without its trailing newline.
    /// Returns `None` once the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Reads lines one byte at a time from any buffered input.
/// Used whenever the shell is not attached to a terminal.
pub struct StreamReader<R, W> {
    input: R,
    prompt_output: W,
}

impl<R: BufRead, W: Write> StreamReader<R, W> {
    pub fn new(input: R, prompt_output: W) -> Self {
        Self {
            input,
            prompt_output,
        }
    }

    fn show_prompt(&mut self, prompt: &str) {
        // * Failing to show the prompt must not stop the shell from reading its input
        if let Err(e) = self
            .prompt_output
            .write_all(prompt.as_bytes())
            .and_then(|_| self.prompt_output.flush())
        {
            warn!("Failed to write the prompt: {}", e);
        }
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            let byte = match self.input.fill_buf() {
                Ok(available) => available.first().copied(),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            if byte.is_some() {
                self.input.consume(1);
            }

            return Ok(byte);
        }
    }

    fn read_raw_line(&mut self) -> Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        grow(&mut line)?;

        loop {
            match self.next_byte().map_err(ShellError::ReadInput)? {
                Some(b'\n') => break,
                Some(byte) => {
                    if line.len() == line.capacity() {
                        grow(&mut line)?;
                    }

                    line.push(byte);
                }
                // * End of input with nothing read is the only way to signal that no lines are left,
                // * a blank line still comes back as an empty string
                None if line.is_empty() => return Ok(None),
                None => break,
            }
        }

        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> LineSource for StreamReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.show_prompt(prompt);

        let line = self.read_raw_line()?.map(|bytes| match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        });

        Ok(line)
    }
}

fn grow(line: &mut Vec<u8>) -> Result<()> {
    line.try_reserve_exact(LINE_BUFFER_UNIT)
        .map_err(|e| ShellError::OutOfMemory("line buffer", e))
}

/// Interactive line editor with in-memory history, used when attached to a terminal
pub struct LineEditor {
    editor: DefaultEditor,
}

impl LineEditor {
    pub fn new() -> Result<Self> {
        // * Lines starting with a space are kept out of the history
        let config = Config::builder()
            .history_ignore_space(true)
            .auto_add_history(true)
            .build();

        let editor = DefaultEditor::with_config(config)?;

        Ok(Self { editor })
    }
}

impl LineSource for LineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            // Ctrl-C throws away the current line and prompts again
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
