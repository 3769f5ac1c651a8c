use std::slice::Iter;

use crate::errors::{Result, ShellError};

/// Initial token capacity, and the step the token list grows by once it is full
pub const TOKEN_UNIT: usize = 64;

/// Characters that separate tokens: space, tab, carriage return, newline and bell
pub const DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\x07'];

/// The tokens of a single command line, in order.
/// The first token is the command name and the rest are its arguments.
/// Tokens borrow from the line they were split from, so the vector cannot outlive it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentVector<'a> {
    tokens: Vec<&'a str>,
}

// * Empty tokens are dropped so that every element is a real word
impl<'a> FromIterator<&'a str> for ArgumentVector<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().filter(|t| !t.is_empty()).collect(),
        }
    }
}

impl<'a> ArgumentVector<'a> {
    /// The command name, if the line contained any token at all
    pub fn command(&self) -> Option<&'a str> {
        self.tokens.first().copied()
    }

    /// Every token after the command name
    pub fn args(&self) -> &[&'a str] {
        self.tokens.get(1..).unwrap_or(&[])
    }

    /// Positional argument `index`, counting from the first token after the command name
    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.args().get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, &'a str> {
        self.tokens.iter()
    }
}

fn is_delimiter(character: char) -> bool {
    DELIMITERS.contains(&character)
}

/// Splits a line into its delimiter-separated tokens.
/// Runs of delimiters count as a single separator, so no token is ever empty.
pub fn tokenize(line: &str) -> Result<ArgumentVector<'_>> {
    let mut tokens = Vec::new();
    grow(&mut tokens)?;

    for token in line.split(is_delimiter).filter(|t| !t.is_empty()) {
        if tokens.len() == tokens.capacity() {
            grow(&mut tokens)?;
        }

        tokens.push(token);
    }

    Ok(ArgumentVector { tokens })
}

fn grow(tokens: &mut Vec<&str>) -> Result<()> {
    tokens
        .try_reserve_exact(TOKEN_UNIT)
        .map_err(|e| ShellError::OutOfMemory("token list", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(line: &str) -> Vec<&str> {
        tokenize(line).unwrap().iter().copied().collect()
    }

    #[test]
    fn splits_on_spaces() {
        assert_eq!(words("ls -la /tmp"), vec!["ls", "-la", "/tmp"]);
    }

    #[test]
    fn all_spaces_is_empty() {
        let args = tokenize("   ").unwrap();
        assert!(args.is_empty());
        assert_eq!(args.command(), None);
        assert!(args.args().is_empty());
    }

    #[test]
    fn empty_line_is_empty() {
        assert!(tokenize("").unwrap().is_empty());
    }

    #[test]
    fn every_delimiter_separates() {
        assert_eq!(
            words("a\tb\rc\nd\x07e f"),
            vec!["a", "b", "c", "d", "e", "f"]
        );
        assert!(tokenize(" \t\r\n\x07 ").unwrap().is_empty());
    }

    #[test]
    fn consecutive_delimiters_are_collapsed() {
        assert_eq!(words("  echo \t\t hello   world  "), vec!["echo", "hello", "world"]);
    }

    #[test]
    fn command_and_arguments() {
        let args = tokenize("cd /usr/local extra").unwrap();
        assert_eq!(args.command(), Some("cd"));
        assert_eq!(args.args(), &["/usr/local", "extra"]);
        assert_eq!(args.arg(0), Some("/usr/local"));
        assert_eq!(args.arg(2), None);
        assert_eq!(args.len(), 3);
    }

    #[test]
    fn quotes_are_not_special() {
        assert_eq!(words("echo 'a b'"), vec!["echo", "'a", "b'"]);
    }

    #[test]
    fn tokens_borrow_from_the_line() {
        let line = String::from("printf hello");
        let args = tokenize(&line).unwrap();
        let range = line.as_bytes().as_ptr_range();
        for token in args.iter() {
            assert!(range.contains(&token.as_ptr()));
        }
    }

    #[test]
    fn grows_past_the_initial_capacity() {
        let line = (0..TOKEN_UNIT * 3 + 5)
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let args = tokenize(&line).unwrap();

        assert_eq!(args.len(), TOKEN_UNIT * 3 + 5);
        for (i, token) in args.iter().enumerate() {
            assert_eq!(*token, i.to_string());
        }
    }

    #[test]
    fn collecting_drops_empty_tokens() {
        let args: ArgumentVector = vec!["sh", "", "-c", "exit 3"].into_iter().collect();
        assert_eq!(args.command(), Some("sh"));
        assert_eq!(args.args(), &["-c", "exit 3"]);
    }
}
