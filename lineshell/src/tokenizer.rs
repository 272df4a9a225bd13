//! Whitespace tokenizer for submitted lines.

use crate::error::ShellError;

/// Bytes that separate arguments
pub const SEPARATORS: [char; 3] = [' ', '\t', '\n'];

fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Restartable iterator over the tokens of a line. Runs of separators
/// never yield empty tokens.
#[derive(Debug, Clone)]
pub struct Tokens<'s> {
    source: &'s str,
    offset: usize,
}

impl<'s> Tokens<'s> {
    pub fn new(source: &'s str) -> Self {
        Self { source, offset: 0 }
    }

    /// Part of the source not yet consumed
    pub fn remainder(&self) -> &'s str {
        &self.source[self.offset..]
    }
}

impl<'s> Iterator for Tokens<'s> {
    type Item = &'s str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.remainder();
        let start = self.offset + rest.find(|c| !is_separator(c))?;

        let token = &self.source[start..];
        let end = start + token.find(is_separator).unwrap_or(token.len());

        self.offset = end;

        Some(&self.source[start..end])
    }
}

/// Argument vector of at most `A` tokens
pub type Argv<'s, const A: usize> = heapless::Vec<&'s str, A>;

/// Split a line into an argument vector. More than `A` tokens is an
/// error and no partial vector is returned.
pub fn tokenize<const A: usize>(line: &str) -> Result<Argv<'_, A>, ShellError> {
    let mut argv = Argv::new();

    for token in Tokens::new(line) {
        argv.push(token).or(Err(ShellError::TooManyArguments))?;
    }

    Ok(argv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    fn tokens(s: &str) -> Vec<&str> {
        Tokens::new(s).collect()
    }

    #[test]
    fn split() {
        assert_eq!(tokens("echo foo bar"), ["echo", "foo", "bar"]);
        assert_eq!(tokens("  echo \t foo\n\nbar  "), ["echo", "foo", "bar"]);
        assert_eq!(tokens("single"), ["single"]);
        assert!(tokens("").is_empty());
        assert!(tokens(" \t\n ").is_empty());
    }

    #[test]
    fn other_whitespace_is_not_a_separator() {
        assert_eq!(tokens("a\rb\x0bc"), ["a\rb\x0bc"]);
    }

    #[test]
    fn restart_from_saved_position() {
        let mut tokens = Tokens::new("set  led on");

        assert_eq!(tokens.next(), Some("set"));
        assert_eq!(tokens.remainder(), "  led on");

        let mut resumed = tokens.clone();
        assert_eq!(resumed.next(), Some("led"));
        assert_eq!(tokens.next(), Some("led"));
        assert_eq!(tokens.next(), Some("on"));
        assert_eq!(tokens.next(), None);
        assert_eq!(tokens.next(), None);
    }

    #[test]
    fn argc_counts_tokens_only() {
        let argv = tokenize::<8>("echo foo bar ").unwrap();
        assert_eq!(argv.len(), 3);
        assert_eq!(argv.as_slice(), ["echo", "foo", "bar"]);

        let argv = tokenize::<8>("   ").unwrap();
        assert_eq!(argv.len(), 0);
    }

    #[test]
    fn too_many_arguments() {
        assert_eq!(tokenize::<4>("a b c d").unwrap().len(), 4);
        assert_eq!(
            tokenize::<4>("a b c d e"),
            Err(ShellError::TooManyArguments)
        );
    }
}
