//! Whitespace-delimited token reader.

/// A cursor over whitespace-separated tokens.
///
/// Newlines are ordinary whitespace: the decoder reads a token stream, and
/// the one-entity-per-line layout the encoder produces is a readability
/// convention, not a parsing requirement.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    /// Creates a token reader over `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    /// Returns the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<&'a str> {
        let trimmed = self.rest.trim_start();
        if trimmed.is_empty() {
            self.rest = trimmed;
            return None;
        }
        let end = trimmed
            .find(char::is_whitespace)
            .unwrap_or(trimmed.len());
        let (token, rest) = trimmed.split_at(end);
        self.rest = rest;
        Some(token)
    }

    /// Returns `true` if only whitespace remains.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.rest.trim_start().is_empty()
    }
}
