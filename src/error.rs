//! Parse errors shared by every clause parser.
//!
//! Parsing is fail-fast: the first lexical, syntactic or semantic problem
//! aborts the parse and is reported as a [`ParseError`]. No partial tree is
//! ever returned alongside an error.

use std::fmt;

use thiserror::Error;

/// Category of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid character or malformed token
    Lexical,
    /// Unexpected token or premature end of input
    Syntax,
    /// Well-formed input that cannot be given a meaning
    /// (unbound prefix, empty `in` list, empty search terms)
    Semantic,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => f.write_str("lexical"),
            ErrorKind::Syntax => f.write_str("syntax"),
            ErrorKind::Semantic => f.write_str("semantic"),
        }
    }
}

/// Underlying cause attached to some parse errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Cause {
    /// A prefixed name used a prefix missing from the prefix map
    #[error("no namespace is bound to prefix '{0}'")]
    UnresolvedPrefix(String),

    /// A decimal literal could not be represented
    #[error("{0}")]
    InvalidDecimal(String),
}

/// Error raised by the lexer before any token is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at offset {offset}")]
pub struct LexError {
    pub message: String,
    /// Input text starting at the offending character
    pub fragment: String,
    /// Character offset into the input
    pub offset: usize,
}

/// Error returned by every clause parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} error at offset {offset}: {message} (near '{fragment}')")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub message: String,
    /// Offending input fragment, empty at end of input
    pub fragment: String,
    /// Character offset of the fragment in the input
    pub offset: usize,
    #[source]
    pub cause: Option<Cause>,
}

impl ParseError {
    pub fn new(
        kind: ErrorKind,
        message: impl Into<String>,
        fragment: impl Into<String>,
        offset: usize,
    ) -> Self {
        ParseError {
            kind,
            message: message.into(),
            fragment: fragment.into(),
            offset,
            cause: None,
        }
    }

    pub fn with_cause(mut self, cause: Cause) -> Self {
        self.cause = Some(cause);
        self
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        ParseError::new(ErrorKind::Lexical, e.message, e.fragment, e.offset)
    }
}
