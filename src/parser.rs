//! Recursive-descent parsers for the OSLC query clauses.
//!
//! All clauses share one [`Lexer`] and one token cursor ([`Parser`]); each
//! clause grammar lives in its own submodule and adds its productions to
//! `Parser`. The free functions re-exported here are the entry points.

mod order_by;
mod prefixes;
mod search_terms;
mod select;
mod where_clause;

pub use order_by::parse_order_by;
pub use prefixes::parse_prefixes;
pub use search_terms::parse_search_terms;
pub use select::{parse_properties, parse_select};
pub use where_clause::parse_where;

use crate::{
    ast::{QualifiedName, Token},
    error::{Cause, ErrorKind, ParseError},
    lexer::Lexer,
    prefix_map::PrefixMap,
};

pub struct Parser<'a> {
    lexer: Lexer,
    current_token: Token,
    prefixes: Option<&'a PrefixMap>,
}

impl<'a> Parser<'a> {
    /// Parser for clauses without qualified names (`oslc.prefix`, `oslc.searchTerms`).
    pub fn new(mut lexer: Lexer) -> Result<Self, ParseError> {
        let current_token = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current_token,
            prefixes: None,
        })
    }

    /// Parser resolving qualified names against `prefixes`.
    pub fn with_prefixes(lexer: Lexer, prefixes: &'a PrefixMap) -> Result<Self, ParseError> {
        let mut parser = Parser::new(lexer)?;
        parser.prefixes = Some(prefixes);
        Ok(parser)
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    fn check(&self, token: &Token) -> bool {
        std::mem::discriminant(&self.current_token) == std::mem::discriminant(token)
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        if !self.check(&expected) {
            return Err(self.unexpected(&format!("'{}'", expected)));
        }
        self.advance()
    }

    fn expect_eof(&mut self) -> Result<(), ParseError> {
        if self.check(&Token::Eof) {
            Ok(())
        } else {
            Err(self.error(
                ErrorKind::Syntax,
                format!("unexpected '{}' after a complete clause", self.current_token),
            ))
        }
    }

    /// Source text of the current token.
    fn current_fragment(&self) -> String {
        self.lexer
            .slice(self.lexer.token_start(), self.lexer.position())
    }

    /// Source text from the current token to the end of input.
    fn remaining_input(&self) -> String {
        self.lexer.slice(self.lexer.token_start(), usize::MAX)
    }

    fn error(&self, kind: ErrorKind, message: impl Into<String>) -> ParseError {
        ParseError::new(
            kind,
            message,
            self.current_fragment(),
            self.lexer.token_start(),
        )
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        let found = match &self.current_token {
            Token::Eof => "end of input".to_string(),
            token => format!("'{}'", token),
        };
        self.error(
            ErrorKind::Syntax,
            format!("expected {}, found {}", expected, found),
        )
    }

    /// Parses `prefix:local` and resolves the prefix.
    fn parse_qualified_name(&mut self, expected: &str) -> Result<QualifiedName, ParseError> {
        let (prefix, local) = match &self.current_token {
            Token::PrefixedName { prefix, local } => (prefix.clone(), local.clone()),
            _ => return Err(self.unexpected(expected)),
        };

        let Some(namespace) = self.prefixes.and_then(|p| p.resolve(&prefix)) else {
            return Err(self
                .error(
                    ErrorKind::Semantic,
                    format!("unresolved prefix '{}' in '{}:{}'", prefix, prefix, local),
                )
                .with_cause(Cause::UnresolvedPrefix(prefix)));
        };

        let name = QualifiedName::new(namespace, local).with_prefix(prefix);
        self.advance()?;
        Ok(name)
    }
}
