use tracing::debug;

use super::Parser;
use crate::{
    ast::{SearchTerms, Token},
    error::{ErrorKind, ParseError},
    lexer::Lexer,
};

/// Parses an `oslc.searchTerms` clause: one or more comma-separated string
/// literals. Quotes are stripped and nothing is unescaped.
///
/// # Examples
///
/// ```
/// use oslc_query::parse_search_terms;
///
/// let terms = parse_search_terms(r#""foobar","whatsis""#).unwrap();
/// assert_eq!(terms.terms(), ["foobar", "whatsis"]);
///
/// assert!(parse_search_terms("").is_err());
/// ```
pub fn parse_search_terms(expression: &str) -> Result<SearchTerms, ParseError> {
    let mut parser = Parser::new(Lexer::new(expression))?;
    let terms = parser.parse_search_terms_clause()?;
    debug!(terms = terms.len(), "parsed oslc.searchTerms clause");
    Ok(terms)
}

impl Parser<'_> {
    pub fn parse_search_terms_clause(&mut self) -> Result<SearchTerms, ParseError> {
        if self.check(&Token::Eof) {
            return Err(self.error(ErrorKind::Semantic, "search terms clause is empty"));
        }

        let mut terms = vec![self.parse_search_phrase()?];
        while self.check(&Token::Comma) {
            self.advance()?;
            terms.push(self.parse_search_phrase()?);
        }

        self.expect_eof()?;
        Ok(SearchTerms::new(terms))
    }

    fn parse_search_phrase(&mut self) -> Result<String, ParseError> {
        let Token::String(phrase) = &self.current_token else {
            return Err(self.unexpected("a quoted search phrase"));
        };
        let phrase = phrase.clone();
        self.advance()?;
        Ok(phrase)
    }
}
