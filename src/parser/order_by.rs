use tracing::debug;

use super::Parser;
use crate::{
    ast::{SortDirection, SortTerm, Token},
    error::{ErrorKind, ParseError},
    lexer::Lexer,
    prefix_map::PrefixMap,
};

/// Parses an `oslc.orderBy` clause.
///
/// Every simple key carries a `+` or `-` direction. A key followed by a
/// `{...}` block sorts through the relation; its direction may be omitted
/// and defaults to ascending.
///
/// # Examples
///
/// ```
/// use oslc_query::{parse_order_by, parse_prefixes, SortDirection};
///
/// let prefixes = parse_prefixes("qm=<http://qm.example.com/ns/>").unwrap();
/// let terms = parse_order_by("-qm:priority", &prefixes).unwrap();
///
/// assert_eq!(terms.len(), 1);
/// assert_eq!(terms[0].direction, SortDirection::Descending);
/// assert!(terms[0].nested.is_none());
/// ```
pub fn parse_order_by(expression: &str, prefixes: &PrefixMap) -> Result<Vec<SortTerm>, ParseError> {
    let mut parser = Parser::with_prefixes(Lexer::new(expression), prefixes)?;
    let terms = parser.parse_order_by_clause()?;
    debug!(keys = terms.len(), "parsed oslc.orderBy clause");
    Ok(terms)
}

impl Parser<'_> {
    pub fn parse_order_by_clause(&mut self) -> Result<Vec<SortTerm>, ParseError> {
        let terms = self.parse_sort_terms()?;
        self.expect_eof()?;
        Ok(terms)
    }

    /// key (',' key)*
    fn parse_sort_terms(&mut self) -> Result<Vec<SortTerm>, ParseError> {
        let mut terms = vec![self.parse_sort_term()?];
        while self.check(&Token::Comma) {
            self.advance()?;
            terms.push(self.parse_sort_term()?);
        }
        Ok(terms)
    }

    fn parse_sort_term(&mut self) -> Result<SortTerm, ParseError> {
        let direction = match &self.current_token {
            Token::Plus => Some(SortDirection::Ascending),
            Token::Minus => Some(SortDirection::Descending),
            _ => None,
        };
        if direction.is_some() {
            self.advance()?;
        }

        let name_fragment = self.current_fragment();
        let name_offset = self.lexer.token_start();
        let property = self.parse_qualified_name("a sort key such as '+prefix:name'")?;

        if self.check(&Token::LBrace) {
            self.advance()?;
            let nested = self.parse_sort_terms()?;
            self.expect(Token::RBrace)?;
            return Ok(SortTerm {
                direction: direction.unwrap_or(SortDirection::Ascending),
                property,
                nested: Some(nested),
            });
        }

        match direction {
            Some(direction) => Ok(SortTerm::new(direction, property)),
            None => Err(ParseError::new(
                ErrorKind::Syntax,
                format!("sort key '{}' needs a '+' or '-' direction", name_fragment),
                name_fragment,
                name_offset,
            )),
        }
    }
}
