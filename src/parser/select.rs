use tracing::debug;

use super::Parser;
use crate::{
    ast::{Properties, Property, Token},
    error::ParseError,
    lexer::Lexer,
    prefix_map::PrefixMap,
};

/// Parses an `oslc.select` clause.
///
/// # Examples
///
/// ```
/// use oslc_query::{parse_prefixes, parse_select, Property};
///
/// let prefixes = parse_prefixes("qm=<http://qm.example.com/ns/>").unwrap();
/// let select = parse_select("qm:testcase,*", &prefixes).unwrap();
///
/// assert_eq!(select.len(), 2);
/// assert_eq!(select.children[1], Property::Wildcard);
/// ```
pub fn parse_select(expression: &str, prefixes: &PrefixMap) -> Result<Properties, ParseError> {
    let properties = parse_property_clause(expression, prefixes)?;
    debug!(properties = properties.len(), "parsed oslc.select clause");
    Ok(properties)
}

/// Parses an `oslc.properties` clause; same grammar as `oslc.select`.
pub fn parse_properties(expression: &str, prefixes: &PrefixMap) -> Result<Properties, ParseError> {
    let properties = parse_property_clause(expression, prefixes)?;
    debug!(properties = properties.len(), "parsed oslc.properties clause");
    Ok(properties)
}

fn parse_property_clause(expression: &str, prefixes: &PrefixMap) -> Result<Properties, ParseError> {
    let mut parser = Parser::with_prefixes(Lexer::new(expression), prefixes)?;
    parser.parse_properties_clause()
}

impl Parser<'_> {
    pub fn parse_properties_clause(&mut self) -> Result<Properties, ParseError> {
        let properties = self.parse_property_list()?;
        self.expect_eof()?;
        Ok(properties)
    }

    /// prop (',' prop)*
    fn parse_property_list(&mut self) -> Result<Properties, ParseError> {
        let mut children = vec![self.parse_property()?];
        while self.check(&Token::Comma) {
            self.advance()?;
            children.push(self.parse_property()?);
        }
        Ok(Properties::new(children))
    }

    fn parse_property(&mut self) -> Result<Property, ParseError> {
        if self.check(&Token::Star) {
            self.advance()?;
            return match self.parse_nested_block()? {
                Some(children) => Ok(Property::NestedWildcard { children }),
                None => Ok(Property::Wildcard),
            };
        }

        let name = self.parse_qualified_name("a property name or '*'")?;
        match self.parse_nested_block()? {
            Some(children) => Ok(Property::NestedIdentifier { name, children }),
            None => Ok(Property::Identifier(name)),
        }
    }

    /// Optional '{' properties '}'
    fn parse_nested_block(&mut self) -> Result<Option<Properties>, ParseError> {
        if !self.check(&Token::LBrace) {
            return Ok(None);
        }
        self.advance()?;
        let children = self.parse_property_list()?;
        self.expect(Token::RBrace)?;
        Ok(Some(children))
    }
}
