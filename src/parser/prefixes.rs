use tracing::{debug, warn};

use super::Parser;
use crate::{
    ast::Token,
    error::{ErrorKind, ParseError},
    lexer::Lexer,
    prefix_map::PrefixMap,
};

/// Parses an `oslc.prefix` clause into a [`PrefixMap`].
///
/// Blank input yields an empty map. When a prefix is declared twice the last
/// declaration wins.
///
/// # Examples
///
/// ```
/// use oslc_query::parse_prefixes;
///
/// let prefixes = parse_prefixes(
///     "qm=<http://qm.example.com/ns/>,oslc=<http://open-services.net/ns/core#>",
/// ).unwrap();
///
/// assert_eq!(prefixes.resolve("oslc"), Some("http://open-services.net/ns/core#"));
/// assert!(parse_prefixes("qm=<http://qm.example.com/ns/>,XXX>").is_err());
/// ```
pub fn parse_prefixes(expression: &str) -> Result<PrefixMap, ParseError> {
    let mut parser = Parser::new(Lexer::new(expression))?;
    let prefixes = parser.parse_prefix_clause()?;
    debug!(prefixes = prefixes.len(), "parsed oslc.prefix clause");
    Ok(prefixes)
}

impl Parser<'_> {
    pub fn parse_prefix_clause(&mut self) -> Result<PrefixMap, ParseError> {
        let mut prefixes = PrefixMap::new();
        if self.check(&Token::Eof) {
            return Ok(prefixes);
        }

        loop {
            let (prefix, namespace) = self.parse_prefix_definition()?;
            if prefixes.insert(prefix.as_str(), namespace).is_some() {
                warn!(prefix = %prefix, "prefix declared more than once, last declaration wins");
            }

            if !self.check(&Token::Comma) {
                break;
            }
            self.advance()?;
        }

        self.expect_eof()?;
        Ok(prefixes)
    }

    /// name '=' '<' uri '>'
    fn parse_prefix_definition(&mut self) -> Result<(String, String), ParseError> {
        let Some(prefix) = self.current_token.as_name().map(str::to_string) else {
            return Err(self.unexpected("a prefix name"));
        };
        self.advance()?;
        self.expect(Token::Eq)?;

        let namespace = match &self.current_token {
            Token::UriRef(uri) => uri.clone(),
            Token::Lt => {
                return Err(ParseError::new(
                    ErrorKind::Syntax,
                    format!("namespace URI for prefix '{}' is missing its closing '>'", prefix),
                    self.remaining_input(),
                    self.lexer.token_start(),
                ));
            }
            _ => return Err(self.unexpected("a namespace URI in angle brackets")),
        };
        self.advance()?;

        Ok((prefix, namespace))
    }
}
